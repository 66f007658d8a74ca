//! Streak and win statistics

use super::GameStatus;
use serde::{Deserialize, Serialize};

/// Persisted statistics record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub current_streak: u32,
    pub max_streak: u32,
    pub games_won: u32,
    pub games_played: u32,
}

impl Stats {
    /// Fold one completed game into the record
    ///
    /// Must run exactly once per completed game.
    pub fn record(&mut self, status: GameStatus) {
        *self = update_stats(status, *self);
    }

    /// Win percentage, `None` before any game has been played
    #[must_use]
    pub fn win_percentage(&self) -> Option<f64> {
        win_percentage(self.games_won, self.games_played)
    }
}

/// Return `stats` updated with the result of one game
///
/// # Examples
/// ```
/// use wordle_game::game::{GameStatus, Stats, update_stats};
///
/// let stats = update_stats(GameStatus::Won, Stats::default());
/// assert_eq!(stats.games_won, 1);
/// assert_eq!(stats.max_streak, 1);
///
/// let stats = update_stats(GameStatus::Lost, stats);
/// assert_eq!(stats.current_streak, 0);
/// assert_eq!(stats.max_streak, 1);
/// assert_eq!(stats.games_played, 2);
/// ```
#[must_use]
pub fn update_stats(status: GameStatus, mut stats: Stats) -> Stats {
    match status {
        GameStatus::Won => {
            stats.current_streak += 1;
            stats.games_won += 1;
        }
        GameStatus::Lost => stats.current_streak = 0,
        GameStatus::InProgress => {}
    }
    stats.max_streak = stats.max_streak.max(stats.current_streak);
    stats.games_played += 1;
    stats
}

/// `games_won * 100 / games_played`, undefined for zero games
#[must_use]
pub fn win_percentage(games_won: u32, games_played: u32) -> Option<f64> {
    (games_played > 0).then(|| f64::from(games_won) * 100.0 / f64::from(games_played))
}

/// Render a win percentage to one decimal place, "0.0" when undefined
#[must_use]
pub fn format_win_percentage(percentage: Option<f64>) -> String {
    format!("{:.1}", percentage.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_increments_streak_won_and_played() {
        let before = Stats {
            current_streak: 2,
            max_streak: 5,
            games_won: 7,
            games_played: 10,
        };
        let after = update_stats(GameStatus::Won, before);
        assert_eq!(after.current_streak, 3);
        assert_eq!(after.games_won, 8);
        assert_eq!(after.games_played, 11);
        assert_eq!(after.max_streak, 5);
    }

    #[test]
    fn win_extends_max_streak() {
        let before = Stats {
            current_streak: 4,
            max_streak: 4,
            games_won: 4,
            games_played: 6,
        };
        assert_eq!(update_stats(GameStatus::Won, before).max_streak, 5);
    }

    #[test]
    fn loss_resets_streak_only() {
        let before = Stats {
            current_streak: 3,
            max_streak: 3,
            games_won: 3,
            games_played: 4,
        };
        let after = update_stats(GameStatus::Lost, before);
        assert_eq!(after.current_streak, 0);
        assert_eq!(after.max_streak, 3);
        assert_eq!(after.games_won, 3);
        assert_eq!(after.games_played, 5);
    }

    #[test]
    fn record_mutates_in_place() {
        let mut stats = Stats::default();
        stats.record(GameStatus::Won);
        stats.record(GameStatus::Won);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn win_percentage_values() {
        assert_eq!(win_percentage(0, 0), None);
        assert_eq!(win_percentage(1, 2), Some(50.0));
        assert_eq!(format_win_percentage(win_percentage(2, 3)), "66.7");
        assert_eq!(format_win_percentage(None), "0.0");
        assert_eq!(format_win_percentage(win_percentage(4, 4)), "100.0");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&Stats::default()).unwrap();
        assert_eq!(
            json,
            r#"{"currentStreak":0,"maxStreak":0,"gamesWon":0,"gamesPlayed":0}"#
        );
    }
}
