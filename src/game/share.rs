//! Spoiler-free result sharing

use super::{Attempt, GameStatus};

/// Render the emoji grid for a game
///
/// The header counts attempts used, or shows `X` for a lost game, followed by
/// one row of squares per attempt.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::GameSession;
///
/// let mut session = GameSession::new(Word::new("crane").unwrap(), 6).unwrap();
/// session.submit_guess("slate").unwrap();
/// session.submit_guess("crane").unwrap();
///
/// assert_eq!(session.share_text(), "2/6 attempts\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(history: &[Attempt], max_attempts: usize, status: GameStatus) -> String {
    let used = match status {
        GameStatus::Lost => "X".to_string(),
        GameStatus::Won | GameStatus::InProgress => history.len().to_string(),
    };

    let mut lines = Vec::with_capacity(history.len() + 1);
    lines.push(format!("{used}/{max_attempts} attempts"));
    lines.extend(history.iter().map(|attempt| attempt.result().to_emoji()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameSession;

    #[test]
    fn lost_game_uses_x() {
        let mut s = GameSession::new(Word::new("crane").unwrap(), 2).unwrap();
        s.submit_guess("audio").unwrap();
        s.submit_guess("level").unwrap();

        let text = s.share_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "X/2 attempts");
        assert_eq!(lines[1], "🟨⬛⬛⬛⬛");
        assert_eq!(lines[2], "⬛🟨⬛⬛⬛");
    }

    #[test]
    fn one_row_per_attempt_plus_header() {
        let mut s = GameSession::new(Word::new("level").unwrap(), 6).unwrap();
        for guess in ["ellel", "light", "lever", "level"] {
            s.submit_guess(guess).unwrap();
        }
        let text = s.share_text();
        assert_eq!(text.lines().count(), s.history().len() + 1);
        assert!(text.starts_with("4/6 attempts\n"));
        assert!(
            text.lines()
                .skip(1)
                .all(|line| line.chars().count() == 5)
        );
    }

    #[test]
    fn empty_history_is_header_only() {
        assert_eq!(share_text(&[], 6, GameStatus::InProgress), "0/6 attempts");
    }
}
