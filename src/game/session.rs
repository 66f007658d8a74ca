//! Game progression state machine
//!
//! A `GameSession` owns one game: the target, the attempt budget, the
//! append-only history of evaluated guesses and the outcome status.

use super::GameConfig;
use crate::core::{GuessResult, Word};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Outcome status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Praise shown on a win, by how early it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankLabel {
    Genius,
    Magnificent,
    Impressive,
    Splendid,
    Great,
    Phew,
}

impl RankLabel {
    /// Label for a win on the 0-indexed attempt `index`
    ///
    /// A win on the last allowed attempt is always `Phew`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::RankLabel;
    ///
    /// assert_eq!(RankLabel::for_attempt(0, 6), RankLabel::Genius);
    /// assert_eq!(RankLabel::for_attempt(4, 8), RankLabel::Great);
    /// assert_eq!(RankLabel::for_attempt(3, 4), RankLabel::Phew);
    /// ```
    #[must_use]
    pub const fn for_attempt(index: usize, max_attempts: usize) -> Self {
        if index + 1 >= max_attempts {
            return Self::Phew;
        }
        match index {
            0 => Self::Genius,
            1 => Self::Magnificent,
            2 => Self::Impressive,
            3 => Self::Splendid,
            4 => Self::Great,
            _ => Self::Phew,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genius => "Genius",
            Self::Magnificent => "Magnificent",
            Self::Impressive => "Impressive",
            Self::Splendid => "Splendid",
            Self::Great => "Great",
            Self::Phew => "Phew",
        }
    }
}

impl fmt::Display for RankLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    word: Word,
    result: GuessResult,
}

impl Attempt {
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> &GuessResult {
        &self.result
    }
}

/// What a submitted guess did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: GuessResult,
    pub status: GameStatus,
    pub rank_label: Option<RankLabel>,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    max_attempts: usize,
    history: Vec<Attempt>,
    status: GameStatus,
    rank_label: Option<RankLabel>,
}

impl GameSession {
    /// Start a game for `target` with `max_attempts` guesses
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if `max_attempts` is zero.
    pub fn new(target: Word, max_attempts: usize) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "a game needs at least one attempt".to_string(),
            ));
        }
        debug!(target = %target, max_attempts, "starting game");
        Ok(Self {
            target,
            max_attempts,
            history: Vec::with_capacity(max_attempts),
            status: GameStatus::InProgress,
            rank_label: None,
        })
    }

    /// Start a game whose target must match the configured word length
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidLength` if the target has the wrong length.
    pub fn with_config(target: Word, config: &GameConfig) -> Result<Self, GameError> {
        if target.len() != config.word_length {
            return Err(GameError::InvalidLength {
                expected: config.word_length,
                actual: target.len(),
            });
        }
        Self::new(target, config.max_attempts)
    }

    /// Rebuild a game by replaying previously accepted guesses
    ///
    /// # Errors
    ///
    /// Fails with the first error a replayed guess produces, including
    /// `GameAlreadyOver` for words saved after the game ended.
    pub fn restore<S: AsRef<str>>(
        target: Word,
        max_attempts: usize,
        words: &[S],
    ) -> Result<Self, GameError> {
        let mut session = Self::new(target, max_attempts)?;
        for word in words {
            session.submit_guess(word.as_ref())?;
        }
        Ok(session)
    }

    /// Evaluate a guess and advance the game
    ///
    /// The caller is expected to have checked dictionary membership.
    ///
    /// # Errors
    ///
    /// - `GameError::GameAlreadyOver` once the game is won or lost; history is left untouched
    /// - `GameError::InvalidWord` / `GameError::InvalidLength` for malformed guesses
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameSession, GameStatus, RankLabel};
    ///
    /// let mut session = GameSession::new(Word::new("crane").unwrap(), 6).unwrap();
    ///
    /// let outcome = session.submit_guess("slate").unwrap();
    /// assert_eq!(outcome.status, GameStatus::InProgress);
    ///
    /// let outcome = session.submit_guess("crane").unwrap();
    /// assert_eq!(outcome.status, GameStatus::Won);
    /// assert_eq!(outcome.rank_label, Some(RankLabel::Magnificent));
    /// assert!(session.submit_guess("crane").is_err());
    /// ```
    pub fn submit_guess(&mut self, word: &str) -> Result<Outcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let word = Word::new(word)?;
        let result = GuessResult::calculate(&word, &self.target)?;
        let index = self.history.len();

        if word == self.target {
            self.status = GameStatus::Won;
            self.rank_label = Some(RankLabel::for_attempt(index, self.max_attempts));
        } else if index + 1 == self.max_attempts {
            self.status = GameStatus::Lost;
        }

        debug!(
            guess = %word,
            attempt = index + 1,
            status = ?self.status,
            "guess evaluated"
        );

        self.history.push(Attempt {
            word,
            result: result.clone(),
        });

        Ok(Outcome {
            result,
            status: self.status,
            rank_label: self.rank_label,
        })
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn rank_label(&self) -> Option<RankLabel> {
        self.rank_label
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    /// Outcome of the most recent guess, if any
    #[must_use]
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.history.last().map(|attempt| Outcome {
            result: attempt.result.clone(),
            status: self.status,
            rank_label: self.rank_label,
        })
    }

    /// Share text for the current history
    #[must_use]
    pub fn share_text(&self) -> String {
        super::share_text(&self.history, self.max_attempts, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(target: &str, max_attempts: usize) -> GameSession {
        GameSession::new(Word::new(target).unwrap(), max_attempts).unwrap()
    }

    #[test]
    fn new_session_is_in_progress() {
        let s = session("crane", 6);
        assert_eq!(s.status(), GameStatus::InProgress);
        assert!(s.history().is_empty());
        assert_eq!(s.word_length(), 5);
        assert_eq!(s.attempts_remaining(), 6);
        assert!(s.last_outcome().is_none());
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(matches!(
            GameSession::new(Word::new("crane").unwrap(), 0),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn with_config_checks_target_length() {
        let config = GameConfig::new(6, 6).unwrap();
        assert_eq!(
            GameSession::with_config(Word::new("crane").unwrap(), &config).unwrap_err(),
            GameError::InvalidLength {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn first_attempt_win_is_genius() {
        let mut s = session("crane", 6);
        let outcome = s.submit_guess("crane").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.rank_label, Some(RankLabel::Genius));
        assert!(outcome.result.is_perfect());
    }

    #[test]
    fn win_blocks_further_submissions() {
        let mut s = session("crane", 6);
        s.submit_guess("slate").unwrap();
        s.submit_guess("crane").unwrap();

        assert_eq!(s.submit_guess("slate"), Err(GameError::GameAlreadyOver));
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn loss_on_last_attempt() {
        let mut s = session("crane", 3);
        assert_eq!(
            s.submit_guess("slate").unwrap().status,
            GameStatus::InProgress
        );
        assert_eq!(
            s.submit_guess("audio").unwrap().status,
            GameStatus::InProgress
        );
        let outcome = s.submit_guess("light").unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(outcome.rank_label, None);
        assert_eq!(s.attempts_remaining(), 0);
        assert_eq!(s.submit_guess("crane"), Err(GameError::GameAlreadyOver));
        assert_eq!(s.history().len(), 3);
    }

    #[test]
    fn win_on_last_attempt_is_phew() {
        let mut s = session("crane", 3);
        s.submit_guess("slate").unwrap();
        s.submit_guess("audio").unwrap();
        let outcome = s.submit_guess("crane").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.rank_label, Some(RankLabel::Phew));
    }

    #[test]
    fn fifth_attempt_win_with_long_game_is_great() {
        let mut s = session("crane", 8);
        for guess in ["slate", "audio", "light", "sound"] {
            s.submit_guess(guess).unwrap();
        }
        let outcome = s.submit_guess("crane").unwrap();
        assert_eq!(outcome.rank_label, Some(RankLabel::Great));
    }

    #[test]
    fn rank_labels_by_index() {
        let expected = [
            RankLabel::Genius,
            RankLabel::Magnificent,
            RankLabel::Impressive,
            RankLabel::Splendid,
            RankLabel::Great,
            RankLabel::Phew,
        ];
        for (index, label) in expected.into_iter().enumerate() {
            assert_eq!(RankLabel::for_attempt(index, 6), label);
        }
        assert_eq!(RankLabel::for_attempt(5, 9), RankLabel::Phew);
        assert_eq!(RankLabel::for_attempt(0, 1), RankLabel::Phew);
    }

    #[test]
    fn wrong_length_guess_is_rejected_without_mutation() {
        let mut s = session("crane", 6);
        assert_eq!(
            s.submit_guess("cranes"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert!(s.history().is_empty());
    }

    #[test]
    fn history_records_words_and_results() {
        let mut s = session("level", 6);
        s.submit_guess("ELLEL").unwrap();
        let attempt = &s.history()[0];
        assert_eq!(attempt.word().text(), "ellel");
        assert_eq!(attempt.result().to_emoji(), "🟨🟨⬛🟩🟩");
        assert_eq!(s.last_outcome().unwrap().result, attempt.result().clone());
    }

    #[test]
    fn restore_replays_words() {
        let s = GameSession::restore(Word::new("crane").unwrap(), 6, &["slate", "crane"]).unwrap();
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.rank_label(), Some(RankLabel::Magnificent));
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn restore_rejects_words_after_game_end() {
        let err = GameSession::restore(Word::new("crane").unwrap(), 6, &["crane", "slate"])
            .unwrap_err();
        assert_eq!(err, GameError::GameAlreadyOver);
    }

    #[test]
    fn status_serializes_like_saved_games_expect() {
        assert_eq!(
            serde_json::to_string(&GameStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(serde_json::to_string(&GameStatus::Lost).unwrap(), "\"LOST\"");
    }
}
