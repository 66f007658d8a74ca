//! Per-game settings

use crate::error::GameError;
use std::ops::RangeInclusive;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Word lengths the embedded dictionary covers
pub const WORD_LENGTHS: RangeInclusive<usize> = 4..=7;

/// Allowed attempt counts
pub const ATTEMPT_COUNTS: RangeInclusive<usize> = 1..=10;

/// Word length and attempt budget, fixed when a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if either value is outside
    /// `WORD_LENGTHS` / `ATTEMPT_COUNTS`.
    pub fn new(word_length: usize, max_attempts: usize) -> Result<Self, GameError> {
        if !WORD_LENGTHS.contains(&word_length) {
            return Err(GameError::InvalidConfig(format!(
                "word length must be {}-{}, got {word_length}",
                WORD_LENGTHS.start(),
                WORD_LENGTHS.end()
            )));
        }
        if !ATTEMPT_COUNTS.contains(&max_attempts) {
            return Err(GameError::InvalidConfig(format!(
                "attempts must be {}-{}, got {max_attempts}",
                ATTEMPT_COUNTS.start(),
                ATTEMPT_COUNTS.end()
            )));
        }
        Ok(Self {
            word_length,
            max_attempts,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
    }

    #[test]
    fn accepts_range_bounds() {
        assert!(GameConfig::new(4, 1).is_ok());
        assert!(GameConfig::new(7, 10).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            GameConfig::new(3, 6),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(5, 0),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(5, 11),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
