//! Game error types

use crate::core::WordError;
use thiserror::Error;

/// Errors raised by the game core
///
/// None of these are user-facing: the controller validates input before it
/// reaches the session, so seeing one indicates a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("guess has {actual} letters, expected {expected}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("game is already over")]
    GameAlreadyOver,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
