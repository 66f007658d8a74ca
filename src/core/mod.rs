//! Core domain types for the word game
//!
//! Words and guess evaluation. Everything here is pure and deterministic.

mod verdict;
mod word;

pub use verdict::{GuessResult, Verdict, evaluate};
pub use word::{MAX_WORD_LEN, Word, WordError};
