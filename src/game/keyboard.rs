//! On-screen keyboard hints

use super::Attempt;
use crate::core::Verdict;
use rustc_hash::FxHashMap;

/// Keyboard rows in display order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best verdict seen so far for each guessed letter
///
/// A letter once marked `Correct` stays `Correct` even if a later guess
/// marks another instance of it `Wrong`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    hints: FxHashMap<u8, Verdict>,
}

impl LetterHints {
    #[must_use]
    pub fn from_history(history: &[Attempt]) -> Self {
        let mut hints = Self::default();
        for attempt in history {
            hints.record(attempt);
        }
        hints
    }

    pub fn record(&mut self, attempt: &Attempt) {
        for (&letter, verdict) in attempt.word().letters().iter().zip(attempt.result().iter()) {
            self.hints
                .entry(letter)
                .and_modify(|best| *best = (*best).max(verdict))
                .or_insert(verdict);
        }
    }

    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Verdict> {
        self.hints.get(&letter.to_ascii_lowercase()).copied()
    }
}
