//! Guess evaluation
//!
//! A `GuessResult` is the per-letter feedback for one guess:
//! - `Correct` (green): letter in the correct position
//! - `Present` (yellow): letter in the word, wrong position
//! - `Wrong` (dark): no unconsumed occurrence of the letter remains

use super::Word;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one guessed letter
///
/// Ordered from least to most informative, so `max` keeps the best hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Wrong,
    Present,
    Correct,
}

impl Verdict {
    /// Square glyph used in share text
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Wrong => '⬛',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Wrong => "wrong",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered verdicts for one guess, index-aligned with its letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult(Box<[Verdict]>);

impl GuessResult {
    /// Evaluate `guess` against `target`
    ///
    /// Each target letter instance satisfies at most one `Correct` or
    /// `Present` mark.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the target's letter pool
    /// 2. Second pass: mark present-elsewhere letters from what remains in the pool
    ///
    /// # Errors
    /// Returns `GameError::InvalidLength` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, Verdict, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let target = Word::new("floor").unwrap();
    /// let result = GuessResult::calculate(&guess, &target).unwrap();
    ///
    /// assert_eq!(result.verdicts(), &[
    ///     Verdict::Present, Verdict::Present, Verdict::Wrong, Verdict::Correct, Verdict::Wrong,
    /// ]);
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, GameError> {
        if guess.len() != target.len() {
            return Err(GameError::InvalidLength {
                expected: target.len(),
                actual: guess.len(),
            });
        }

        let mut result = vec![Verdict::Wrong; target.len()];
        let mut target_available = target.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = Verdict::Correct;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess.letters().iter().enumerate() {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&g)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Ok(Self(result.into_boxed_slice()))
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count letters with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as a row of squares, e.g. "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(Verdict::to_emoji).collect()
    }
}

/// Evaluate a guess string against a target string
///
/// Both strings are validated as words first.
///
/// # Errors
/// Returns `GameError::InvalidWord` for non-alphabetic input and
/// `GameError::InvalidLength` when the lengths differ.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, Verdict};
///
/// let result = evaluate("aabbb", "abcde").unwrap();
/// assert_eq!(result.verdicts(), &[
///     Verdict::Correct, Verdict::Wrong, Verdict::Present, Verdict::Wrong, Verdict::Wrong,
/// ]);
/// assert!(evaluate("abc", "abcde").is_err());
/// ```
pub fn evaluate(guess: &str, target: &str) -> Result<GuessResult, GameError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    GuessResult::calculate(&guess, &target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Correct, Present, Wrong};

    fn verdicts(guess: &str, target: &str) -> Vec<Verdict> {
        evaluate(guess, target).unwrap().verdicts().to_vec()
    }

    #[test]
    fn all_wrong() {
        assert_eq!(verdicts("abcde", "fghij"), vec![Wrong; 5]);
    }

    #[test]
    fn word_against_itself_is_perfect() {
        for word in ["crane", "slate", "level", "zzzzz", "aaaaa", "balance", "tide"] {
            let result = evaluate(word, word).unwrap();
            assert!(result.is_perfect(), "{word} vs itself");
            assert_eq!(result.len(), word.len());
        }
    }

    #[test]
    fn duplicate_letters_level() {
        // Pass 1 claims E(3) and L(4); one E and one L remain for pass 2
        assert_eq!(
            verdicts("ellel", "level"),
            vec![Present, Present, Wrong, Correct, Correct]
        );
    }

    #[test]
    fn duplicate_letters_single_target_instance() {
        assert_eq!(
            verdicts("aabbb", "abcde"),
            vec![Correct, Wrong, Present, Wrong, Wrong]
        );
    }

    #[test]
    fn exact_match_reserved_before_present() {
        // A single-pass scan would mark the first E present and leave the
        // correctly placed E without a target letter.
        assert_eq!(
            verdicts("eerie", "crane"),
            vec![Wrong, Wrong, Present, Wrong, Correct]
        );
    }

    #[test]
    fn duplicate_letters_both_present() {
        // SPEED vs ERASE: ERASE has two E's, both guessed E's are yellow
        assert_eq!(
            verdicts("speed", "erase"),
            vec![Present, Wrong, Present, Present, Wrong]
        );
    }

    #[test]
    fn duplicate_letters_green_and_yellow() {
        assert_eq!(
            verdicts("robot", "floor"),
            vec![Present, Present, Wrong, Correct, Wrong]
        );
    }

    #[test]
    fn correct_count_matches_aligned_letters() {
        let pairs = [("crane", "slate"), ("ellel", "level"), ("tenet", "otter")];
        for (guess, target) in pairs {
            let aligned = guess
                .bytes()
                .zip(target.bytes())
                .filter(|(g, t)| g == t)
                .count();
            assert_eq!(evaluate(guess, target).unwrap().count(Correct), aligned);
        }
    }

    #[test]
    fn marks_never_exceed_target_letter_count() {
        let result = evaluate("lllll", "level").unwrap();
        assert_eq!(result.count(Correct) + result.count(Present), 2);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert_eq!(
            evaluate("cran", "crane"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn invalid_characters_are_rejected() {
        assert!(matches!(
            evaluate("cr4ne", "crane"),
            Err(GameError::InvalidWord(_))
        ));
    }

    #[test]
    fn emoji_row() {
        let result = evaluate("robot", "floor").unwrap();
        assert_eq!(result.to_emoji(), "🟨🟨⬛🟩⬛");
    }

    #[test]
    fn verdict_ordering_prefers_correct() {
        assert!(Correct > Present);
        assert!(Present > Wrong);
    }
}
