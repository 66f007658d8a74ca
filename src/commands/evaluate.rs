//! One-shot guess evaluation
//!
//! Scores a guess against a chosen target without starting a game.

use crate::core::{GuessResult, Verdict, evaluate};
use crate::error::GameError;

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub guess: String,
    pub target: String,
    pub result: GuessResult,
}

impl EvaluationResult {
    #[must_use]
    pub fn correct(&self) -> usize {
        self.result.count(Verdict::Correct)
    }

    #[must_use]
    pub fn present(&self) -> usize {
        self.result.count(Verdict::Present)
    }
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn evaluate_guess(guess: &str, target: &str) -> Result<EvaluationResult, GameError> {
    let result = evaluate(guess, target)?;
    Ok(EvaluationResult {
        guess: guess.to_lowercase(),
        target: target.to_lowercase(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_verdicts() {
        let report = evaluate_guess("ELLEL", "level").unwrap();
        assert_eq!(report.guess, "ellel");
        assert_eq!(report.correct(), 2);
        assert_eq!(report.present(), 2);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(matches!(
            evaluate_guess("tide", "level"),
            Err(GameError::InvalidLength { .. })
        ));
    }
}
