//! Formatting utilities for terminal output

use crate::core::{GuessResult, Verdict};
use colored::{ColoredString, Colorize};

/// Format a guess result as emoji string
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result.to_emoji()
}

/// A single letter tile, colored by its verdict
#[must_use]
pub fn colored_tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Wrong => text.white().on_bright_black().bold(),
    }
}

/// A guessed word rendered as a row of colored tiles
#[must_use]
pub fn colored_row(word: &str, result: &GuessResult) -> String {
    word.chars()
        .zip(result.iter())
        .map(|(letter, verdict)| colored_tile(letter, verdict).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
