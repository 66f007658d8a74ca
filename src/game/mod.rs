//! Game progression and end-of-game reporting
//!
//! `GameSession` is the turn-by-turn state machine; the remaining modules are
//! pure functions over its state.

mod config;
mod keyboard;
mod session;
mod share;
mod stats;

pub use config::{
    ATTEMPT_COUNTS, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig, WORD_LENGTHS,
};
pub use keyboard::{KEYBOARD_ROWS, LetterHints};
pub use session::{Attempt, GameSession, GameStatus, Outcome, RankLabel};
pub use share::share_text;
pub use stats::{Stats, format_win_percentage, update_stats, win_percentage};
