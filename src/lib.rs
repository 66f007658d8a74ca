//! Word Game
//!
//! A terminal word-guessing game: find the hidden word in a limited number of
//! attempts, with letter-by-letter feedback that handles repeated letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Verdict, evaluate};
//!
//! let result = evaluate("level", "ellel").unwrap();
//! assert_eq!(result.verdicts()[3], Verdict::Correct);
//! println!("{}", result.to_emoji());
//! ```
//!
//! A full game is driven through [`game::GameSession`]:
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameSession, GameStatus};
//!
//! let mut session = GameSession::new(Word::new("crane").unwrap(), 6).unwrap();
//! let outcome = session.submit_guess("crane").unwrap();
//! assert_eq!(outcome.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Error types shared across the game
pub mod error;

// Game state machine, stats and sharing
pub mod game;

// Word lists
pub mod wordlists;

// Dictionary, definition and persistence seams
pub mod services;

// Input buffer and game orchestration
pub mod controller;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
