//! Collaborators the game consults but does not own
//!
//! Dictionary checks, definitions and persistence sit behind these traits so
//! the session and controller never depend on where the data lives.

mod definitions;
mod store;

pub use definitions::{DEFINITION_NOT_FOUND, DefinitionFile, NoDefinitions};
pub use store::{JsonStore, MemoryStore, SavedGame, StoreError};

use crate::game::Stats;

/// Decides whether a word is an acceptable guess
pub trait WordValidator {
    fn is_valid_word(&self, word: &str) -> bool;
}

/// Looks up a display definition for a finished game's target
pub trait DefinitionLookup {
    fn lookup_definition(&self, word: &str) -> Option<String>;
}

/// Statistics persistence
pub trait StatsStore {
    /// `Ok(None)` when nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the stored record cannot be read.
    fn load_stats(&self) -> Result<Option<Stats>, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be written.
    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError>;
}

/// Saved-game persistence
pub trait GameStore {
    /// `Ok(None)` when no game is saved
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the saved game cannot be read.
    fn load_game(&self) -> Result<Option<SavedGame>, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the game cannot be written.
    fn save_game(&mut self, game: &SavedGame) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if an existing saved game cannot be removed.
    fn clear_game(&mut self) -> Result<(), StoreError>;
}

/// Everything the controller persists
pub trait Storage: StatsStore + GameStore {}

impl<T: StatsStore + GameStore> Storage for T {}
