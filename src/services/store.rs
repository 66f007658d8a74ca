//! Statistics and saved-game persistence
//!
//! `JsonStore` keeps `stats.json` and `game.json` in a data directory,
//! by default `<user data dir>/wordle_game`.

use super::{GameStore, StatsStore};
use crate::core::Word;
use crate::error::GameError;
use crate::game::{GameSession, GameStatus, Stats};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const STATS_FILE: &str = "stats.json";
const GAME_FILE: &str = "game.json";

/// Errors from reading or writing persisted state
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("corrupt stored data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted form of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub target: String,
    pub max_attempts: usize,
    pub guessed_words: Vec<String>,
    pub status: GameStatus,
}

impl SavedGame {
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            target: session.target().text().to_string(),
            max_attempts: session.max_attempts(),
            guessed_words: session
                .history()
                .iter()
                .map(|attempt| attempt.word().text().to_string())
                .collect(),
            status: session.status(),
        }
    }

    /// Replay the saved guesses into a fresh session
    ///
    /// # Errors
    ///
    /// Returns a `GameError` if the target or any guess no longer replays
    /// cleanly, or if the replayed status disagrees with the saved one.
    pub fn into_session(self) -> Result<GameSession, GameError> {
        let target = Word::new(self.target)?;
        let session =
            GameSession::restore(target, self.max_attempts, self.guessed_words.as_slice())?;
        if session.status() != self.status {
            return Err(GameError::InvalidConfig(format!(
                "saved status {:?} does not match replayed status {:?}",
                self.status,
                session.status()
            )));
        }
        Ok(session)
    }
}

/// JSON files in a directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data dir>/wordle_game`, falling back to `./.wordle_game`
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::data_dir().map_or_else(|| PathBuf::from(".wordle_game"), |d| d.join("wordle_game"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        match fs::read_to_string(self.dir.join(name)) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(value)?;
        fs::write(self.dir.join(name), content)?;
        Ok(())
    }
}

impl StatsStore for JsonStore {
    fn load_stats(&self) -> Result<Option<Stats>, StoreError> {
        self.read_json(STATS_FILE)
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError> {
        self.write_json(STATS_FILE, stats)
    }
}

impl GameStore for JsonStore {
    fn load_game(&self) -> Result<Option<SavedGame>, StoreError> {
        self.read_json(GAME_FILE)
    }

    fn save_game(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.write_json(GAME_FILE, game)
    }

    fn clear_game(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(self.dir.join(GAME_FILE)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-memory store for tests and `--no-save`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub stats: Option<Stats>,
    pub game: Option<SavedGame>,
}

impl StatsStore for MemoryStore {
    fn load_stats(&self) -> Result<Option<Stats>, StoreError> {
        Ok(self.stats)
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError> {
        self.stats = Some(*stats);
        Ok(())
    }
}

impl GameStore for MemoryStore {
    fn load_game(&self) -> Result<Option<SavedGame>, StoreError> {
        Ok(self.game.clone())
    }

    fn save_game(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.game = Some(game.clone());
        Ok(())
    }

    fn clear_game(&mut self) -> Result<(), StoreError> {
        self.game = None;
        Ok(())
    }
}
