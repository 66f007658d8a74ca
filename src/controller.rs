//! Game controller shared by the front ends
//!
//! Owns the single active `GameSession`, the letter buffer of the row being
//! typed and the player's statistics. Every guess passes through
//! [`Controller::submit`], which validates it, advances the session, then
//! records stats and persists state before returning. Taking `&mut self`
//! keeps exactly one guess in flight.

use crate::core::Word;
use crate::error::GameError;
use crate::game::{GameConfig, GameSession, LetterHints, Outcome, Stats};
use crate::services::{
    DEFINITION_NOT_FOUND, DefinitionLookup, GameStore, SavedGame, StatsStore, Storage,
    WordValidator,
};
use crate::wordlists::Dictionary;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Not enough letters")]
    NotEnoughLetters,

    #[error("Too many letters")]
    TooManyLetters,

    #[error("Not in word list!")]
    NotInWordList,

    #[error(transparent)]
    Game(#[from] GameError),
}

pub struct Controller<'a> {
    config: GameConfig,
    dictionary: &'a Dictionary,
    definitions: &'a dyn DefinitionLookup,
    store: Box<dyn Storage + 'a>,
    session: GameSession,
    input: String,
    stats: Stats,
}

impl<'a> Controller<'a> {
    /// Load stats, then resume the saved game if it fits `config`, or start a new one
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if the dictionary has no words of the
    /// configured length.
    pub fn new(
        config: GameConfig,
        dictionary: &'a Dictionary,
        definitions: &'a dyn DefinitionLookup,
        store: Box<dyn Storage + 'a>,
    ) -> Result<Self, GameError> {
        let stats = store
            .load_stats()
            .unwrap_or_else(|e| {
                warn!(error = %e, "could not load stats, starting from zero");
                None
            })
            .unwrap_or_default();

        let session = match restore_saved(&config, store.as_ref()) {
            Some(session) => session,
            None => GameSession::with_config(pick_target(dictionary, &config)?, &config)?,
        };

        Ok(Self {
            config,
            dictionary,
            definitions,
            store,
            session,
            input: String::new(),
            stats,
        })
    }

    /// Discard the current game and start another with a random target
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if no target of the configured length exists.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let target = pick_target(self.dictionary, &self.config)?;
        self.new_game_with_target(target)
    }

    /// Discard the current game and start another with `target`
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidLength` if `target` does not fit the configuration.
    pub fn new_game_with_target(&mut self, target: Word) -> Result<(), GameError> {
        self.session = GameSession::with_config(target, &self.config)?;
        self.input.clear();
        if let Err(e) = self.store.clear_game() {
            warn!(error = %e, "could not clear saved game");
        }
        Ok(())
    }

    /// Input is accepted only while the game is in progress
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.session.status().is_terminal()
    }

    /// Type a letter into the current row; returns whether it was taken
    pub fn add_key(&mut self, key: char) -> bool {
        if self.is_locked()
            || !key.is_ascii_alphabetic()
            || self.input.len() >= self.session.word_length()
        {
            return false;
        }
        self.input.push(key.to_ascii_lowercase());
        true
    }

    /// Remove the last typed letter; returns whether one was removed
    pub fn delete_key(&mut self) -> bool {
        !self.is_locked() && self.input.pop().is_some()
    }

    /// Submit the current row
    ///
    /// A rejected guess leaves the typed letters in place.
    ///
    /// # Errors
    ///
    /// - `SubmitError::NotEnoughLetters` if the row is not full
    /// - `SubmitError::NotInWordList` if the dictionary rejects the word
    /// - `SubmitError::Game(GameError::GameAlreadyOver)` after the game has ended
    pub fn submit(&mut self) -> Result<Outcome, SubmitError> {
        if self.is_locked() {
            warn!("guess submitted after the game ended");
            return Err(GameError::GameAlreadyOver.into());
        }

        let length = self.session.word_length();
        if self.input.len() < length {
            return Err(SubmitError::NotEnoughLetters);
        }
        if self.input.len() > length {
            return Err(SubmitError::TooManyLetters);
        }
        if !self.dictionary.is_valid_word(&self.input) {
            debug!(guess = %self.input, "rejected: not in word list");
            return Err(SubmitError::NotInWordList);
        }

        let outcome = self.session.submit_guess(&self.input)?;
        self.input.clear();

        if outcome.status.is_terminal() {
            self.stats.record(outcome.status);
            if let Err(e) = self.store.save_stats(&self.stats) {
                warn!(error = %e, "could not save stats");
            }
        }
        if let Err(e) = self.store.save_game(&SavedGame::from_session(&self.session)) {
            warn!(error = %e, "could not save game");
        }

        Ok(outcome)
    }

    /// Replace the current row with `word` and submit it
    ///
    /// # Errors
    ///
    /// Same as [`Controller::submit`], plus `SubmitError::TooManyLetters`.
    pub fn submit_word(&mut self, word: &str) -> Result<Outcome, SubmitError> {
        if self.is_locked() {
            return self.submit();
        }
        self.input = word.trim().to_lowercase();
        let result = self.submit();
        if result.is_err() {
            self.input.clear();
        }
        result
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn hints(&self) -> LetterHints {
        LetterHints::from_history(self.session.history())
    }

    /// Definition of the target, for display once the game is over
    #[must_use]
    pub fn definition(&self) -> String {
        self.definitions
            .lookup_definition(self.session.target().text())
            .unwrap_or_else(|| DEFINITION_NOT_FOUND.to_string())
    }

    /// Share text, only once the game is over
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.is_locked().then(|| self.session.share_text())
    }
}

fn pick_target(dictionary: &Dictionary, config: &GameConfig) -> Result<Word, GameError> {
    dictionary
        .random_target(config.word_length, &mut rand::rng())
        .ok_or_else(|| {
            GameError::InvalidConfig(format!(
                "no {}-letter words in the dictionary",
                config.word_length
            ))
        })
}

fn restore_saved(config: &GameConfig, store: &dyn Storage) -> Option<GameSession> {
    let saved = match store.load_game() {
        Ok(saved) => saved?,
        Err(e) => {
            warn!(error = %e, "could not load saved game");
            return None;
        }
    };

    if saved.target.len() != config.word_length || saved.max_attempts != config.max_attempts {
        debug!("saved game does not match current settings, starting fresh");
        return None;
    }

    match saved.into_session() {
        Ok(session) => {
            debug!(attempts = session.history().len(), "resumed saved game");
            Some(session)
        }
        Err(e) => {
            warn!(error = %e, "saved game could not be replayed");
            None
        }
    }
}
