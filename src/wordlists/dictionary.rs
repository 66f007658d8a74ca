//! Guess validation and target selection

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use crate::services::WordValidator;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::Path;

/// A set of acceptable words, indexed by length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// Dictionary built from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(WORDS))
    }

    /// Dictionary built from a word list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::from_words(load_from_file(path)?))
    }

    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::default();
        for word in words {
            if dictionary.words.insert(word.text().to_string()) {
                dictionary.by_length.entry(word.len()).or_default().push(word);
            }
        }
        dictionary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words of the given length, in insertion order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Pick a random target of the given length
    ///
    /// Returns `None` if no word has that length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// let target = dictionary.random_target(6, &mut rand::rng()).unwrap();
    /// assert_eq!(target.len(), 6);
    /// assert!(dictionary.random_target(12, &mut rand::rng()).is_none());
    /// ```
    pub fn random_target<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<Word> {
        self.words_of_length(length).choose(rng).cloned()
    }
}

impl WordValidator for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::from_words(words_from_slice(&["crane", "slate", "tide", "crane"]))
    }

    #[test]
    fn from_words_deduplicates() {
        let dictionary = small();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.words_of_length(5).len(), 2);
        assert_eq!(dictionary.words_of_length(4).len(), 1);
        assert!(dictionary.words_of_length(9).is_empty());
    }

    #[test]
    fn validation_is_case_insensitive() {
        let dictionary = small();
        assert!(dictionary.is_valid_word("crane"));
        assert!(dictionary.is_valid_word("CRANE"));
        assert!(!dictionary.is_valid_word("crate"));
        assert!(!dictionary.is_valid_word(""));
    }

    #[test]
    fn random_target_respects_length() {
        let dictionary = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let target = dictionary.random_target(5, &mut rng).unwrap();
            assert!(["crane", "slate"].contains(&target.text()));
        }
        assert_eq!(
            dictionary.random_target(4, &mut rng).unwrap().text(),
            "tide"
        );
        assert!(dictionary.random_target(6, &mut rng).is_none());
    }

    #[test]
    fn embedded_dictionary_validates_common_words() {
        let dictionary = Dictionary::embedded();
        for word in ["crane", "slate", "level", "audio", "light", "tide", "balance"] {
            assert!(dictionary.is_valid_word(word), "{word} missing");
        }
        assert!(!dictionary.is_valid_word("ellel"));
    }
}
