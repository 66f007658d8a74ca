//! Word definitions

use super::DefinitionLookup;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Shown on the end screen when a lookup finds nothing
pub const DEFINITION_NOT_FOUND: &str = "Definition not found!";

/// Lookup that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl DefinitionLookup for NoDefinitions {
    fn lookup_definition(&self, _word: &str) -> Option<String> {
        None
    }
}

/// Definitions loaded from a `word<TAB>definition` file
#[derive(Debug, Clone, Default)]
pub struct DefinitionFile {
    entries: FxHashMap<String, String>,
}

impl DefinitionFile {
    /// Load definitions from a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse `word<TAB>definition` lines, skipping blanks and lines without a tab
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| {
                let (word, definition) = line.split_once('\t')?;
                let word = word.trim().to_lowercase();
                let definition = definition.trim();
                (!word.is_empty() && !definition.is_empty())
                    .then(|| (word, definition.to_string()))
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DefinitionLookup for DefinitionFile {
    fn lookup_definition(&self, word: &str) -> Option<String> {
        self.entries.get(&word.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_malformed_lines() {
        let defs = DefinitionFile::parse(
            "crane\ta large wading bird\n\nno tab here\nslate\t\nLEVEL\thaving a flat surface\n",
        );
        assert_eq!(defs.len(), 2);
        assert_eq!(
            defs.lookup_definition("crane").as_deref(),
            Some("a large wading bird")
        );
        assert_eq!(
            defs.lookup_definition("Level").as_deref(),
            Some("having a flat surface")
        );
        assert_eq!(defs.lookup_definition("slate"), None);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defs.tsv");
        fs::write(&path, "robot\ta machine\n").unwrap();

        let defs = DefinitionFile::load(&path).unwrap();
        assert_eq!(defs.lookup_definition("robot").as_deref(), Some("a machine"));
    }

    #[test]
    fn no_definitions_finds_nothing() {
        assert_eq!(NoDefinitions.lookup_definition("crane"), None);
    }
}
