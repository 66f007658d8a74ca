//! Build script to generate the embedded dictionary
//!
//! Reads the word list file and generates Rust source code with a const array,
//! grouped by word length so lookups never scan words of the wrong size.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary("data/words.txt", &Path::new(&out_dir).join("words.rs"));

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_dictionary(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for line in content.lines() {
        let word = line.trim().to_lowercase();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        assert!(
            word.chars().all(|c| c.is_ascii_lowercase()),
            "Invalid dictionary entry in {input_path}: {word}"
        );
        by_length.entry(word.len()).or_default().push(word);
    }
    for words in by_length.values_mut() {
        words.sort();
        words.dedup();
    }

    let count: usize = by_length.values().map(Vec::len).sum();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Embedded dictionary, sorted, grouped by word length").unwrap();
    writeln!(output, "pub const WORDS: &[&str] = &[").unwrap();
    for words in by_length.values() {
        for word in words {
            writeln!(output, "    \"{word}\",").unwrap();
        }
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDS").unwrap();
    writeln!(output, "pub const WORDS_COUNT: usize = {count};").unwrap();
}
