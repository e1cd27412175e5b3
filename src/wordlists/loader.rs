//! Dictionary loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Entries are normalized; blank lines, invalid entries and duplicates are
/// skipped. First occurrence order is kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse a dictionary from text with one word per line
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words = dedup(content.lines().filter_map(|line| {
        let trimmed = line.trim_start_matches('\u{feff}').trim();
        if trimmed.is_empty() {
            return None;
        }
        let word = Word::new(trimmed).ok();
        if word.is_none() {
            skipped += 1;
        }
        word
    }));

    if skipped > 0 {
        debug!("Skipped {skipped} invalid dictionary entries");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup(slice.iter().filter_map(|&s| Word::new(s).ok()))
}

fn dedup(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    words
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}
