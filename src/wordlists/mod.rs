//! Dictionaries for hangman solving
//!
//! Provides the embedded default dictionary and loaders for custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_is_normalized() {
        for &word in DICTIONARY {
            assert_eq!(normalize(word), word, "Word '{word}' is not normalized");
            assert!(
                word.chars().all(char::is_alphabetic),
                "Word '{word}' contains non-letter chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: rustc_hash::FxHashSet<&str> = DICTIONARY.iter().copied().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }

    #[test]
    fn dictionary_uses_romanian_diacritics() {
        assert!(DICTIONARY.contains(&"CASĂ"));
        assert!(DICTIONARY.iter().any(|w| w.contains('Ș')));
        assert!(DICTIONARY.iter().any(|w| w.contains('Ț')));
    }
}
