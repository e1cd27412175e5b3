//! Dictionary word representation
//!
//! A Word stores a normalized (trimmed, uppercase) word along with letter position
//! indices used by candidate filtering and letter scoring.

use rustc_hash::FxHashMap;
use std::fmt;

/// Normalize raw text the way every dictionary and puzzle field is normalized
///
/// Trims surrounding whitespace, converts to uppercase and folds the cedilla
/// forms Ş/Ţ into the comma-below letters Ș/Ț. Normalizing an
/// already-normalized string returns it unchanged.
///
/// # Examples
/// ```
/// use hangman_solver::core::normalize;
///
/// assert_eq!(normalize("  pădure\n"), "PĂDURE");
/// assert_eq!(normalize("PĂDURE"), "PĂDURE");
/// assert_eq!(normalize("ţară"), "ȚARĂ");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase().chars().map(fold_cedilla).collect()
}

/// Map cedilla S/T (U+015E, U+0162) to comma-below S/T (U+0218, U+021A)
const fn fold_cedilla(letter: char) -> char {
    match letter {
        '\u{15e}' => 'Ș',
        '\u{162}' => 'Ț',
        other => other,
    }
}

/// A normalized word with letter position tracking
///
/// Letters are stored as `char`s so that diacritics occupy a single position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter(ch) => write!(f, "Word contains non-letter character {ch:?}"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is normalized first, so `" casă "` and `"CASĂ"` produce equal words.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The normalized text is empty
    /// - It contains anything other than alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("casă").unwrap();
    /// assert_eq!(word.text(), "CASĂ");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4sa").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let chars: Vec<char> = text.chars().collect();

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the letter at a specific position, if the position exists
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
