//! Partially revealed hangman patterns
//!
//! A pattern holds one cell per letter of the target word. Each cell is either
//! a revealed letter or a placeholder. Textual form uses `*` for placeholders,
//! e.g. `"C**Ă"`.

use super::Word;
use std::fmt;

/// Placeholder symbol used when printing and parsing patterns
pub const PLACEHOLDER: char = '*';

/// Positional template with placeholders for unrevealed letters
///
/// Revealed cells are never hidden again: the only mutation is [`Pattern::reveal`],
/// which fills placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Option<char>>,
}

/// Error type for invalid pattern text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must not be empty"),
            Self::InvalidSymbol(ch) => {
                write!(f, "Pattern symbol {ch:?} is neither a letter nor '{PLACEHOLDER}'")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Parse a pattern such as `"**t"` or `"C__Ă"`
    ///
    /// Text is normalized like words (trimmed, uppercased). Accepts `*` and `_`
    /// as placeholders.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern is empty or contains a symbol that is
    /// neither alphabetic nor a placeholder.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::parse("**t").unwrap();
    /// assert_eq!(pattern.to_string(), "**T");
    /// assert!(pattern.matches(&Word::new("cat").unwrap()));
    /// assert!(!pattern.matches(&Word::new("cap").unwrap()));
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let normalized = super::normalize(text);
        if normalized.is_empty() {
            return Err(PatternError::Empty);
        }

        let cells = normalized
            .chars()
            .map(|ch| match ch {
                PLACEHOLDER | '_' => Ok(None),
                c if c.is_alphabetic() => Ok(Some(c)),
                c => Err(PatternError::InvalidSymbol(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cells })
    }

    /// A pattern with every position hidden
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// A pattern with every letter of `word` revealed
    #[must_use]
    pub fn revealed(word: &Word) -> Self {
        Self {
            cells: word.chars().iter().copied().map(Some).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The revealed letter at a position, `None` for placeholders or out of range
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<char> {
        self.cells.get(position).copied().flatten()
    }

    /// Number of placeholder cells
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Indices of placeholder cells
    pub fn hidden_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
    }

    /// `(position, letter)` for every revealed cell
    #[must_use]
    pub fn known_positions(&self) -> Vec<(usize, char)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|c| (i, c)))
            .collect()
    }

    /// Revealed letters, in position order (duplicates included)
    pub fn revealed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Whether any revealed cell holds `letter`
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.cells.contains(&Some(letter))
    }

    /// No placeholders left
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Fraction of positions revealed, in `[0, 1]`
    ///
    /// An empty pattern counts as fully revealed.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.cells.is_empty() {
            return 1.0;
        }
        1.0 - self.hidden_count() as f64 / self.cells.len() as f64
    }

    /// True iff the pattern spells exactly `word`
    #[must_use]
    pub fn is_revealed_as(&self, word: &Word) -> bool {
        self.cells.len() == word.len()
            && self
                .cells
                .iter()
                .zip(word.chars())
                .all(|(cell, &c)| *cell == Some(c))
    }

    /// Whether `word` is consistent with this pattern
    ///
    /// True iff lengths agree and every revealed cell equals the word's letter at
    /// that position.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.cells.len() == word.len()
            && self
                .cells
                .iter()
                .zip(word.chars())
                .all(|(cell, &c)| cell.is_none_or(|p| p == c))
    }

    /// Reveal `letter` at every hidden position where `target` has it
    ///
    /// Already revealed cells are left untouched. Returns how many cells were
    /// newly revealed.
    pub fn reveal(&mut self, letter: char, target: &Word) -> usize {
        let mut revealed = 0;
        for &position in target.positions_of(letter) {
            if let Some(cell) = self.cells.get_mut(position)
                && cell.is_none()
            {
                *cell = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
