//! Core domain types for hangman puzzles
//!
//! This module contains the fundamental domain types: letters, words and patterns.
//! All types here are pure, testable, and free of I/O.

mod alphabet;
mod pattern;
mod word;

pub use alphabet::{Alphabet, FrequencyTier};
pub use pattern::{PLACEHOLDER, Pattern, PatternError};
pub use word::{Word, WordError, normalize};
