//! Puzzle records
//!
//! Reads `game_id,initial_pattern,target_word` records and writes per-puzzle
//! result rows.

pub mod reader;
pub mod writer;

pub use reader::{PuzzleSet, RecordError, RecordIssue, parse_puzzles, read_puzzles};
pub use writer::{RESULTS_HEADER, format_results, write_results};

use crate::core::{Pattern, Word};
use crate::solver::SolveOutcome;

/// One puzzle to solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub game_id: String,
    pub pattern: Pattern,
    pub target: Word,
}

/// A solved (or failed) puzzle, ready for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleResult {
    pub game_id: String,
    pub outcome: SolveOutcome,
}

impl PuzzleResult {
    /// `OK` when the word was found, `FAIL` otherwise
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.outcome.found() { "OK" } else { "FAIL" }
    }

    /// Guessed letters joined by single spaces
    #[must_use]
    pub fn attempt_sequence(&self) -> String {
        format_letters(&self.outcome.attempts())
    }
}

/// Join letters with single spaces
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_space_separated() {
        assert_eq!(format_letters(&['A', 'Ș', 'Z']), "A Ș Z");
        assert_eq!(format_letters(&[]), "");
    }

    #[test]
    fn attempt_sequence_joins_guessed_letters() {
        let dictionary: Vec<Word> = Vec::new();
        let solver = crate::solver::Solver::new(crate::solver::Profile::romanian(), &dictionary)
            .with_max_iterations(3);
        let result = PuzzleResult {
            game_id: "1".to_string(),
            outcome: solver.solve(&Word::new("ZZ").unwrap(), &Pattern::parse("**").unwrap()),
        };

        assert_eq!(result.attempt_sequence(), "A E I");
        assert_eq!(result.status_label(), "FAIL");
    }
}
