//! Single puzzle solving command
//!
//! Solves one pattern/target pair and returns the full guess trace.

use crate::core::{Pattern, Word};
use crate::solver::{SolveOutcome, Solver};

/// Result of solving one puzzle
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub initial: Pattern,
    pub target: Word,
    /// Dictionary words consistent with the initial pattern
    pub initial_candidates: usize,
    pub outcome: SolveOutcome,
}

/// Solve `target` starting from `pattern`
///
/// # Errors
///
/// Returns an error if:
/// - The pattern or target word is malformed
/// - Their lengths differ
pub fn solve_puzzle(pattern: &str, target: &str, solver: &Solver<'_>) -> Result<SolveReport, String> {
    let initial = Pattern::parse(pattern).map_err(|e| format!("Invalid pattern: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;

    if initial.len() != target.len() {
        return Err(format!(
            "Pattern {initial} has {} positions but {target} has {} letters",
            initial.len(),
            target.len()
        ));
    }

    let initial_candidates = crate::solver::filter(&initial, solver.dictionary()).len();
    let outcome = solver.solve(&target, &initial);

    Ok(SolveReport {
        initial,
        target,
        initial_candidates,
        outcome,
    })
}
