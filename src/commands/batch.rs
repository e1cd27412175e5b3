//! Batch solving
//!
//! Solves a set of puzzle records in parallel and gathers statistics.

use crate::puzzles::{Puzzle, PuzzleResult};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Aggregate figures over a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    pub total: usize,
    pub solved: usize,
    pub failed: usize,
    /// Letter guesses summed over every puzzle
    pub total_attempts: usize,
    /// Mean letter guesses per puzzle, failed puzzles included
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub elapsed: Duration,
}

impl BatchStatistics {
    /// Summarize `results`
    #[must_use]
    pub fn from_results(results: &[PuzzleResult], elapsed: Duration) -> Self {
        let total = results.len();
        let solved = results.iter().filter(|r| r.outcome.found()).count();
        let counts = || results.iter().map(|r| r.outcome.attempt_count());
        let total_attempts: usize = counts().sum();

        let average_attempts = if total > 0 {
            total_attempts as f64 / total as f64
        } else {
            0.0
        };

        Self {
            total,
            solved,
            failed: total - solved,
            total_attempts,
            average_attempts,
            min_attempts: counts().min().unwrap_or(0),
            max_attempts: counts().max().unwrap_or(0),
            elapsed,
        }
    }

    /// Solved share in percent
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.solved as f64 / self.total as f64 * 100.0
        }
    }
}

/// Per-puzzle results in input order, plus statistics
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub results: Vec<PuzzleResult>,
    pub statistics: BatchStatistics,
}

/// Solve every puzzle, in parallel
///
/// Results keep the order of `puzzles`.
#[must_use]
pub fn run_batch(solver: &Solver<'_>, puzzles: &[Puzzle], show_progress: bool) -> BatchReport {
    info!(
        "Solving {} puzzles against {} dictionary words with the {} profile",
        puzzles.len(),
        solver.dictionary().len(),
        solver.profile().name
    );

    let pb = if show_progress {
        progress_bar(puzzles.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<PuzzleResult> = puzzles
        .par_iter()
        .map(|puzzle| {
            let outcome = solver.solve(&puzzle.target, &puzzle.pattern);
            pb.inc(1);
            PuzzleResult {
                game_id: puzzle.game_id.clone(),
                outcome,
            }
        })
        .collect();
    let elapsed = start.elapsed();

    pb.finish_with_message("Complete!");

    let statistics = BatchStatistics::from_results(&results, elapsed);
    info!(
        "Solved {}/{} puzzles with {} letter guesses in {:.2}s",
        statistics.solved,
        statistics.total,
        statistics.total_attempts,
        elapsed.as_secs_f64()
    );

    BatchReport {
        results,
        statistics,
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, Word};
    use crate::solver::Profile;

    fn puzzle(id: &str, pattern: &str, target: &str) -> Puzzle {
        Puzzle {
            game_id: id.to_string(),
            pattern: Pattern::parse(pattern).unwrap(),
            target: Word::new(target).unwrap(),
        }
    }

    #[test]
    fn batch_keeps_input_order_and_counts() {
        let dict: Vec<Word> = ["CAT", "BAT", "HAT", "CASĂ", "MASĂ"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let solver = Solver::new(Profile::romanian(), &dict);
        let puzzles = vec![
            puzzle("a", "**T", "CAT"),
            puzzle("b", "CAT", "CAT"),
            puzzle("c", "BAT", "CAT"),
            puzzle("d", "****", "CASĂ"),
        ];

        let report = run_batch(&solver, &puzzles, false);

        let ids: Vec<&str> = report.results.iter().map(|r| r.game_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);

        let stats = &report.statistics;
        assert_eq!(stats.total, 4);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.min_attempts, 0);
        assert_eq!(
            stats.total_attempts,
            report
                .results
                .iter()
                .map(|r| r.outcome.attempt_count())
                .sum::<usize>()
        );
        assert!((stats.success_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn statistics_for_empty_batch() {
        let stats = BatchStatistics::from_results(&[], Duration::ZERO);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.max_attempts, 0);
        assert!(stats.average_attempts.abs() < f64::EPSILON);
        assert!(stats.success_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn parallel_results_match_sequential_solves() {
        let dict: Vec<Word> = crate::wordlists::loader::words_from_slice(crate::wordlists::DICTIONARY);
        let solver = Solver::new(Profile::romanian(), &dict);
        let set = crate::puzzles::parse_puzzles(include_str!("../../data/sample_puzzles.csv"));

        let report = run_batch(&solver, &set.puzzles, false);

        for (puzzle, result) in set.puzzles.iter().zip(&report.results) {
            assert_eq!(result.outcome, solver.solve(&puzzle.target, &puzzle.pattern));
        }
        assert_eq!(report.statistics.solved, set.puzzles.len());
    }
}
