//! Command implementations

pub mod batch;
pub mod solve;

pub use batch::{BatchReport, BatchStatistics, run_batch};
pub use solve::{SolveReport, solve_puzzle};
