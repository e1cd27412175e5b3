//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_results, print_batch_statistics, print_record_issues, print_solve_report,
};
