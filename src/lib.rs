//! Hangman Solver
//!
//! A heuristic hangman solver: given a partially revealed pattern and a hidden
//! target word, it guesses letters one at a time using a dictionary of
//! candidate words, positional letter statistics and language profiles tuned
//! for Romanian.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{Pattern, Word};
//! use hangman_solver::solver::{Profile, Solver};
//! use hangman_solver::wordlists::{DICTIONARY, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(DICTIONARY);
//! let solver = Solver::new(Profile::romanian(), &dictionary);
//!
//! let target = Word::new("munte").unwrap();
//! let outcome = solver.solve(&target, &Pattern::parse("****E").unwrap());
//!
//! assert!(outcome.found());
//! println!("Guessed {:?}", outcome.attempts());
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Dictionaries
pub mod wordlists;

// Puzzle records and result files
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
