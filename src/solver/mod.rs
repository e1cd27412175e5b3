//! Hangman solving algorithms
//!
//! This module contains the candidate filter, letter scoring, the guess
//! selection cascade and the game loop that ties them together.

mod engine;
mod filter;
pub mod profile;
mod scorer;
mod selector;

pub use engine::{DEFAULT_MAX_ITERATIONS, GuessStep, SolveOutcome, SolveStatus, Solver};
pub use filter::{CandidatePolicy, filter};
pub use profile::{EvidenceWeights, LengthRule, LetterBonus, Profile, ShortCircuit, StageRule};
pub use scorer::{CandidateStats, LetterScorer};
pub use selector::{GuessSelector, Selection, SelectionSource, TieBreak};
