//! Main hangman solver interface

use super::filter::CandidatePolicy;
use super::profile::Profile;
use super::selector::{GuessSelector, SelectionSource, TieBreak};
use crate::core::{Pattern, Word};
use log::{debug, trace, warn};
use rustc_hash::FxHashSet;
use std::fmt;

/// Default per-puzzle cap on loop iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Game loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameState {
    Guessing,
    Solved,
    Exhausted,
    IterationLimit,
}

/// How a solve ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// The pattern spells the target
    Solved,
    /// No letter is left to try
    Exhausted,
    /// The iteration cap stopped the loop
    IterationLimit,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::IterationLimit => "iteration limit",
        };
        f.write_str(label)
    }
}

/// One letter guess in a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub letter: char,
    pub source: SelectionSource,
    /// Candidate count when the letter was chosen
    pub candidates: usize,
    /// Positions newly revealed by this letter
    pub revealed: usize,
    /// Pattern after applying the letter
    pub pattern_after: Pattern,
}

impl GuessStep {
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        self.revealed > 0
    }
}

/// Result of one solve
///
/// Letter guesses make up the attempt log. A successful full-word check is
/// recorded in `word_guess` and does not count as an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    pub steps: Vec<GuessStep>,
    pub word_guess: Option<String>,
    pub final_pattern: Pattern,
    pub iterations: usize,
}

impl SolveOutcome {
    #[must_use]
    pub fn found(&self) -> bool {
        self.status == SolveStatus::Solved
    }

    /// Guessed letters in order
    #[must_use]
    pub fn attempts(&self) -> Vec<char> {
        self.steps.iter().map(|step| step.letter).collect()
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.steps.len()
    }
}

/// Main hangman solver
///
/// Holds the read-only inputs shared by every puzzle: the profile and the
/// dictionary. `solve` keeps all per-puzzle state local, so one solver can be
/// used from many threads at once.
pub struct Solver<'a> {
    profile: Profile,
    dictionary: &'a [Word],
    policy: CandidatePolicy,
    seed: Option<u64>,
    max_iterations: usize,
}

impl<'a> Solver<'a> {
    /// Create a new solver with the given profile and dictionary
    ///
    /// Defaults: narrowing candidate policy, alphabet-order tie-breaks,
    /// [`DEFAULT_MAX_ITERATIONS`].
    #[must_use]
    pub const fn new(profile: Profile, dictionary: &'a [Word]) -> Self {
        Self {
            profile,
            dictionary,
            policy: CandidatePolicy::Narrow,
            seed: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: CandidatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Break score ties randomly from `seed` (reseeded for every solve)
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    #[must_use]
    pub const fn policy(&self) -> CandidatePolicy {
        self.policy
    }

    /// Solve one puzzle
    ///
    /// Guesses letters against `target` starting from `initial`, until the
    /// pattern spells the target or nothing is left to try.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Pattern, Word};
    /// use hangman_solver::solver::{Profile, Solver};
    ///
    /// let dictionary: Vec<Word> = ["CAT", "BAT", "HAT"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let solver = Solver::new(Profile::romanian(), &dictionary);
    ///
    /// let outcome = solver.solve(
    ///     &Word::new("CAT").unwrap(),
    ///     &Pattern::parse("**T").unwrap(),
    /// );
    /// assert!(outcome.found());
    /// assert_eq!(outcome.final_pattern.to_string(), "CAT");
    /// ```
    #[must_use]
    pub fn solve(&self, target: &Word, initial: &Pattern) -> SolveOutcome {
        let mut pattern = initial.clone();
        let mut steps: Vec<GuessStep> = Vec::new();

        if pattern.len() != target.len() {
            warn!(
                "Pattern {pattern} has {} positions but target {target} has {} letters",
                pattern.len(),
                target.len()
            );
            return SolveOutcome {
                status: SolveStatus::Exhausted,
                steps,
                word_guess: None,
                final_pattern: pattern,
                iterations: 0,
            };
        }

        let selector = GuessSelector::new(&self.profile);
        let mut tie_break = TieBreak::from_seed(self.seed);
        let mut used: FxHashSet<char> = pattern.revealed_letters().collect();
        let mut candidates: Vec<&Word> = self.dictionary.iter().collect();
        let mut word_guess = None;
        let mut iterations = 0;
        let mut state = GameState::Guessing;

        while state == GameState::Guessing {
            if pattern.is_revealed_as(target) {
                state = GameState::Solved;
                continue;
            }
            if pattern.is_complete() {
                // Fully revealed yet different from the target: nothing to guess
                state = GameState::Exhausted;
                continue;
            }
            if iterations >= self.max_iterations {
                warn!(
                    "Stopping {target} after {iterations} iterations at pattern {pattern}"
                );
                state = GameState::IterationLimit;
                continue;
            }
            iterations += 1;

            candidates = self.policy.refresh(&pattern, &candidates, self.dictionary);
            trace!(
                "{target}: iteration {iterations}, pattern {pattern}, {} candidates",
                candidates.len()
            );

            if self.profile.short_circuit.applies(
                candidates.len(),
                pattern.len(),
                pattern.progress(),
            ) && let Some(word) = candidates.iter().find(|w| w.text() == target.text())
            {
                debug!(
                    "{target}: word check among {} candidates succeeded",
                    candidates.len()
                );
                word_guess = Some(word.text().to_string());
                pattern = Pattern::revealed(target);
                state = GameState::Solved;
                continue;
            }

            let Some(selection) = selector.next_guess(&pattern, &candidates, &used, &mut tie_break)
            else {
                debug!("{target}: no letters left at pattern {pattern}");
                state = GameState::Exhausted;
                continue;
            };

            used.insert(selection.letter);
            let revealed = pattern.reveal(selection.letter, target);
            debug!(
                "{target}: guessed {} ({}) -> {pattern}",
                selection.letter, selection.source
            );

            steps.push(GuessStep {
                letter: selection.letter,
                source: selection.source,
                candidates: candidates.len(),
                revealed,
                pattern_after: pattern.clone(),
            });
        }

        let status = match state {
            GameState::Solved => SolveStatus::Solved,
            GameState::IterationLimit => SolveStatus::IterationLimit,
            GameState::Exhausted | GameState::Guessing => SolveStatus::Exhausted,
        };

        SolveOutcome {
            status,
            steps,
            word_guess,
            final_pattern: pattern,
            iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn solve_with(solver: &Solver<'_>, pattern: &str, target: &str) -> SolveOutcome {
        solver.solve(&Word::new(target).unwrap(), &Pattern::parse(pattern).unwrap())
    }

    fn assert_well_formed(outcome: &SolveOutcome, initial: &str, alphabet_len: usize) {
        let attempts = outcome.attempts();

        // No letter is ever guessed twice
        let unique: FxHashSet<char> = attempts.iter().copied().collect();
        assert_eq!(unique.len(), attempts.len(), "repeated guess in {attempts:?}");

        // Revelation is monotonic: every step keeps all earlier revealed cells
        let mut previous = Pattern::parse(initial).unwrap();
        for step in &outcome.steps {
            for (i, c) in previous.known_positions() {
                assert_eq!(step.pattern_after.get(i), Some(c));
            }
            previous = step.pattern_after.clone();
        }
        for (i, c) in previous.known_positions() {
            assert_eq!(outcome.final_pattern.get(i), Some(c));
        }

        assert!(attempts.len() <= alphabet_len);
    }

    #[test]
    fn scenario_short_word_solved_from_candidates() {
        let dict = words(&["CAT", "BAT", "HAT"]);
        let solver = Solver::new(Profile::romanian(), &dict);

        let outcome = solve_with(&solver, "**T", "CAT");

        assert!(outcome.found());
        assert_eq!(outcome.final_pattern.to_string(), "CAT");
        assert_eq!(outcome.word_guess.as_deref(), Some("CAT"));
        assert!(outcome.attempts().is_empty());
    }

    #[test]
    fn scenario_rare_target_outside_dictionary() {
        let dict = words(&["WORD", "TEST"]);
        let profile = Profile::romanian();
        let alphabet_len = profile.alphabet.len();
        let solver = Solver::new(profile, &dict);

        let outcome = solve_with(&solver, "****", "ZZZZ");

        assert!(outcome.found());
        assert_eq!(outcome.final_pattern.to_string(), "ZZZZ");
        assert_eq!(outcome.word_guess, None);
        let attempts = outcome.attempts();
        assert_eq!(attempts.iter().filter(|&&c| c == 'Z').count(), 1);
        assert_eq!(attempts.last(), Some(&'Z'));
        assert!(
            outcome
                .steps
                .iter()
                .any(|s| s.source == SelectionSource::AlphabetScan)
        );
        assert_well_formed(&outcome, "****", alphabet_len);
    }

    #[test]
    fn scenario_empty_dictionary() {
        let dict: Vec<Word> = Vec::new();
        let solver = Solver::new(Profile::romanian(), &dict);

        let outcome = solve_with(&solver, "A*", "AB");

        assert!(outcome.found());
        assert_eq!(outcome.final_pattern.to_string(), "AB");
        assert!(outcome.attempts().contains(&'B'));
        assert!(!outcome.attempts().contains(&'A'));
        assert_well_formed(&outcome, "A*", 31);
    }

    #[test]
    fn scenario_already_revealed() {
        let dict = words(&["CAT"]);
        let solver = Solver::new(Profile::romanian(), &dict);

        let outcome = solve_with(&solver, "CAT", "CAT");

        assert!(outcome.found());
        assert!(outcome.attempts().is_empty());
        assert_eq!(outcome.word_guess, None);
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn solves_by_letters_when_candidate_set_is_large() {
        let dict = words(&[
            "CASĂ", "MASĂ", "CAPĂ", "RASĂ", "NASĂ", "VASĂ", "PASĂ", "LATĂ", "BALĂ", "SALĂ",
        ]);
        let profile = Profile::romanian();
        let alphabet_len = profile.alphabet.len();
        let solver = Solver::new(profile, &dict);

        let outcome = solve_with(&solver, "****", "CASĂ");

        assert!(outcome.found());
        assert_eq!(outcome.final_pattern.to_string(), "CASĂ");
        assert!(!outcome.attempts().is_empty());
        assert_well_formed(&outcome, "****", alphabet_len);
    }

    #[test]
    fn every_dictionary_word_is_solved() {
        let dict = words(&[
            "PĂDURE", "PĂMÂNT", "PĂRINTE", "MUNTE", "MUNCĂ", "ȘCOALĂ", "ȚARĂ", "LUP", "ZĂPADĂ",
            "ÎNCEPUT", "FLOARE", "FEREASTRĂ",
        ]);
        let profile = Profile::romanian();
        let alphabet_len = profile.alphabet.len();

        for policy in [CandidatePolicy::Narrow, CandidatePolicy::RescanFull] {
            let solver = Solver::new(profile.clone(), &dict).with_policy(policy);
            for target in &dict {
                let initial = Pattern::hidden(target.len());
                let outcome = solver.solve(target, &initial);

                assert!(outcome.found(), "{target} with {policy:?}");
                assert!(outcome.final_pattern.is_revealed_as(target));
                assert_well_formed(&outcome, &initial.to_string(), alphabet_len);
            }
        }
    }

    #[test]
    fn target_with_letters_outside_alphabet_is_exhausted() {
        let dict = words(&["ÖL"]);
        let profile = Profile::english();
        let alphabet = profile.alphabet.clone();
        let solver = Solver::new(profile, &dict);

        // Ü and Ö are outside the alphabet; Ö only appears in the dictionary
        let outcome = solve_with(&solver, "**", "ÜÜ");

        assert!(!outcome.found());
        assert_eq!(outcome.status, SolveStatus::Exhausted);
        assert_eq!(outcome.final_pattern.to_string(), "**");
        // Every alphabet letter was tried once and nothing else
        let attempts = outcome.attempts();
        assert!(!attempts.contains(&'Ö'));
        assert!(attempts.iter().all(|&c| alphabet.contains(c)));
        assert_eq!(outcome.attempt_count(), alphabet.len());
        assert_well_formed(&outcome, "**", alphabet.len());
    }

    #[test]
    fn complete_pattern_that_differs_is_exhausted() {
        let dict = words(&["CAT"]);
        let solver = Solver::new(Profile::romanian(), &dict);

        let outcome = solve_with(&solver, "BAT", "CAT");

        assert_eq!(outcome.status, SolveStatus::Exhausted);
        assert!(outcome.attempts().is_empty());
    }

    #[test]
    fn length_mismatch_is_exhausted_without_guessing() {
        let dict = words(&["CAT"]);
        let solver = Solver::new(Profile::romanian(), &dict);

        let outcome = solve_with(&solver, "****", "CAT");

        assert_eq!(outcome.status, SolveStatus::Exhausted);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.final_pattern.to_string(), "****");
    }

    #[test]
    fn iteration_cap_stops_the_loop() {
        let dict: Vec<Word> = Vec::new();
        let solver = Solver::new(Profile::romanian(), &dict).with_max_iterations(3);

        let outcome = solve_with(&solver, "*****", "ZZZZZ");

        assert_eq!(outcome.status, SolveStatus::IterationLimit);
        assert!(!outcome.found());
        assert_eq!(outcome.iterations, 3);
        assert_eq!(outcome.attempts(), vec!['A', 'E', 'I']);
    }

    #[test]
    fn steps_record_hits_and_candidates() {
        let dict = words(&["MARE", "MORE", "MURE", "MIRE", "MARI"]);
        let solver = Solver::new(Profile::romanian(), &dict);

        let outcome = solve_with(&solver, "M***", "MARE");

        // A narrows five candidates to MARE and MARI, then the word check wins
        assert!(outcome.found());
        assert_eq!(outcome.attempt_count(), 1);
        let step = &outcome.steps[0];
        assert_eq!(step.letter, 'A');
        assert_eq!(step.source, SelectionSource::Bootstrap);
        assert_eq!(step.candidates, 5);
        assert_eq!(step.revealed, 1);
        assert!(step.is_hit());
        assert_eq!(step.pattern_after.to_string(), "MA**");
        assert_eq!(outcome.word_guess.as_deref(), Some("MARE"));
    }

    #[test]
    fn seeded_solves_are_reproducible() {
        let dict = words(&["BUMB", "BUMP", "BUMF", "DUMB", "HUMP", "JUMP", "LUMP", "PUMP"]);
        let solver = Solver::new(Profile::english(), &dict).with_seed(Some(1234));

        let first = solve_with(&solver, "****", "LUMP");
        let second = solve_with(&solver, "****", "LUMP");

        assert!(first.found());
        assert_eq!(first, second);
    }

    #[test]
    fn deterministic_without_seed() {
        let dict = words(&["CASĂ", "MASĂ", "CAPĂ", "RASĂ", "NASĂ"]);
        let solver = Solver::new(Profile::romanian(), &dict);

        let first = solve_with(&solver, "****", "NASĂ");
        let second = solve_with(&solver, "****", "NASĂ");
        assert_eq!(first, second);
    }

    #[test]
    fn solver_is_shareable_across_threads() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<Solver<'static>>();
    }
}
