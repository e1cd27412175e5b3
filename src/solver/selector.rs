//! Next-letter selection
//!
//! The selector walks a fixed cascade and stops at the first step that yields a
//! letter:
//!
//! ```text
//! 1. Bootstrap      fixed opening order while few letters are used
//! 2. Scored         best (letter, hidden position) by LetterScorer
//! 3. Frequency      most frequent letter at hidden positions among candidates
//! 4. AlphabetScan   first unused alphabet letter, highest frequency tier first
//! ```
//!
//! A letter is eligible only if it belongs to the profile alphabet, was never
//! guessed and is not already shown in the pattern. When every step comes up empty the selector returns `None`,
//! which is the game loop's exhaustion signal.

use super::profile::Profile;
use super::scorer::{CandidateStats, LetterScorer};
use crate::core::{Alphabet, Pattern, Word};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Scores closer than this are treated as tied
const SCORE_EPSILON: f64 = 1e-9;

/// Which step of the cascade produced a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionSource {
    Bootstrap,
    Scored,
    Frequency,
    AlphabetScan,
}

impl fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bootstrap => "bootstrap",
            Self::Scored => "scored",
            Self::Frequency => "frequency",
            Self::AlphabetScan => "alphabet scan",
        };
        f.write_str(label)
    }
}

/// A chosen letter and the step that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub letter: char,
    pub source: SelectionSource,
}

/// Resolves letters that share the best score
pub enum TieBreak {
    /// Lowest alphabet rank wins
    AlphabetOrder,
    /// Uniform choice among the tied letters from a seeded generator
    Seeded(StdRng),
}

impl TieBreak {
    /// Seeded tie-breaking when a seed is given, alphabet order otherwise
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::AlphabetOrder, |seed| {
            Self::Seeded(StdRng::seed_from_u64(seed))
        })
    }

    /// Pick one of `tied`
    ///
    /// Letters are ordered by alphabet rank first so a seeded pick is reproducible
    /// regardless of the order ties were collected in.
    pub fn pick(&mut self, mut tied: Vec<char>, alphabet: &Alphabet) -> Option<char> {
        tied.sort_by_key(|&c| alphabet.rank(c));
        tied.dedup();
        match self {
            Self::AlphabetOrder => tied.first().copied(),
            Self::Seeded(rng) => tied.choose(rng).copied(),
        }
    }
}

impl fmt::Debug for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphabetOrder => f.write_str("AlphabetOrder"),
            Self::Seeded(_) => f.write_str("Seeded(..)"),
        }
    }
}

/// Picks the next letter to guess under a profile
#[derive(Debug, Clone, Copy)]
pub struct GuessSelector<'p> {
    profile: &'p Profile,
    scorer: LetterScorer<'p>,
}

impl<'p> GuessSelector<'p> {
    #[must_use]
    pub const fn new(profile: &'p Profile) -> Self {
        Self {
            profile,
            scorer: LetterScorer::new(profile),
        }
    }

    /// Choose the next letter, or `None` once nothing is left to try
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Pattern, Word};
    /// use hangman_solver::solver::{GuessSelector, Profile, SelectionSource, TieBreak};
    /// use rustc_hash::FxHashSet;
    ///
    /// let profile = Profile::romanian();
    /// let selector = GuessSelector::new(&profile);
    /// let pattern = Pattern::parse("****").unwrap();
    /// let used = FxHashSet::default();
    ///
    /// let selection = selector
    ///     .next_guess(&pattern, &[], &used, &mut TieBreak::AlphabetOrder)
    ///     .unwrap();
    /// assert_eq!(selection.letter, 'A');
    /// assert_eq!(selection.source, SelectionSource::Bootstrap);
    /// ```
    pub fn next_guess(
        &self,
        pattern: &Pattern,
        candidates: &[&Word],
        used: &FxHashSet<char>,
        tie_break: &mut TieBreak,
    ) -> Option<Selection> {
        let alphabet = &self.profile.alphabet;
        let eligible = |letter: char| {
            alphabet.contains(letter) && !used.contains(&letter) && !pattern.contains_letter(letter)
        };

        if used.len() < self.profile.bootstrap_limit
            && let Some(letter) = self.profile.bootstrap_letters().find(|&c| eligible(c))
        {
            return Some(Selection {
                letter,
                source: SelectionSource::Bootstrap,
            });
        }

        if let Some(letter) = self.best_scored(pattern, candidates, &eligible, tie_break) {
            return Some(Selection {
                letter,
                source: SelectionSource::Scored,
            });
        }

        if let Some(letter) = Self::most_frequent(pattern, candidates, &eligible)
            .and_then(|tied| tie_break.pick(tied, alphabet))
        {
            return Some(Selection {
                letter,
                source: SelectionSource::Frequency,
            });
        }

        self.alphabet_scan(&eligible, tie_break)
            .map(|letter| Selection {
                letter,
                source: SelectionSource::AlphabetScan,
            })
    }

    /// Highest-scoring eligible letter over all hidden positions
    ///
    /// A letter's total at a position is its score times the number of
    /// candidates holding it there.
    fn best_scored(
        &self,
        pattern: &Pattern,
        candidates: &[&Word],
        eligible: &impl Fn(char) -> bool,
        tie_break: &mut TieBreak,
    ) -> Option<char> {
        if candidates.is_empty() {
            return None;
        }

        let stats = CandidateStats::collect(candidates, pattern.len());
        let mut best: FxHashMap<char, f64> = FxHashMap::default();

        for position in pattern.hidden_positions() {
            let mut counts: FxHashMap<char, usize> = FxHashMap::default();
            for letter in candidates.iter().filter_map(|w| w.char_at(position)) {
                if eligible(letter) {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }

            for (letter, count) in counts {
                let total =
                    self.scorer.score_with(letter, pattern, &stats, position) * count as f64;
                best.entry(letter)
                    .and_modify(|score| *score = score.max(total))
                    .or_insert(total);
            }
        }

        let tied = top_ties(best.into_iter())?;
        tie_break.pick(tied, &self.profile.alphabet)
    }

    /// Letters most frequent at hidden positions among candidates
    fn most_frequent(
        pattern: &Pattern,
        candidates: &[&Word],
        eligible: &impl Fn(char) -> bool,
    ) -> Option<Vec<char>> {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in candidates {
            for position in pattern.hidden_positions() {
                if let Some(letter) = word.char_at(position)
                    && eligible(letter)
                {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        top_ties(counts.into_iter().map(|(c, n)| (c, n as f64)))
    }

    /// First eligible alphabet letter in the highest frequency tier
    fn alphabet_scan(
        &self,
        eligible: &impl Fn(char) -> bool,
        tie_break: &mut TieBreak,
    ) -> Option<char> {
        let alphabet = &self.profile.alphabet;
        let remaining = alphabet
            .letters()
            .iter()
            .copied()
            .filter(|&c| eligible(c))
            .map(|c| (c, f64::from(alphabet.tier_weight(c))));

        let tied = top_ties(remaining)?;
        tie_break.pick(tied, alphabet)
    }
}

/// Letters sharing the maximum score, `None` for empty input
fn top_ties(scores: impl Iterator<Item = (char, f64)>) -> Option<Vec<char>> {
    let scores: Vec<(char, f64)> = scores.collect();
    let max = scores
        .iter()
        .map(|&(_, s)| s)
        .max_by(f64::total_cmp)?;

    Some(
        scores
            .into_iter()
            .filter(|&(_, s)| (max - s).abs() < SCORE_EPSILON)
            .map(|(c, _)| c)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn used_set(letters: &str) -> FxHashSet<char> {
        letters.chars().collect()
    }

    #[test]
    fn bootstrap_follows_fixed_order() {
        let profile = Profile::romanian();
        let selector = GuessSelector::new(&profile);
        let pattern = Pattern::parse("*****").unwrap();

        let first = selector
            .next_guess(&pattern, &[], &used_set(""), &mut TieBreak::AlphabetOrder)
            .unwrap();
        assert_eq!(first.letter, 'A');
        assert_eq!(first.source, SelectionSource::Bootstrap);

        let third = selector
            .next_guess(&pattern, &[], &used_set("AE"), &mut TieBreak::AlphabetOrder)
            .unwrap();
        assert_eq!(third.letter, 'I');
    }

    #[test]
    fn bootstrap_skips_letters_in_pattern() {
        let profile = Profile::romanian();
        let selector = GuessSelector::new(&profile);
        let pattern = Pattern::parse("**R*").unwrap();

        let selection = selector
            .next_guess(&pattern, &[], &used_set("AEI"), &mut TieBreak::AlphabetOrder)
            .unwrap();
        assert_eq!(selection.letter, 'T');
    }

    #[test]
    fn scoring_takes_over_after_bootstrap_limit() {
        let profile = Profile::romanian();
        let selector = GuessSelector::new(&profile);
        let dict = words(&["WORD", "WOLD"]);
        let refs: Vec<&Word> = dict.iter().collect();
        let pattern = Pattern::parse("****").unwrap();
        let used = used_set("AEIRTSNLOC");

        let selection = selector
            .next_guess(&pattern, &refs, &used, &mut TieBreak::AlphabetOrder)
            .unwrap();
        // W and D have equal evidence; W carries a rarity penalty
        assert_eq!(selection.source, SelectionSource::Scored);
        assert_eq!(selection.letter, 'D');
    }

    #[test]
    fn scored_letter_prefers_candidate_evidence() {
        let profile = Profile::romanian();
        let selector = GuessSelector::new(&profile);
        let dict = words(&["BUMB", "BUMP", "BUMF"]);
        let refs: Vec<&Word> = dict.iter().collect();
        let pattern = Pattern::parse("*U**").unwrap();
        let used = used_set("AEIRTSNLOCU");

        let selection = selector
            .next_guess(&pattern, &refs, &used, &mut TieBreak::AlphabetOrder)
            .unwrap();
        assert_eq!(selection.letter, 'B');
    }

    #[test]
    fn never_returns_used_or_revealed_letters() {
        let profile = Profile::romanian();
        let selector = GuessSelector::new(&profile);
        let dict = words(&["CASĂ", "MASĂ", "CAPĂ"]);
        let refs: Vec<&Word> = dict.iter().collect();
        let pattern = Pattern::parse("*A*Ă").unwrap();
        let mut used = used_set("AEIRTSNLOĂ");

        while let Some(selection) =
            selector.next_guess(&pattern, &refs, &used, &mut TieBreak::AlphabetOrder)
        {
            assert!(!used.contains(&selection.letter));
            assert!(!pattern.contains_letter(selection.letter));
            used.insert(selection.letter);
        }
        // Every alphabet letter ends up used or shown
        for &letter in profile.alphabet.letters() {
            assert!(used.contains(&letter) || pattern.contains_letter(letter));
        }
    }

    #[test]
    fn falls_back_to_alphabet_scan_without_candidates() {
        let profile = Profile::romanian();
        let selector = GuessSelector::new(&profile);
        let pattern = Pattern::parse("****").unwrap();
        let used = used_set("AEIRTSNLOC");

        let selection = selector
            .next_guess(&pattern, &[], &used, &mut TieBreak::AlphabetOrder)
            .unwrap();
        assert_eq!(selection.source, SelectionSource::AlphabetScan);
        // Remaining tier-2 letters in alphabet order: U Ă Â Î M D P
        assert_eq!(selection.letter, 'U');
    }

    #[test]
    fn most_frequent_counts_hidden_positions_only() {
        let dict = words(&["ÖÖX", "ÖÜX"]);
        let refs: Vec<&Word> = dict.iter().collect();
        let pattern = Pattern::parse("**X").unwrap();
        let eligible = |c: char| c != 'X';

        let tied = GuessSelector::most_frequent(&pattern, &refs, &eligible).unwrap();
        assert_eq!(tied, vec!['Ö']);

        let nothing = |_: char| false;
        assert!(GuessSelector::most_frequent(&pattern, &refs, &nothing).is_none());
    }

    #[test]
    fn exhausted_alphabet_returns_none() {
        let profile = Profile::romanian();
        let selector = GuessSelector::new(&profile);
        let pattern = Pattern::parse("**").unwrap();
        let used: FxHashSet<char> = profile.alphabet.letters().iter().copied().collect();

        assert!(
            selector
                .next_guess(&pattern, &[], &used, &mut TieBreak::AlphabetOrder)
                .is_none()
        );
    }

    #[test]
    fn dictionary_letters_outside_alphabet_are_never_guessed() {
        let profile = Profile::english();
        let selector = GuessSelector::new(&profile);
        let dict = words(&["ÇA", "ÇB"]);
        let refs: Vec<&Word> = dict.iter().collect();
        let pattern = Pattern::parse("**").unwrap();

        // Ç dominates the candidates but only alphabet letters come back
        let mut used = used_set("EAIOTN");
        while let Some(selection) =
            selector.next_guess(&pattern, &refs, &used, &mut TieBreak::AlphabetOrder)
        {
            assert_ne!(selection.letter, 'Ç');
            assert!(profile.alphabet.contains(selection.letter));
            used.insert(selection.letter);
        }
        assert_eq!(used.len(), profile.alphabet.len());
    }

    #[test]
    fn tie_break_alphabet_order() {
        let alphabet = Alphabet::romanian();
        let mut tie_break = TieBreak::AlphabetOrder;
        assert_eq!(tie_break.pick(vec!['T', 'R', 'E'], &alphabet), Some('E'));
        assert_eq!(tie_break.pick(vec![], &alphabet), None);
    }

    #[test]
    fn seeded_tie_break_is_reproducible() {
        let alphabet = Alphabet::romanian();
        let tied = vec!['B', 'V', 'G', 'F', 'H'];

        let picks = |seed: u64| {
            let mut tie_break = TieBreak::from_seed(Some(seed));
            (0..10)
                .map(|_| tie_break.pick(tied.clone(), &alphabet).unwrap())
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
        assert!(picks(42).iter().all(|c| tied.contains(c)));

        // Order of the tied input does not matter for a given seed
        let mut a = TieBreak::from_seed(Some(7));
        let mut b = TieBreak::from_seed(Some(7));
        let reversed: Vec<char> = tied.iter().rev().copied().collect();
        assert_eq!(
            a.pick(tied.clone(), &alphabet),
            b.pick(reversed, &alphabet)
        );
    }

    #[test]
    fn from_seed_without_seed_is_deterministic() {
        assert!(matches!(TieBreak::from_seed(None), TieBreak::AlphabetOrder));
    }

    #[test]
    fn top_ties_collects_equal_maxima() {
        let ties = top_ties([('A', 2.0), ('B', 3.0), ('C', 3.0)].into_iter()).unwrap();
        assert_eq!(ties, vec!['B', 'C']);
        assert!(top_ties(std::iter::empty()).is_none());
    }
}
