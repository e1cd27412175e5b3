//! Letter scoring
//!
//! Ranks a letter for a hidden position by combining candidate evidence
//! (positional and overall frequency) with the profile's static priors
//! (game stage, word length, rarity penalty).

use super::profile::Profile;
use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Per-letter occurrence counts over a candidate set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LetterStats {
    /// Total occurrences across all candidates
    occurrences: usize,
    /// Number of candidates holding the letter at each position
    by_position: Vec<usize>,
}

/// Letter statistics gathered once per candidate set
///
/// Scoring every (letter, position) pair from these counts avoids rescanning
/// the candidate words for each pair.
#[derive(Debug, Clone)]
pub struct CandidateStats {
    word_length: usize,
    letters: FxHashMap<char, LetterStats>,
}

impl CandidateStats {
    /// Count letters over candidates of `word_length` letters
    ///
    /// Words of another length are ignored.
    #[must_use]
    pub fn collect(candidates: &[&Word], word_length: usize) -> Self {
        let mut letters: FxHashMap<char, LetterStats> = FxHashMap::default();

        for word in candidates.iter().filter(|w| w.len() == word_length) {
            for (position, &letter) in word.chars().iter().enumerate() {
                let stats = letters.entry(letter).or_insert_with(|| LetterStats {
                    occurrences: 0,
                    by_position: vec![0; word_length],
                });
                stats.occurrences += 1;
                stats.by_position[position] += 1;
            }
        }

        Self {
            word_length,
            letters,
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Total occurrences of `letter`
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.letters.get(&letter).map_or(0, |s| s.occurrences)
    }

    /// Candidates holding `letter` at `position`
    #[must_use]
    pub fn at_position(&self, letter: char, position: usize) -> usize {
        self.letters
            .get(&letter)
            .and_then(|s| s.by_position.get(position).copied())
            .unwrap_or(0)
    }

    /// Number of distinct positions where `letter` occurs
    #[must_use]
    pub fn distinct_positions(&self, letter: char) -> usize {
        self.letters
            .get(&letter)
            .map_or(0, |s| s.by_position.iter().filter(|&&n| n > 0).count())
    }
}

/// Scores letters under a profile
#[derive(Debug, Clone, Copy)]
pub struct LetterScorer<'p> {
    profile: &'p Profile,
}

impl<'p> LetterScorer<'p> {
    #[must_use]
    pub const fn new(profile: &'p Profile) -> Self {
        Self { profile }
    }

    /// Score `letter` for `position` against a candidate set
    ///
    /// Convenience wrapper that gathers [`CandidateStats`] first; use
    /// [`LetterScorer::score_with`] when scoring many pairs against one set.
    #[must_use]
    pub fn score(
        &self,
        letter: char,
        pattern: &Pattern,
        candidates: &[&Word],
        position: usize,
    ) -> f64 {
        let stats = CandidateStats::collect(candidates, pattern.len());
        self.score_with(letter, pattern, &stats, position)
    }

    /// Score `letter` for `position` from precomputed statistics
    #[must_use]
    pub fn score_with(
        &self,
        letter: char,
        pattern: &Pattern,
        stats: &CandidateStats,
        position: usize,
    ) -> f64 {
        self.evidence(letter, stats, position)
            + self.stage_bonus(letter, pattern.progress())
            + self.length_bonus(letter, pattern.len())
            + self.rarity_penalty(letter)
    }

    /// Candidate-derived score: positional frequency, overall frequency, spread
    fn evidence(&self, letter: char, stats: &CandidateStats, position: usize) -> f64 {
        let total = stats.occurrences(letter) as f64;
        if total == 0.0 {
            return 0.0;
        }

        let at_position = stats.at_position(letter, position) as f64;
        let weights = self.profile.evidence;

        let mut score = total * (1.0 + at_position / (total + 1.0));
        score += at_position * weights.position;

        let spread = stats.distinct_positions(letter);
        if spread > 1 {
            score += spread as f64 * weights.spread;
        }

        score
    }

    /// Bonus from the stage rule matching `progress`
    #[must_use]
    pub fn stage_bonus(&self, letter: char, progress: f64) -> f64 {
        self.profile
            .stages
            .iter()
            .find(|stage| progress < stage.until)
            .and_then(|stage| {
                stage
                    .bonuses
                    .iter()
                    .find(|bonus| bonus.letters.contains(letter))
            })
            .map_or(0.0, |bonus| bonus.points)
    }

    /// Sum of the length rules that apply to `word_length` and contain `letter`
    #[must_use]
    pub fn length_bonus(&self, letter: char, word_length: usize) -> f64 {
        self.profile
            .length_rules
            .iter()
            .filter_map(|rule| rule.applies_to(word_length))
            .filter(|bonus| bonus.letters.contains(letter))
            .map(|bonus| bonus.points)
            .sum()
    }

    /// Static deduction for rare letters (zero or negative)
    #[must_use]
    pub fn rarity_penalty(&self, letter: char) -> f64 {
        self.profile
            .penalties
            .iter()
            .find(|penalty| penalty.letters.contains(letter))
            .map_or(0.0, |penalty| penalty.points)
    }
}
