//! Candidate filtering
//!
//! Derives the dictionary words consistent with the current pattern.

use crate::core::{Pattern, Word};
use log::warn;

/// Return every word of `pool` consistent with `pattern`, in pool order
///
/// Known positions are indexed once per call so each word is checked by
/// length and then only at revealed positions.
///
/// # Examples
/// ```
/// use hangman_solver::core::{Pattern, Word};
/// use hangman_solver::solver::filter;
///
/// let dictionary: Vec<Word> = ["CAT", "BAT", "CAP", "CATS"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let pattern = Pattern::parse("**T").unwrap();
///
/// let candidates = filter(&pattern, &dictionary);
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CAT", "BAT"]);
/// ```
pub fn filter<'a, I>(pattern: &Pattern, pool: I) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let length = pattern.len();
    let known = pattern.known_positions();

    pool.into_iter()
        .filter(|word| word.len() == length)
        .filter(|word| known.iter().all(|&(i, c)| word.char_at(i) == Some(c)))
        .collect()
}

/// How the candidate set is recomputed between guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidatePolicy {
    /// Filter the previous candidate set, falling back to the full dictionary when it empties
    #[default]
    Narrow,
    /// Filter the full dictionary every time
    RescanFull,
}

impl CandidatePolicy {
    /// Create a policy from its name
    ///
    /// Supported names: "narrow", "rescan" (alias "rescan-full").
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "narrow" => Some(Self::Narrow),
            "rescan" | "rescan-full" => Some(Self::RescanFull),
            _ => None,
        }
    }

    /// Recompute candidates for `pattern`
    ///
    /// `previous` is the candidate set computed for an earlier (less revealed)
    /// pattern of the same puzzle. `Narrow` rescans the dictionary only when a
    /// non-empty `previous` narrows to nothing; an empty `previous` stays empty.
    pub fn refresh<'a>(
        self,
        pattern: &Pattern,
        previous: &[&'a Word],
        dictionary: &'a [Word],
    ) -> Vec<&'a Word> {
        match self {
            Self::RescanFull => filter(pattern, dictionary),
            Self::Narrow => {
                let narrowed = filter(pattern, previous.iter().copied());
                if narrowed.is_empty() && !previous.is_empty() {
                    let rescanned = filter(pattern, dictionary);
                    if !rescanned.is_empty() {
                        warn!(
                            "Narrowed candidate set for {pattern} was empty, recovered {} words from the dictionary",
                            rescanned.len()
                        );
                    }
                    rescanned
                } else {
                    narrowed
                }
            }
        }
    }
}
