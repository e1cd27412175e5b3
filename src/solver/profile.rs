//! Heuristic configuration profiles
//!
//! Every language- or variant-specific constant used by the scorer, the guess
//! selector and the game loop lives in a [`Profile`]. Switching profiles swaps
//! the weight tables and fixed orderings without touching the algorithm.

use crate::core::Alphabet;

/// A flat score adjustment applied to a group of letters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterBonus {
    pub letters: &'static str,
    pub points: f64,
}

impl LetterBonus {
    #[must_use]
    pub const fn new(letters: &'static str, points: f64) -> Self {
        Self { letters, points }
    }
}

/// Bonuses active while game progress is below `until`
///
/// Progress is the revealed fraction of the pattern. Groups are tried in order
/// and only the first group containing the letter applies.
#[derive(Debug, Clone, PartialEq)]
pub struct StageRule {
    pub until: f64,
    pub bonuses: Vec<LetterBonus>,
}

/// Word-length prior: applies when the word length satisfies the bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthRule {
    AtMost(usize, LetterBonus),
    AtLeast(usize, LetterBonus),
}

impl LengthRule {
    #[must_use]
    pub fn applies_to(&self, word_length: usize) -> Option<&LetterBonus> {
        match self {
            Self::AtMost(max, bonus) if word_length <= *max => Some(bonus),
            Self::AtLeast(min, bonus) if word_length >= *min => Some(bonus),
            _ => None,
        }
    }
}

/// Weights for candidate-derived evidence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvidenceWeights {
    /// Points per candidate holding the letter at the scored position
    pub position: f64,
    /// Points per distinct position the letter occupies, when it occupies more than one
    pub spread: f64,
}

/// When the game loop checks candidate words directly against the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortCircuit {
    /// Candidate sets this small are always checked
    pub max_candidates: usize,
    /// Words this short are checked regardless of candidate count
    pub max_word_length: Option<usize>,
    /// Once this fraction of the pattern is revealed, candidates are checked regardless of count
    pub min_revealed_ratio: Option<f64>,
}

impl ShortCircuit {
    /// Whether a candidate set of `candidates` words should be checked
    #[must_use]
    pub fn applies(&self, candidates: usize, word_length: usize, progress: f64) -> bool {
        if candidates == 0 {
            return false;
        }

        candidates <= self.max_candidates
            || self.max_word_length.is_some_and(|max| word_length <= max)
            || self.min_revealed_ratio.is_some_and(|ratio| progress >= ratio)
    }
}

/// Complete heuristic configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub alphabet: Alphabet,
    /// Fixed opening order, used while fewer than `bootstrap_limit` letters are used
    pub bootstrap: &'static str,
    pub bootstrap_limit: usize,
    pub evidence: EvidenceWeights,
    /// Ordered by ascending `until`; the last rule should cover progress 1.0
    pub stages: Vec<StageRule>,
    pub length_rules: Vec<LengthRule>,
    /// Negative adjustments for the rarest letters; first matching group applies
    pub penalties: Vec<LetterBonus>,
    pub short_circuit: ShortCircuit,
}

impl Profile {
    /// Names accepted by [`Profile::from_name`]
    pub const NAMES: &'static [&'static str] = &["romanian", "english"];

    /// Look up a profile by name
    ///
    /// Supported names: "romanian" (alias "ro"), "english" (alias "en").
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "romanian" | "ro" => Some(Self::romanian()),
            "english" | "en" => Some(Self::english()),
            _ => None,
        }
    }

    /// Romanian profile (default)
    #[must_use]
    pub fn romanian() -> Self {
        Self {
            name: "romanian",
            alphabet: Alphabet::romanian(),
            bootstrap: "AEIRTSNLOCMP",
            bootstrap_limit: 10,
            evidence: EvidenceWeights {
                position: 4.0,
                spread: 2.0,
            },
            stages: vec![
                StageRule {
                    until: 0.25,
                    bonuses: vec![
                        LetterBonus::new("AEI", 5.0),
                        LetterBonus::new("RTNS", 4.0),
                        LetterBonus::new("LCMP", 3.0),
                    ],
                },
                StageRule {
                    until: 0.5,
                    bonuses: vec![
                        LetterBonus::new("RTNLSCMDP", 4.0),
                        LetterBonus::new("OU", 3.0),
                    ],
                },
                StageRule {
                    until: 0.75,
                    bonuses: vec![
                        LetterBonus::new("ĂÎÂȘȚ", 4.0),
                        LetterBonus::new("BVGF", 3.0),
                    ],
                },
                StageRule {
                    until: f64::INFINITY,
                    bonuses: vec![LetterBonus::new("ĂÎÂȘȚHJZ", 5.0)],
                },
            ],
            length_rules: vec![
                LengthRule::AtMost(5, LetterBonus::new("AEIOU", 3.0)),
                LengthRule::AtLeast(8, LetterBonus::new("RTNLSCMD", 3.0)),
            ],
            penalties: vec![
                LetterBonus::new("XYQ", -5.0),
                LetterBonus::new("WK", -4.0),
            ],
            short_circuit: ShortCircuit {
                max_candidates: 3,
                max_word_length: Some(3),
                min_revealed_ratio: Some(0.4),
            },
        }
    }

    /// English profile
    ///
    /// Shorter bootstrap and a more conservative short-circuit that only checks
    /// small candidate sets.
    #[must_use]
    pub fn english() -> Self {
        Self {
            name: "english",
            alphabet: Alphabet::english(),
            bootstrap: "EAIOTNSRLU",
            bootstrap_limit: 6,
            evidence: EvidenceWeights {
                position: 4.0,
                spread: 2.0,
            },
            stages: vec![
                StageRule {
                    until: 0.25,
                    bonuses: vec![
                        LetterBonus::new("EAI", 5.0),
                        LetterBonus::new("TNSR", 4.0),
                        LetterBonus::new("OLHD", 3.0),
                    ],
                },
                StageRule {
                    until: 0.5,
                    bonuses: vec![
                        LetterBonus::new("TNSRLHDC", 4.0),
                        LetterBonus::new("OU", 3.0),
                    ],
                },
                StageRule {
                    until: 0.75,
                    bonuses: vec![
                        LetterBonus::new("MWFGYPB", 4.0),
                        LetterBonus::new("CU", 3.0),
                    ],
                },
                StageRule {
                    until: f64::INFINITY,
                    bonuses: vec![LetterBonus::new("BVKYPW", 5.0)],
                },
            ],
            length_rules: vec![
                LengthRule::AtMost(4, LetterBonus::new("AEIOU", 3.0)),
                LengthRule::AtLeast(8, LetterBonus::new("TNSRLC", 3.0)),
            ],
            penalties: vec![
                LetterBonus::new("QXZJ", -5.0),
                LetterBonus::new("VK", -3.0),
            ],
            short_circuit: ShortCircuit {
                max_candidates: 5,
                max_word_length: None,
                min_revealed_ratio: None,
            },
        }
    }

    /// Bootstrap letters in order
    pub fn bootstrap_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.bootstrap.chars()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::romanian()
    }
}
