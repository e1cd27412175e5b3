//! Guessable letter sets
//!
//! An alphabet is the ordered set of letters a profile may guess, grouped into
//! frequency tiers. Tier weights act as static priors for the last-resort scan,
//! and alphabet order is the deterministic tie-break order.

/// A group of letters sharing an expected commonness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyTier {
    /// Higher weight = scanned earlier
    pub weight: u8,
    pub letters: &'static str,
}

impl FrequencyTier {
    #[must_use]
    pub const fn new(weight: u8, letters: &'static str) -> Self {
        Self { weight, letters }
    }
}

/// Ordered letter set with frequency tiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    tiers: Vec<FrequencyTier>,
}

impl Alphabet {
    /// Build an alphabet from its letters (in tie-break order) and frequency tiers
    ///
    /// Letters not listed in any tier get weight 0.
    #[must_use]
    pub fn new(letters: &str, tiers: Vec<FrequencyTier>) -> Self {
        let mut ordered: Vec<char> = Vec::new();
        for ch in letters.chars() {
            if !ordered.contains(&ch) {
                ordered.push(ch);
            }
        }

        Self {
            letters: ordered,
            tiers,
        }
    }

    /// Full Romanian alphabet: vowels with diacritics, common consonants, rare letters
    #[must_use]
    pub fn romanian() -> Self {
        Self::new(
            "AEIOUĂÂÎRTNLSCMDPBVGFHȘȚZJXYWKQ",
            vec![
                FrequencyTier::new(4, "AEI"),
                FrequencyTier::new(3, "RTNLS"),
                FrequencyTier::new(2, "OUĂÂÎCMDP"),
                FrequencyTier::new(1, "BVGFHȘȚZJXYWKQ"),
            ],
        )
    }

    /// Plain 26-letter English alphabet
    #[must_use]
    pub fn english() -> Self {
        Self::new(
            "EAIOUTNSHRDLCMWFGYPBVKJXQZ",
            vec![
                FrequencyTier::new(4, "EAI"),
                FrequencyTier::new(3, "TNSRO"),
                FrequencyTier::new(2, "HLDCUM"),
                FrequencyTier::new(1, "WFGYPBVKJXQZ"),
            ],
        )
    }

    /// Letters in alphabet order
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Tie-break rank of a letter
    ///
    /// Alphabet letters rank by position; anything else ranks after them by code point.
    #[must_use]
    pub fn rank(&self, letter: char) -> (usize, char) {
        let index = self
            .letters
            .iter()
            .position(|&c| c == letter)
            .unwrap_or(self.letters.len());
        (index, letter)
    }

    /// Weight of the first tier containing the letter, 0 if none does
    #[must_use]
    pub fn tier_weight(&self, letter: char) -> u8 {
        self.tiers
            .iter()
            .find(|tier| tier.letters.contains(letter))
            .map_or(0, |tier| tier.weight)
    }

    /// Alphabet letters ordered for the last-resort scan
    ///
    /// Highest tier first; alphabet order within a tier.
    #[must_use]
    pub fn scan_order(&self) -> Vec<char> {
        let mut order = self.letters.clone();
        // Stable sort keeps alphabet order inside a tier
        order.sort_by_key(|&c| std::cmp::Reverse(self.tier_weight(c)));
        order
    }
}
