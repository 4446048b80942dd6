//! Tunable scoring weights and generation limits

/// Letters that earn a point each in the base candidate score
pub const COMMON_LETTERS: &str = "ETAOINSHRDLU";

/// Weights used by ranking and letter recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristics {
    /// Added to the rank score of a candidate found verbatim in the phrase corpus
    pub phrase_bonus: u32,
    /// Extra letter credit for phrase-corpus candidates, as a multiple of the
    /// candidate weight (on top of the base credit)
    pub phrase_letter_multiplier: i64,
    /// Weight given to unattempted letters that appear in no candidate
    pub absent_letter_penalty: i64,
    /// Stop composing word-path candidates after this many (`None` = unbounded)
    pub max_candidates: Option<usize>,
}

impl Heuristics {
    /// Set the word-path generation cap
    #[must_use]
    pub const fn with_max_candidates(mut self, max_candidates: Option<usize>) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            phrase_bonus: 100,
            phrase_letter_multiplier: 10,
            absent_letter_penalty: -1,
            max_candidates: None,
        }
    }
}
