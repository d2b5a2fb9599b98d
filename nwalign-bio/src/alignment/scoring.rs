/// Scoring models for linear-gap global alignment
use crate::sequence::GAP_SYMBOL;
use nwalign_core::ScoringConfig;
use serde::{Deserialize, Serialize};

pub trait SubstitutionModel {
    /// Score for aligning two non-gap symbols against each other.
    fn score(&self, a: u8, b: u8) -> i32;

    /// Score for aligning any symbol against the gap marker.
    fn gap(&self) -> i32;

    /// Score of one alignment column, which may contain the gap marker.
    fn column(&self, a: u8, b: u8) -> i32 {
        if a == GAP_SYMBOL || b == GAP_SYMBOL {
            self.gap()
        } else {
            self.score(a, b)
        }
    }
}

impl<S: SubstitutionModel + ?Sized> SubstitutionModel for &S {
    fn score(&self, a: u8, b: u8) -> i32 {
        (**self).score(a, b)
    }

    fn gap(&self) -> i32 {
        (**self).gap()
    }
}

/// Match/mismatch/gap scoring. Signs are not constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringScheme {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
}

impl ScoringScheme {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    pub fn with_scores(mut self, match_score: i32, mismatch: i32) -> Self {
        self.match_score = match_score;
        self.mismatch = mismatch;
        self
    }

    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }
}

impl Default for ScoringScheme {
    fn default() -> Self {
        ScoringConfig::default().into()
    }
}

impl From<ScoringConfig> for ScoringScheme {
    fn from(config: ScoringConfig) -> Self {
        Self::new(config.match_score, config.mismatch, config.gap)
    }
}

impl SubstitutionModel for ScoringScheme {
    fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    fn gap(&self) -> i32 {
        self.gap
    }
}
