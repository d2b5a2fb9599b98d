//! Needleman-Wunsch global alignment for nwalign

pub mod alignment;
pub mod sequence;

// Re-export commonly used types
pub use alignment::{align, AlignmentResult, NeedlemanWunsch, ScoringScheme};
pub use sequence::{Sequence, GAP_SYMBOL};
