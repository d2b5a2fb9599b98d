pub mod linear;
pub mod matrix;
pub mod nw_aligner;
pub mod scoring;
pub mod traceback;

pub use linear::score_only;
pub use matrix::ScoreMatrix;
pub use nw_aligner::{align, AlignmentResult, AlignmentStats, NeedlemanWunsch};
pub use scoring::{ScoringScheme, SubstitutionModel};
pub use traceback::{traceback, Operation, TracebackPath};
