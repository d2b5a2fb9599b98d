/// Needleman-Wunsch global alignment algorithm
use crate::alignment::linear::score_only;
use crate::alignment::matrix::ScoreMatrix;
use crate::alignment::scoring::{ScoringScheme, SubstitutionModel};
use crate::alignment::traceback::{traceback, Operation, TracebackPath};
use crate::sequence::{validate_lengths, validate_symbols, Sequence, GAP_SYMBOL};
use nwalign_core::NwResult;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub score: i64,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

impl AlignmentResult {
    fn from_path(score: i64, path: TracebackPath) -> Self {
        Self {
            score,
            aligned_seq1: path.aligned_seq1,
            aligned_seq2: path.aligned_seq2,
            operations: path.operations,
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    pub fn aligned_seq1_str(&self) -> String {
        String::from_utf8_lossy(&self.aligned_seq1).into_owned()
    }

    pub fn aligned_seq2_str(&self) -> String {
        String::from_utf8_lossy(&self.aligned_seq2).into_owned()
    }

    /// '|' for match, 'X' for mismatch, ' ' for gap
    pub fn alignment_string(&self) -> Vec<u8> {
        self.operations
            .iter()
            .map(|op| match op {
                Operation::Match => b'|',
                Operation::Mismatch => b'X',
                Operation::Deletion | Operation::Insertion => b' ',
            })
            .collect()
    }

    pub fn stats(&self) -> AlignmentStats {
        self.operations
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    Operation::Match => acc.matches += 1,
                    Operation::Mismatch => acc.mismatches += 1,
                    Operation::Deletion | Operation::Insertion => acc.gaps += 1,
                }
                acc
            })
    }

    /// Fraction of columns that are matches (0.0 to 1.0).
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.stats().matches as f64 / self.len() as f64
    }

    /// Sum of column scores under `scoring`.
    pub fn rescore<S: SubstitutionModel + ?Sized>(&self, scoring: &S) -> i64 {
        self.aligned_seq1
            .iter()
            .zip(self.aligned_seq2.iter())
            .map(|(&a, &b)| i64::from(scoring.column(a, b)))
            .sum()
    }

    /// Render the alignment as blocks of `line_width` columns, each block
    /// being seq1 / markers / seq2. A width of 0 renders one block.
    pub fn render(&self, line_width: usize) -> String {
        let width = if line_width == 0 {
            self.len().max(1)
        } else {
            line_width
        };
        let markers = self.alignment_string();

        let blocks: Vec<String> = self
            .aligned_seq1
            .chunks(width)
            .zip(markers.chunks(width))
            .zip(self.aligned_seq2.chunks(width))
            .map(|((top, mid), bottom)| {
                format!(
                    "{}\n{}\n{}\n",
                    String::from_utf8_lossy(top),
                    String::from_utf8_lossy(mid),
                    String::from_utf8_lossy(bottom)
                )
            })
            .collect();

        if blocks.is_empty() {
            "\n\n\n".to_string()
        } else {
            blocks.join("\n")
        }
    }
}

impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

pub struct NeedlemanWunsch<S: SubstitutionModel> {
    scoring: S,
}

impl Default for NeedlemanWunsch<ScoringScheme> {
    fn default() -> Self {
        Self::new(ScoringScheme::default())
    }
}

impl<S: SubstitutionModel> NeedlemanWunsch<S> {
    pub fn new(scoring: S) -> Self {
        Self { scoring }
    }

    /// Build the score matrix for a pair of validated sequences.
    pub fn score_matrix(&self, seq1: &[u8], seq2: &[u8]) -> NwResult<ScoreMatrix> {
        validate_symbols("seq1", seq1)?;
        validate_symbols("seq2", seq2)?;
        validate_lengths(seq1, seq2)?;
        Ok(ScoreMatrix::build(seq1, seq2, &self.scoring))
    }

    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> NwResult<AlignmentResult> {
        let matrix = self.score_matrix(seq1, seq2)?;
        debug!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            score = matrix.final_score(),
            "filled score matrix"
        );

        let path = traceback(&matrix, seq1, seq2, &self.scoring)?;
        trace!(
            columns = path.operations.len(),
            gaps = path
                .aligned_seq1
                .iter()
                .chain(path.aligned_seq2.iter())
                .filter(|&&s| s == GAP_SYMBOL)
                .count(),
            "traceback complete"
        );

        Ok(AlignmentResult::from_path(matrix.final_score(), path))
    }

    pub fn align_sequences(&self, seq1: &Sequence, seq2: &Sequence) -> NwResult<AlignmentResult> {
        debug!(seq1 = %seq1.id, seq2 = %seq2.id, "aligning sequences");
        self.align(seq1.as_bytes(), seq2.as_bytes())
    }

    /// Optimal score only, using a single row of memory.
    pub fn score(&self, seq1: &[u8], seq2: &[u8]) -> NwResult<i64> {
        score_only(seq1, seq2, &self.scoring)
    }

    /// Align independent pairs in parallel. Results keep the input order.
    pub fn align_batch<A, B>(&self, pairs: &[(A, B)]) -> Vec<NwResult<AlignmentResult>>
    where
        S: Sync,
        A: AsRef<[u8]> + Sync,
        B: AsRef<[u8]> + Sync,
    {
        debug!(pairs = pairs.len(), "aligning batch");
        pairs
            .par_iter()
            .map(|(a, b)| self.align(a.as_ref(), b.as_ref()))
            .collect()
    }
}

/// Globally align `seq1` and `seq2` under linear match/mismatch/gap scoring.
pub fn align(
    seq1: &[u8],
    seq2: &[u8],
    match_score: i32,
    mismatch: i32,
    gap: i32,
) -> NwResult<AlignmentResult> {
    NeedlemanWunsch::new(ScoringScheme::new(match_score, mismatch, gap)).align(seq1, seq2)
}
