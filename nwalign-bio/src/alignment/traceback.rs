use crate::alignment::matrix::ScoreMatrix;
use crate::alignment::scoring::SubstitutionModel;
use crate::sequence::GAP_SYMBOL;
use nwalign_core::{NwError, NwResult};
use serde::{Deserialize, Serialize};

/// Kind of one alignment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Match,
    Mismatch,
    /// seq1 symbol against a gap in seq2 (vertical move)
    Deletion,
    /// seq2 symbol against a gap in seq1 (horizontal move)
    Insertion,
}

/// Columns recovered by walking the matrix back to the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracebackPath {
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub operations: Vec<Operation>,
}

/// Walk `matrix` from `(n, m)` to `(0, 0)`.
///
/// At every cell the predecessor is re-derived from the recurrence. Ties are
/// broken diagonal first, then vertical, then horizontal, so the output is
/// deterministic.
pub fn traceback<S: SubstitutionModel + ?Sized>(
    matrix: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    scoring: &S,
) -> NwResult<TracebackPath> {
    if matrix.rows() != seq1.len() + 1 || matrix.cols() != seq2.len() + 1 {
        return Err(NwError::Traceback(format!(
            "matrix is {}x{} but sequences need {}x{}",
            matrix.rows(),
            matrix.cols(),
            seq1.len() + 1,
            seq2.len() + 1
        )));
    }

    let gap = i64::from(scoring.gap());
    let capacity = seq1.len() + seq2.len();
    let mut aligned_seq1 = Vec::with_capacity(capacity);
    let mut aligned_seq2 = Vec::with_capacity(capacity);
    let mut operations = Vec::with_capacity(capacity);

    let mut i = seq1.len();
    let mut j = seq2.len();

    while i > 0 || j > 0 {
        let current = matrix.get(i, j);

        if i > 0 && j > 0 {
            let (a, b) = (seq1[i - 1], seq2[j - 1]);
            if current == matrix.get(i - 1, j - 1) + i64::from(scoring.score(a, b)) {
                aligned_seq1.push(a);
                aligned_seq2.push(b);
                operations.push(if a == b {
                    Operation::Match
                } else {
                    Operation::Mismatch
                });
                i -= 1;
                j -= 1;
                continue;
            }
        }

        if i > 0 && current == matrix.get(i - 1, j) + gap {
            aligned_seq1.push(seq1[i - 1]);
            aligned_seq2.push(GAP_SYMBOL);
            operations.push(Operation::Deletion);
            i -= 1;
        } else if j > 0 && current == matrix.get(i, j - 1) + gap {
            aligned_seq1.push(GAP_SYMBOL);
            aligned_seq2.push(seq2[j - 1]);
            operations.push(Operation::Insertion);
            j -= 1;
        } else {
            return Err(NwError::Traceback(format!(
                "no predecessor reproduces score {} at ({}, {})",
                current, i, j
            )));
        }
    }

    // Columns were collected from the end backwards
    aligned_seq1.reverse();
    aligned_seq2.reverse();
    operations.reverse();

    Ok(TracebackPath {
        aligned_seq1,
        aligned_seq2,
        operations,
    })
}
