/// Score-only global alignment in O(min(n, m)) memory
use crate::alignment::scoring::SubstitutionModel;
use crate::sequence::{validate_lengths, validate_symbols};
use nwalign_core::NwResult;
use tracing::debug;

/// Compute the optimal global alignment score without keeping the matrix.
///
/// The shorter sequence is laid along the single retained row. Gap moves
/// share one cost in both directions, so transposing the table leaves the
/// corner cell unchanged; substitution arguments keep their original order.
pub fn score_only<S: SubstitutionModel + ?Sized>(
    seq1: &[u8],
    seq2: &[u8],
    scoring: &S,
) -> NwResult<i64> {
    validate_symbols("seq1", seq1)?;
    validate_symbols("seq2", seq2)?;
    validate_lengths(seq1, seq2)?;

    let swapped = seq2.len() > seq1.len();
    let (outer, inner) = if swapped { (seq2, seq1) } else { (seq1, seq2) };
    let gap = i64::from(scoring.gap());

    let mut row: Vec<i64> = (0..=inner.len()).map(|j| j as i64 * gap).collect();

    for (i, &a) in outer.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = (i as i64 + 1) * gap;

        for j in 1..=inner.len() {
            let b = inner[j - 1];
            let substitution = i64::from(if swapped {
                scoring.score(b, a)
            } else {
                scoring.score(a, b)
            });
            let above = row[j];
            row[j] = (diagonal + substitution)
                .max(above + gap)
                .max(row[j - 1] + gap);
            diagonal = above;
        }
    }

    debug!(
        outer_len = outer.len(),
        row_len = row.len(),
        "computed score in linear space"
    );

    Ok(row[inner.len()])
}
