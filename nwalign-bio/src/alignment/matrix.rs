/// Dynamic-programming score table for linear-gap global alignment
use crate::alignment::scoring::SubstitutionModel;
use std::fmt;

/// `(len(seq1) + 1) x (len(seq2) + 1)` table of optimal prefix-pair scores,
/// stored row-major. Row `i` covers the first `i` symbols of `seq1`.
///
/// Cells are `i64` so that any `i32` scoring parameters sum without overflow
/// for alignments of up to [`crate::sequence::MAX_ALIGNMENT_COLUMNS`] columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Fill the matrix row by row.
    ///
    /// Boundary cells hold `i * gap` / `j * gap`; every inner cell is the best
    /// of its diagonal, vertical and horizontal predecessors.
    pub fn build<S: SubstitutionModel + ?Sized>(seq1: &[u8], seq2: &[u8], scoring: &S) -> Self {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;
        let gap = i64::from(scoring.gap());

        let mut data = vec![0i64; rows * cols];

        for j in 1..cols {
            data[j] = j as i64 * gap;
        }

        for i in 1..rows {
            let a = seq1[i - 1];
            let (filled, rest) = data.split_at_mut(i * cols);
            let above = &filled[(i - 1) * cols..];
            let current = &mut rest[..cols];

            current[0] = i as i64 * gap;
            for j in 1..cols {
                let diagonal = above[j - 1] + i64::from(scoring.score(a, seq2[j - 1]));
                let vertical = above[j] + gap;
                let horizontal = current[j - 1] + gap;
                current[j] = diagonal.max(vertical).max(horizontal);
            }
        }

        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Score of the complete alignment, cell `(n, m)`.
    pub fn final_score(&self) -> i64 {
        self.data[self.data.len() - 1]
    }
}

impl fmt::Display for ScoreMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let line: Vec<String> = self.row(i).iter().map(|v| format!("{:>4}", v)).collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}
