use nwalign_core::{NwError, NwResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol inserted into aligned sequences to mark an insertion or deletion.
pub const GAP_SYMBOL: u8 = b'-';

/// Longest alignment (seq1 length plus seq2 length) accepted by the aligner.
/// Below this bound every cell sum of `i32` scores fits in an `i64`.
pub const MAX_ALIGNMENT_COLUMNS: usize = u32::MAX as usize;

/// An input sequence that is guaranteed not to contain [`GAP_SYMBOL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub id: String,
    residues: Vec<u8>,
}

impl Sequence {
    pub fn new(id: impl Into<String>, residues: Vec<u8>) -> NwResult<Self> {
        let id = id.into();
        validate_symbols(&id, &residues)?;
        Ok(Self { id, residues })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.residues
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.residues))
    }
}

/// Reject sequences containing the gap marker.
pub fn validate_symbols(id: &str, symbols: &[u8]) -> NwResult<()> {
    match symbols.iter().position(|&s| s == GAP_SYMBOL) {
        Some(position) => Err(NwError::InvalidInput(format!(
            "sequence '{}' contains the gap symbol '{}' at position {}",
            id, GAP_SYMBOL as char, position
        ))),
        None => Ok(()),
    }
}

/// Reject pairs whose combined length could overflow the `i64` score cells.
pub fn validate_lengths(seq1: &[u8], seq2: &[u8]) -> NwResult<()> {
    match seq1.len().checked_add(seq2.len()) {
        Some(total) if total <= MAX_ALIGNMENT_COLUMNS => Ok(()),
        _ => Err(NwError::InvalidInput(format!(
            "sequences of length {} and {} exceed the {} column limit",
            seq1.len(),
            seq2.len(),
            MAX_ALIGNMENT_COLUMNS
        ))),
    }
}
