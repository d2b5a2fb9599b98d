pub mod align;
pub mod score;

use nwalign_bio::Sequence;
use nwalign_core::{NwError, NwResult};

/// Turn a command-line argument into a validated sequence.
pub fn parse_sequence(id: &str, raw: &str) -> NwResult<Sequence> {
    if !raw.is_ascii() {
        return Err(NwError::InvalidInput(format!(
            "sequence '{}' must contain only ASCII symbols",
            id
        )));
    }
    Sequence::new(id, raw.as_bytes().to_vec())
}
