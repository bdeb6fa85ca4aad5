//! Check suffix computation and case repair.
//!
//! The 15 character form is case-sensitive. The 18 character form appends
//! three check characters, one per 5 character chunk, whose alphabet index
//! is a bitmask of which positions in that chunk are uppercase. The leftmost
//! position of a chunk is the least significant bit.

use crate::IdError;

/// Check suffix symbols, indexed by chunk bitmask.
pub const SUFFIX_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ012345";

/// Length of the case-sensitive form.
pub const PREFIX_LEN: usize = 15;

/// Length of the check suffix.
pub const SUFFIX_LEN: usize = 3;

const CHUNK_LEN: usize = 5;

/// Computes the check suffix for a 15 character prefix.
pub fn compute_suffix(prefix: &[u8; PREFIX_LEN]) -> [u8; SUFFIX_LEN] {
    let mut suffix = [0u8; SUFFIX_LEN];
    for (chunk, out) in prefix.chunks_exact(CHUNK_LEN).zip(suffix.iter_mut()) {
        let mask = chunk
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_ascii_uppercase())
            .fold(0usize, |mask, (j, _)| mask | (1 << j));
        *out = SUFFIX_ALPHABET[mask];
    }
    suffix
}

/// Repairs the casing of `prefix` so it agrees with `suffix`.
///
/// The suffix is compared case-insensitively. Letters are moved to the case
/// the suffix asserts. Returns [`IdError::InvalidSfid`] if the suffix asserts
/// an uppercase character where the prefix holds a digit, or if a suffix
/// character is not a check symbol.
///
/// An unknown symbol is rejected outright rather than read as marking every
/// position of its chunk uppercase, so `ABCDEFGHIJKLMNO!!!` does not parse.
pub fn reconcile(
    prefix: &[u8; PREFIX_LEN],
    suffix: &[u8; SUFFIX_LEN],
) -> Result<[u8; PREFIX_LEN], IdError> {
    let mut masks = [0usize; SUFFIX_LEN];
    for (mask, &symbol) in masks.iter_mut().zip(suffix) {
        *mask = suffix_index(symbol.to_ascii_uppercase()).ok_or(IdError::InvalidSfid)?;
    }

    let mut repaired = *prefix;
    for (i, b) in repaired.iter_mut().enumerate() {
        let pow = 1 << (i % CHUNK_LEN);
        if masks[i / CHUNK_LEN] & pow != 0 {
            if b.is_ascii_digit() {
                return Err(IdError::InvalidSfid);
            }
            b.make_ascii_uppercase();
        } else {
            b.make_ascii_lowercase();
        }
    }
    Ok(repaired)
}

fn suffix_index(symbol: u8) -> Option<usize> {
    SUFFIX_ALPHABET.iter().position(|&s| s == symbol)
}
