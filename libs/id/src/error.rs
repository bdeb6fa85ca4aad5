//! Error types for record ID parsing, checksum validation, and arithmetic.

use thiserror::Error;

use crate::base62::MAX_IDENTIFIER_VALUE;

/// Errors that can occur when parsing, encoding, or deriving record IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID is neither 15 nor 18 characters long.
    #[error("record IDs must be 15 or 18 characters, got {length}")]
    InvalidLengthSfid { length: usize },

    /// The check suffix of an 18 character ID contradicts its first 15 characters.
    #[error("check suffix does not match identifier")]
    InvalidSfid,

    /// The numeric identifier is not 8 characters or holds a non-base62 byte.
    #[error("numeric identifier being decoded is invalid")]
    InvalidNumericIdentifier,

    /// The value does not fit in an 8 character numeric identifier.
    #[error("value {value} is not smaller than {}", MAX_IDENTIFIER_VALUE)]
    ValueTooLarge { value: u64 },

    /// Adding the delta would overflow the numeric identifier.
    #[error("adding {delta} would overflow maximum value {}", MAX_IDENTIFIER_VALUE)]
    InvalidAddition { delta: u64 },

    /// Subtracting the delta would make the numeric identifier negative.
    #[error("subtracting {delta} would result in a negative identifier")]
    InvalidSubtraction { delta: u64 },

    /// The edition tag is not a known edition.
    #[error("invalid edition: {tag}")]
    InvalidEdition { tag: String },
}

impl IdError {
    /// Returns true if this error indicates the input had the wrong length.
    pub fn is_length_error(&self) -> bool {
        matches!(self, IdError::InvalidLengthSfid { .. })
    }

    /// Returns true if this error indicates a check suffix mismatch.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, IdError::InvalidSfid)
    }

    /// Returns true if this error came from adding to or subtracting from an ID.
    pub fn is_arithmetic_error(&self) -> bool {
        matches!(
            self,
            IdError::InvalidAddition { .. } | IdError::InvalidSubtraction { .. }
        )
    }
}
