//! Field layout editions.
//!
//! The first 7 characters of every ID hold the key prefix, pod identifier,
//! and reserved characters. The classic layout splits them 3/2/2. The
//! extended layout took one reserved character to widen the pod identifier,
//! splitting them 3/3/1. The edition only moves the reported field
//! boundaries; parsing and the check suffix are identical for both.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::IdError;

/// Field layout used to split the 15 character form.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// Two character pod identifier, two reserved characters.
    #[default]
    Classic,
    /// Three character pod identifier, one reserved character.
    Extended,
}

impl Edition {
    /// Numeric tag of the classic edition.
    pub const CLASSIC_TAG: u8 = 1;

    /// Numeric tag of the extended edition.
    pub const EXTENDED_TAG: u8 = 2;

    /// Returns the numeric tag for this edition.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Edition::Classic => Self::CLASSIC_TAG,
            Edition::Extended => Self::EXTENDED_TAG,
        }
    }

    /// Returns the lowercase name of this edition.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Edition::Classic => "classic",
            Edition::Extended => "extended",
        }
    }

    /// Byte range of the pod identifier.
    #[must_use]
    pub const fn pod_range(self) -> Range<usize> {
        match self {
            Edition::Classic => 3..5,
            Edition::Extended => 3..6,
        }
    }

    /// Byte range of the reserved characters.
    #[must_use]
    pub const fn reserved_range(self) -> Range<usize> {
        match self {
            Edition::Classic => 5..7,
            Edition::Extended => 6..7,
        }
    }
}

impl TryFrom<u8> for Edition {
    type Error = IdError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            Self::CLASSIC_TAG => Ok(Edition::Classic),
            Self::EXTENDED_TAG => Ok(Edition::Extended),
            _ => Err(IdError::InvalidEdition {
                tag: tag.to_string(),
            }),
        }
    }
}

impl FromStr for Edition {
    type Err = IdError;

    /// Accepts the edition name, a pre/post alias, or the numeric tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "pre" | "1" => Ok(Edition::Classic),
            "extended" | "post" | "2" => Ok(Edition::Extended),
            _ => Err(IdError::InvalidEdition { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
