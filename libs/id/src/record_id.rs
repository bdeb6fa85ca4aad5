//! The record ID value type.
//!
//! A [`RecordId`] is always held in its canonical 18 character form: the
//! 15 character case-sensitive ID followed by its check suffix. Either form
//! is accepted on input.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::base62::{self, MAX_IDENTIFIER_VALUE};
use crate::checksum::{self, PREFIX_LEN, SUFFIX_LEN};
use crate::{Edition, IdError};

/// Length of the canonical form.
pub const CANONICAL_LEN: usize = PREFIX_LEN + SUFFIX_LEN;

const KEY_PREFIX: Range<usize> = 0..3;
const NUMERIC: Range<usize> = 7..15;
const SUFFIX: Range<usize> = 15..18;

/// Textual form of a [`RecordId`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// The 15 character case-sensitive form.
    Short,
    /// The 18 character case-insensitive form.
    #[default]
    Canonical,
}

/// A validated record ID.
///
/// Construct with [`RecordId::parse`], [`RecordId::parse_default`], or
/// [`str::parse`]. Values are immutable; [`RecordId::add`] and
/// [`RecordId::subtract`] return new IDs.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId {
    raw: [u8; CANONICAL_LEN],
    edition: Edition,
}

impl RecordId {
    /// Parses a 15 or 18 character ID using the field layout of `edition`.
    ///
    /// An 18 character ID has its casing repaired to agree with its check
    /// suffix. A 15 character ID is taken as-is and its suffix computed.
    pub fn parse(s: &str, edition: Edition) -> Result<Self, IdError> {
        let bytes = s.as_bytes();
        if bytes.len() != PREFIX_LEN && bytes.len() != CANONICAL_LEN {
            return Err(IdError::InvalidLengthSfid {
                length: bytes.len(),
            });
        }
        if !bytes.is_ascii() {
            return Err(IdError::InvalidSfid);
        }

        let mut prefix = [0u8; PREFIX_LEN];
        prefix.copy_from_slice(&bytes[..PREFIX_LEN]);

        let suffix = if bytes.len() == CANONICAL_LEN {
            let mut suffix = [0u8; SUFFIX_LEN];
            suffix.copy_from_slice(&bytes[PREFIX_LEN..]);
            suffix.make_ascii_uppercase();
            prefix = checksum::reconcile(&prefix, &suffix)?;
            suffix
        } else {
            checksum::compute_suffix(&prefix)
        };

        let mut raw = [0u8; CANONICAL_LEN];
        raw[..PREFIX_LEN].copy_from_slice(&prefix);
        raw[PREFIX_LEN..].copy_from_slice(&suffix);

        Ok(Self { raw, edition })
    }

    /// Parses an ID using the classic field layout.
    pub fn parse_default(s: &str) -> Result<Self, IdError> {
        Self::parse(s, Edition::Classic)
    }

    /// Parses an ID using the edition identified by a numeric tag.
    ///
    /// Returns [`IdError::InvalidEdition`] for an unknown tag before looking
    /// at `s`.
    pub fn parse_tagged(s: &str, tag: u8) -> Result<Self, IdError> {
        let edition = Edition::try_from(tag)?;
        Self::parse(s, edition)
    }

    /// Returns the canonical 18 character form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        ascii(&self.raw)
    }

    /// Returns the 15 character case-sensitive form.
    #[must_use]
    pub fn short(&self) -> &str {
        ascii(&self.raw[..PREFIX_LEN])
    }

    /// Returns the ID in the requested form.
    #[must_use]
    pub fn format(&self, format: Format) -> &str {
        match format {
            Format::Short => self.short(),
            Format::Canonical => self.as_str(),
        }
    }

    /// Returns an owned copy of the 15 character form.
    #[must_use]
    pub fn to_short(&self) -> String {
        self.short().to_string()
    }

    /// Returns an owned copy of the 18 character form.
    #[must_use]
    pub fn to_canonical(&self) -> String {
        self.as_str().to_string()
    }

    /// The object type prefix (first 3 characters).
    #[must_use]
    pub fn key_prefix(&self) -> &str {
        self.field(KEY_PREFIX)
    }

    /// The pod identifier (2 or 3 characters, depending on edition).
    #[must_use]
    pub fn pod_identifier(&self) -> &str {
        self.field(self.edition.pod_range())
    }

    /// The reserved characters (2 or 1, depending on edition).
    #[must_use]
    pub fn reserved(&self) -> &str {
        self.field(self.edition.reserved_range())
    }

    /// The base62 encoded record sequence (8 characters).
    #[must_use]
    pub fn numeric_identifier(&self) -> &str {
        self.field(NUMERIC)
    }

    /// The 3 character check suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        self.field(SUFFIX)
    }

    /// The field layout this ID was parsed with.
    #[must_use]
    pub const fn edition(&self) -> Edition {
        self.edition
    }

    /// Returns this ID reported with a different field layout.
    #[must_use]
    pub const fn with_edition(self, edition: Edition) -> Self {
        Self {
            raw: self.raw,
            edition,
        }
    }

    /// Decodes the numeric identifier.
    ///
    /// Parsing does not validate the numeric characters, so this fails with
    /// [`IdError::InvalidNumericIdentifier`] for IDs whose numeric field holds
    /// non-base62 characters.
    pub fn numeric_value(&self) -> Result<u64, IdError> {
        base62::decode(&self.raw[NUMERIC])
    }

    /// Returns the ID whose record sequence is `delta` higher.
    ///
    /// Fails with [`IdError::InvalidAddition`] if the result would not fit in
    /// the numeric identifier.
    pub fn add(&self, delta: u64) -> Result<Self, IdError> {
        let value = self.numeric_value()?;
        let sum = value
            .checked_add(delta)
            .filter(|&v| v < MAX_IDENTIFIER_VALUE)
            .ok_or(IdError::InvalidAddition { delta })?;
        self.with_value(sum)
    }

    /// Returns the ID whose record sequence is `delta` lower.
    ///
    /// Fails with [`IdError::InvalidSubtraction`] if `delta` exceeds the
    /// current value.
    pub fn subtract(&self, delta: u64) -> Result<Self, IdError> {
        let value = self.numeric_value()?;
        let diff = value
            .checked_sub(delta)
            .ok_or(IdError::InvalidSubtraction { delta })?;
        self.with_value(diff)
    }

    /// Rebuilds the 15 character form around `value` and parses it again so
    /// the suffix is recomputed rather than carried over.
    fn with_value(&self, value: u64) -> Result<Self, IdError> {
        let encoded = base62::encode(value)?;

        let mut short = [0u8; PREFIX_LEN];
        short[..NUMERIC.start].copy_from_slice(&self.raw[..NUMERIC.start]);
        short[NUMERIC].copy_from_slice(encoded.as_bytes());

        Self::parse(ascii(&short), self.edition)
    }

    fn field(&self, range: Range<usize>) -> &str {
        ascii(&self.raw[range])
    }
}

/// Returns the canonical 18 character form of a 15 or 18 character ID.
pub fn normalize(s: &str) -> Result<String, IdError> {
    RecordId::parse_default(s).map(|id| id.to_canonical())
}

// Parsing rejects non-ASCII input, so every stored byte range is valid UTF-8.
fn ascii(bytes: &[u8]) -> &str {
    debug_assert!(bytes.is_ascii(), "record ID bytes must be ASCII");
    std::str::from_utf8(bytes).unwrap_or_default()
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordId")
            .field("id", &self.as_str())
            .field("edition", &self.edition)
            .finish()
    }
}

impl FromStr for RecordId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_default(s)
    }
}

impl TryFrom<&str> for RecordId {
    type Error = IdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse_default(s)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl serde::Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse_default(&s).map_err(serde::de::Error::custom)
    }
}
