//! # sfid-id
//!
//! Parsing, validation, and arithmetic for platform record IDs.
//!
//! ## ID Format
//!
//! A record ID is 15 case-sensitive characters, optionally followed by a
//! 3 character check suffix that makes the 18 character form safe to compare
//! case-insensitively:
//!
//! ```text
//! 003 D0 00 0001aH2A IAU
//! |   |  |  |        |
//! |   |  |  |        check suffix (18 character form only)
//! |   |  |  numeric identifier, base62
//! |   |  reserved
//! |   pod identifier
//! key prefix (object type)
//! ```
//!
//! The pod/reserved split depends on the [`Edition`]; everything else is
//! fixed.
//!
//! ## Design Principles
//!
//! - Both forms parse to one [`RecordId`], always held in canonical 18
//!   character form
//! - IDs are immutable; arithmetic returns a new, fully re-validated ID
//! - The key prefix is opaque; no object types are interpreted
//!
//! ```
//! use sfid_id::RecordId;
//!
//! let id: RecordId = "001000000000000".parse()?;
//! assert_eq!(id.as_str(), "001000000000000AAA");
//! assert_eq!(id.add(10)?.as_str(), "00100000000000AAAQ");
//! # Ok::<(), sfid_id::IdError>(())
//! ```

pub mod base62;
pub mod checksum;
mod edition;
mod error;
mod record_id;

pub use base62::{decode as decode_numeric, encode as encode_numeric, MAX_IDENTIFIER_VALUE};
pub use edition::Edition;
pub use error::IdError;
pub use record_id::{normalize, Format, RecordId, CANONICAL_LEN};
