//! Contiguous ID ranges for chunked extraction.
//!
//! Splitting a table scan into `Id >= start AND Id <= end` predicates lets
//! large objects be exported in bounded batches. Each range covers
//! `size + 1` record sequence values and the next range begins right after
//! the previous end.

use serde::Serialize;
use sfid_id::{IdError, RecordId, MAX_IDENTIFIER_VALUE};

/// An inclusive range of record IDs sharing the same 7 character prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdRange {
    pub start: RecordId,
    pub end: RecordId,
}

impl IdRange {
    /// Render the range as a SQL range query.
    pub fn to_sql(&self, object: &str, field: &str) -> String {
        format!(
            "SELECT {field} FROM {object} WHERE {field} >= {} AND {field} <= {}",
            self.start, self.end
        )
    }
}

/// Iterator over successive [`IdRange`]s.
///
/// Stops after the range that reaches the largest numeric identifier.
#[derive(Debug, Clone)]
pub struct Chunks {
    next: Option<RecordId>,
    size: u64,
}

impl Chunks {
    pub fn new(start: RecordId, size: u64) -> Self {
        Self {
            next: Some(start),
            size,
        }
    }
}

impl Iterator for Chunks {
    type Item = Result<IdRange, IdError>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next.take()?;

        let end = match start.add(self.size) {
            Ok(end) => end,
            Err(IdError::InvalidAddition { .. }) => match clamp_to_max(&start) {
                Ok(end) => end,
                Err(e) => return Some(Err(e)),
            },
            Err(e) => return Some(Err(e)),
        };

        // None once the numeric space is exhausted.
        self.next = end.add(1).ok();
        Some(Ok(IdRange { start, end }))
    }
}

fn clamp_to_max(start: &RecordId) -> Result<RecordId, IdError> {
    let value = start.numeric_value()?;
    start.add(MAX_IDENTIFIER_VALUE - 1 - value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RecordId {
        s.parse().unwrap()
    }

    #[test]
    fn test_chunks_follow_each_other() {
        let ranges: Vec<IdRange> = Chunks::new(id("001000000000000"), 250_000)
            .take(3)
            .collect::<Result<_, _>>()
            .unwrap();

        let rendered: Vec<(String, String)> = ranges
            .iter()
            .map(|r| (r.start.to_string(), r.end.to_string()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("001000000000000AAA".to_string(), "00100000000132GAAQ".to_string()),
                ("00100000000132HAAQ".to_string(), "00100000000264XAAQ".to_string()),
                ("00100000000264YAAQ".to_string(), "00100000000396oAAA".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_sql() {
        let range = IdRange {
            start: id("001000000000000"),
            end: id("00100000000132G"),
        };
        assert_eq!(
            range.to_sql("Account", "Id"),
            "SELECT Id FROM Account WHERE Id >= 001000000000000AAA AND Id <= 00100000000132GAAQ"
        );
    }

    #[test]
    fn test_last_chunk_is_clamped() {
        let ranges: Vec<IdRange> = Chunks::new(id("005Xy00zzzzzzzy"), 10)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].end.as_str(), "005Xy00zzzzzzzzIAA");
    }

    #[test]
    fn test_zero_size_ranges_are_single_ids() {
        let ranges: Vec<IdRange> = Chunks::new(id("001000000000000"), 0)
            .take(2)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ranges[0].start, ranges[0].end);
        assert_eq!(ranges[1].start.as_str(), "001000000000001AAA");
    }

    #[test]
    fn test_invalid_numeric_start() {
        let mut chunks = Chunks::new(id("0010000000-0000"), 10);
        assert_eq!(
            chunks.next(),
            Some(Err(IdError::InvalidNumericIdentifier))
        );
        assert_eq!(chunks.next(), None);
    }
}
