//! Record identifier value object.
//!
//! Identifiers are 64-bit integers assigned by the storage layer when a
//! row is inserted. The newtype keeps ids of different entities from being
//! mixed up with arbitrary integers in signatures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Database-assigned primary key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw id value.
    #[inline]
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Extract the raw id value.
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse an id from its decimal string form.
    ///
    /// # Errors
    ///
    /// Returns `RecordIdParseError` if the string is not a valid integer.
    pub fn parse(s: &str) -> Result<Self, RecordIdParseError> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| RecordIdParseError::InvalidFormat)
    }
}

/// Error returned when parsing a record id from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("invalid record id format")]
    InvalidFormat,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_round_trip() {
        let id = RecordId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(RecordId::from(42), id);
    }

    #[test]
    fn test_record_id_display_and_parse() {
        let id = RecordId::new(123_456_789);
        assert_eq!(id.to_string(), "123456789");
        assert_eq!(RecordId::parse("123456789"), Ok(id));
        assert_eq!("123456789".parse::<RecordId>(), Ok(id));
    }

    #[test]
    fn test_record_id_parse_rejects_garbage() {
        assert_eq!(
            RecordId::parse("not-a-number"),
            Err(RecordIdParseError::InvalidFormat)
        );
        assert_eq!(RecordId::parse(""), Err(RecordIdParseError::InvalidFormat));
    }

    #[test]
    fn test_record_id_ordering() {
        assert!(RecordId::new(1) < RecordId::new(2));
        assert_eq!(RecordId::default(), RecordId::new(0));
    }

    #[test]
    fn test_record_id_serde_is_transparent() {
        let id = RecordId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: RecordId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
