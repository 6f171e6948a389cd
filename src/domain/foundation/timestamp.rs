//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Immutable point in time, always UTC.
///
/// Serialized as epoch milliseconds, the layout used by the persisted
/// `createdAt` and `submittedAt` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(#[serde(with = "chrono::serde::ts_milliseconds")] DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp from epoch milliseconds.
    pub fn from_millis(millis: i64) -> Result<Self, ValidationError> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| ValidationError::invalid_format("timestamp", "epoch millis out of range"))
    }

    /// Returns the timestamp as epoch milliseconds.
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_from_millis_roundtrips() {
        let ts = Timestamp::from_millis(1_705_276_800_123).unwrap();
        assert_eq!(ts.as_millis(), 1_705_276_800_123);
        assert_eq!(ts.as_datetime().year(), 2024);
    }

    #[test]
    fn timestamp_from_millis_rejects_out_of_range() {
        assert!(Timestamp::from_millis(i64::MAX).is_err());
    }

    #[test]
    fn timestamp_serializes_as_epoch_millis() {
        let ts = Timestamp::from_millis(1_705_276_800_000).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1705276800000");
    }

    #[test]
    fn timestamp_deserializes_from_epoch_millis() {
        let ts: Timestamp = serde_json::from_str("1705276800000").unwrap();
        assert_eq!(ts.as_datetime().month(), 1);
        assert_eq!(ts.as_datetime().day(), 15);
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = Timestamp::from_millis(1_000).unwrap();
        let ts2 = Timestamp::from_millis(2_000).unwrap();

        assert!(ts1 < ts2);
        assert!(ts1.is_before(&ts2));
        assert!(ts2.is_after(&ts1));
    }
}
