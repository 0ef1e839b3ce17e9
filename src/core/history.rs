//! Dispatch audit trail.
//!
//! Provides immutable tracking of committed dispatches over time,
//! following functional programming principles. The trail records which
//! action kinds were committed and whether each commit changed the state
//! value; it never stores state snapshots and supports no replay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed dispatch.
///
/// Records are immutable values written after the commit step, once per
/// successful dispatch. Failed dispatches leave no record.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// The committed action's kind discriminant
    pub kind: String,
    /// When the dispatch committed
    pub timestamp: DateTime<Utc>,
    /// Whether the commit replaced the state value
    pub changed: bool,
}

/// Ordered trail of committed dispatches.
///
/// The trail is immutable - `record` returns a new trail with the record
/// appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use storelet::core::{DispatchHistory, DispatchRecord};
/// use chrono::Utc;
///
/// let history = DispatchHistory::new();
///
/// let history = history.record(DispatchRecord {
///     kind: "ADD".to_string(),
///     timestamp: Utc::now(),
///     changed: true,
/// });
///
/// let history = history.record(DispatchRecord {
///     kind: "CLEAR".to_string(),
///     timestamp: Utc::now(),
///     changed: true,
/// });
///
/// assert_eq!(history.kinds(), vec!["ADD", "CLEAR"]);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DispatchHistory {
    records: Vec<DispatchRecord>,
}

impl Default for DispatchHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchHistory {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new trail.
    ///
    /// Pure: the existing trail is not mutated.
    pub fn record(&self, record: DispatchRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in commit order.
    pub fn records(&self) -> &[DispatchRecord] {
        &self.records
    }

    /// Number of committed dispatches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether anything has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sequence of committed kinds, in order.
    pub fn kinds(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.kind.as_str()).collect()
    }

    /// Total duration from first to last committed dispatch.
    ///
    /// Returns `None` when the trail holds fewer than one record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Export the trail as a JSON string for diagnostics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storelet::core::DispatchHistory;
    ///
    /// let history = DispatchHistory::new();
    /// let json = history.to_json().unwrap();
    /// assert_eq!(json, r#"{"records":[]}"#);
    /// ```
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn record(kind: &str, changed: bool) -> DispatchRecord {
        DispatchRecord {
            kind: kind.to_string(),
            timestamp: Utc::now(),
            changed,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = DispatchHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_pure() {
        let history = DispatchHistory::new();
        let appended = history.record(record("ADD", true));

        assert_eq!(history.len(), 0);
        assert_eq!(appended.len(), 1);
    }

    #[test]
    fn kinds_preserve_commit_order() {
        let history = DispatchHistory::new()
            .record(record("ADD", true))
            .record(record("REMOVE", true))
            .record(record("NOOP", false));

        assert_eq!(history.kinds(), vec!["ADD", "REMOVE", "NOOP"]);
    }

    #[test]
    fn records_keep_the_changed_flag() {
        let history = DispatchHistory::new()
            .record(record("ADD", true))
            .record(record("UNKNOWN", false));

        assert!(history.records()[0].changed);
        assert!(!history.records()[1].changed);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = DispatchHistory::new()
            .record(DispatchRecord {
                kind: "ADD".to_string(),
                timestamp: start,
                changed: true,
            })
            .record(DispatchRecord {
                kind: "CLEAR".to_string(),
                timestamp: start + TimeDelta::seconds(3),
                changed: true,
            });

        assert_eq!(history.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn history_roundtrips_through_json() {
        let history = DispatchHistory::new()
            .record(record("ADD", true))
            .record(record("CLEAR", true));

        let json = history.to_json().unwrap();
        let deserialized: DispatchHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
