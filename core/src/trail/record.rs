//! The persisted trail record and its JSON encoding.
//!
//! Wire shape: `{"visited": ["education", ...], "lastVisit": "<RFC 3339>" | null}`.
//! There is no version field. Unknown fields are ignored and missing fields
//! default, so older and newer writers can share one entry.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trailhead_types::StopId;

use super::{RecordError, StopSet};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RecordWire")]
pub struct ProgressRecord {
    /// Visited stops in visit order, no duplicates
    pub visited: Vec<StopId>,
    /// Time of the most recent first visit to any stop
    #[serde(rename = "lastVisit")]
    pub last_visit: Option<DateTime<Utc>>,
}

/// Read side of the record. Writers have used both timestamp names, and
/// some records carry both; `lastVisit` wins.
#[derive(Deserialize)]
struct RecordWire {
    #[serde(default)]
    visited: Vec<StopId>,
    #[serde(default, rename = "lastVisit")]
    last_visit: Option<DateTime<Utc>>,
    #[serde(default, rename = "lastVisitTimestamp")]
    last_visit_timestamp: Option<DateTime<Utc>>,
}

impl From<RecordWire> for ProgressRecord {
    fn from(wire: RecordWire) -> Self {
        Self {
            visited: wire.visited,
            last_visit: wire.last_visit.or(wire.last_visit_timestamp),
        }
    }
}

impl ProgressRecord {
    /// Decode a stored record. Any visited id outside `stops` makes the whole
    /// record invalid; repeated ids are collapsed to their first occurrence.
    pub fn decode(raw: &str, stops: &StopSet) -> Result<Self, RecordError> {
        let mut record: ProgressRecord = serde_json::from_str(raw)?;

        if let Some(unknown) = record.visited.iter().find(|id| !stops.contains(id.as_str())) {
            return Err(RecordError::UnknownStop {
                id: unknown.to_string(),
            });
        }

        let mut seen = HashSet::new();
        record.visited.retain(|id| seen.insert(id.clone()));
        Ok(record)
    }

    pub fn encode(&self) -> Result<String, RecordError> {
        serde_json::to_string(self).map_err(RecordError::Encode)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.visited.iter().any(|visited| visited == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_browser_written_record() {
        let raw = r#"{"visited":["education","skills"],"lastVisit":"2024-03-09T18:21:04.512Z"}"#;
        let record = ProgressRecord::decode(raw, &StopSet::default()).unwrap();

        assert_eq!(record.visited, vec![StopId::new("education"), StopId::new("skills")]);
        assert_eq!(
            record.last_visit,
            Some(
                Utc.with_ymd_and_hms(2024, 3, 9, 18, 21, 4).unwrap()
                    + chrono::Duration::milliseconds(512)
            )
        );
    }

    #[test]
    fn accepts_long_timestamp_field_name() {
        let raw = r#"{"visited":["contact"],"lastVisitTimestamp":"2024-03-09T18:21:04Z"}"#;
        let record = ProgressRecord::decode(raw, &StopSet::default()).unwrap();
        assert!(record.last_visit.is_some());
    }

    #[test]
    fn both_timestamp_names_keep_the_visits() {
        let raw = r#"{"visited":["education","projects","skills"],"lastVisit":"2024-03-09T18:21:04Z","lastVisitTimestamp":"2023-01-01T00:00:00Z"}"#;
        let record = ProgressRecord::decode(raw, &StopSet::default()).unwrap();

        assert_eq!(record.visited.len(), 3);
        assert_eq!(
            record.last_visit,
            Some(Utc.with_ymd_and_hms(2024, 3, 9, 18, 21, 4).unwrap())
        );
    }

    #[test]
    fn missing_and_unknown_fields_are_tolerated() {
        let record =
            ProgressRecord::decode(r#"{"theme":"dark","version":4}"#, &StopSet::default()).unwrap();
        assert_eq!(record, ProgressRecord::default());
    }

    #[test]
    fn repeated_ids_collapse_to_first_occurrence() {
        let raw = r#"{"visited":["skills","contact","skills"]}"#;
        let record = ProgressRecord::decode(raw, &StopSet::default()).unwrap();
        assert_eq!(record.visited, vec![StopId::new("skills"), StopId::new("contact")]);
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        let stops = StopSet::default();
        for raw in [
            "not json",
            r#"{"visited":"education"}"#,
            r#"{"visited":[1,2,3]}"#,
            r#"{"visited":null}"#,
            r#"{"visited":[],"lastVisit":"yesterday"}"#,
        ] {
            assert!(
                matches!(ProgressRecord::decode(raw, &stops), Err(RecordError::Malformed(_))),
                "expected malformed: {raw}"
            );
        }
    }

    #[test]
    fn unknown_stop_invalidates_record() {
        let raw = r#"{"visited":["education","home"]}"#;
        match ProgressRecord::decode(raw, &StopSet::default()) {
            Err(RecordError::UnknownStop { id }) => assert_eq!(id, "home"),
            other => panic!("expected unknown stop, got {other:?}"),
        }
    }

    #[test]
    fn encodes_with_camel_case_timestamp_and_null() {
        let empty = ProgressRecord::default().encode().unwrap();
        assert_eq!(empty, r#"{"visited":[],"lastVisit":null}"#);

        let record = ProgressRecord {
            visited: vec![StopId::new("projects")],
            last_visit: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
        };
        let decoded = ProgressRecord::decode(&record.encode().unwrap(), &StopSet::default()).unwrap();
        assert_eq!(decoded, record);
    }
}
