//! Commentary snapshots.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display format for snapshot timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sequence number of a snapshot within one engine.
///
/// Ids start at 1 and increase by one per recorded snapshot. Two snapshots
/// taken within the same second share a timestamp but never an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(pub u64);

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a snapshot was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    /// Plain analysis pass.
    Analysis,
    /// Analysis with an improvement section appended.
    Improved,
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analysis => f.write_str("analysis"),
            Self::Improved => f.write_str("improved"),
        }
    }
}

/// One recorded commentary text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentarySnapshot {
    /// Sequence id.
    pub id: SnapshotId,
    /// Local wall-clock time the text was generated.
    pub generated_at: NaiveDateTime,
    /// Full markdown text.
    pub text: String,
    /// How the text was produced.
    pub kind: SnapshotKind,
    /// Improvement bullets appended to the text, in rule order.
    #[serde(default)]
    pub improvements: Vec<String>,
}

impl CommentarySnapshot {
    /// Formats the generation time for display (`2025-03-14 09:30:00`).
    #[must_use]
    pub fn timestamp_label(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_timestamp_label() {
        let snapshot = CommentarySnapshot {
            id: SnapshotId(3),
            generated_at: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(9, 5, 7)
                .unwrap(),
            text: String::new(),
            kind: SnapshotKind::Analysis,
            improvements: vec![],
        };
        assert_eq!(snapshot.timestamp_label(), "2025-03-14 09:05:07");
        assert_eq!(snapshot.id.to_string(), "#3");
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(serde_json::to_string(&SnapshotKind::Improved).unwrap(), "\"improved\"");
    }
}
