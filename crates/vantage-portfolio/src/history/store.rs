//! Append-only commentary history.

use chrono::NaiveDateTime;

use super::{CommentarySnapshot, HistoryCorpus, SnapshotId, SnapshotKind};

/// Ordered log of every commentary text produced by one engine.
///
/// Entries are never edited or removed. Order is insertion order, which is
/// also id order.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: Vec<CommentarySnapshot>,
    next_id: u64,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl HistoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot and returns a copy of it.
    pub fn record(
        &mut self,
        generated_at: NaiveDateTime,
        text: String,
        kind: SnapshotKind,
        improvements: Vec<String>,
    ) -> CommentarySnapshot {
        let snapshot = CommentarySnapshot {
            id: SnapshotId(self.next_id),
            generated_at,
            text,
            kind,
            improvements,
        };
        self.next_id += 1;
        self.entries.push(snapshot.clone());
        snapshot
    }

    /// The most recently recorded snapshot.
    #[must_use]
    pub fn current(&self) -> Option<&CommentarySnapshot> {
        self.entries.last()
    }

    /// Number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &CommentarySnapshot> {
        self.entries.iter()
    }

    /// Snapshots newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &CommentarySnapshot> {
        self.entries.iter().rev()
    }

    /// Looks up a snapshot by id.
    #[must_use]
    pub fn get(&self, id: SnapshotId) -> Option<&CommentarySnapshot> {
        // Ids are dense and start at 1
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.entries.get(index)
    }

    /// All texts, oldest first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.text.as_str())
    }

    /// Concatenation of every recorded text, for rule matching.
    #[must_use]
    pub fn corpus(&self) -> HistoryCorpus {
        HistoryCorpus::from_texts(self.texts())
    }

    /// Returns a copy of every snapshot, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<CommentarySnapshot> {
        self.entries.clone()
    }
}
