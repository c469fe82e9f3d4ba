//! History: the ordered sequence of snapshots, one per journal event.
//!
//! Folding is strictly in record order. The driver owns the ambient star
//! system, since several events fall back to the system's star and don't
//! name it themselves.

use jiff::Timestamp;
use serde::Serialize;
use tracing::debug;

use crate::journal::JournalRecord;
use crate::model::StatusSnapshot;
use crate::status::transition;

/// Status after a single journal event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub timestamp: Timestamp,

    /// The journal `event` discriminant.
    pub kind: String,

    /// Star system the player was in when the event applied.
    pub system: String,

    pub status: StatusSnapshot,

    /// False when the event left status as it was: unrelated kinds, and
    /// guarded events such as an NPC touchdown or an SRV loadout.
    pub changed: bool,
}

/// Snapshots for an entire journal, in event order.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Fold records into a history, starting from the initial snapshot.
    pub fn fold(records: &[JournalRecord]) -> Self {
        let mut history = Self::default();
        for record in records {
            history.push(record);
        }
        debug!(
            entries = history.entries.len(),
            changes = history.changes().count(),
            "history folded"
        );
        history
    }

    /// Apply one more record on top of the latest snapshot.
    pub fn push(&mut self, record: &JournalRecord) {
        let previous = self.entries.last();
        let system = record
            .event
            .star_system()
            .map(str::to_string)
            .or_else(|| previous.map(|e| e.system.clone()))
            .unwrap_or_else(|| "Unknown".to_string());

        let status = transition(previous.map(|e| &e.status), &record.event, &system);
        let changed = previous.map_or(status != StatusSnapshot::default(), |e| e.status != status);

        self.entries.push(HistoryEntry {
            timestamp: record.timestamp,
            kind: record.kind.clone(),
            system,
            status,
            changed,
        });
    }

    /// The latest snapshot, or the initial one for an empty history.
    pub fn current(&self) -> StatusSnapshot {
        self.entries
            .last()
            .map(|e| e.status.clone())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries whose event changed status.
    pub fn changes(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(|e| e.changed)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
