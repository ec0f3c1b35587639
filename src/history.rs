//! Append-only movement history of a single account.

use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Message rendered by a history with no entries.
pub const EMPTY_HISTORY: &str = "No movements yet.";

/// Timestamp layout used in rendered entries.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One recorded movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Wall-clock time the movement was recorded
    pub timestamp: NaiveDateTime,

    /// Free-form summary, e.g. `Deposit: 100.00`
    pub description: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.description
        )
    }
}

/// Ordered log of movements applied to an account.
///
/// Entries are only ever appended; there is no way to remove or reorder them.
#[derive(Debug, Clone, Default)]
pub struct TransactionHistory {
    entries: Vec<HistoryEntry>,
}

impl TransactionHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        TransactionHistory {
            entries: Vec::new(),
        }
    }

    /// Appends an entry stamped with the current local time.
    pub fn record(&mut self, description: impl Into<String>) {
        self.record_at(Local::now().naive_local(), description);
    }

    /// Appends an entry with an explicit timestamp.
    pub fn record_at(&mut self, timestamp: NaiveDateTime, description: impl Into<String>) {
        self.entries.push(HistoryEntry {
            timestamp,
            description: description.into(),
        });
    }

    /// Renders every entry on its own line, oldest first, or the empty-state
    /// message when nothing has been recorded.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return EMPTY_HISTORY.to_string();
        }

        self.entries
            .iter()
            .map(HistoryEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for TransactionHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
