//! Bounded, newest-first ledger of past scans.

/// Maximum number of retained history entries; recording beyond this evicts
/// the oldest entry.
pub const HISTORY_LIMIT: usize = 5;

/// One completed scan as remembered across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    pub status: String,
    /// Display-formatted timestamp, produced by the platform layer.
    pub time: String,
}

/// Ordered record of the most recent scans, newest first.
///
/// Entries are only ever added at the front or evicted at the back; nothing
/// is edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    /// Restores a ledger from persisted entries, truncating defensively in
    /// case the stored sequence grew beyond the bound.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }

    /// Prepends `entry`, evicts beyond [`HISTORY_LIMIT`], and returns the new
    /// snapshot for persistence and display.
    pub fn record(&mut self, entry: HistoryEntry) -> Vec<HistoryEntry> {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
        self.entries.clone()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
