#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Submit `url` to the remote scan collaborator under `request`.
    StartScan {
        request: crate::RequestId,
        url: String,
    },
    /// Overwrite the durable history representation with this snapshot.
    PersistHistory(Vec<crate::HistoryEntry>),
    /// Persist the display preference.
    PersistTheme(crate::Theme),
}
