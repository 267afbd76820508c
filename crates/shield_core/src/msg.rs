#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for scanning.
    ScanSubmitted,
    /// Externally supplied URL parameter, auto-scanned once at startup.
    DeepLinkUrl(String),
    /// Remote scan resolved with a verdict.
    ScanCompleted {
        request: crate::RequestId,
        verdict: crate::ScanVerdict,
        /// Display timestamp for the history entry, formatted by the platform.
        recorded_at: String,
    },
    /// Remote scan failed (transport error, timeout, or bad response).
    ScanFailed { request: crate::RequestId },
    /// Restore previously persisted scan history.
    RestoreHistory(Vec<crate::HistoryEntry>),
    /// Restore the persisted display preference.
    RestoreTheme(crate::Theme),
    /// User toggled the light/dark display preference.
    ThemeToggled,
    /// Fallback for placeholder wiring.
    NoOp,
}
