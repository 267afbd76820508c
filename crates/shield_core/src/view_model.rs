use crate::risk::{ChartSplit, RiskDescriptor};
use crate::state::Theme;

/// Full observable surface exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub theme: Theme,
    /// True exactly while a scan is outstanding.
    pub scanning: bool,
    pub outcome: Option<OutcomeView>,
    pub error: Option<String>,
    /// Newest first, at most [`crate::HISTORY_LIMIT`] rows.
    pub history: Vec<HistoryRowView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeView {
    pub status: String,
    pub message: String,
    pub checked_by: &'static str,
    pub checked_at: String,
    pub risk: RiskDescriptor,
    pub chart: ChartSplit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub url: String,
    pub status: String,
    pub time: String,
}
