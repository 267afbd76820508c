//! Shield core: pure scan state machine and view-model helpers.
mod effect;
mod history;
mod msg;
mod risk;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use history::{HistoryEntry, HistoryLedger, HISTORY_LIMIT};
pub use msg::Msg;
pub use risk::{chart_split, classify, ChartSplit, ColorToken, RiskDescriptor};
pub use state::{
    AppState, RequestId, ScanOutcome, ScanPhase, ScanVerdict, Theme, CHECKED_BY,
    SCAN_FAILED_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, HistoryRowView, OutcomeView};
