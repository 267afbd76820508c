use crate::history::{HistoryEntry, HistoryLedger};
use crate::risk;
use crate::view_model::{AppViewModel, HistoryRowView, OutcomeView};

/// Monotonically increasing token identifying one scan submission.
pub type RequestId = u64;

/// Constant checker identity attached to every completed scan.
pub const CHECKED_BY: &str = "Nasrev";

/// The single user-facing message every remote failure collapses to.
pub const SCAN_FAILED_MESSAGE: &str = "Scan failed. Please try again.";

/// Core-side copy of the remote verdict. `checked_at` has already been
/// display-formatted by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanVerdict {
    pub status: String,
    pub message: String,
    pub checked_at: String,
}

/// A completed scan as shown to the user. Immutable once created; the next
/// submission discards it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub status: String,
    pub message: String,
    pub checked_at: String,
    pub checked_by: &'static str,
    pub risk: risk::RiskDescriptor,
}

/// Lifecycle of the single outstanding scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning {
        url: String,
    },
    Completed {
        url: String,
        outcome: ScanOutcome,
    },
    Failed {
        message: String,
    },
}

/// Persisted display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a persisted theme name. Unrecognized values yield `None`;
    /// callers substitute the default.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    phase: ScanPhase,
    history: HistoryLedger,
    theme: Theme,
    last_request: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let (outcome, error) = match &self.phase {
            ScanPhase::Completed { outcome, .. } => (
                Some(OutcomeView {
                    status: outcome.status.clone(),
                    message: outcome.message.clone(),
                    checked_by: outcome.checked_by,
                    checked_at: outcome.checked_at.clone(),
                    risk: outcome.risk,
                    chart: outcome.risk.chart_split(),
                }),
                None,
            ),
            ScanPhase::Failed { message } => (None, Some(message.clone())),
            ScanPhase::Idle | ScanPhase::Scanning { .. } => (None, None),
        };

        AppViewModel {
            input: self.input.clone(),
            theme: self.theme,
            scanning: matches!(self.phase, ScanPhase::Scanning { .. }),
            outcome,
            error,
            history: self
                .history
                .entries()
                .iter()
                .map(|entry| HistoryRowView {
                    url: entry.url.clone(),
                    status: entry.status.clone(),
                    time: entry.time.clone(),
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> &ScanPhase {
        &self.phase
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
        self.dirty = true;
    }

    /// Allocates the next request token and moves into `Scanning`.
    ///
    /// Any prior outcome or error is discarded; a still-pending earlier
    /// request keeps running but its eventual resolution no longer matches
    /// the latest token and is dropped on arrival.
    pub(crate) fn begin_scan(&mut self, url: String) -> RequestId {
        self.last_request += 1;
        self.phase = ScanPhase::Scanning { url };
        self.dirty = true;
        self.last_request
    }

    /// Applies a verdict for `request`. Returns the new history snapshot to
    /// persist, or `None` when the response is stale and must be discarded.
    pub(crate) fn apply_verdict(
        &mut self,
        request: RequestId,
        verdict: ScanVerdict,
        recorded_at: String,
    ) -> Option<Vec<HistoryEntry>> {
        if request != self.last_request {
            return None;
        }
        let url = match &self.phase {
            ScanPhase::Scanning { url } => url.clone(),
            _ => return None,
        };

        let risk = risk::classify(Some(&verdict.status));
        let snapshot = self.history.record(HistoryEntry {
            url: url.clone(),
            status: verdict.status.clone(),
            time: recorded_at,
        });
        self.phase = ScanPhase::Completed {
            url,
            outcome: ScanOutcome {
                status: verdict.status,
                message: verdict.message,
                checked_at: verdict.checked_at,
                checked_by: CHECKED_BY,
                risk,
            },
        };
        self.dirty = true;
        Some(snapshot)
    }

    /// Collapses any remote failure for `request` to the generic message.
    /// Stale failures are discarded. Failed scans are never recorded.
    pub(crate) fn apply_failure(&mut self, request: RequestId) {
        if request != self.last_request {
            return;
        }
        if !matches!(self.phase, ScanPhase::Scanning { .. }) {
            return;
        }
        self.phase = ScanPhase::Failed {
            message: SCAN_FAILED_MESSAGE.to_string(),
        };
        self.dirty = true;
    }

    pub(crate) fn restore_history(&mut self, entries: Vec<HistoryEntry>) {
        self.history = HistoryLedger::from_entries(entries);
        self.dirty = true;
    }

    pub(crate) fn restore_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.dirty = true;
    }

    pub(crate) fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.dirty = true;
        self.theme
    }
}
