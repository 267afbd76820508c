use std::fmt;

use serde::Deserialize;

/// Monotonically increasing token identifying one scan submission.
pub type RequestId = u64;

/// Raw verdict as returned by the remote scanning service.
///
/// Opaque beyond `status`; `message` and `checkedAt` are tolerated missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanVerdict {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "checkedAt", default)]
    pub checked_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    ScanFinished {
        request: RequestId,
        result: Result<ScanVerdict, ScanError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub kind: ScanFailureKind,
    pub message: String,
}

impl ScanError {
    pub(crate) fn new(kind: ScanFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Structured failure kinds, used for logging only. The core collapses all
/// of them to a single generic user-facing failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    MalformedResponse,
    Network,
}

impl fmt::Display for ScanFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanFailureKind::InvalidUrl => write!(f, "invalid url"),
            ScanFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            ScanFailureKind::Timeout => write!(f, "timeout"),
            ScanFailureKind::MalformedResponse => write!(f, "malformed response"),
            ScanFailureKind::Network => write!(f, "network error"),
        }
    }
}
