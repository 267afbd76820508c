//! Shield engine: remote scan client and persistence plumbing.
mod client;
mod persist;
mod scan;
mod types;

pub use client::ClientHandle;
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use scan::{ReqwestScanner, ScanSettings, Scanner, DEFAULT_ENDPOINT};
pub use types::{ClientEvent, RequestId, ScanError, ScanFailureKind, ScanVerdict};
