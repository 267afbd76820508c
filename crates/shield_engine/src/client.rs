use std::sync::{mpsc, Arc};
use std::thread;

use shield_logging::{shield_debug, shield_warn};

use crate::scan::{ReqwestScanner, ScanSettings, Scanner};
use crate::{ClientEvent, RequestId};

enum ClientCommand {
    Scan { request: RequestId, url: String },
}

/// Handle to the scan client running on a background thread.
///
/// Commands go in over a channel; resolutions arrive on the receiver that
/// [`ClientHandle::new`] returns alongside the handle. Submissions are not
/// cancellable; a superseded request resolves eventually and the caller
/// decides whether its token is still current.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(settings: ScanSettings) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let scanner = Arc::new(ReqwestScanner::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let scanner = scanner.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(scanner.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, request: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Scan {
            request,
            url: url.into(),
        });
    }
}

async fn handle_command(
    scanner: &dyn Scanner,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Scan { request, url } => {
            shield_debug!("scan request {} for {}", request, url);
            let result = scanner.scan(&url).await;
            if let Err(err) = &result {
                shield_warn!("scan request {} failed: {}: {}", request, err.kind, err.message);
            }
            let _ = event_tx.send(ClientEvent::ScanFinished { request, result });
        }
    }
}
