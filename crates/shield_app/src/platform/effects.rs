use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use chrono::{DateTime, Local};
use shield_core::{Effect, Msg, ScanVerdict};
use shield_engine::{ClientEvent, ClientHandle, ScanSettings};
use shield_logging::shield_info;

use super::persistence;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Bridges core effects to the scan client and the durable store, and maps
/// client events back into core messages.
pub(crate) struct EffectRunner {
    client: ClientHandle,
    state_dir: PathBuf,
}

impl EffectRunner {
    pub(crate) fn new(
        settings: ScanSettings,
        state_dir: PathBuf,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        let (client, events) = ClientHandle::new(settings);
        spawn_event_loop(events, msg_tx);
        Self { client, state_dir }
    }

    pub(crate) fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartScan { request, url } => {
                    shield_info!("StartScan request={} url={}", request, url);
                    self.client.submit(request, url);
                }
                Effect::PersistHistory(snapshot) => {
                    persistence::save_history(&self.state_dir, &snapshot);
                }
                Effect::PersistTheme(theme) => {
                    persistence::save_theme(&self.state_dir, theme);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                ClientEvent::ScanFinished { request, result } => match result {
                    Ok(verdict) => Msg::ScanCompleted {
                        request,
                        verdict: ScanVerdict {
                            status: verdict.status,
                            message: verdict.message,
                            checked_at: format_checked_at(&verdict.checked_at),
                        },
                        recorded_at: Local::now().format(TIME_FORMAT).to_string(),
                    },
                    // The failure kind was already logged by the client.
                    Err(_) => Msg::ScanFailed { request },
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

/// Formats the service timestamp for display; non-RFC3339 values are shown
/// as the service sent them.
fn format_checked_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
