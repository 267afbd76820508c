use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use shield_core::{update, AppState, Msg};
use shield_engine::ScanSettings;
use shield_logging::shield_info;

use super::effects::EffectRunner;
use super::persistence;
use super::render;

pub struct AppConfig {
    /// Externally supplied URL, auto-scanned exactly once at startup.
    pub deep_link: Option<String>,
    pub state_dir: PathBuf,
    pub endpoint: Option<String>,
}

enum LoopEvent {
    Core(Msg),
    ShowHistory,
    Quit,
}

pub fn run_app(config: AppConfig) {
    let mut settings = ScanSettings::default();
    if let Some(endpoint) = config.endpoint {
        settings.endpoint = endpoint;
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, config.state_dir.clone(), msg_tx);

    let (input_tx, input_rx) = mpsc::channel::<LoopEvent>();
    spawn_input_thread(input_tx);

    let mut state = AppState::new();
    state = dispatch(
        state,
        Msg::RestoreHistory(persistence::load_history(&config.state_dir)),
        &runner,
    );
    state = dispatch(
        state,
        Msg::RestoreTheme(persistence::load_theme(&config.state_dir)),
        &runner,
    );

    if let Some(url) = config.deep_link {
        shield_info!("Deep-link auto-scan for {}", url);
        state = dispatch(state, Msg::DeepLinkUrl(url), &runner);
    }

    render::greeting();
    state.consume_dirty();
    render::render(&state.view());

    loop {
        let mut idle = true;

        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, msg, &runner);
            idle = false;
        }

        match input_rx.try_recv() {
            Ok(LoopEvent::Quit) => break,
            Ok(LoopEvent::ShowHistory) => {
                render::render_history(&state.view());
                idle = false;
            }
            Ok(LoopEvent::Core(msg)) => {
                state = dispatch(state, msg, &runner);
                idle = false;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => break,
        }

        if state.consume_dirty() {
            render::render(&state.view());
        }

        if idle {
            thread::sleep(Duration::from_millis(20));
        }
    }

    shield_info!("Session ended");
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn spawn_input_thread(tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let trimmed = line.trim().to_string();

            let event = match trimmed.as_str() {
                ":quit" | ":q" => LoopEvent::Quit,
                ":theme" => LoopEvent::Core(Msg::ThemeToggled),
                ":history" => LoopEvent::ShowHistory,
                // Anything else is a URL to scan; the core ignores empty input.
                _ => {
                    if tx.send(LoopEvent::Core(Msg::InputChanged(trimmed))).is_err() {
                        break;
                    }
                    LoopEvent::Core(Msg::ScanSubmitted)
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        }
        let _ = tx.send(LoopEvent::Quit);
    });
}
