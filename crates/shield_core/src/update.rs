use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ScanSubmitted => submit(&mut state),
        Msg::DeepLinkUrl(url) => {
            // Startup-only: the deep-link parameter becomes both the visible
            // input value and the scan target.
            if url.trim().is_empty() {
                return (state, Vec::new());
            }
            state.set_input(url);
            submit(&mut state)
        }
        Msg::ScanCompleted {
            request,
            verdict,
            recorded_at,
        } => match state.apply_verdict(request, verdict, recorded_at) {
            Some(snapshot) => vec![Effect::PersistHistory(snapshot)],
            // Stale response for a superseded request; discarded silently.
            None => Vec::new(),
        },
        Msg::ScanFailed { request } => {
            state.apply_failure(request);
            Vec::new()
        }
        Msg::RestoreHistory(entries) => {
            state.restore_history(entries);
            Vec::new()
        }
        Msg::RestoreTheme(theme) => {
            state.restore_theme(theme);
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = state.toggle_theme();
            vec![Effect::PersistTheme(theme)]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    let url = state.input().trim().to_owned();
    // Empty input is a defined early exit, not an error.
    if url.is_empty() {
        return Vec::new();
    }
    let request = state.begin_scan(url.clone());
    vec![Effect::StartScan { request, url }]
}
