use std::sync::Once;

use shield_core::{
    update, AppState, ColorToken, Effect, Msg, ScanPhase, ScanVerdict, CHECKED_BY,
    SCAN_FAILED_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(shield_logging::initialize_for_tests);
}

fn submit_url(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(url.to_string()));
    update(state, Msg::ScanSubmitted)
}

fn verdict(status: &str) -> ScanVerdict {
    ScanVerdict {
        status: status.to_string(),
        message: "clean".to_string(),
        checked_at: "2026-08-26 10:00:00".to_string(),
    }
}

fn latest_request(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartScan { request, .. } => Some(*request),
            _ => None,
        })
        .expect("start scan effect")
}

#[test]
fn safe_verdict_completes_and_records_history() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "http://example.com");
    let request = latest_request(&effects);

    let (state, effects) = update(
        state,
        Msg::ScanCompleted {
            request,
            verdict: verdict("safe"),
            recorded_at: "2026-08-26 10:00:01".to_string(),
        },
    );

    let view = state.view();
    assert!(!view.scanning);
    let outcome = view.outcome.expect("completed outcome");
    assert_eq!(outcome.status, "safe");
    assert_eq!(outcome.message, "clean");
    assert_eq!(outcome.checked_by, CHECKED_BY);
    assert_eq!(outcome.risk.risk_percent, 0);
    assert_eq!(outcome.risk.color, ColorToken::Safe);
    assert_eq!(outcome.chart.safe_share, 100);

    assert_eq!(view.history.len(), 1);
    assert_eq!(view.history[0].url, "http://example.com");
    assert_eq!(view.history[0].status, "safe");

    // The new snapshot is persisted in full.
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::PersistHistory(snapshot) => {
            assert_eq!(snapshot.len(), 1);
            assert_eq!(snapshot[0].url, "http://example.com");
        }
        other => panic!("expected PersistHistory, got {other:?}"),
    }
}

#[test]
fn malicious_verdict_maps_to_full_risk() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "http://bad.example.com");
    let request = latest_request(&effects);

    let (state, _) = update(
        state,
        Msg::ScanCompleted {
            request,
            verdict: verdict("malicious"),
            recorded_at: "2026-08-26 10:00:01".to_string(),
        },
    );

    let outcome = state.view().outcome.expect("completed outcome");
    assert_eq!(outcome.risk.risk_percent, 100);
    assert_eq!(outcome.risk.color, ColorToken::Danger);
    assert_eq!(outcome.chart.risk_share, 100);
    assert_eq!(outcome.chart.safe_share, 0);
}

#[test]
fn remote_failure_collapses_to_generic_message() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "http://example.com");
    let request = latest_request(&effects);

    let (state, effects) = update(state, Msg::ScanFailed { request });

    let view = state.view();
    assert!(!view.scanning);
    assert_eq!(view.error.as_deref(), Some(SCAN_FAILED_MESSAGE));
    assert!(view.outcome.is_none());
    // Failed scans are never recorded.
    assert!(view.history.is_empty());
    assert!(effects.is_empty());
}

#[test]
fn stale_verdict_is_discarded_silently() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "http://old.example.com");
    let stale_request = latest_request(&effects);

    // A newer submission supersedes the outstanding one.
    let (state, effects) = submit_url(state, "http://new.example.com");
    let fresh_request = latest_request(&effects);
    assert_ne!(stale_request, fresh_request);

    let (state, effects) = update(
        state,
        Msg::ScanCompleted {
            request: stale_request,
            verdict: verdict("malicious"),
            recorded_at: "2026-08-26 10:00:01".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().scanning);
    assert!(state.history().is_empty());

    // The fresh response still lands normally.
    let (state, _) = update(
        state,
        Msg::ScanCompleted {
            request: fresh_request,
            verdict: verdict("safe"),
            recorded_at: "2026-08-26 10:00:02".to_string(),
        },
    );
    let view = state.view();
    assert_eq!(view.outcome.expect("outcome").status, "safe");
    assert_eq!(view.history.len(), 1);
    assert_eq!(view.history[0].url, "http://new.example.com");
}

#[test]
fn stale_failure_does_not_clobber_newer_scan() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "http://old.example.com");
    let stale_request = latest_request(&effects);
    let (state, _) = submit_url(state, "http://new.example.com");

    let (state, effects) = update(state, Msg::ScanFailed { request: stale_request });

    assert!(effects.is_empty());
    assert!(state.view().scanning);
    assert!(state.view().error.is_none());
}

#[test]
fn deep_link_auto_submits_exactly_one_scan() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::DeepLinkUrl("http://test.com".to_string()),
    );

    assert_eq!(state.input(), "http://test.com");
    assert_eq!(
        effects,
        vec![Effect::StartScan {
            request: 1,
            url: "http://test.com".to_string(),
        }]
    );
}

#[test]
fn empty_deep_link_is_ignored() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::DeepLinkUrl(String::new()));

    assert_eq!(*state.phase(), ScanPhase::Idle);
    assert!(effects.is_empty());
}

#[test]
fn resubmission_discards_prior_result() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "http://example.com");
    let request = latest_request(&effects);
    let (state, _) = update(
        state,
        Msg::ScanCompleted {
            request,
            verdict: verdict("safe"),
            recorded_at: "2026-08-26 10:00:01".to_string(),
        },
    );
    assert!(state.view().outcome.is_some());

    let (state, _) = submit_url(state, "http://other.example.com");
    let view = state.view();
    assert!(view.scanning);
    assert!(view.outcome.is_none());
    assert!(view.error.is_none());
}

#[test]
fn six_scans_keep_only_the_five_most_recent() {
    init_logging();
    let mut state = AppState::new();
    for i in 0..6 {
        let url = format!("http://site{i}.example.com");
        let (next, effects) = submit_url(state, &url);
        let request = latest_request(&effects);
        let (next, _) = update(
            next,
            Msg::ScanCompleted {
                request,
                verdict: verdict("safe"),
                recorded_at: format!("2026-08-26 10:00:0{i}"),
            },
        );
        state = next;
    }

    let history = state.history();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0].url, "http://site5.example.com");
    assert!(history.iter().all(|e| e.url != "http://site0.example.com"));
}

#[test]
fn restored_history_is_shown_without_persist_effect() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::RestoreHistory(vec![shield_core::HistoryEntry {
            url: "http://example.com".to_string(),
            status: "safe".to_string(),
            time: "2026-08-25 09:00:00".to_string(),
        }]),
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().history.len(), 1);
}
