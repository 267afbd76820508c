use shield_core::{update, AppState, Effect, Msg, Theme};

#[test]
fn toggle_flips_and_persists_once() {
    let state = AppState::new();
    assert_eq!(state.theme(), Theme::Light);

    let (state, effects) = update(state, Msg::ThemeToggled);
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Dark)]);
}

#[test]
fn double_toggle_returns_to_original() {
    let original = AppState::new().theme();

    let (state, effects) = update(AppState::new(), Msg::ThemeToggled);
    assert_eq!(effects.len(), 1);
    let (state, effects) = update(state, Msg::ThemeToggled);
    assert_eq!(effects, vec![Effect::PersistTheme(original)]);
    assert_eq!(state.theme(), original);
}

#[test]
fn restored_theme_does_not_write_back() {
    let (state, effects) = update(AppState::new(), Msg::RestoreTheme(Theme::Dark));

    assert_eq!(state.theme(), Theme::Dark);
    assert!(effects.is_empty());
    assert_eq!(state.view().theme, Theme::Dark);
}

#[test]
fn theme_names_round_trip_and_default_on_unrecognized() {
    assert_eq!(Theme::from_name("light"), Some(Theme::Light));
    assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_name("sepia"), None);
    assert_eq!(Theme::from_name(Theme::Dark.as_str()), Some(Theme::Dark));
}
