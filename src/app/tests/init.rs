use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::App;
use crate::config::Config;
use crate::i18n::LanguageStore;

use super::StubDeck;

fn unique_temp_state_path() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("dkv_app_init_{}_{}", process::id(), nanos));
    path.push("state.json");
    path
}

#[test]
fn new_with_config_falls_back_to_the_deck_default_language() {
    let app = App::new_with_config(
        Box::new(StubDeck::new(10)),
        Config::default(),
        LanguageStore::disabled(),
        None,
    )
    .expect("app init");

    assert_eq!(app.state.language, "es");
    assert_eq!(app.slide_count(), 10);
    assert_eq!(app.current_slide(), 0);
    assert!(app.is_first());
    assert!(!app.is_last());
    assert!(!app.is_ready());
}

#[test]
fn new_with_config_prefers_persisted_language_and_override_wins() {
    let path = unique_temp_state_path();
    let store = LanguageStore::with_path(&path);
    store.save("en");

    let app = App::new_with_config(
        Box::new(StubDeck::new(3)),
        Config::default(),
        LanguageStore::with_path(&path),
        None,
    )
    .expect("app init");
    assert_eq!(app.state.language, "en");

    let app = App::new_with_config(
        Box::new(StubDeck::new(3)),
        Config::default(),
        LanguageStore::with_path(&path),
        Some("es"),
    )
    .expect("app init");
    assert_eq!(app.state.language, "es");

    // An unsupported override is diagnosed, then ignored.
    let app = App::new_with_config(
        Box::new(StubDeck::new(3)),
        Config::default(),
        LanguageStore::disabled(),
        Some("fr"),
    )
    .expect("app init");
    assert_eq!(app.state.language, "es");

    let _ = std::fs::remove_dir_all(path.parent().expect("state file has a parent"));
}

#[test]
fn window_title_resolves_through_the_catalog() {
    let app = App::new_with_config(
        Box::new(StubDeck::new(2)),
        Config::default(),
        LanguageStore::disabled(),
        None,
    )
    .expect("app init");
    assert_eq!(app.window_title(), "Presentación");

    let app = App::new_with_config(
        Box::new(StubDeck::new(2)),
        Config::default(),
        LanguageStore::disabled(),
        Some("en"),
    )
    .expect("app init");
    // No English entry in the stub catalog: the key shows through.
    assert_eq!(app.window_title(), "deck.title");
}

#[test]
fn new_with_config_rejects_an_empty_deck() {
    let result = App::new_with_config(
        Box::new(StubDeck::new(0)),
        Config::default(),
        LanguageStore::disabled(),
        None,
    );
    assert!(result.is_err());
}
