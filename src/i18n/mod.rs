use tracing::{error, warn};

use crate::deck::DeckSource;

mod prefs;

pub use prefs::LanguageStore;

/// Resolve a translation key for the given language. A missing key
/// falls back to the key itself, so stale decks degrade visibly
/// instead of failing.
pub fn resolve<'a>(deck: &'a dyn DeckSource, lang: &str, key: &'a str) -> &'a str {
    match deck.lookup(lang, key) {
        Some(text) => text,
        None => {
            warn!(lang, key, "translation key not found");
            key
        }
    }
}

/// Pick the startup language: an explicit override wins, then the
/// persisted preference, then the deck's default (first declared).
/// Unsupported codes are diagnosed and skipped, never fatal.
pub fn initial_language(
    deck: &dyn DeckSource,
    override_lang: Option<&str>,
    store: &LanguageStore,
) -> String {
    let languages = deck.languages();

    if let Some(lang) = override_lang {
        if languages.iter().any(|code| code == lang) {
            return lang.to_string();
        }
        error!(lang, "unsupported language requested on startup");
    }

    if let Some(saved) = store.load()
        && languages.iter().any(|code| code == &saved)
    {
        return saved;
    }

    languages[0].clone()
}
