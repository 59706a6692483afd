use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// On-disk format of the persisted preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StateFile {
    language: Option<String>,
}

/// Persists the selected language across sessions. Every failure mode
/// is tolerated: the preference simply does not survive.
pub struct LanguageStore {
    path: Option<PathBuf>,
}

impl LanguageStore {
    pub fn open_default() -> Self {
        Self {
            path: default_state_path(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A store that never reads or writes. Used when no writable state
    /// location exists, and by tests.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn load(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        if !path.exists() {
            return None;
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read language preference");
                return None;
            }
        };
        match serde_json::from_str::<StateFile>(&raw) {
            Ok(state) => state.language,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not parse language preference");
                None
            }
        }
    }

    pub fn save(&self, lang: &str) {
        let Some(path) = self.path.as_ref() else {
            return;
        };

        let state = StateFile {
            language: Some(lang.to_string()),
        };
        let raw = match serde_json::to_string_pretty(&state) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%err, "could not encode language preference");
                return;
            }
        };

        if let Some(parent) = path.parent()
            && let Err(err) = fs::create_dir_all(parent)
        {
            warn!(path = %path.display(), %err, "could not create preference directory");
            return;
        }
        if let Err(err) = fs::write(path, raw) {
            warn!(path = %path.display(), %err, "could not persist language preference");
        }
    }
}

fn default_state_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("DKV_STATE_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_STATE_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("dkv").join("state.json"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("dkv")
                .join("state.json"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("dkv").join("state.json"));
    }
    None
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::LanguageStore;

    fn unique_temp_path() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("dkv_state_{}_{}", process::id(), nanos));
        path.push("state.json");
        path
    }

    #[test]
    fn load_returns_none_for_missing_file() {
        let store = LanguageStore::with_path(unique_temp_path());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = unique_temp_path();
        let store = LanguageStore::with_path(&path);

        store.save("en");
        assert_eq!(store.load(), Some("en".to_string()));

        store.save("es");
        assert_eq!(store.load(), Some("es".to_string()));

        let _ = std::fs::remove_dir_all(path.parent().expect("state file has a parent"));
    }

    #[test]
    fn disabled_store_is_inert() {
        let store = LanguageStore::disabled();
        store.save("en");
        assert_eq!(store.load(), None);
    }
}
