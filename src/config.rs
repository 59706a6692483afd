use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub slides: SlidesConfig,
    pub navigation: NavigationConfig,
    pub keys: KeysConfig,
    pub animations: AnimationsConfig,
    pub counters: CountersConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlidesConfig {
    pub transition_ms: u64,
    pub loop_enabled: bool,
    pub autoplay_enabled: bool,
    pub autoplay_interval_ms: u64,
}

impl Default for SlidesConfig {
    fn default() -> Self {
        Self {
            transition_ms: 800,
            loop_enabled: false,
            autoplay_enabled: false,
            autoplay_interval_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationConfig {
    pub keyboard: bool,
    pub mouse: bool,
    pub touch: bool,
    /// Minimum horizontal drag distance, in cells, for a swipe.
    pub swipe_threshold: u16,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            keyboard: true,
            mouse: true,
            touch: true,
            swipe_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeysConfig {
    pub next: Vec<String>,
    pub prev: Vec<String>,
    pub first: Vec<String>,
    pub last: Vec<String>,
    pub fullscreen: Vec<String>,
    pub language: Vec<String>,
    pub goto: Vec<String>,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            next: string_list(&["Right", "Down", "PageDown", "Space"]),
            prev: string_list(&["Left", "Up", "PageUp"]),
            first: string_list(&["Home"]),
            last: string_list(&["End"]),
            fullscreen: string_list(&["f", "F"]),
            language: string_list(&["l", "L"]),
            goto: string_list(&["g", ":"]),
        }
    }
}

fn string_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationsConfig {
    pub enabled: bool,
    /// Delay between successive entrance elements on one slide.
    pub stagger_ms: u64,
}

impl Default for AnimationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stagger_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CountersConfig {
    pub duration_ms: u64,
}

impl Default for CountersConfig {
    fn default() -> Self {
        Self { duration_ms: 2000 }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.slides.transition_ms = self.slides.transition_ms.max(1);
        self.slides.autoplay_interval_ms = self
            .slides
            .autoplay_interval_ms
            .max(self.slides.transition_ms);
        self.navigation.swipe_threshold = self.navigation.swipe_threshold.max(1);
        self.counters.duration_ms = self.counters.duration_ms.max(1);
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("DKV_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("dkv").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("dkv")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("dkv").join("config.toml"));
    }
    None
}
