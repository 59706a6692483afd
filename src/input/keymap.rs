use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::app::Mode;
use crate::command::Command;
use crate::config::KeysConfig;

/// Key sets for the five configurable actions, resolved from config at
/// startup. Unknown key names are diagnosed and skipped, so a typo in
/// the config unbinds one key instead of failing the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    next: Vec<KeyCode>,
    prev: Vec<KeyCode>,
    first: Vec<KeyCode>,
    last: Vec<KeyCode>,
    fullscreen: Vec<KeyCode>,
    language: Vec<KeyCode>,
    goto_entry: Vec<KeyCode>,
}

impl KeyBindings {
    pub fn from_config(keys: &KeysConfig) -> Self {
        Self {
            next: parse_key_set("next", &keys.next),
            prev: parse_key_set("prev", &keys.prev),
            first: parse_key_set("first", &keys.first),
            last: parse_key_set("last", &keys.last),
            fullscreen: parse_key_set("fullscreen", &keys.fullscreen),
            language: parse_key_set("language", &keys.language),
            goto_entry: parse_key_set("goto", &keys.goto),
        }
    }

    /// Map a key press to a command. Goto mode owns the keyboard (the
    /// entry buffer consumes everything), so nothing maps there.
    pub fn map(&self, key: KeyEvent, mode: Mode) -> Option<Command> {
        if mode == Mode::Goto {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }

        if self.next.contains(&key.code) {
            return Some(Command::NextSlide);
        }
        if self.prev.contains(&key.code) {
            return Some(Command::PrevSlide);
        }
        if self.first.contains(&key.code) {
            return Some(Command::FirstSlide);
        }
        if self.last.contains(&key.code) {
            return Some(Command::LastSlide);
        }
        if self.fullscreen.contains(&key.code) {
            return Some(Command::ToggleFullscreen);
        }
        if self.language.contains(&key.code) {
            return Some(Command::CycleLanguage);
        }
        if self.goto_entry.contains(&key.code) {
            return Some(Command::OpenGoto);
        }

        match key.code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Esc => Some(Command::Cancel),
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_config(&KeysConfig::default())
    }
}

fn parse_key_set(action: &str, names: &[String]) -> Vec<KeyCode> {
    names
        .iter()
        .filter_map(|name| {
            let code = parse_key(name);
            if code.is_none() {
                warn!(action, key = name.as_str(), "unknown key name in config");
            }
            code
        })
        .collect()
}

pub fn parse_key(name: &str) -> Option<KeyCode> {
    let code = match name {
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "Space" => KeyCode::Char(' '),
        "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "Esc" => KeyCode::Esc,
        _ => {
            let mut chars = name.chars();
            let first = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(first)
        }
    };
    Some(code)
}
