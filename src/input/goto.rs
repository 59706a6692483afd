use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GotoEntryOutcome {
    Pending,
    Cancel,
    /// Enter was pressed; carries the 1-based slide number if the
    /// buffer parsed as one.
    Submit(Option<usize>),
}

/// Single-line "go to slide" entry. While it is open it owns the
/// keyboard; navigation keys never leak past it.
#[derive(Debug, Default)]
pub struct GotoEntry {
    input: Input,
}

impl GotoEntry {
    pub fn reset(&mut self) {
        self.input.reset();
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> GotoEntryOutcome {
        match key.code {
            KeyCode::Enter => GotoEntryOutcome::Submit(self.input.value().trim().parse().ok()),
            KeyCode::Esc => GotoEntryOutcome::Cancel,
            _ => {
                self.input.handle_event(&Event::Key(key));
                GotoEntryOutcome::Pending
            }
        }
    }
}
