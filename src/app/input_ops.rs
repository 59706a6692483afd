use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};
use tracing::debug;

use crate::command::Command;
use crate::input::{GotoEntryOutcome, PointerGesture};
use crate::ui::ChromeHits;

use super::core::App;
use super::state::Mode;

impl App {
    /// Translate a raw terminal event into a command, if any. Indicator
    /// state is not touched here; that happens when the command is
    /// dispatched.
    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        hits: Option<&ChromeHits>,
        needs_redraw: &mut bool,
    ) -> Option<Command> {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.handle_key_event(key, needs_redraw)
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, hits),
            Event::Resize(_, _) => {
                *needs_redraw = true;
                None
            }
            _ => None,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, needs_redraw: &mut bool) -> Option<Command> {
        if self.state.mode == Mode::Goto {
            *needs_redraw = true;
            return match self.interaction.goto_entry.handle_key(key) {
                GotoEntryOutcome::Pending => None,
                GotoEntryOutcome::Cancel => Some(Command::Cancel),
                GotoEntryOutcome::Submit(parsed) => match parsed.and_then(|n| n.checked_sub(1)) {
                    Some(index) => {
                        self.state.mode = Mode::Normal;
                        Some(Command::GotoSlide { index })
                    }
                    None => {
                        self.state.status.message =
                            format!("not a slide number: {}", self.interaction.goto_entry.value());
                        None
                    }
                },
            };
        }

        if !self.config.navigation.keyboard {
            return None;
        }
        self.interaction.bindings.map(key, self.state.mode)
    }

    fn handle_mouse_event(
        &mut self,
        mouse: MouseEvent,
        hits: Option<&ChromeHits>,
    ) -> Option<Command> {
        let navigation = &self.config.navigation;
        if !navigation.mouse && !navigation.touch {
            return None;
        }

        let gesture = self
            .interaction
            .pointer
            .on_mouse(mouse, navigation.swipe_threshold)?;
        match gesture {
            PointerGesture::Swipe { forward } if navigation.touch => {
                debug!(forward, "swipe gesture");
                Some(if forward {
                    Command::NextSlide
                } else {
                    Command::PrevSlide
                })
            }
            PointerGesture::Click { column, row } if navigation.mouse => {
                hits.and_then(|hits| hits.hit(column, row))
            }
            _ => None,
        }
    }
}
