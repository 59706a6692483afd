use crossterm::event::Event;

use crate::command::{ActionId, Command, CommandOutcome};

/// Travel direction of a committed slide change.
///
/// Forward iff the destination index is greater than the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    /// Emitted once per committed transition, at accept time.
    SlideChanged {
        from: usize,
        to: usize,
        direction: Direction,
    },
    LanguageChanged {
        lang: String,
    },
    /// Emitted once, after the presentation is fully initialized.
    Ready,
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    /// The fixed transition delay for the tagged transition ran out.
    TransitionElapsed { generation: u64 },
    AnimTick,
    AutoplayTick,
}
