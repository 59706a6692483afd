mod core;
mod event_bus;
mod event_loop;
mod input_ops;
mod state;
pub(crate) mod terminal_session;

#[cfg(test)]
mod tests;

pub use self::core::{App, InteractionSubsystem};
pub use state::{AppState, Mode, StatusState, Transition};
