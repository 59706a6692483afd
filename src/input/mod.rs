mod goto;
mod keymap;
mod pointer;

pub use goto::{GotoEntry, GotoEntryOutcome};
pub use keymap::{KeyBindings, parse_key};
pub use pointer::{PointerGesture, PointerTracker};
