use std::time::Instant;

use crate::command::ActionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// The "go to slide" entry is open and owns the keyboard.
    Goto,
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

/// The two states of the navigation machine. At most one transition is
/// ever in flight; while one is, new requests are dropped.
#[derive(Debug, Clone, Copy)]
pub enum Transition {
    Idle,
    Active {
        from: usize,
        to: usize,
        /// Monotonic tag tying the activation timer to this transition.
        generation: u64,
        started_at: Instant,
    },
}

impl Transition {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Fraction of the transition elapsed, in 0..=1. Idle reads as 1
    /// (the strip is settled).
    pub fn progress(&self, now: Instant, duration_ms: u64) -> f64 {
        match self {
            Self::Idle => 1.0,
            Self::Active { started_at, .. } => {
                let elapsed = now.duration_since(*started_at).as_millis() as f64;
                (elapsed / duration_ms.max(1) as f64).clamp(0.0, 1.0)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub current_slide: usize,
    pub transition: Transition,
    /// Counts accepted transitions; the live transition's generation.
    pub transition_seq: u64,
    /// False in fullscreen: the slide gets the whole viewport.
    pub chrome_visible: bool,
    pub mode: Mode,
    /// Active language code; always one the deck declares.
    pub language: String,
    pub status: StatusState,
    pub ready: bool,
}

impl AppState {
    pub fn is_first(&self) -> bool {
        self.current_slide == 0
    }

    pub fn is_last(&self, slide_count: usize) -> bool {
        slide_count > 0 && self.current_slide == slide_count - 1
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_slide: 0,
            transition: Transition::Idle,
            transition_seq: 0,
            chrome_visible: true,
            mode: Mode::Normal,
            language: String::new(),
            status: StatusState::default(),
            ready: false,
        }
    }
}
