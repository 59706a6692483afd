use std::time::Duration;

mod counter;
mod progress;
mod scheduler;

pub use counter::CounterAnimation;
pub use progress::ProgressAnimation;
pub use scheduler::{AnimationScheduler, ElementId, ElementKind};

/// Animation-frame cadence the animators are sampled at (60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Fixed delay before a progress bar starts filling.
pub const PROGRESS_START_DELAY: Duration = Duration::from_millis(300);
