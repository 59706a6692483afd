use ratatui::Frame;

use crate::anim::AnimationScheduler;
use crate::app::{AppState, Mode};
use crate::config::Config;
use crate::deck::DeckSource;
use crate::input::GotoEntry;

mod chrome;
mod layout;
mod overlay;
mod slide;

pub use chrome::draw_chrome;
pub use layout::{ChromeHits, UiLayout, split_layout};
pub use overlay::draw_goto_overlay;
pub use slide::draw_slide;

/// Compose one frame: stage, chrome (unless fullscreen) and any open
/// overlay.
#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame<'_>,
    app: &AppState,
    deck: &dyn DeckSource,
    anim: &AnimationScheduler,
    goto_entry: &GotoEntry,
    config: &Config,
    slide_count: usize,
) {
    let layout = split_layout(frame.area(), app.chrome_visible);
    draw_slide(
        frame,
        layout.stage,
        app,
        deck,
        anim,
        config.slides.transition_ms,
    );

    if app.chrome_visible {
        let hits = ChromeHits::compute(layout.chrome, slide_count);
        draw_chrome(frame, &hits, app, slide_count, config.slides.loop_enabled);
    }

    if app.mode == Mode::Goto {
        draw_goto_overlay(frame, layout.stage, goto_entry, slide_count);
    }
}
