use std::time::Instant;

use tracing::{debug, error};

use crate::app::{AppState, Transition};
use crate::deck::DeckSource;
use crate::i18n::LanguageStore;

use super::types::{ActionId, CommandOutcome};

pub(crate) fn goto_slide(app: &mut AppState, slide_count: usize, index: usize) -> CommandOutcome {
    goto_slide_with_id(app, slide_count, index, ActionId::GotoSlide)
}

/// The single transition primitive. Rejections are silent no-ops:
/// out-of-range targets, the current slide, and requests made while a
/// transition is already in flight are all dropped, never queued.
pub(crate) fn goto_slide_with_id(
    app: &mut AppState,
    slide_count: usize,
    index: usize,
    action_id: ActionId,
) -> CommandOutcome {
    app.status.last_action_id = Some(action_id);

    if index >= slide_count {
        app.status.message = format!("no such slide: {}", index + 1);
        return CommandOutcome::Noop;
    }
    if index == app.current_slide {
        app.status.message = format!("already at slide {}/{}", index + 1, slide_count);
        return CommandOutcome::Noop;
    }
    if app.transition.is_active() {
        return CommandOutcome::Noop;
    }

    let from = app.current_slide;
    app.current_slide = index;
    app.transition_seq += 1;
    app.transition = Transition::Active {
        from,
        to: index,
        generation: app.transition_seq,
        started_at: Instant::now(),
    };
    app.status.message = format!("slide {}/{}", index + 1, slide_count);
    CommandOutcome::Applied
}

pub(crate) fn next_slide(
    app: &mut AppState,
    slide_count: usize,
    loop_enabled: bool,
) -> CommandOutcome {
    if app.current_slide + 1 < slide_count {
        return goto_slide_with_id(app, slide_count, app.current_slide + 1, ActionId::NextSlide);
    }
    if loop_enabled {
        return goto_slide_with_id(app, slide_count, 0, ActionId::NextSlide);
    }

    app.status.last_action_id = Some(ActionId::NextSlide);
    app.status.message = format!(
        "already at last slide ({}/{})",
        app.current_slide + 1,
        slide_count
    );
    CommandOutcome::Noop
}

pub(crate) fn prev_slide(
    app: &mut AppState,
    slide_count: usize,
    loop_enabled: bool,
) -> CommandOutcome {
    if app.current_slide > 0 {
        return goto_slide_with_id(app, slide_count, app.current_slide - 1, ActionId::PrevSlide);
    }
    if loop_enabled && slide_count > 0 {
        return goto_slide_with_id(app, slide_count, slide_count - 1, ActionId::PrevSlide);
    }

    app.status.last_action_id = Some(ActionId::PrevSlide);
    app.status.message = "already at first slide (1)".to_string();
    CommandOutcome::Noop
}

pub(crate) fn first_slide(app: &mut AppState, slide_count: usize) -> CommandOutcome {
    goto_slide_with_id(app, slide_count, 0, ActionId::FirstSlide)
}

pub(crate) fn last_slide(app: &mut AppState, slide_count: usize) -> CommandOutcome {
    if slide_count == 0 {
        app.status.last_action_id = Some(ActionId::LastSlide);
        return CommandOutcome::Noop;
    }
    goto_slide_with_id(app, slide_count, slide_count - 1, ActionId::LastSlide)
}

/// Releases the transition lock, but only for the transition the timer
/// was scheduled for. A timer that outlived its transition is stale and
/// ignored.
pub(crate) fn complete_transition(app: &mut AppState, generation: u64) -> bool {
    match app.transition {
        Transition::Active {
            generation: active, ..
        } if active == generation => {
            app.transition = Transition::Idle;
            true
        }
        _ => false,
    }
}

/// Fullscreen in a terminal means the slide gets the whole viewport:
/// the chrome row is hidden rather than a host window resized.
pub(crate) fn toggle_fullscreen(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::ToggleFullscreen);
    app.chrome_visible = !app.chrome_visible;
    let state = if app.chrome_visible {
        "windowed"
    } else {
        "fullscreen"
    };
    debug!(state, "viewport mode toggled");
    app.status.message = state.to_string();
    CommandOutcome::Applied
}

pub(crate) fn set_language(
    app: &mut AppState,
    deck: &dyn DeckSource,
    store: &LanguageStore,
    code: &str,
    action_id: ActionId,
) -> CommandOutcome {
    app.status.last_action_id = Some(action_id);

    if !deck.languages().iter().any(|lang| lang == code) {
        error!(lang = code, "unsupported language");
        app.status.message = format!("unsupported language: {code}");
        return CommandOutcome::Noop;
    }
    if app.language == code {
        app.status.message = format!("language unchanged ({code})");
        return CommandOutcome::Noop;
    }

    app.language = code.to_string();
    store.save(code);
    app.status.message = format!("language: {code}");
    CommandOutcome::Applied
}

pub(crate) fn cycle_language(
    app: &mut AppState,
    deck: &dyn DeckSource,
    store: &LanguageStore,
) -> CommandOutcome {
    let languages = deck.languages();
    let position = languages
        .iter()
        .position(|lang| lang == &app.language)
        .unwrap_or(0);
    let next = languages[(position + 1) % languages.len()].clone();
    set_language(app, deck, store, &next, ActionId::CycleLanguage)
}

#[cfg(test)]
mod tests {
    use crate::app::{AppState, Transition};
    use crate::command::CommandOutcome;

    use super::{complete_transition, goto_slide, next_slide, prev_slide};

    #[test]
    fn goto_slide_rejects_out_of_range_same_and_mid_transition() {
        let mut app = AppState::default();

        assert_eq!(goto_slide(&mut app, 10, 10), CommandOutcome::Noop);
        assert_eq!(goto_slide(&mut app, 10, 0), CommandOutcome::Noop);
        assert_eq!(app.current_slide, 0);
        assert!(!app.transition.is_active());

        assert_eq!(goto_slide(&mut app, 10, 3), CommandOutcome::Applied);
        assert_eq!(app.current_slide, 3);
        assert!(app.transition.is_active());

        // Drop-on-busy: rejected, not queued.
        assert_eq!(goto_slide(&mut app, 10, 5), CommandOutcome::Noop);
        assert_eq!(app.current_slide, 3);
    }

    #[test]
    fn transition_lock_releases_only_for_matching_generation() {
        let mut app = AppState::default();
        assert_eq!(goto_slide(&mut app, 10, 1), CommandOutcome::Applied);
        let generation = match app.transition {
            Transition::Active { generation, .. } => generation,
            Transition::Idle => panic!("transition should be active"),
        };

        assert!(!complete_transition(&mut app, generation + 1));
        assert!(app.transition.is_active());
        assert!(complete_transition(&mut app, generation));
        assert!(!app.transition.is_active());
        assert!(!complete_transition(&mut app, generation));
    }

    #[test]
    fn next_slide_at_last_index_respects_loop_mode() {
        let mut app = AppState::default();
        app.current_slide = 9;

        assert_eq!(next_slide(&mut app, 10, false), CommandOutcome::Noop);
        assert_eq!(app.current_slide, 9);

        assert_eq!(next_slide(&mut app, 10, true), CommandOutcome::Applied);
        assert_eq!(app.current_slide, 0);
    }

    #[test]
    fn prev_slide_at_first_index_respects_loop_mode() {
        let mut app = AppState::default();

        assert_eq!(prev_slide(&mut app, 10, false), CommandOutcome::Noop);
        assert_eq!(app.current_slide, 0);

        assert_eq!(prev_slide(&mut app, 10, true), CommandOutcome::Applied);
        assert_eq!(app.current_slide, 9);
    }
}
