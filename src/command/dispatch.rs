use crate::app::{AppState, Mode};
use crate::deck::DeckSource;
use crate::event::{AppEvent, Direction};
use crate::i18n::LanguageStore;

use super::core::{
    cycle_language, first_slide, goto_slide, last_slide, next_slide, prev_slide, set_language,
    toggle_fullscreen,
};
use super::types::{ActionId, Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

pub fn dispatch(
    app: &mut AppState,
    cmd: Command,
    deck: &dyn DeckSource,
    store: &LanguageStore,
    loop_enabled: bool,
) -> CommandDispatchResult {
    let previous_slide = app.current_slide;
    let previous_language = app.language.clone();
    let action_id = cmd.action_id();
    let slide_count = deck.slide_count();

    let outcome = match cmd {
        Command::NextSlide => next_slide(app, slide_count, loop_enabled),
        Command::PrevSlide => prev_slide(app, slide_count, loop_enabled),
        Command::FirstSlide => first_slide(app, slide_count),
        Command::LastSlide => last_slide(app, slide_count),
        Command::GotoSlide { index } => goto_slide(app, slide_count, index),
        Command::ToggleFullscreen => toggle_fullscreen(app),
        Command::CycleLanguage => cycle_language(app, deck, store),
        Command::SetLanguage { code } => {
            set_language(app, deck, store, &code, ActionId::SetLanguage)
        }
        Command::OpenGoto => {
            app.mode = Mode::Goto;
            app.status.last_action_id = Some(ActionId::OpenGoto);
            app.status.message = "go to slide:".to_string();
            CommandOutcome::Applied
        }
        Command::Cancel => {
            app.mode = Mode::Normal;
            app.status.last_action_id = Some(ActionId::Cancel);
            app.status.message = "canceled".to_string();
            CommandOutcome::Applied
        }
        Command::Quit => {
            app.status.last_action_id = Some(ActionId::Quit);
            app.status.message = "quit requested".to_string();
            CommandOutcome::QuitRequested
        }
    };

    let mut emitted_events = Vec::new();
    if app.current_slide != previous_slide {
        emitted_events.push(AppEvent::SlideChanged {
            from: previous_slide,
            to: app.current_slide,
            direction: Direction::between(previous_slide, app.current_slide),
        });
    }
    if app.language != previous_language {
        emitted_events.push(AppEvent::LanguageChanged {
            lang: app.language.clone(),
        });
    }
    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    CommandDispatchResult {
        outcome,
        emitted_events,
    }
}
