use tracing::debug;

use crate::anim::AnimationScheduler;
use crate::command::{self, Command, CommandDispatchResult, CommandOutcome};
use crate::config::Config;
use crate::deck::DeckSource;
use crate::error::{AppError, AppResult};
use crate::event::AppEvent;
use crate::i18n::{self, LanguageStore};
use crate::input::{GotoEntry, KeyBindings, PointerTracker};

use super::state::AppState;

pub struct InteractionSubsystem {
    pub bindings: KeyBindings,
    pub pointer: PointerTracker,
    pub goto_entry: GotoEntry,
}

type EventListener = Box<dyn FnMut(&AppEvent) + Send>;

/// The composed presentation: navigation state, the deck, the animation
/// scheduler and the input plumbing. Constructed explicitly and passed
/// around; there is no ambient singleton.
pub struct App {
    pub state: AppState,
    pub deck: Box<dyn DeckSource>,
    pub anim: AnimationScheduler,
    pub interaction: InteractionSubsystem,
    pub store: LanguageStore,
    pub config: Config,
    listeners: Vec<EventListener>,
}

impl App {
    pub fn new(deck: Box<dyn DeckSource>) -> AppResult<Self> {
        let config = Config::load()?;
        Self::new_with_config(deck, config, LanguageStore::open_default(), None)
    }

    pub fn new_with_config(
        deck: Box<dyn DeckSource>,
        config: Config,
        store: LanguageStore,
        lang_override: Option<&str>,
    ) -> AppResult<Self> {
        if deck.slide_count() == 0 {
            return Err(AppError::invalid_deck("deck has no slides"));
        }
        if deck.languages().is_empty() {
            return Err(AppError::invalid_deck("deck declares no languages"));
        }

        let mut state = AppState::default();
        state.language = i18n::initial_language(deck.as_ref(), lang_override, &store);
        state.status.message = format!("slide 1/{}", deck.slide_count());

        Ok(Self {
            state,
            anim: AnimationScheduler::new(&config),
            interaction: InteractionSubsystem {
                bindings: KeyBindings::from_config(&config.keys),
                pointer: PointerTracker::default(),
                goto_entry: GotoEntry::default(),
            },
            deck,
            store,
            config,
            listeners: Vec::new(),
        })
    }

    /// Attach an observer for the app's notification surface. Listeners
    /// are independent; each sees every event.
    pub fn on_app_event(&mut self, listener: impl FnMut(&AppEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // Programmatic control surface.

    pub fn goto_slide(&mut self, index: usize) -> CommandOutcome {
        self.dispatch_command(Command::GotoSlide { index }).outcome
    }

    pub fn next_slide(&mut self) -> CommandOutcome {
        self.dispatch_command(Command::NextSlide).outcome
    }

    pub fn prev_slide(&mut self) -> CommandOutcome {
        self.dispatch_command(Command::PrevSlide).outcome
    }

    pub fn current_slide(&self) -> usize {
        self.state.current_slide
    }

    pub fn slide_count(&self) -> usize {
        self.deck.slide_count()
    }

    pub fn is_first(&self) -> bool {
        self.state.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.state.is_last(self.deck.slide_count())
    }

    pub fn is_ready(&self) -> bool {
        self.state.ready
    }

    /// Position the deck before the loop starts; no transition plays
    /// and out-of-range indices are ignored.
    pub fn start_at(&mut self, index: usize) {
        if index < self.deck.slide_count() {
            self.state.current_slide = index;
            self.state.status.message = format!("slide {}/{}", index + 1, self.deck.slide_count());
        }
    }

    /// Deck title in the active language, used for the terminal title.
    pub fn window_title(&self) -> String {
        i18n::resolve(self.deck.as_ref(), &self.state.language, self.deck.title_key()).to_string()
    }

    pub(crate) fn dispatch_command(&mut self, cmd: Command) -> CommandDispatchResult {
        if matches!(cmd, Command::OpenGoto) {
            self.interaction.goto_entry.reset();
        }

        let result = command::dispatch(
            &mut self.state,
            cmd,
            self.deck.as_ref(),
            &self.store,
            self.config.slides.loop_enabled,
        );

        for event in &result.emitted_events {
            // Deactivation cancels the outgoing slide's animations, so
            // they cannot keep writing to a display that scrolled away.
            if let AppEvent::SlideChanged { from, .. } = event {
                self.anim.cancel_slide(*from);
            }
            self.notify(event);
        }

        result
    }

    /// Entrance hook, run when a slide becomes active (startup, or a
    /// transition delay elapsing). A slide without animated elements,
    /// or an index the deck cannot resolve, is a quiet no-op.
    pub(crate) fn activate_slide(&mut self, index: usize) {
        match self.deck.slide(index) {
            Some(slide) => self.anim.start_slide(index, slide),
            None => debug!(index, "no slide content to activate"),
        }
    }

    pub(crate) fn complete_transition(&mut self, generation: u64) -> bool {
        command::complete_transition(&mut self.state, generation)
    }

    pub(crate) fn mark_ready(&mut self) {
        self.state.ready = true;
        self.notify(&AppEvent::Ready);
    }

    pub(crate) fn notify(&mut self, event: &AppEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}
