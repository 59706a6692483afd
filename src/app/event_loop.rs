use std::time::Duration;

use ratatui::layout::Rect;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::anim::FRAME_INTERVAL;
use crate::command::{ActionId, Command, CommandOutcome};
use crate::error::AppResult;
use crate::event::{AppEvent, DomainEvent};
use crate::ui::{self, ChromeHits};

use super::core::App;
use super::event_bus::{EventBusRuntime, spawn_transition_timer};
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    session: TerminalSession,
    anim_tick: time::Interval,
    autoplay_tick: time::Interval,
    loop_event_tx: UnboundedSender<DomainEvent>,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
    needs_redraw: bool,
    chrome_hits: Option<ChromeHits>,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let capture_mouse = self.config.navigation.mouse || self.config.navigation.touch;
        let mut runtime = self.initialize_loop_runtime(capture_mouse)?;

        let title = self.window_title();
        runtime.session.set_title(&title)?;

        // The first slide activates without a transition, and readiness
        // is announced before the first input is read.
        self.activate_slide(self.state.current_slide);
        self.mark_ready();
        debug!("presentation ready");

        loop {
            if runtime.needs_redraw {
                self.render_frame(&mut runtime)?;
            }

            let autoplay_enabled = self.config.slides.autoplay_enabled;
            let waited = wait_next_event(
                &mut runtime.loop_event_rx,
                &mut runtime.anim_tick,
                &mut runtime.autoplay_tick,
                autoplay_enabled,
            )
            .await;
            if matches!(
                self.handle_waited_event(waited, &mut runtime),
                LoopControl::Break
            ) {
                break;
            }
        }

        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        Ok(())
    }

    fn initialize_loop_runtime(&mut self, capture_mouse: bool) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter(capture_mouse)?;
        let (loop_event_tx, loop_event_rx, loop_event_runtime) = EventBusRuntime::spawn();

        let mut anim_tick = time::interval(FRAME_INTERVAL);
        anim_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let autoplay_interval = Duration::from_millis(self.config.slides.autoplay_interval_ms);
        let mut autoplay_tick =
            time::interval_at(Instant::now() + autoplay_interval, autoplay_interval);
        autoplay_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(LoopRuntime {
            session,
            anim_tick,
            autoplay_tick,
            loop_event_tx,
            loop_event_rx,
            loop_event_runtime,
            needs_redraw: true,
            chrome_hits: None,
        })
    }

    fn render_frame(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        let size = runtime.session.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = ui::split_layout(area, self.state.chrome_visible);
        runtime.chrome_hits = self
            .state
            .chrome_visible
            .then(|| ChromeHits::compute(layout.chrome, self.deck.slide_count()));

        let state = &self.state;
        let deck = self.deck.as_ref();
        let anim = &self.anim;
        let goto_entry = &self.interaction.goto_entry;
        let config = &self.config;
        let slide_count = deck.slide_count();
        runtime.session.draw(|frame| {
            ui::render(frame, state, deck, anim, goto_entry, config, slide_count);
        })?;

        runtime.needs_redraw = false;
        Ok(())
    }

    fn handle_waited_event(&mut self, waited: WaitEvent, runtime: &mut LoopRuntime) -> LoopControl {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let hits = runtime.chrome_hits;
                if let Some(command) =
                    self.handle_input_event(event, hits.as_ref(), &mut runtime.needs_redraw)
                {
                    let _ = runtime.loop_event_tx.send(DomainEvent::Command(command));
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                runtime.needs_redraw = true;
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                // Manual navigation restarts the autoplay countdown.
                runtime.autoplay_tick.reset();
                if matches!(
                    self.dispatch_and_schedule(command, runtime),
                    CommandOutcome::QuitRequested
                ) {
                    return LoopControl::Break;
                }
            }
            WaitEvent::Event(DomainEvent::TransitionElapsed { generation }) => {
                if self.complete_transition(generation) {
                    self.activate_slide(self.state.current_slide);
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Event(DomainEvent::AnimTick) => {
                if self.anim.tick(FRAME_INTERVAL) {
                    runtime.needs_redraw = true;
                }
                // The slide-in interpolation redraws every frame while a
                // transition is in flight.
                if self.state.transition.is_active() {
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Event(DomainEvent::AutoplayTick) => {
                if !self.state.transition.is_active() {
                    self.dispatch_and_schedule(Command::NextSlide, runtime);
                }
            }
            WaitEvent::Closed => return LoopControl::Break,
        }
        LoopControl::Continue
    }

    /// Dispatch a command; an accepted transition gets its activation
    /// timer, a language change retitles the terminal.
    fn dispatch_and_schedule(
        &mut self,
        command: Command,
        runtime: &mut LoopRuntime,
    ) -> CommandOutcome {
        let result = self.dispatch_command(command);

        let transition_started = result
            .emitted_events
            .iter()
            .any(|event| matches!(event, AppEvent::SlideChanged { .. }));
        if transition_started {
            spawn_transition_timer(
                runtime.loop_event_tx.clone(),
                self.state.transition_seq,
                Duration::from_millis(self.config.slides.transition_ms),
            );
        }

        let language_changed = result
            .emitted_events
            .iter()
            .any(|event| matches!(event, AppEvent::LanguageChanged { .. }));
        if language_changed {
            let title = self.window_title();
            if let Err(err) = runtime.session.set_title(&title) {
                debug!(%err, "could not retitle terminal");
            }
        }

        runtime.needs_redraw = true;
        result.outcome
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    anim_tick: &mut time::Interval,
    autoplay_tick: &mut time::Interval,
    autoplay_enabled: bool,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = anim_tick.tick() => {
            WaitEvent::Event(DomainEvent::AnimTick)
        },
        _ = autoplay_tick.tick(), if autoplay_enabled => {
            WaitEvent::Event(DomainEvent::AutoplayTick)
        }
    }
}
