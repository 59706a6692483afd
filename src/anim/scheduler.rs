use std::collections::HashMap;
use std::time::Duration;

use crate::config::Config;
use crate::deck::Slide;

use super::counter::CounterAnimation;
use super::progress::ProgressAnimation;
use super::{FRAME_INTERVAL, PROGRESS_START_DELAY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Counter,
    Progress,
}

/// Addresses one animated display element on one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub slide: usize,
    pub kind: ElementKind,
    pub ordinal: usize,
}

impl ElementId {
    pub fn counter(slide: usize, ordinal: usize) -> Self {
        Self {
            slide,
            kind: ElementKind::Counter,
            ordinal,
        }
    }

    pub fn progress(slide: usize, ordinal: usize) -> Self {
        Self {
            slide,
            kind: ElementKind::Progress,
            ordinal,
        }
    }
}

struct StaggeredCounter {
    id: ElementId,
    delay_left: Duration,
    anim: CounterAnimation,
}

struct StaggeredProgress {
    id: ElementId,
    delay_left: Duration,
    anim: ProgressAnimation,
}

struct Reveal {
    slide: usize,
    total: usize,
    visible: usize,
    until_next: Duration,
}

/// Owns every live animation, keyed by slide and element. Driven by
/// the frame tick; a slide's animations are dropped wholesale when it
/// deactivates, so a stale counter can never keep writing to a display
/// the user has navigated away from.
pub struct AnimationScheduler {
    enabled: bool,
    stagger: Duration,
    counter_duration: Duration,
    counters: Vec<StaggeredCounter>,
    progress: Vec<StaggeredProgress>,
    reveal: Option<Reveal>,
    counter_text: HashMap<ElementId, String>,
    progress_fill: HashMap<ElementId, f64>,
}

impl AnimationScheduler {
    pub fn new(config: &Config) -> Self {
        Self {
            enabled: config.animations.enabled,
            stagger: Duration::from_millis(config.animations.stagger_ms),
            counter_duration: Duration::from_millis(config.counters.duration_ms),
            counters: Vec::new(),
            progress: Vec::new(),
            reveal: None,
            counter_text: HashMap::new(),
            progress_fill: HashMap::new(),
        }
    }

    /// Entrance hook: starts the slide's staggered reveal, counters and
    /// progress bars. A slide without animated elements is a no-op.
    pub fn start_slide(&mut self, index: usize, slide: &Slide) {
        if !self.enabled {
            for (ordinal, spec) in slide.counters.iter().enumerate() {
                let anim = CounterAnimation::new(spec, self.counter_duration, FRAME_INTERVAL);
                self.counter_text
                    .insert(ElementId::counter(index, ordinal), anim.final_display());
            }
            for (ordinal, spec) in slide.progress.iter().enumerate() {
                self.progress_fill
                    .insert(ElementId::progress(index, ordinal), spec.percent);
            }
            self.reveal = Some(Reveal {
                slide: index,
                total: slide.block_count(),
                visible: slide.block_count(),
                until_next: Duration::ZERO,
            });
            return;
        }

        for (ordinal, spec) in slide.counters.iter().enumerate() {
            let id = ElementId::counter(index, ordinal);
            self.counter_text
                .insert(id, CounterAnimation::initial_display(spec));
            self.counters.push(StaggeredCounter {
                id,
                delay_left: self.stagger * ordinal as u32,
                anim: CounterAnimation::new(spec, self.counter_duration, FRAME_INTERVAL),
            });
        }

        for (ordinal, spec) in slide.progress.iter().enumerate() {
            let id = ElementId::progress(index, ordinal);
            self.progress_fill.insert(id, 0.0);
            self.progress.push(StaggeredProgress {
                id,
                delay_left: self.stagger * ordinal as u32,
                anim: ProgressAnimation::new(spec, PROGRESS_START_DELAY),
            });
        }

        let total = slide.block_count();
        let visible = if self.stagger.is_zero() {
            total
        } else {
            total.min(1)
        };
        self.reveal = Some(Reveal {
            slide: index,
            total,
            visible,
            until_next: self.stagger,
        });
    }

    /// Exit hook: drops the slide's in-flight animations and displays.
    pub fn cancel_slide(&mut self, index: usize) {
        self.counters.retain(|entry| entry.id.slide != index);
        self.progress.retain(|entry| entry.id.slide != index);
        self.counter_text.retain(|id, _| id.slide != index);
        self.progress_fill.retain(|id, _| id.slide != index);
        if self
            .reveal
            .as_ref()
            .is_some_and(|reveal| reveal.slide == index)
        {
            self.reveal = None;
        }
    }

    /// Advance every live animation by one frame. Returns true when any
    /// displayed value changed.
    pub fn tick(&mut self, frame: Duration) -> bool {
        let mut changed = false;

        for entry in &mut self.counters {
            if entry.delay_left > frame {
                entry.delay_left -= frame;
                continue;
            }
            entry.delay_left = Duration::ZERO;
            if let Some(text) = entry.anim.tick() {
                self.counter_text.insert(entry.id, text);
                changed = true;
            }
        }
        self.counters.retain(|entry| !entry.anim.is_done());

        for entry in &mut self.progress {
            if entry.delay_left > frame {
                entry.delay_left -= frame;
                continue;
            }
            entry.delay_left = Duration::ZERO;
            if entry.anim.tick(frame) {
                self.progress_fill.insert(entry.id, entry.anim.displayed());
                changed = true;
            }
        }
        self.progress.retain(|entry| !entry.anim.is_done());

        if let Some(reveal) = &mut self.reveal
            && reveal.visible < reveal.total
        {
            if reveal.until_next > frame {
                reveal.until_next -= frame;
            } else {
                reveal.visible += 1;
                reveal.until_next = self.stagger;
                changed = true;
            }
        }

        changed
    }

    pub fn counter_display(&self, id: ElementId) -> Option<&str> {
        self.counter_text.get(&id).map(String::as_str)
    }

    pub fn progress_display(&self, id: ElementId) -> Option<f64> {
        self.progress_fill.get(&id).copied()
    }

    /// How many body blocks of the slide are revealed. `None` until the
    /// slide's entrance has been triggered.
    pub fn revealed_blocks(&self, slide: usize) -> Option<usize> {
        self.reveal
            .as_ref()
            .filter(|reveal| reveal.slide == slide)
            .map(|reveal| reveal.visible)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::Config;
    use crate::deck::{Block, CounterSpec, ProgressSpec, Slide};

    use super::{AnimationScheduler, ElementId};

    const FRAME: Duration = Duration::from_millis(16);

    fn slide_with_elements() -> Slide {
        Slide {
            title: "s.title".to_string(),
            blocks: vec![
                Block {
                    text: "s.b1".to_string(),
                    bullet: false,
                },
                Block {
                    text: "s.b2".to_string(),
                    bullet: true,
                },
                Block {
                    text: "s.b3".to_string(),
                    bullet: true,
                },
            ],
            counters: vec![
                CounterSpec {
                    target: 10.0,
                    decimals: 0,
                    prefix: String::new(),
                    suffix: String::new(),
                    label: "s.c1".to_string(),
                },
                CounterSpec {
                    target: 5.0,
                    decimals: 0,
                    prefix: String::new(),
                    suffix: String::new(),
                    label: "s.c2".to_string(),
                },
            ],
            progress: vec![ProgressSpec {
                percent: 60.0,
                label: "s.p1".to_string(),
            }],
        }
    }

    #[test]
    fn stagger_delays_later_elements() {
        let mut config = Config::default();
        config.animations.stagger_ms = 160;
        config.counters.duration_ms = 64;
        let mut scheduler = AnimationScheduler::new(&config);

        scheduler.start_slide(2, &slide_with_elements());
        scheduler.tick(FRAME);

        // First counter is already moving; the second still shows its
        // initial zero display while its stagger delay runs down.
        let first = scheduler
            .counter_display(ElementId::counter(2, 0))
            .expect("first counter display");
        assert_ne!(first, "0");
        let second = scheduler
            .counter_display(ElementId::counter(2, 1))
            .expect("second counter display");
        assert_eq!(second, "0");

        for _ in 0..16 {
            scheduler.tick(FRAME);
        }
        let second = scheduler
            .counter_display(ElementId::counter(2, 1))
            .expect("second counter display");
        assert_eq!(second, "5");
    }

    #[test]
    fn reveal_steps_through_blocks_at_stagger_cadence() {
        let mut config = Config::default();
        config.animations.stagger_ms = 32;
        let mut scheduler = AnimationScheduler::new(&config);

        scheduler.start_slide(0, &slide_with_elements());
        assert_eq!(scheduler.revealed_blocks(0), Some(1));
        assert_eq!(scheduler.revealed_blocks(1), None);

        scheduler.tick(FRAME);
        assert_eq!(scheduler.revealed_blocks(0), Some(1));
        scheduler.tick(FRAME);
        assert_eq!(scheduler.revealed_blocks(0), Some(2));

        for _ in 0..4 {
            scheduler.tick(FRAME);
        }
        assert_eq!(scheduler.revealed_blocks(0), Some(3));
    }

    #[test]
    fn cancel_slide_drops_animations_and_displays() {
        let config = Config::default();
        let mut scheduler = AnimationScheduler::new(&config);

        scheduler.start_slide(1, &slide_with_elements());
        scheduler.tick(FRAME);
        assert!(scheduler.counter_display(ElementId::counter(1, 0)).is_some());

        scheduler.cancel_slide(1);
        assert!(scheduler.counter_display(ElementId::counter(1, 0)).is_none());
        assert!(scheduler
            .progress_display(ElementId::progress(1, 0))
            .is_none());
        assert_eq!(scheduler.revealed_blocks(1), None);

        // A cancelled slide's animations never resume.
        assert!(!scheduler.tick(FRAME));
    }

    #[test]
    fn disabled_animations_jump_to_final_values() {
        let mut config = Config::default();
        config.animations.enabled = false;
        let mut scheduler = AnimationScheduler::new(&config);

        scheduler.start_slide(0, &slide_with_elements());
        assert_eq!(
            scheduler.counter_display(ElementId::counter(0, 0)),
            Some("10")
        );
        assert_eq!(
            scheduler.progress_display(ElementId::progress(0, 0)),
            Some(60.0)
        );
        assert_eq!(scheduler.revealed_blocks(0), Some(3));
    }
}
