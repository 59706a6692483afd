use std::time::Duration;

use crate::deck::ProgressSpec;

/// One-shot percentage reveal: the displayed fill stays at zero for a
/// fixed delay, then jumps to the target. Easing between the two is
/// the render layer's business, not computed here.
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    target: f64,
    delay_left: Duration,
    displayed: f64,
    done: bool,
}

impl ProgressAnimation {
    pub fn new(spec: &ProgressSpec, start_delay: Duration) -> Self {
        Self {
            target: spec.percent,
            delay_left: start_delay,
            displayed: 0.0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Advance one frame. Returns true when the displayed value changed.
    pub fn tick(&mut self, frame: Duration) -> bool {
        if self.done {
            return false;
        }

        if self.delay_left > frame {
            self.delay_left -= frame;
            return false;
        }

        self.delay_left = Duration::ZERO;
        self.displayed = self.target;
        self.done = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::deck::ProgressSpec;

    use super::ProgressAnimation;

    #[test]
    fn fill_stays_at_zero_until_the_start_delay_elapses() {
        let spec = ProgressSpec {
            percent: 80.0,
            label: "bar".to_string(),
        };
        let frame = Duration::from_millis(16);
        let mut anim = ProgressAnimation::new(&spec, Duration::from_millis(300));

        let mut frames = 0;
        while !anim.tick(frame) {
            assert_eq!(anim.displayed(), 0.0);
            frames += 1;
            assert!(frames < 100, "progress must eventually fire");
        }

        assert_eq!(anim.displayed(), 80.0);
        assert!(anim.is_done());
        // 300ms at 16ms per frame: the jump lands on the 19th frame.
        assert_eq!(frames, 18);

        assert!(!anim.tick(frame));
        assert_eq!(anim.displayed(), 80.0);
    }
}
