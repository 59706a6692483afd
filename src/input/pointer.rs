use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// What a completed press/release pair amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerGesture {
    /// Horizontal drag past the swipe threshold. `forward` follows the
    /// touch convention: dragging left (start right of end) advances.
    Swipe { forward: bool },
    /// Sub-threshold release; position is where the button went up.
    Click { column: u16, row: u16 },
}

/// Tracks one button press at a time and classifies the release.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    press_column: Option<u16>,
}

impl PointerTracker {
    /// Feed a mouse event; returns a gesture on button release.
    pub fn on_mouse(&mut self, event: MouseEvent, swipe_threshold: u16) -> Option<PointerGesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press_column = Some(event.column);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.press_column.take()?;
                let diff = i32::from(start) - i32::from(event.column);
                if diff.unsigned_abs() > u32::from(swipe_threshold) {
                    Some(PointerGesture::Swipe { forward: diff > 0 })
                } else {
                    Some(PointerGesture::Click {
                        column: event.column,
                        row: event.row,
                    })
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    use super::{PointerGesture, PointerTracker};

    fn down(column: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: 10,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn up(column: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column,
            row: 10,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn drag_at_threshold_is_not_a_swipe_but_just_past_it_is() {
        let mut tracker = PointerTracker::default();

        // 49 cells of travel: below the 50-cell threshold.
        tracker.on_mouse(down(100), 50);
        assert_eq!(
            tracker.on_mouse(up(51), 50),
            Some(PointerGesture::Click { column: 51, row: 10 })
        );

        // Exactly 50: still not a swipe (strictly greater wins).
        tracker.on_mouse(down(100), 50);
        assert_eq!(
            tracker.on_mouse(up(50), 50),
            Some(PointerGesture::Click { column: 50, row: 10 })
        );

        // 51 cells leftwards: forward swipe.
        tracker.on_mouse(down(100), 50);
        assert_eq!(
            tracker.on_mouse(up(49), 50),
            Some(PointerGesture::Swipe { forward: true })
        );

        // 51 cells rightwards: backward swipe.
        tracker.on_mouse(down(49), 50);
        assert_eq!(
            tracker.on_mouse(up(100), 50),
            Some(PointerGesture::Swipe { forward: false })
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.on_mouse(up(10), 50), None);
    }
}
