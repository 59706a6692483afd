use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub stage: Rect,
    pub chrome: Rect,
}

/// Reserve one chrome row at the bottom; in fullscreen the stage gets
/// the whole area and the chrome collapses to zero height.
pub fn split_layout(area: Rect, chrome_visible: bool) -> UiLayout {
    let chrome_height = if chrome_visible { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(chrome_height)])
        .split(area);

    UiLayout {
        stage: chunks[0],
        chrome: chunks[1],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

const ARROW_ZONE_WIDTH: u16 = 3;

/// Clickable regions of the chrome row: the prev/next arrows and the
/// indicator dots. Computed from the same layout the chrome draws with,
/// so hits and pixels agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeHits {
    pub prev: Rect,
    pub next: Rect,
    pub dots: Rect,
    slide_count: usize,
}

impl ChromeHits {
    pub fn compute(chrome: Rect, slide_count: usize) -> Self {
        let prev = Rect::new(
            chrome.x,
            chrome.y,
            ARROW_ZONE_WIDTH.min(chrome.width),
            chrome.height.min(1),
        );
        let next_x = chrome
            .right()
            .saturating_sub(ARROW_ZONE_WIDTH)
            .max(chrome.x);
        let next = Rect::new(
            next_x,
            chrome.y,
            ARROW_ZONE_WIDTH.min(chrome.width),
            chrome.height.min(1),
        );

        let dots_width = dots_width(slide_count).min(chrome.width);
        let dots_x = chrome.x + (chrome.width.saturating_sub(dots_width)) / 2;
        let dots = Rect::new(dots_x, chrome.y, dots_width, chrome.height.min(1));

        Self {
            prev,
            next,
            dots,
            slide_count,
        }
    }

    /// Map a click to a command: arrows step, a dot jumps to its slide.
    pub fn hit(&self, column: u16, row: u16) -> Option<Command> {
        let position = Position::new(column, row);
        if self.prev.contains(position) {
            return Some(Command::PrevSlide);
        }
        if self.next.contains(position) {
            return Some(Command::NextSlide);
        }
        if self.dots.contains(position) {
            let offset = column - self.dots.x;
            // Dots sit on even columns with a one-cell gap between.
            if offset % 2 == 0 {
                let index = usize::from(offset / 2);
                if index < self.slide_count {
                    return Some(Command::GotoSlide { index });
                }
            }
        }
        None
    }
}

pub(crate) fn dots_width(slide_count: usize) -> u16 {
    match slide_count {
        0 => 0,
        count => (count * 2 - 1).min(u16::MAX as usize) as u16,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::command::Command;

    use super::{ChromeHits, split_layout};

    #[test]
    fn split_layout_reserves_the_chrome_row() {
        let area = Rect::new(0, 0, 120, 40);

        let layout = split_layout(area, true);
        assert_eq!(layout.chrome.height, 1);
        assert_eq!(layout.stage.height, 39);

        let fullscreen = split_layout(area, false);
        assert_eq!(fullscreen.chrome.height, 0);
        assert_eq!(fullscreen.stage.height, 40);
    }

    #[test]
    fn chrome_hits_map_arrows_and_dots_to_commands() {
        let chrome = Rect::new(0, 39, 120, 1);
        let hits = ChromeHits::compute(chrome, 10);

        assert_eq!(hits.hit(0, 39), Some(Command::PrevSlide));
        assert_eq!(hits.hit(119, 39), Some(Command::NextSlide));

        // Ten dots span 19 cells centered at column 50.
        assert_eq!(hits.dots.x, 50);
        assert_eq!(hits.hit(50, 39), Some(Command::GotoSlide { index: 0 }));
        assert_eq!(hits.hit(54, 39), Some(Command::GotoSlide { index: 2 }));
        assert_eq!(hits.hit(68, 39), Some(Command::GotoSlide { index: 9 }));
        // A gap between dots is not a target.
        assert_eq!(hits.hit(51, 39), None);
        // Clicks on the wrong row miss.
        assert_eq!(hits.hit(50, 10), None);
    }
}
