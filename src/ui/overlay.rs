use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::input::GotoEntry;

use super::layout::centered_rect;

/// "Go to slide" popup. Drawn with a software caret to avoid terminal
/// cursor ghosting.
pub fn draw_goto_overlay(frame: &mut Frame<'_>, area: Rect, entry: &GotoEntry, slide_count: usize) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup_width = area.width.min(30);
    let popup_height = area.height.min(3);
    let popup = centered_rect(area, popup_width, popup_height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" Go to slide (1-{slide_count}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let value = entry.value();
    let cursor = value
        .char_indices()
        .nth(entry.cursor())
        .map_or(value.len(), |(index, _)| index);
    let (before, after) = value.split_at(cursor);
    let caret = after.chars().next().map_or(" ".to_string(), String::from);
    let rest: String = after.chars().skip(1).collect();

    let line = Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled(caret, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(rest),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
