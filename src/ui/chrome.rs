use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;

use super::layout::ChromeHits;

/// Bottom chrome row: prev/next arrows, indicator dots, the
/// `position / total` counter and the active language tag. All of it
/// reads state that was updated synchronously at transition accept
/// time, so indicators never lag the visual slide swap.
pub fn draw_chrome(
    frame: &mut Frame<'_>,
    hits: &ChromeHits,
    app: &AppState,
    slide_count: usize,
    loop_enabled: bool,
) {
    let prev_enabled = loop_enabled || !app.is_first();
    let next_enabled = loop_enabled || !app.is_last(slide_count);

    frame.render_widget(arrow("◀", prev_enabled), hits.prev);
    frame.render_widget(arrow("▶", next_enabled), hits.next);

    let mut dots = Vec::with_capacity(slide_count * 2);
    for index in 0..slide_count {
        if index > 0 {
            dots.push(Span::raw(" "));
        }
        let style = if index == app.current_slide {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        dots.push(Span::styled("●", style));
    }
    frame.render_widget(Paragraph::new(Line::from(dots)), hits.dots);

    let left = Rect::new(
        hits.prev.right(),
        hits.prev.y,
        hits.dots.x.saturating_sub(hits.prev.right()),
        1,
    );
    if left.width > 0 {
        let status = Paragraph::new(app.status.message.clone())
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status, left);
    }

    let right = Rect::new(
        hits.dots.right(),
        hits.dots.y,
        hits.next.x.saturating_sub(hits.dots.right()),
        1,
    );
    if right.width > 0 {
        let counter = format!(
            "{} / {} · {} ",
            app.current_slide + 1,
            slide_count,
            app.language
        );
        frame.render_widget(Paragraph::new(counter).alignment(Alignment::Right), right);
    }
}

fn arrow(glyph: &str, enabled: bool) -> Paragraph<'_> {
    let style = if enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    Paragraph::new(glyph)
        .alignment(Alignment::Center)
        .style(style)
}
