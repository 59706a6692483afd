use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::anim::{AnimationScheduler, CounterAnimation, ElementId};
use crate::app::{AppState, Transition};
use crate::deck::DeckSource;
use crate::i18n;

/// Draw the current slide into the stage. The navigation core only
/// flips the target index; the slide-in interpolation lives here, in
/// the render layer.
pub fn draw_slide(
    frame: &mut Frame<'_>,
    stage: Rect,
    app: &AppState,
    deck: &dyn DeckSource,
    anim: &AnimationScheduler,
    transition_ms: u64,
) {
    if stage.width == 0 || stage.height == 0 {
        return;
    }
    let Some(slide) = deck.slide(app.current_slide) else {
        return;
    };

    let inner = sliding_rect(stage, &app.transition, transition_ms);
    if inner.width == 0 {
        return;
    }

    let gauge_rows = slide.progress.len().min(usize::from(inner.height)) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(gauge_rows)])
        .split(inner);
    let text_area = chunks[0];

    let lang = &app.language;
    let index = app.current_slide;
    let revealed = anim.revealed_blocks(index).unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        fit_to_width(i18n::resolve(deck, lang, &slide.title), text_area.width),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for (ordinal, block) in slide.blocks.iter().enumerate() {
        if ordinal >= revealed {
            // Unrevealed blocks hold their lines so the layout is stable.
            lines.push(Line::default());
            continue;
        }
        let text = i18n::resolve(deck, lang, &block.text);
        let rendered = if block.bullet {
            format!("• {text}")
        } else {
            text.to_string()
        };
        lines.push(Line::from(fit_to_width(&rendered, text_area.width)));
    }

    if !slide.counters.is_empty() {
        lines.push(Line::default());
    }
    for (ordinal, spec) in slide.counters.iter().enumerate() {
        let id = ElementId::counter(index, ordinal);
        let display = match anim.counter_display(id) {
            Some(display) => display.to_string(),
            None => CounterAnimation::initial_display(spec),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i18n::resolve(deck, lang, &spec.label))),
            Span::styled(
                display,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let top_pad = usize::from(text_area.height).saturating_sub(lines.len()) / 2;
    let mut padded = vec![Line::default(); top_pad];
    padded.extend(lines);

    frame.render_widget(
        Paragraph::new(padded).alignment(Alignment::Center),
        text_area,
    );

    let gauge_area = chunks[1];
    for (ordinal, spec) in slide.progress.iter().enumerate().take(gauge_rows as usize) {
        let id = ElementId::progress(index, ordinal);
        let fill = anim.progress_display(id).unwrap_or(0.0);
        let row = Rect::new(
            gauge_area.x,
            gauge_area.y + ordinal as u16,
            gauge_area.width,
            1,
        );
        let gauge = Gauge::default()
            .ratio((fill / 100.0).clamp(0.0, 1.0))
            .label(format!(
                "{} {:.0}%",
                i18n::resolve(deck, lang, &spec.label),
                fill
            ))
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray));
        frame.render_widget(gauge, row);
    }
}

/// Horizontal slide-in: a forward transition enters from the right, a
/// backward one from the left, easing to rest over the transition
/// duration.
fn sliding_rect(stage: Rect, transition: &Transition, transition_ms: u64) -> Rect {
    let Transition::Active { from, to, .. } = transition else {
        return stage;
    };

    let progress = transition.progress(Instant::now(), transition_ms);
    let travel = ((1.0 - ease_out_quart(progress)) * f64::from(stage.width)).round() as u16;
    if travel == 0 {
        return stage;
    }
    let width = stage.width.saturating_sub(travel);

    if to > from {
        Rect::new(stage.x + travel, stage.y, width, stage.height)
    } else {
        Rect::new(stage.x, stage.y, width, stage.height)
    }
}

fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Grapheme-safe truncation to a cell budget.
fn fit_to_width(text: &str, width: u16) -> String {
    let budget = usize::from(width);
    if text.width() <= budget {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let cells = grapheme.width();
        if used + cells > budget.saturating_sub(1) {
            break;
        }
        out.push_str(grapheme);
        used += cells;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::layout::Rect;

    use crate::app::Transition;

    use super::{ease_out_quart, fit_to_width, sliding_rect};

    #[test]
    fn ease_out_quart_hits_both_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }

    #[test]
    fn sliding_rect_settles_once_the_transition_ends() {
        let stage = Rect::new(0, 0, 100, 30);
        assert_eq!(sliding_rect(stage, &Transition::Idle, 800), stage);

        // A transition that started long ago has fully settled.
        let done = Transition::Active {
            from: 0,
            to: 1,
            generation: 1,
            started_at: Instant::now() - std::time::Duration::from_secs(5),
        };
        assert_eq!(sliding_rect(stage, &done, 800), stage);

        // A freshly started forward transition starts off-stage right.
        let fresh = Transition::Active {
            from: 0,
            to: 1,
            generation: 1,
            started_at: Instant::now(),
        };
        let rect = sliding_rect(stage, &fresh, 800);
        assert!(rect.x > stage.x);
        assert!(rect.width < stage.width);
    }

    #[test]
    fn fit_to_width_truncates_on_grapheme_boundaries() {
        assert_eq!(fit_to_width("hola", 10), "hola");
        let truncated = fit_to_width("diagnóstico temprano", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.chars().count() <= 10);
    }
}
