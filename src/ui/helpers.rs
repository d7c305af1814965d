//! Shared rendering helpers: star ratings, loading/empty placeholders and geometry.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::theme::theme;
use crate::util::star_breakdown;

/// Braille spinner frames used for loading and searching indicators.
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Spinner glyph for a frame counter.
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// What: Render a rating as five star glyphs.
///
/// Inputs:
/// - `rating`: Average rating in `[0, 5]`.
///
/// Output:
/// - Spans of full (`★`), half (`⯪`) and empty (`☆`) stars, always five in total.
pub fn star_spans(rating: f64) -> Vec<Span<'static>> {
    let th = theme();
    let (full, half, empty) = star_breakdown(rating);
    let mut spans = Vec::with_capacity(3);
    if full > 0 {
        spans.push(Span::styled("★".repeat(full), Style::default().fg(th.star)));
    }
    if half > 0 {
        spans.push(Span::styled("⯪", Style::default().fg(th.star)));
    }
    if empty > 0 {
        spans.push(Span::styled("☆".repeat(empty), Style::default().fg(th.subtext)));
    }
    spans
}

/// Standard rounded block with a bold accent title.
pub fn titled_block(title: &str) -> Block<'static> {
    let th = theme();
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ))
}

/// What: Render a centered loading message with a spinner into `area`.
pub fn render_loading(f: &mut Frame, area: Rect, text: &str, tick: usize) {
    let th = theme();
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_frame(tick)),
            Style::default().fg(th.accent),
        ),
        Span::styled(text.to_string(), Style::default().fg(th.text)),
    ]);
    let para = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(para, vertical_center(area, 1));
}

/// What: Render a centered empty-state message (title plus hint) into `area`.
pub fn render_empty(f: &mut Frame, area: Rect, title: &str, hint: &str) {
    let th = theme();
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(th.subtext),
        )),
    ];
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, vertical_center(area, 2));
}

/// Row band of `height` lines centered vertically within `area`.
pub fn vertical_center(area: Rect, height: u16) -> Rect {
    let h = height.min(area.height);
    let y = area.y + (area.height - h) / 2;
    Rect {
        x: area.x,
        y,
        width: area.width,
        height: h,
    }
}

/// What: Carve a `width x height` rectangle anchored to the bottom-right corner of `area`.
///
/// Details:
/// - Leaves a one-cell margin from the right and bottom edges when space allows.
pub fn bottom_right(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + area.width - w - u16::from(area.width > w);
    let y = area.y + area.height - h - u16::from(area.height > h);
    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}
