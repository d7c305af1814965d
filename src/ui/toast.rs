use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Notification, NotificationKind};
use crate::theme::theme;
use crate::ui::helpers::bottom_right;

/// What: Render a notification in the bottom-right corner of `area`.
///
/// Details:
/// - Border and icon colors follow the notification kind; the overlay clears what is beneath.
pub fn render_toast(f: &mut Frame, area: Rect, toast: &Notification) {
    let th = theme();
    let (color, icon) = match toast.kind {
        NotificationKind::Success => (th.success, "✔"),
        NotificationKind::Error => (th.error, "✖"),
        NotificationKind::Neutral => (th.neutral, "ℹ"),
    };
    let width = (toast.message.chars().count() as u16).saturating_add(8).min(48);
    let rect = bottom_right(area, width, 3);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(" x ", Style::default().fg(th.subtext)));
    let line = Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(toast.message.clone(), Style::default().fg(th.text)),
    ]);
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
