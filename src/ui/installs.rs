use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::ui::helpers::{render_empty, render_loading, titled_block};
use crate::ui::product_line;

/// Render the My Installations page.
pub fn render_installs(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    if app.loading {
        let block = titled_block("My Installations");
        let inner = block.inner(area);
        f.render_widget(block, area);
        render_loading(f, inner, "Checking your installed apps...", app.spinner_tick);
        return;
    }

    let installed = app.installed_products();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);
    let header = Line::from(vec![
        Span::styled(
            "Total Installed Apps: ",
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            installed.len().to_string(),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), rows[0]);

    let block = titled_block("My Installations");
    if installed.is_empty() {
        let inner = block.inner(rows[1]);
        f.render_widget(block, rows[1]);
        render_empty(
            f,
            inner,
            "You haven't installed any apps yet.",
            "Browse the Apps page and install something you like.",
        );
        return;
    }
    let items: Vec<ListItem> = installed
        .iter()
        .map(|p| ListItem::new(product_line(p, false)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(th.highlight_bg))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, rows[1], &mut app.installs_state);
}
