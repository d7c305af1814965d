use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::ui::helpers::{render_empty, render_loading, spinner_frame, titled_block};
use crate::ui::product_line;

/// Render the Apps page: counts and sort header, search input and the results list.
pub fn render_apps(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    if app.loading {
        let block = titled_block("All Apps");
        let inner = block.inner(area);
        f.render_widget(block, area);
        render_loading(f, inner, "Loading all apps...", app.spinner_tick);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled("Total Apps: ", Style::default().fg(th.text).add_modifier(Modifier::BOLD)),
        Span::styled(
            app.results.len().to_string(),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[s] ", Style::default().fg(th.subtext)),
        Span::styled(app.sort_mode.label(), Style::default().fg(th.text)),
    ]);
    f.render_widget(Paragraph::new(header), rows[0]);

    let searching = app.is_searching(Instant::now());
    let mut search_title = "Search Apps".to_string();
    if searching {
        search_title = format!("Search Apps {} searching", spinner_frame(app.spinner_tick));
    }
    let search_block = titled_block(&search_title).border_style(Style::default().fg(
        if app.focus == Focus::Search {
            th.accent
        } else {
            th.border
        },
    ));
    let input_line = if app.input.is_empty() && app.focus != Focus::Search {
        Line::from(Span::styled(
            "Press / to search by title or company",
            Style::default().fg(th.subtext),
        ))
    } else {
        Line::from(Span::styled(app.input.clone(), Style::default().fg(th.text)))
    };
    let search_inner = search_block.inner(rows[1]);
    f.render_widget(Paragraph::new(input_line).block(search_block), rows[1]);
    if app.focus == Focus::Search {
        let x = search_inner.x + (app.input.chars().count() as u16).min(search_inner.width);
        f.set_cursor_position(Position::new(x, search_inner.y));
    }

    let list_block = titled_block("All Apps");
    if app.results.is_empty() {
        let inner = list_block.inner(rows[2]);
        f.render_widget(list_block, rows[2]);
        render_empty(
            f,
            inner,
            "No applications found matching your criteria.",
            "Try adjusting your search query or filters.",
        );
        return;
    }
    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|p| ListItem::new(product_line(p, app.installed.contains(p.id))))
        .collect();
    let list = List::new(items)
        .block(list_block)
        .highlight_style(Style::default().bg(th.highlight_bg))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, rows[2], &mut app.apps_state);
}
