use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use crate::catalog::Catalog;
use crate::state::AppState;
use crate::theme::theme;
use crate::ui::helpers::{render_loading, titled_block};
use crate::ui::product_line;
use crate::util::format_downloads;

/// What: Headline numbers shown in the Home page stats band.
///
/// Output:
/// - `(label, value)` pairs for total downloads, total reviews and active apps, computed
///   from the catalog.
pub fn catalog_stats(catalog: &Catalog) -> [(&'static str, String); 3] {
    [
        ("Total Downloads", format_downloads(catalog.total_downloads())),
        ("Total Reviews", format_downloads(catalog.total_reviews())),
        ("Active Apps", catalog.len().to_string()),
    ]
}

/// Render the Home page: hero text, stats band and featured products.
pub fn render_home(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(area);

    let hero = vec![
        Line::from(vec![
            Span::styled(
                "We Build ",
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Productive Apps",
                Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Apps crafted to make everyday life simpler, smarter and more exciting.",
            Style::default().fg(th.subtext),
        )),
    ];
    f.render_widget(
        Paragraph::new(hero)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let stat_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[1]);
    for ((label, value), col) in catalog_stats(&app.catalog).into_iter().zip(stat_cols.iter()) {
        let para = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(titled_block(label));
        f.render_widget(para, *col);
    }

    let block = titled_block("Our Featured Apps");
    if app.loading {
        let inner = block.inner(rows[2]);
        f.render_widget(block, rows[2]);
        render_loading(f, inner, "Loading featured apps...", app.spinner_tick);
        return;
    }

    let mut items: Vec<ListItem> = app
        .featured_products()
        .iter()
        .map(|p| ListItem::new(product_line(p, app.is_installed(p.id))))
        .collect();
    items.push(ListItem::new(Line::from(Span::styled(
        "Show All Apps →",
        Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
    ))));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(th.highlight_bg))
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(app.home_selected));
    f.render_stateful_widget(list, rows[2], &mut state);
}
