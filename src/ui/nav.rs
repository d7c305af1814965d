use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};

use crate::state::AppState;
use crate::theme::theme;

/// Product name shown at the left of the navigation bar.
pub const BRAND: &str = "appshelf";

/// What: Labels for the three navigation tabs.
///
/// Output:
/// - `["Home", "Apps", "Installation"]`, the last one suffixed with the installed count
///   badge when at least one product is installed.
pub fn tab_labels(installed: usize) -> [String; 3] {
    let installs = if installed > 0 {
        format!("Installation ({installed})")
    } else {
        "Installation".to_string()
    };
    ["Home".to_string(), "Apps".to_string(), installs]
}

/// Render the top navigation bar: brand, page tabs and the current path.
pub fn render_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let path = format!("/{}", app.route.as_path());
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BRAND.len() as u16 + 2),
            Constraint::Min(10),
            Constraint::Length(path.len() as u16 + 1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            BRAND,
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        cols[0],
    );

    let titles: Vec<Line> = tab_labels(app.installed.len())
        .into_iter()
        .map(Line::from)
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.route.tab_index())
        .style(Style::default().fg(th.subtext))
        .highlight_style(
            Style::default()
                .fg(th.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(th.border)));
    f.render_widget(tabs, cols[1]);

    f.render_widget(
        Paragraph::new(Span::styled(path, Style::default().fg(th.subtext))),
        cols[2],
    );
}
