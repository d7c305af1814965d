use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Paragraph, Wrap},
};

use crate::catalog::Product;
use crate::state::AppState;
use crate::theme::theme;
use crate::ui::helpers::{render_loading, star_spans, titled_block};
use crate::util::{fixed1, format_downloads, format_thousands};

/// What: Bullet points for the "Why choose" panel.
///
/// Output:
/// - Four sentences; the first two quote the product's downloads and average rating.
pub fn why_choose_lines(product: &Product) -> [String; 4] {
    [
        format!(
            "Trusted by {} users worldwide.",
            format_downloads(product.downloads)
        ),
        format!("Rated an average of {} stars.", fixed1(product.rating_avg)),
        "Regular updates with new features and improvements.".to_string(),
        "Dedicated support team available 24/7.".to_string(),
    ]
}

/// Label of the primary action for a product's install state.
pub fn action_label(installed: bool) -> &'static str {
    if installed { "Uninstall" } else { "Install Now" }
}

/// What: Render a Details page, falling back to the Not Found page for unknown or missing ids.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect, id: Option<u32>) {
    if app.loading {
        let block = titled_block("App Details");
        let inner = block.inner(area);
        f.render_widget(block, area);
        render_loading(f, inner, "Loading app details...", app.spinner_tick);
        return;
    }
    let Some(product) = id.and_then(|id| app.catalog.find(id)) else {
        render_not_found(f, area);
        return;
    };
    let th = theme();
    let installed = app.is_installed(product.id);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(8)])
        .split(cols[0]);

    let mut rating = vec![Span::styled(
        format!("{} ", fixed1(product.rating_avg)),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )];
    rating.extend(star_spans(product.rating_avg));
    rating.push(Span::styled(
        format!("  ({} reviews)", format_thousands(product.reviews)),
        Style::default().fg(th.subtext),
    ));

    let action_style = if installed {
        Style::default().fg(th.base).bg(th.error)
    } else {
        Style::default().fg(th.base).bg(th.accent)
    };
    let lines = vec![
        Line::from(Span::styled(
            product.company_name.clone(),
            Style::default().fg(th.accent),
        )),
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(rating),
        Line::from(vec![
            Span::styled("Downloads ", Style::default().fg(th.subtext)),
            Span::styled(
                format_downloads(product.downloads),
                Style::default().fg(th.text),
            ),
            Span::styled("   Size ", Style::default().fg(th.subtext)),
            Span::styled(format!("{} MB", product.size), Style::default().fg(th.text)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", action_label(installed)),
                action_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [Enter]", Style::default().fg(th.subtext)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            product.description.clone(),
            Style::default().fg(th.text),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .block(titled_block("App Details"))
            .wrap(Wrap { trim: true })
            .scroll((app.details_scroll, 0)),
        left[0],
    );

    let data: Vec<(&str, u64)> = product
        .review_data
        .iter()
        .map(|r| (r.name.as_str(), r.value))
        .collect();
    let chart = BarChart::default()
        .block(titled_block("Review Analytics"))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(th.star))
        .value_style(Style::default().fg(th.text))
        .label_style(Style::default().fg(th.subtext))
        .data(data.as_slice());
    f.render_widget(chart, left[1]);

    let bullets: Vec<Line> = why_choose_lines(product)
        .into_iter()
        .map(|s| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(th.accent)),
                Span::styled(s, Style::default().fg(th.text)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(bullets)
            .block(titled_block(&format!("Why Choose {}?", product.title)))
            .wrap(Wrap { trim: true }),
        cols[1],
    );
}

/// Render the non-fatal page shown for a product id that is not in the catalog.
pub fn render_not_found(f: &mut Frame, area: Rect) {
    let th = theme();
    let block = titled_block("Not Found");
    let inner = block.inner(area);
    f.render_widget(block, area);
    let lines = vec![
        Line::from(Span::styled(
            "404 - App Not Found",
            Style::default().fg(th.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "The application you are looking for does not exist.",
            Style::default().fg(th.subtext),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to go back to Apps",
            Style::default().fg(th.accent),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        crate::ui::helpers::vertical_center(inner, 4),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    /// What: "Why choose" bullets quote downloads and the one-decimal rating.
    fn details_why_choose_mentions_stats() {
        let p = fixtures::product(1, "A", "Alpha Corp", 4.0, 9_000_000);
        let lines = why_choose_lines(&p);
        assert_eq!(lines[0], "Trusted by 9.0M+ users worldwide.");
        assert_eq!(lines[1], "Rated an average of 4.0 stars.");
    }

    #[test]
    /// What: The action label reflects the install state.
    fn details_action_label() {
        assert_eq!(action_label(false), "Install Now");
        assert_eq!(action_label(true), "Uninstall");
    }
}
