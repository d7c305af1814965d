//! TUI rendering for the store.
//!
//! `ui` draws the navigation bar, the page for the current route, the optional
//! key hints footer and the toast overlay. Page bodies live in submodules.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::catalog::Product;
use crate::state::{AppState, Focus, Route};
use crate::theme::theme;
use crate::util::{current_year, fixed1, format_downloads};

mod apps;
mod details;
pub mod helpers;
mod home;
mod installs;
mod nav;
mod toast;

/// What: Render one full frame of the store.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Mutable state (list selections are updated by stateful widgets)
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.show_keybinds_footer);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(footer_h),
        ])
        .split(area);

    nav::render_nav(f, app, rows[0]);
    match app.route {
        Route::Home => home::render_home(f, app, rows[1]),
        Route::Apps => apps::render_apps(f, app, rows[1]),
        Route::Details(id) => details::render_details(f, app, rows[1], id),
        Route::MyInstallations => installs::render_installs(f, app, rows[1]),
    }
    if app.show_keybinds_footer {
        render_footer(f, app, rows[2]);
    }
    if let Some(t) = &app.toast {
        toast::render_toast(f, area, t);
    }
}

/// What: One-line summary of a product used by every list on every page.
///
/// Inputs:
/// - `p`: Product to describe
/// - `installed`: Whether to append the installed marker
pub fn product_line(p: &Product, installed: bool) -> Line<'static> {
    let th = theme();
    let mut spans = vec![
        Span::styled(
            p.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", p.company_name),
            Style::default().fg(th.subtext),
        ),
        Span::styled(
            format!("  ★ {}", fixed1(p.rating_avg)),
            Style::default().fg(th.star),
        ),
        Span::styled(
            format!("  ⬇ {}", format_downloads(p.downloads)),
            Style::default().fg(th.accent),
        ),
    ];
    if installed {
        spans.push(Span::styled(
            "  ✔ Installed",
            Style::default().fg(th.success),
        ));
    }
    Line::from(spans)
}

/// Key hints relevant to the current page and focus.
fn footer_hints(app: &AppState) -> &'static str {
    match (app.route, app.focus) {
        (Route::Apps, Focus::Search) => "type to search  Backspace delete  Esc/Enter done",
        (Route::Apps, _) => {
            "↑/↓ move  Enter details  / search  s sort  i install  u uninstall  q quit"
        }
        (Route::Details(_), _) => {
            "Enter install/uninstall  i install  u uninstall  ↑/↓ scroll  Esc back  q quit"
        }
        (Route::MyInstallations, _) => "↑/↓ move  Enter details  u uninstall  Esc home  q quit",
        (Route::Home, _) => {
            "↑/↓ move  Enter open  i install  1/2/3 or Tab pages  x dismiss  q quit"
        }
    }
}

fn render_footer(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let line = Line::from(vec![
        Span::styled(footer_hints(app), Style::default().fg(th.subtext)),
        Span::styled(
            format!("   © {} appshelf", current_year()),
            Style::default().fg(th.border),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
