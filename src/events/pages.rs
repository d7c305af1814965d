use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{install, move_selection, navigate, open_details, toggle_install, uninstall};
use crate::state::{AppState, Route};

/// What: Handle a key on the Home page.
///
/// Details:
/// - `Up`/`Down` move across the featured cards and the trailing "Show All Apps" slot.
/// - `Enter` opens the highlighted card or, on the last slot, the Apps page.
/// - `i` installs the highlighted card without leaving Home.
pub(super) fn handle_home_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Enter => {
            let featured = app.featured_products();
            match featured.get(app.home_selected).map(|p| p.id) {
                Some(id) => open_details(app, id),
                None => navigate(app, Route::Apps),
            }
        }
        KeyCode::Char('i') => {
            if let Some(product) = app.featured_products().get(app.home_selected).cloned() {
                install(app, &product);
            }
        }
        _ => {}
    }
}

/// What: Handle a key on a Details page.
///
/// Inputs:
/// - `id`: Product id from the route; may be missing or absent from the catalog.
///
/// Details:
/// - `Enter` triggers the action button (install or uninstall); on the Not Found page it
///   goes back to Apps.
/// - `i` installs, `u`/`Delete` uninstalls, `Up`/`Down` scroll.
pub(super) fn handle_details_key(ke: KeyEvent, app: &mut AppState, id: Option<u32>) {
    let Some(product) = id.and_then(|id| app.catalog.find(id)).cloned() else {
        if matches!(ke.code, KeyCode::Enter) {
            navigate(app, Route::Apps);
        }
        return;
    };
    match ke.code {
        KeyCode::Enter => {
            toggle_install(app, product.id);
        }
        KeyCode::Char('i') => {
            install(app, &product);
        }
        KeyCode::Char('u') | KeyCode::Delete => {
            uninstall(app, product.id);
        }
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        _ => {}
    }
}

/// What: Handle a key on the My Installations page.
///
/// Details:
/// - `Enter` opens the highlighted product's details; `u`/`Delete` uninstalls it.
pub(super) fn handle_installs_key(ke: KeyEvent, app: &mut AppState) {
    let selected_id = app
        .installs_state
        .selected()
        .and_then(|i| app.installed_products().get(i).map(|p| p.id));
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Enter => {
            if let Some(id) = selected_id {
                open_details(app, id);
            }
        }
        KeyCode::Char('u') | KeyCode::Delete => {
            if let Some(id) = selected_id {
                uninstall(app, id);
            }
        }
        _ => {}
    }
}
