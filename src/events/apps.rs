use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{
    cycle_sort, install, move_selection, open_details, pop_char, push_char, uninstall,
};
use crate::state::{AppState, Focus};

/// What: Handle a key while the search input has focus.
///
/// Details:
/// - Printable characters and `Backspace` edit the query.
/// - `Esc`, `Enter`, `Down` and `Tab` hand focus back to the results list.
pub(super) fn handle_search_input_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            push_char(app, ch, Instant::now());
        }
        KeyCode::Backspace => pop_char(app, Instant::now()),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            app.focus = Focus::Results;
        }
        _ => {}
    }
}

/// What: Handle a key on the Apps page results list.
///
/// Details:
/// - `/` focuses search; `s` cycles sort; `Up`/`Down` move; `Enter` opens details.
/// - `i` installs and `u`/`Delete` uninstalls the highlighted product.
pub(super) fn handle_results_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('s') => cycle_sort(app),
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::PageUp => move_selection(app, -10),
        KeyCode::PageDown => move_selection(app, 10),
        KeyCode::Enter => {
            if let Some(id) = app.selected_result().map(|p| p.id) {
                open_details(app, id);
            }
        }
        KeyCode::Char('i') => {
            if let Some(product) = app.selected_result().cloned() {
                install(app, &product);
            }
        }
        KeyCode::Char('u') | KeyCode::Delete => {
            if let Some(id) = app.selected_result().map(|p| p.id) {
                uninstall(app, id);
            }
        }
        _ => {}
    }
}
