//! Event handling layer for the store TUI (modularized).
//!
//! This module re-exports `handle_event` and delegates page-specific logic
//! to submodules to keep files small and maintainable.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::state::{AppState, Focus, Route};

mod apps;
mod global;
mod pages;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event (only key presses are handled)
/// - `app`: Mutable application state
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - While the Apps search input has focus, printable keys edit the query and only
///   `Ctrl-C` acts globally.
/// - Otherwise global shortcuts (quit, page switching, toast dismissal, back) run first,
///   then the current page's handler.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    if app.route == Route::Apps && app.focus == Focus::Search {
        if global::is_interrupt(&ke) {
            return true;
        }
        apps::handle_search_input_key(ke, app);
        return false;
    }

    if let Some(should_exit) = global::handle_global_key(ke, app) {
        return should_exit;
    }

    match app.route {
        Route::Home => pages::handle_home_key(ke, app),
        Route::Apps => apps::handle_results_key(ke, app),
        Route::Details(id) => pages::handle_details_key(ke, app, id),
        Route::MyInstallations => pages::handle_installs_key(ke, app),
    }
    false
}
