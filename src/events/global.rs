use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{back_target, dismiss_toast, navigate};
use crate::state::{AppState, Route};

/// Whether `ke` is `Ctrl-C`.
pub(super) fn is_interrupt(ke: &KeyEvent) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL) && matches!(ke.code, KeyCode::Char('c'))
}

/// What: Handle shortcuts that work on every page.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
///
/// Output:
/// - `Some(true)` to exit, `Some(false)` when the key was consumed, `None` to let the page
///   handler see the key.
pub(super) fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<bool> {
    if is_interrupt(&ke) {
        return Some(true);
    }
    match ke.code {
        KeyCode::Char('q') => Some(true),
        KeyCode::Char('1') => {
            navigate(app, Route::Home);
            Some(false)
        }
        KeyCode::Char('2') => {
            navigate(app, Route::Apps);
            Some(false)
        }
        KeyCode::Char('3') => {
            navigate(app, Route::MyInstallations);
            Some(false)
        }
        KeyCode::Tab => {
            navigate(app, next_tab(app.route));
            Some(false)
        }
        KeyCode::BackTab => {
            navigate(app, prev_tab(app.route));
            Some(false)
        }
        KeyCode::Char('x') => {
            dismiss_toast(app);
            Some(false)
        }
        KeyCode::Esc => {
            if app.toast.is_some() {
                dismiss_toast(app);
            } else {
                navigate(app, back_target(app.route));
            }
            Some(false)
        }
        _ => None,
    }
}

fn next_tab(route: Route) -> Route {
    match route.tab_index() {
        0 => Route::Apps,
        1 => Route::MyInstallations,
        _ => Route::Home,
    }
}

fn prev_tab(route: Route) -> Route {
    match route.tab_index() {
        0 => Route::MyInstallations,
        1 => Route::Home,
        _ => Route::Apps,
    }
}
