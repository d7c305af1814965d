use ratatui::widgets::ListState;

use crate::state::{AppState, Route};

/// What: Move the highlight on the current page by `delta` rows.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `delta`: Signed step; negative moves up.
///
/// Details:
/// - Home moves across featured cards plus the trailing "Show All Apps" slot.
/// - Apps and My Installations move their list selections, clamped to the list bounds.
/// - Details scrolls the body.
pub fn move_selection(app: &mut AppState, delta: isize) {
    match app.route {
        Route::Home => {
            let slots = app.featured_products().len() + 1;
            app.home_selected = step(Some(app.home_selected), delta, slots).unwrap_or(0);
        }
        Route::Apps => {
            let len = app.results.len();
            move_list(&mut app.apps_state, delta, len);
        }
        Route::MyInstallations => {
            let len = app.installed_products().len();
            move_list(&mut app.installs_state, delta, len);
        }
        Route::Details(_) => {
            app.details_scroll = if delta < 0 {
                app.details_scroll.saturating_sub(delta.unsigned_abs() as u16)
            } else {
                app.details_scroll.saturating_add(delta as u16)
            };
        }
    }
}

fn move_list(state: &mut ListState, delta: isize, len: usize) {
    state.select(step(state.selected(), delta, len));
}

/// Clamped step over `len` slots; `None` when there are no slots.
fn step(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let cur = current.unwrap_or(0).min(len - 1) as isize;
    Some((cur + delta).clamp(0, len as isize - 1) as usize)
}
