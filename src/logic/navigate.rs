use crate::state::{AppState, Focus, Route};

/// What: Replace the current page.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `route`: Destination page.
///
/// Output:
/// - Updates `app.route`; there is no history stack.
///
/// Details:
/// - Entering Apps recomputes the results and leaves search focus.
/// - Entering Details resets the scroll offset.
/// - Entering My Installations highlights the first entry when nothing is highlighted.
pub fn navigate(app: &mut AppState, route: Route) {
    tracing::debug!(from = %app.route, to = %route, "navigate");
    app.route = route;
    match route {
        Route::Home => {
            app.home_selected = app.home_selected.min(app.featured_products().len());
        }
        Route::Apps => {
            app.focus = Focus::Results;
            crate::logic::apply_filters_and_sort_preserve_selection(app);
        }
        Route::Details(_) => {
            app.details_scroll = 0;
        }
        Route::MyInstallations => {
            let len = app.installed_products().len();
            if len == 0 {
                app.installs_state.select(None);
            } else if app.installs_state.selected().is_none_or(|i| i >= len) {
                app.installs_state.select(Some(0));
            }
        }
    }
}

/// Open the details page for `id`; unknown ids render the Not Found page.
pub fn open_details(app: &mut AppState, id: u32) {
    navigate(app, Route::Details(Some(id)));
}

/// Route reached by `Esc`/back from the current page.
pub fn back_target(route: Route) -> Route {
    match route {
        Route::Details(_) => Route::Apps,
        _ => Route::Home,
    }
}
