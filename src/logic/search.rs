use std::time::Instant;

use crate::state::AppState;

/// What: Replace the search text, restart the searching window and refresh results.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `text`: New query.
/// - `now`: Current instant (injected for testability).
///
/// Details:
/// - A non-empty query shows the searching spinner until `now + search_debounce`;
///   an empty query hides it immediately. Results update right away either way.
pub fn set_query(app: &mut AppState, text: String, now: Instant) {
    app.searching_until = if text.is_empty() {
        None
    } else {
        Some(now + app.search_debounce)
    };
    app.input = text;
    crate::logic::apply_filters_and_sort_preserve_selection(app);
}

/// Append one typed character to the query.
pub fn push_char(app: &mut AppState, ch: char, now: Instant) {
    let mut text = std::mem::take(&mut app.input);
    text.push(ch);
    set_query(app, text, now);
}

/// Remove the last character of the query, if any.
pub fn pop_char(app: &mut AppState, now: Instant) {
    let mut text = std::mem::take(&mut app.input);
    text.pop();
    set_query(app, text, now);
}

/// Clear the searching spinner once its window elapsed; returns `true` when it changed.
pub fn expire_searching(app: &mut AppState, now: Instant) -> bool {
    if let Some(until) = app.searching_until
        && now >= until
    {
        app.searching_until = None;
        return true;
    }
    false
}

/// Advance the sort mode and refresh results; flags the change for the settings writer.
pub fn cycle_sort(app: &mut AppState) {
    app.sort_mode = app.sort_mode.next();
    app.sort_dirty = true;
    tracing::debug!(mode = app.sort_mode.as_config_key(), "sort mode changed");
    crate::logic::apply_filters_and_sort_preserve_selection(app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::state::SortMode;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> AppState {
        let mut app = AppState::with_catalog(Arc::new(fixtures::catalog_ab()), PathBuf::new());
        app.search_debounce = Duration::from_millis(500);
        app
    }

    #[test]
    /// What: Each keystroke restarts the searching window and filters results immediately.
    ///
    /// Inputs:
    /// - Typing "b" then "e" at two instants 100 ms apart.
    ///
    /// Output:
    /// - Window ends 500 ms after the last keystroke; results contain only B.
    fn search_keystroke_restarts_window() {
        let mut app = app();
        let t0 = Instant::now();
        push_char(&mut app, 'b', t0);
        let t1 = t0 + Duration::from_millis(100);
        push_char(&mut app, 'e', t1);
        assert_eq!(app.input, "be");
        assert_eq!(app.searching_until, Some(t1 + Duration::from_millis(500)));
        assert!(app.is_searching(t0 + Duration::from_millis(550)));
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].title, "B");

        assert!(!expire_searching(&mut app, t1 + Duration::from_millis(499)));
        assert!(expire_searching(&mut app, t1 + Duration::from_millis(500)));
        assert!(!app.is_searching(t1 + Duration::from_millis(500)));
    }

    #[test]
    /// What: Clearing the query hides the spinner and restores the full list.
    fn search_empty_query_clears_spinner() {
        let mut app = app();
        let now = Instant::now();
        push_char(&mut app, 'z', now);
        assert!(app.results.is_empty());
        pop_char(&mut app, now);
        assert!(app.input.is_empty());
        assert!(app.searching_until.is_none());
        assert_eq!(app.results.len(), 2);
        pop_char(&mut app, now);
        assert!(app.input.is_empty());
    }

    #[test]
    /// What: Cycling sort advances the mode, reorders results and marks it dirty.
    fn search_cycle_sort_reorders() {
        let mut app = app();
        cycle_sort(&mut app);
        assert_eq!(app.sort_mode, SortMode::Rating);
        assert!(app.sort_dirty);
        assert_eq!(app.results[0].title, "B");
    }
}
