//! Central `AppState` container.

use ratatui::widgets::ListState;
use std::{
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use crate::catalog::{Catalog, Product};
use crate::state::route::Route;
use crate::state::types::{AuditEntry, Focus, Notification, SortMode};
use crate::store::{InstallStore, InstalledSet};

/// Global application state shared by the event, runtime, and UI layers.
///
/// The runtime owns the single instance and mutates it only from its event
/// loop. The installed set is persisted to disk whenever `installed_dirty`
/// is set and the initial load has completed.
#[derive(Debug)]
pub struct AppState {
    /// Page currently shown.
    pub route: Route,
    /// Static product list.
    pub catalog: Arc<Catalog>,

    // Installed set
    /// Installed product ids; empty until the initial load completes.
    pub installed: InstalledSet,
    /// Whether the initial (simulated) load of the installed set is still pending.
    pub loading: bool,
    /// Path where the installed set is persisted as JSON.
    pub installed_path: PathBuf,
    /// Dirty flag indicating `installed` needs to be saved.
    pub installed_dirty: bool,
    /// Audit lines waiting for the next flush.
    pub pending_audit: Vec<AuditEntry>,

    // Transient toast message (bottom-right)
    /// Notification currently shown, if any.
    pub toast: Option<Notification>,
    /// Deadline after which the toast is automatically hidden.
    pub toast_expires_at: Option<Instant>,
    /// How long each toast stays visible.
    pub toast_duration: Duration,

    // Apps page: search and sort
    /// Current search input text.
    pub input: String,
    /// Current Apps page ordering.
    pub sort_mode: SortMode,
    /// Filtered and sorted view of the catalog for the Apps page.
    pub results: Vec<Product>,
    /// Which Apps page widget receives typing.
    pub focus: Focus,
    /// While `Some` and in the future, the search spinner is shown.
    pub searching_until: Option<Instant>,
    /// Spinner window started by each keystroke.
    pub search_debounce: Duration,
    /// Selection state for the Apps results list.
    pub apps_state: ListState,
    /// Set when the user changes the sort mode so the runtime can write it back to settings.
    pub sort_dirty: bool,

    // Home page
    /// Number of featured products shown on Home.
    pub featured_count: usize,
    /// Highlighted featured card; the slot after the last card is "Show All Apps".
    pub home_selected: usize,

    // My Installations page
    /// Selection state for the installed list.
    pub installs_state: ListState,

    // Details page
    /// Scroll offset (lines) of the details body.
    pub details_scroll: u16,

    /// Whether to show the key hints footer.
    pub show_keybinds_footer: bool,
    /// Monotonic frame counter driving spinner animation.
    pub spinner_tick: usize,
}

impl Default for AppState {
    /// Construct a default [`AppState`] over the builtin catalog, still loading,
    /// with the installed file under the lists directory.
    fn default() -> Self {
        Self::with_catalog(
            Catalog::builtin(),
            InstallStore::default_location().path().to_path_buf(),
        )
    }
}

impl AppState {
    /// What: Build a fresh state for a given catalog and persistence path.
    ///
    /// Inputs:
    /// - `catalog`: Product list to browse.
    /// - `installed_path`: Where the installed set is saved.
    ///
    /// Output:
    /// - State on the Home page with `loading == true`, default timings, and results
    ///   covering the whole catalog.
    pub fn with_catalog(catalog: Arc<Catalog>, installed_path: PathBuf) -> Self {
        let defaults = crate::theme::Settings::default();
        let results = catalog.products().to_vec();
        Self {
            route: Route::Home,
            catalog,
            installed: InstalledSet::new(),
            loading: true,
            installed_path,
            installed_dirty: false,
            pending_audit: Vec::new(),
            toast: None,
            toast_expires_at: None,
            toast_duration: defaults.toast_duration(),
            input: String::new(),
            sort_mode: defaults.sort_mode,
            results,
            focus: Focus::Results,
            searching_until: None,
            search_debounce: defaults.search_debounce(),
            apps_state: ListState::default(),
            sort_dirty: false,
            featured_count: defaults.featured_count,
            home_selected: 0,
            installs_state: ListState::default(),
            details_scroll: 0,
            show_keybinds_footer: defaults.show_keybinds_footer,
            spinner_tick: 0,
        }
    }

    /// Apply user settings that shape the initial state.
    pub fn apply_settings(&mut self, prefs: &crate::theme::Settings) {
        self.sort_mode = prefs.sort_mode;
        self.toast_duration = prefs.toast_duration();
        self.search_debounce = prefs.search_debounce();
        self.featured_count = prefs.featured_count;
        self.show_keybinds_footer = prefs.show_keybinds_footer;
    }

    /// Whether `id` is in the installed set.
    pub fn is_installed(&self, id: u32) -> bool {
        self.installed.contains(id)
    }

    /// Installed products resolved against the catalog, in catalog order; stale ids are skipped.
    pub fn installed_products(&self) -> Vec<Product> {
        self.catalog
            .products()
            .iter()
            .filter(|p| self.installed.contains(p.id))
            .cloned()
            .collect()
    }

    /// Featured products shown on the Home page.
    pub fn featured_products(&self) -> &[Product] {
        let n = self.featured_count.min(self.catalog.len());
        &self.catalog.products()[..n]
    }

    /// Whether the search spinner should be shown at `now`.
    pub fn is_searching(&self, now: Instant) -> bool {
        self.searching_until.is_some_and(|t| now < t)
    }

    /// Product highlighted on the Apps page, if any.
    pub fn selected_result(&self) -> Option<&Product> {
        self.apps_state.selected().and_then(|i| self.results.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    /// What: Verify `AppState::default` starts loading on Home with paths under the lists directory.
    ///
    /// Inputs:
    /// - No direct inputs; shims the `HOME` environment variable to a temporary directory.
    ///
    /// Output:
    /// - Empty installed set, loading flag set, results mirror the builtin catalog, and the
    ///   installed path lives under `lists_dir`.
    ///
    /// Details:
    /// - Uses the HOME mutex and restores `HOME` at the end to avoid cross-test interference.
    fn app_state_default_initializes_paths_and_flags() {
        let _guard = crate::test_utils::lock_home_mutex();
        let orig_home = std::env::var_os("HOME");
        let dir = tempfile::tempdir().unwrap();
        unsafe { std::env::set_var("HOME", dir.path().display().to_string()) };

        let app = AppState::default();
        assert_eq!(app.route, Route::Home);
        assert!(app.loading);
        assert!(app.installed.is_empty());
        assert!(!app.installed_dirty);
        assert_eq!(app.results.len(), app.catalog.len());
        assert!(app.installed_path.starts_with(crate::theme::lists_dir()));

        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }

    #[test]
    /// What: Installed products skip stale ids and follow catalog order.
    ///
    /// Inputs:
    /// - Catalog [A, B]; installed ids [2, 999, 1].
    ///
    /// Output:
    /// - Resolved list is [A, B].
    fn installed_products_filters_stale_ids() {
        let mut app = AppState::with_catalog(Arc::new(fixtures::catalog_ab()), PathBuf::new());
        app.installed = InstalledSet::from_ids([2, 999, 1]);
        let titles: Vec<String> = app
            .installed_products()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    /// What: Featured slice never exceeds the catalog and honours the configured count.
    fn featured_products_are_capped_by_catalog_size() {
        let mut app = AppState::with_catalog(Arc::new(fixtures::catalog_ab()), PathBuf::new());
        assert_eq!(app.featured_products().len(), 2);
        app.featured_count = 1;
        assert_eq!(app.featured_products()[0].title, "A");
    }

    #[test]
    /// What: Settings override timing and display fields.
    fn apply_settings_copies_preferences() {
        let mut app = AppState::with_catalog(Arc::new(fixtures::catalog_ab()), PathBuf::new());
        let prefs = crate::theme::parse_settings("sort_mode = rating\ntoast_ms = 10\n");
        app.apply_settings(&prefs);
        assert_eq!(app.sort_mode, SortMode::Rating);
        assert_eq!(app.toast_duration, Duration::from_millis(10));
    }
}
