use std::path::Path;

use crate::state::{AppState, AuditEntry};
use crate::store::{InstallStore, log_installed, log_removed};

/// What: Persist the installed set if it changed and the initial load finished.
///
/// Inputs:
/// - `app`: Mutable application state (`installed`, `installed_dirty`, `loading`, `pending_audit`)
///
/// Output:
/// - Writes `installed_path` and clears the dirty flag; flushes queued audit lines.
///
/// Details:
/// - Never writes while `loading` so the delayed load cannot be clobbered by the empty set.
/// - Write failures are logged and not retried.
pub fn maybe_flush_installed(app: &mut AppState) {
    if app.loading || !app.installed_dirty {
        return;
    }
    let store = InstallStore::new(app.installed_path.clone());
    if let Err(e) = store.save(&app.installed) {
        tracing::warn!(
            path = %app.installed_path.display(),
            error = %e,
            "failed to save installed set"
        );
    }
    app.installed_dirty = false;
    flush_audit(app);
}

/// Append queued install/remove lines to their audit logs.
fn flush_audit(app: &mut AppState) {
    if app.pending_audit.is_empty() {
        return;
    }
    let mut installed: Vec<String> = Vec::new();
    let mut removed: Vec<String> = Vec::new();
    for entry in app.pending_audit.drain(..) {
        match entry {
            AuditEntry::Installed(title) => installed.push(title),
            AuditEntry::Removed(title) => removed.push(title),
        }
    }
    if !installed.is_empty()
        && let Err(e) = log_installed(&installed)
    {
        tracing::warn!(error = %e, "failed to write install log");
    }
    if !removed.is_empty()
        && let Err(e) = log_removed(&removed)
    {
        tracing::warn!(error = %e, "failed to write remove log");
    }
}

/// What: Write the sort mode back to `settings.conf` after the user changed it.
pub fn maybe_flush_sort(app: &mut AppState, settings_path: &Path) {
    if !app.sort_dirty {
        return;
    }
    app.sort_dirty = false;
    if let Err(e) = crate::theme::save_sort_mode(settings_path, app.sort_mode) {
        tracing::warn!(path = %settings_path.display(), error = %e, "failed to persist sort mode");
    }
}
