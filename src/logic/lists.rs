use crate::catalog::Product;
use crate::logic::toast::notify;
use crate::state::{AppState, AuditEntry, Notification};

/// What: Add a product to the installed set and announce it.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `product`: Catalog product to install.
///
/// Output:
/// - `true` when the set changed; `false` when the product was already installed or the
///   installed set has not finished loading.
///
/// Details:
/// - On change: appends the id, marks the set dirty, queues an audit line and shows
///   `"<title> installed successfully!"` as a success notification.
pub fn install(app: &mut AppState, product: &Product) -> bool {
    if app.loading {
        tracing::debug!(id = product.id, "install ignored while loading");
        return false;
    }
    if !app.installed.insert(product.id) {
        return false;
    }
    app.installed_dirty = true;
    app.pending_audit
        .push(AuditEntry::Installed(product.title.clone()));
    tracing::info!(id = product.id, title = %product.title, "installed");
    notify(
        app,
        Notification::success(format!("{} installed successfully!", product.title)),
    );
    true
}

/// What: Remove a product id from the installed set.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `id`: Product id to remove; may be stale (no longer in the catalog).
///
/// Output:
/// - `true` when the id was present and removed; `false` otherwise (no notification).
///
/// Details:
/// - When the id resolves in the catalog, shows `"<title> uninstalled."` as an error-kind
///   notification; an unresolvable id is removed silently.
pub fn uninstall(app: &mut AppState, id: u32) -> bool {
    if app.loading || !app.installed.remove(id) {
        return false;
    }
    app.installed_dirty = true;
    let title = app.catalog.find(id).map(|p| p.title.clone());
    match title {
        Some(title) => {
            tracing::info!(id, title = %title, "uninstalled");
            app.pending_audit.push(AuditEntry::Removed(title.clone()));
            notify(app, Notification::error(format!("{title} uninstalled.")));
        }
        None => {
            tracing::info!(id, "removed stale installed id");
            app.pending_audit.push(AuditEntry::Removed(format!("#{id}")));
        }
    }
    clamp_installs_selection(app);
    true
}

/// What: Install the product when absent, uninstall it otherwise.
///
/// Output:
/// - `true` when the installed set changed. Unknown ids that are not installed do nothing.
pub fn toggle_install(app: &mut AppState, id: u32) -> bool {
    if app.is_installed(id) {
        return uninstall(app, id);
    }
    match app.catalog.find(id).cloned() {
        Some(product) => install(app, &product),
        None => false,
    }
}

/// Keep the My Installations highlight inside the (possibly shorter) list.
fn clamp_installs_selection(app: &mut AppState) {
    let len = app.installed_products().len();
    if len == 0 {
        app.installs_state.select(None);
    } else if let Some(sel) = app.installs_state.selected()
        && sel >= len
    {
        app.installs_state.select(Some(len - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::state::NotificationKind;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn loaded_app() -> AppState {
        let mut app = AppState::with_catalog(Arc::new(fixtures::catalog_ab()), PathBuf::new());
        app.loading = false;
        app
    }

    #[test]
    /// What: Installing twice leaves a single entry and a single audit line.
    ///
    /// Inputs:
    /// - Loaded state; product A installed twice.
    ///
    /// Output:
    /// - First call returns `true`, second `false`; set size stays 1.
    fn lists_install_is_idempotent() {
        let mut app = loaded_app();
        let a = app.catalog.products()[0].clone();
        assert!(install(&mut app, &a));
        assert!(!install(&mut app, &a));
        assert_eq!(app.installed.len(), 1);
        assert_eq!(app.pending_audit, vec![AuditEntry::Installed("A".into())]);
    }

    #[test]
    /// What: Install then uninstall products A and B, checking notifications and final set.
    ///
    /// Inputs:
    /// - Install A, install B, uninstall A.
    ///
    /// Output:
    /// - Installed set `[B]`; last notification is `"A uninstalled."` with error kind.
    fn lists_install_uninstall_scenario() {
        let mut app = loaded_app();
        let a = app.catalog.products()[0].clone();
        let b = app.catalog.products()[1].clone();

        install(&mut app, &a);
        assert_eq!(
            app.toast,
            Some(Notification {
                message: "A installed successfully!".into(),
                kind: NotificationKind::Success,
            })
        );
        install(&mut app, &b);
        assert!(uninstall(&mut app, a.id));

        assert_eq!(app.installed.ids(), &[2]);
        assert_eq!(
            app.toast,
            Some(Notification {
                message: "A uninstalled.".into(),
                kind: NotificationKind::Error,
            })
        );
        assert!(app.installed_dirty);
    }

    #[test]
    /// What: Uninstalling an id that was never installed is a silent no-op.
    fn lists_uninstall_absent_is_noop() {
        let mut app = loaded_app();
        assert!(!uninstall(&mut app, 1));
        assert!(app.toast.is_none());
        assert!(!app.installed_dirty);
        assert!(app.pending_audit.is_empty());
    }

    #[test]
    /// What: A stale id is removed without a notification.
    ///
    /// Inputs:
    /// - Installed set loaded with id 999 which is not in the catalog.
    ///
    /// Output:
    /// - Removal succeeds, set becomes empty, no toast is shown.
    fn lists_uninstall_stale_id_is_silent() {
        let mut app = loaded_app();
        app.installed = crate::store::InstalledSet::from_ids([999]);
        assert!(uninstall(&mut app, 999));
        assert!(app.installed.is_empty());
        assert!(app.toast.is_none());
        assert!(app.installed_dirty);
    }

    #[test]
    /// What: Mutations are ignored until the initial load completes.
    fn lists_install_ignored_while_loading() {
        let mut app = AppState::with_catalog(Arc::new(fixtures::catalog_ab()), PathBuf::new());
        let a = app.catalog.products()[0].clone();
        assert!(!install(&mut app, &a));
        assert!(!toggle_install(&mut app, 2));
        assert!(app.installed.is_empty());
        assert!(!app.installed_dirty);
        assert!(app.toast.is_none());
    }

    #[test]
    /// What: Toggle flips membership and ignores unknown ids.
    fn lists_toggle_install_flips_membership() {
        let mut app = loaded_app();
        assert!(toggle_install(&mut app, 2));
        assert!(app.is_installed(2));
        assert!(toggle_install(&mut app, 2));
        assert!(!app.is_installed(2));
        assert!(!toggle_install(&mut app, 42));
    }

    #[test]
    /// What: Removing the last highlighted installation moves the highlight up.
    fn lists_uninstall_clamps_installs_selection() {
        let mut app = loaded_app();
        app.installed = crate::store::InstalledSet::from_ids([1, 2]);
        app.installs_state.select(Some(1));
        uninstall(&mut app, 2);
        assert_eq!(app.installs_state.selected(), Some(0));
        uninstall(&mut app, 1);
        assert_eq!(app.installs_state.selected(), None);
    }
}
