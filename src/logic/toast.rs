use std::time::Instant;

use crate::state::{AppState, Notification};

/// What: Show a notification, replacing any current one and restarting the dismissal timer.
pub fn notify(app: &mut AppState, notification: Notification) {
    app.toast = Some(notification);
    app.toast_expires_at = Some(Instant::now() + app.toast_duration);
}

/// Hide the current notification immediately.
pub fn dismiss_toast(app: &mut AppState) {
    app.toast = None;
    app.toast_expires_at = None;
}

/// What: Clear the notification once its deadline has passed.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `now`: Current instant (injected for testability).
///
/// Output:
/// - `true` when a notification was cleared.
pub fn expire_toast(app: &mut AppState, now: Instant) -> bool {
    if let Some(deadline) = app.toast_expires_at
        && now >= deadline
    {
        dismiss_toast(app);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> AppState {
        let mut app = AppState::with_catalog(Arc::new(fixtures::catalog_ab()), PathBuf::new());
        app.toast_duration = Duration::from_millis(3000);
        app
    }

    #[test]
    /// What: A notification expires only after its duration elapses.
    ///
    /// Inputs:
    /// - Notification shown with a 3000 ms duration; expiry checked at +2999 ms and +3000 ms.
    ///
    /// Output:
    /// - Still visible before the deadline; cleared at the deadline.
    fn toast_expires_after_duration() {
        let mut app = app();
        notify(&mut app, Notification::success("hi"));
        let deadline = app.toast_expires_at.expect("deadline set");
        assert!(!expire_toast(&mut app, deadline - Duration::from_millis(1)));
        assert!(app.toast.is_some());
        assert!(expire_toast(&mut app, deadline));
        assert!(app.toast.is_none());
        assert!(app.toast_expires_at.is_none());
    }

    #[test]
    /// What: A newer notification replaces the old one and pushes the deadline out.
    fn toast_new_notification_resets_timer() {
        let mut app = app();
        notify(&mut app, Notification::success("first"));
        let first = app.toast_expires_at.expect("deadline set");
        std::thread::sleep(Duration::from_millis(5));
        notify(&mut app, Notification::error("second"));
        let second = app.toast_expires_at.expect("deadline set");
        assert!(second > first);
        assert!(!expire_toast(&mut app, first));
        assert_eq!(app.toast.as_ref().map(|t| t.message.as_str()), Some("second"));
    }

    #[test]
    /// What: Manual dismissal clears both message and deadline.
    fn toast_dismiss_clears_state() {
        let mut app = app();
        notify(&mut app, Notification::neutral("x"));
        dismiss_toast(&mut app);
        assert!(app.toast.is_none());
        assert!(!expire_toast(&mut app, Instant::now() + Duration::from_secs(10)));
    }
}
