//! Global test utilities for ensuring test isolation.

use std::sync::{Mutex, OnceLock};

/// Global mutex for tests that modify the HOME environment variable.
///
/// Since `std::env::set_var` affects the entire process, all tests that
/// modify HOME (or XDG_CONFIG_HOME) must serialize their execution using
/// this mutex to prevent race conditions between parallel tests.
static HOME_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Acquire the global HOME mutex to safely modify the HOME environment variable.
///
/// Output:
/// - `MutexGuard<()>` that must be held while HOME is modified.
///
/// Details:
/// - Automatically recovers from poisoned mutex (from panicked tests).
/// - Hold this guard for the entire duration that HOME is modified.
///
/// Example:
/// ```ignore
/// let _home_guard = crate::test_utils::lock_home_mutex();
/// let orig = std::env::var_os("HOME");
/// unsafe { std::env::set_var("HOME", dir.path()); }
/// // do test work...
/// // restore HOME before the guard drops
/// ```
pub fn lock_home_mutex() -> std::sync::MutexGuard<'static, ()> {
    HOME_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}
