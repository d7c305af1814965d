//! Application state split into the container, routing, and small value types.

pub mod app_state;
pub mod route;
pub mod types;

pub use app_state::AppState;
pub use route::Route;
pub use types::{AuditEntry, Focus, Notification, NotificationKind, SortMode};
