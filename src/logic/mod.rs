//! Core non-UI logic split into modular submodules.

pub mod filter;
pub mod lists;
pub mod navigate;
pub mod search;
pub mod selection;
pub mod toast;

// Re-export public APIs to keep short import paths (crate::logic::...)
pub use filter::{apply_filters_and_sort_preserve_selection, filter_and_sort};
pub use lists::{install, toggle_install, uninstall};
pub use navigate::{back_target, navigate, open_details};
pub use search::{cycle_sort, expire_searching, pop_char, push_char, set_query};
pub use selection::move_selection;
pub use toast::{dismiss_toast, expire_toast, notify};
