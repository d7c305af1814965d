//! Configuration, directories and palette.
//!
//! Split into submodules; public re-exports keep the `crate::theme::*` API stable.

mod config;
mod parsing;
mod paths;
mod settings;
mod types;

use std::sync::OnceLock;

pub use config::{SETTINGS_SKELETON_CONTENT, ensure_settings_present, save_sort_mode};
pub use paths::{config_dir, lists_dir, logs_dir, settings_path};
pub use settings::{parse_settings, settings};
pub use types::{Settings, Theme};

/// Process-wide palette.
static THEME: OnceLock<Theme> = OnceLock::new();

/// Palette shared by all views.
pub fn theme() -> Theme {
    *THEME.get_or_init(Theme::default)
}
