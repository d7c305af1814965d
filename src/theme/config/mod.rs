//! Settings file bootstrap and write-back.

mod settings_ensure;
mod settings_save;
mod skeletons;

pub use settings_ensure::ensure_settings_present;
pub use settings_save::save_sort_mode;
pub use skeletons::SETTINGS_SKELETON_CONTENT;
