use std::fs;

use super::parsing::{normalize_key, parse_bool, strip_inline_comment};
use super::paths::resolve_settings_config_path;
use super::types::Settings;

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
pub fn settings() -> Settings {
    let Some(p) = resolve_settings_config_path() else {
        return Settings::default();
    };
    match fs::read_to_string(&p) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::warn!(path = %p.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// What: Parse `key = value` settings text.
///
/// Inputs:
/// - `content`: File body; `#` and `//` lines are comments.
///
/// Output:
/// - `Settings` with recognised keys applied over defaults.
///
/// Details:
/// - Unknown keys and unparsable values are ignored, keeping the default for that field.
/// - Zero durations are allowed (instant load, no spinner); `featured_count` is clamped to 1..=12.
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "sort_mode" | "results_sort" | "sort" => {
                if let Some(sm) = crate::state::SortMode::from_config_key(val) {
                    out.sort_mode = sm;
                }
            }
            "initial_load_ms" | "load_delay_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    out.initial_load_ms = v;
                }
            }
            "toast_ms" | "notification_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    out.toast_ms = v;
                }
            }
            "search_debounce_ms" | "searching_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    out.search_debounce_ms = v;
                }
            }
            "featured_count" | "featured" => {
                if let Ok(v) = val.parse::<usize>() {
                    out.featured_count = v.clamp(1, 12);
                }
            }
            "show_keybinds_footer" | "keybinds_visible" => {
                out.show_keybinds_footer = parse_bool(val);
            }
            _ => {
                tracing::debug!(key = %key, "ignoring unknown settings key");
            }
        }
    }
    out
}
