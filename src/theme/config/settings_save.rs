use std::io::ErrorKind;
use std::path::Path;

use crate::state::SortMode;
use crate::theme::parsing::normalize_key;

/// What: Persist the chosen sort mode into `settings.conf`.
///
/// Inputs:
/// - `path`: Settings file to update.
/// - `mode`: Sort mode selected in the UI.
///
/// Output:
/// - `Ok(())` after rewriting the file; IO errors otherwise.
///
/// Details:
/// - Replaces the first sort key line (`sort_mode`, `results_sort` or `sort`) in place and
///   drops any later ones, preserving comments and other keys; appends the key when the
///   file has none. A missing file is created.
/// - A file that exists but cannot be read as UTF-8 text is left untouched and the error
///   is returned.
pub fn save_sort_mode(path: &Path, mode: SortMode) -> std::io::Result<()> {
    let content = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };
    let new_line = format!("sort_mode = {}", mode.as_config_key());
    let mut replaced = false;
    let mut lines: Vec<String> = Vec::new();
    for line in content.lines() {
        if !is_sort_key_line(line) {
            lines.push(line.to_string());
        } else if !replaced {
            lines.push(new_line.clone());
            replaced = true;
        }
    }
    if !replaced {
        lines.push(new_line);
    }
    let mut body = lines.join("\n");
    body.push('\n');
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, body)
}

/// Whether `line` assigns one of the sort mode keys.
fn is_sort_key_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with('#') || trimmed.starts_with("//") {
        return false;
    }
    trimmed.split_once('=').is_some_and(|(k, _)| {
        matches!(
            normalize_key(k).as_str(),
            "sort_mode" | "results_sort" | "sort"
        )
    })
}
