use std::path::Path;

use super::skeletons::SETTINGS_SKELETON_CONTENT;

/// What: Make sure a settings file exists so users can discover the available keys.
///
/// Inputs:
/// - `path`: Target `settings.conf` location.
///
/// Output:
/// - `Ok(true)` when the skeleton was written, `Ok(false)` when a file already existed.
///
/// Details:
/// - Never touches an existing file; missing parent directories are created.
pub fn ensure_settings_present(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, SETTINGS_SKELETON_CONTENT)?;
    tracing::info!(path = %path.display(), "wrote default settings file");
    Ok(true)
}
