use std::io::Write;

/// What: Append installed product titles to an audit log under the logs directory.
///
/// Input: `titles` slice of product titles; each line is timestamped.
///
/// Output: `Ok(())` on success; otherwise an I/O error.
///
/// Details: Writes to logs_dir/install_log.log, prefixing each title with a UTC timestamp.
pub fn log_installed(titles: &[String]) -> std::io::Result<()> {
    append_lines("install_log.log", titles)
}

/// What: Append removed product titles to an audit log under the logs directory.
///
/// Input:
/// - `titles` slice of product titles to append (one per line).
///
/// Output:
/// - `Ok(())` on success; otherwise an I/O error.
///
/// Details:
/// - Appends to logs_dir/remove_log.log using the same timestamp prefix as installs.
pub fn log_removed(titles: &[String]) -> std::io::Result<()> {
    append_lines("remove_log.log", titles)
}

fn append_lines(file_name: &str, titles: &[String]) -> std::io::Result<()> {
    if titles.is_empty() {
        return Ok(());
    }
    let mut path = crate::theme::logs_dir();
    path.push(file_name);
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let when = crate::util::ts_to_date(crate::util::now_unix_secs());
    for t in titles {
        writeln!(f, "{when} {t}")?;
    }
    Ok(())
}
