//! Utility functions for timestamps, log previews, and output paths.

use chrono::Local;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

/// Local wall-clock time in the `YYYY-MM-DD HH:MM` form shown on the index.
pub fn update_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at the last char boundary at or below `max` bytes,
/// with `"…(+N bytes)"` appended. Briefings are mostly CJK text, so a plain
/// byte slice would panic.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Create the parent directory of `path` if it does not exist yet.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn ensure_parent_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).await?;
            debug!(parent = %parent.display(), "Output directory ready");
            Ok(())
        }
        _ => Ok(()),
    }
}
