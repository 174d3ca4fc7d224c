//! Filesystem helpers for the database file.

use std::fs;
use std::io;
use std::path::Path;

/// Create the parent directory of `path` if it does not exist yet.
///
/// Paths without a parent component (a bare file name) need nothing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}
