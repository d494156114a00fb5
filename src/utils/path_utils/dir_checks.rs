use super::expansion::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `--localpath` to a directory we can write into, creating it when absent.
///
/// # Errors
///
/// Returns a message for clap when the path is blank, is not a directory,
/// cannot be created, or refuses a probe file.
pub fn check_writable_dir(dir: &str) -> Result<PathBuf, String> {
    if dir.trim().is_empty() {
        return Err("The local path must not be empty.".to_string());
    }
    let local = expand_tilde(Path::new(dir))?;

    if local.exists() && !local.is_dir() {
        return Err(format!("'{}' is not a directory.", local.display()));
    }
    fs::create_dir_all(&local)
        .map_err(|e| format!("Cannot create local path '{}': {e}", local.display()))?;

    // Dropping the probe file deletes it
    tempfile::tempfile_in(&local)
        .map(|_| local.clone())
        .map_err(|e| format!("Local path '{}' is not writable: {e}", local.display()))
}
