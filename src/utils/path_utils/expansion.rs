use std::path::{Path, PathBuf};

/// `~/data` -> `$HOME/data`; anything else is returned unchanged.
pub(super) fn expand_tilde(path: &Path) -> Result<PathBuf, String> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    home::home_dir()
        .map(|home| home.join(rest))
        .ok_or_else(|| format!("Cannot expand '{}': no home directory", path.display()))
}
