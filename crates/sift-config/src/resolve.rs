//! Turning a configured `index.path` into an absolute directory.
//!
//! The directory may not exist yet, so paths are joined, never canonicalized.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Makes `path` absolute.
///
/// `~` and `~/...` are taken from the home directory; other relative paths are relative to
/// `config_dir`, the directory of the file that set them.
pub fn resolve_index_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = match path.strip_prefix('~') {
        Some("") => home_dir()?,
        Some(rest) => match rest.strip_prefix('/') {
            Some(under_home) => home_dir()?.join(under_home),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    };
    Ok(if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(expanded)
    })
}

/// The current user's home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(dirs.home_dir().to_owned())
}
