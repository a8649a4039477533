//! Index location resolution.
//!
//! Determines where the product index lives based on configuration. An explicit
//! `index.path` wins; otherwise the index is stored in `.sift/<name>/` under the directory
//! containing the most specific `.sift.toml`, or in `~/.sift/<name>/` when no config exists.

use std::path::PathBuf;

use directories::BaseDirs;
use sift_config::Config;

/// Directory name for sift data (sibling to .sift.toml).
const SIFT_DIR: &str = ".sift";

/// Computes the index directory from configuration alone.
///
/// Returns `None` when neither `index.path` nor a config root is available.
pub fn index_directory(config: &Config) -> Option<PathBuf> {
    if let Some(path) = &config.index.path {
        return Some(path.clone());
    }
    config
        .config_root
        .as_ref()
        .map(|root| root.join(SIFT_DIR).join(&config.index.name))
}

/// Returns the global index directory for a logical index (`~/.sift/<name>/`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_index_directory(name: &str) -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(SIFT_DIR).join(name))
}

/// Resolves the index directory, falling back to the global location.
pub fn resolve_index_directory(config: &Config) -> Option<PathBuf> {
    index_directory(config).or_else(|| global_index_directory(&config.index.name))
}
