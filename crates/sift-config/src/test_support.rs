//! Scratch directory trees for sift-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A throwaway directory tree removed on drop.
pub struct ScratchTree(TempDir);

impl ScratchTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self(tempfile::tempdir().unwrap())
    }

    /// Top of the tree.
    pub fn top(&self) -> &Path {
        self.0.path()
    }

    /// Ensures `rel` exists as a directory and returns its absolute path.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.top().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Places a `.sift.toml` holding `body` inside `rel` (`""` for the top).
    pub fn config(&self, rel: &str, body: &str) -> PathBuf {
        let file = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&file, body).unwrap();
        file
    }
}
