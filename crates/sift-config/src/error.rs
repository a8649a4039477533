//! Configuration errors.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::{de, ser};

/// Failure to load or render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        /// Offending file.
        path: PathBuf,
        /// I/O failure.
        source: io::Error,
    },

    /// A config file is not valid TOML or has unknown keys.
    #[error("invalid config {}: {source}", path.display())]
    ParseToml {
        /// Offending file.
        path: PathBuf,
        /// Parser diagnostic.
        source: de::Error,
    },

    /// The effective settings could not be written out as TOML.
    #[error("cannot render settings as TOML: {0}")]
    SerializeToml(#[source] ser::Error),

    /// `~/.sift.toml` was needed but there is no home directory.
    #[error("no home directory")]
    NoHomeDirectory,
}
