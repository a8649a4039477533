//! Index-level errors.

use std::{io, path::PathBuf};

use tantivy::TantivyError;
use thiserror::Error;

/// Failure inside the product index or its loader.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index directory could not be opened or created.
    #[error("cannot open index {}: {message}", path.display())]
    OpenIndex {
        /// Index directory.
        path: PathBuf,
        /// Tantivy's explanation.
        message: String,
    },

    /// The caller named an index this store does not hold.
    #[error("unknown index '{requested}', this store serves '{served}'")]
    UnknownIndex {
        /// Requested name.
        requested: String,
        /// Name the store was opened with.
        served: String,
    },

    /// Tantivy failed while executing a query.
    #[error("index query failed: {0}")]
    Search(String),

    /// A stored document or aggregation result had an unexpected shape.
    #[error("malformed {what}: {message}")]
    Decode {
        /// Payload kind.
        what: &'static str,
        /// Details.
        message: String,
    },

    /// A JSON-lines product failed to parse.
    #[error("bad product on line {line}: {message}")]
    Fixture {
        /// Line number, starting at 1.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Staging a change failed.
    #[error("index write failed: {0}")]
    Write(String),

    /// Publishing or discarding staged changes failed.
    #[error("index commit failed: {0}")]
    Commit(String),

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// `index.stemmer` names no supported language.
    #[error("unsupported stemmer language: {0}")]
    InvalidLanguage(String),
}

impl IndexError {
    /// [`Self::OpenIndex`] for `path`.
    pub(crate) fn open_index(path: PathBuf, source: &TantivyError) -> Self {
        Self::OpenIndex {
            path,
            message: source.to_string(),
        }
    }

    /// [`Self::Search`] from a Tantivy failure.
    pub(crate) fn search(source: &TantivyError) -> Self {
        Self::Search(source.to_string())
    }

    /// [`Self::Decode`] for a payload of kind `what`.
    pub(crate) fn decode(what: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            what,
            message: message.into(),
        }
    }

    /// [`Self::Write`] from a Tantivy failure.
    pub(crate) fn write(source: &TantivyError) -> Self {
        Self::Write(source.to_string())
    }

    /// [`Self::Commit`] from a Tantivy failure.
    pub(crate) fn commit(source: &TantivyError) -> Self {
        Self::Commit(source.to_string())
    }

    /// True when the index answered but its payload was malformed.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
