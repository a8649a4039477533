//! Errors returned by the catalog service.

use sift_query::QueryError;
use thiserror::Error;

use crate::IndexError;

/// Failure of a catalog operation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request was malformed. Not retryable.
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    /// No product has the requested id.
    #[error("product {id} not found")]
    NotFound {
        /// Requested id.
        id: u64,
    },

    /// The index could not be reached or failed to execute the request.
    #[error("index unavailable: {0}")]
    IndexUnavailable(#[source] IndexError),

    /// The index answered with a payload that could not be decoded.
    #[error("malformed index response: {0}")]
    Deserialization(#[source] IndexError),
}

impl SearchError {
    /// Stable name of the error kind, used in error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidQuery(_) => "InvalidQuery",
            Self::NotFound { .. } => "NotFound",
            Self::IndexUnavailable(_) => "IndexUnavailable",
            Self::Deserialization(_) => "DeserializationError",
        }
    }
}

impl From<IndexError> for SearchError {
    fn from(err: IndexError) -> Self {
        if err.is_decode() {
            Self::Deserialization(err)
        } else {
            Self::IndexUnavailable(err)
        }
    }
}
