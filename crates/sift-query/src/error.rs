//! Error types for query planning.

use thiserror::Error;

/// A search request that cannot be planned.
///
/// Every variant describes a client mistake; none of them is worth retrying unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Page numbers start at 1.
    #[error("pageNo must be at least 1, got {0}")]
    InvalidPageNo(u32),

    /// Page size is zero or above the configured maximum.
    #[error("pageSize must be between 1 and {max}, got {size}")]
    InvalidPageSize {
        /// Requested page size.
        size: u32,
        /// Largest accepted page size.
        max: u32,
    },

    /// The page window does not fit in addressable memory.
    #[error("page window starting at {0} is out of range")]
    WindowOverflow(u64),

    /// The sort field is not one of the sortable product fields.
    #[error("cannot sort by unknown field '{0}'")]
    UnknownSortField(String),

    /// The minimum price exceeds the maximum price and the policy rejects it.
    #[error("minPrice {min} is greater than maxPrice {max}")]
    InvertedPriceRange {
        /// Requested lower bound.
        min: u64,
        /// Requested upper bound.
        max: u64,
    },
}
