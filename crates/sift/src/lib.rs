//! sift: faceted product search.
//!
//! sift answers storefront search requests against a product index. A request carries free
//! text, exact category and brand filters, a price range, an optional sort and 1-based
//! paging. Results come back one page at a time, with promoted products boosted in relevance
//! order and matched terms highlighted in product names. A companion filter request lists
//! the most common categories and brands among the matching products.
//!
//! The `sift` binary exposes the same operations as CLI commands and as an HTTP service.

#![warn(missing_docs)]

pub mod cli;
pub mod logging;
pub mod server;
