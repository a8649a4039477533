//! Tantivy-backed product index and catalog search service for sift.
//!
//! This crate provides:
//! - The [`IndexPort`] seam and its Tantivy implementation, [`TantivyStore`]
//! - The [`CatalogService`], which plans requests, calls the port once per request and maps
//!   the response into [`SearchResult`] pages and [`FilterResult`] facets
//! - An [`IndexWriter`] and JSON-lines loader for building indexes locally
//! - Index location resolution based on configuration
//!
//! # Example
//!
//! ```no_run
//! use sift_index::{CatalogService, CatalogSettings, Document, IndexWriter, TantivyStore};
//! use sift_query::SearchQuery;
//!
//! let mut writer = IndexWriter::open("./index".as_ref(), "english").unwrap();
//! writer
//!     .add_document(&Document {
//!         id: 1,
//!         name: "Milk A".to_string(),
//!         price: 100,
//!         category: "dairy".to_string(),
//!         ..Document::default()
//!     })
//!     .unwrap();
//! writer.commit().unwrap();
//!
//! let store = TantivyStore::open("./index".as_ref(), "items", "english").unwrap();
//! let catalog = CatalogService::new(store, CatalogSettings::default());
//! let page = catalog
//!     .search(&SearchQuery {
//!         key: Some("milk".into()),
//!         ..SearchQuery::default()
//!     })
//!     .unwrap();
//! assert_eq!(page.total, 1);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod catalog;
mod document;
mod error;
mod location;
mod port;
mod schema;
mod store;
mod writer;

pub use analyzer::{analyze, build_analyzer, build_analyzer_from_name, parse_language};
pub use catalog::{
    CatalogService, CatalogSettings, FilterResult, SearchError, SearchResult, collect_facets,
    facet_specs, map_hit, map_hits,
};
pub use document::Document;
pub use error::IndexError;
pub use location::{global_index_directory, index_directory, resolve_index_directory};
pub use port::{
    Dimension, FacetBucket, FacetCounts, FacetSpec, HighlightSpec, IndexPort, RawHit,
    SearchHits, SearchRequest,
};
pub use schema::ProductSchema;
pub use store::TantivyStore;
pub use writer::{IndexWriter, load_documents, parse_documents};
