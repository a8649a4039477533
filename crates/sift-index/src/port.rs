//! The index access port.
//!
//! [`IndexPort`] is the seam between the catalog service and the document store. The
//! Tantivy-backed [`crate::TantivyStore`] is the production implementation; tests substitute
//! in-memory fakes.

use std::{collections::BTreeMap, fmt};

use sift_query::{PageWindow, PredicateTree, Ranking};

use crate::{Document, IndexError};

/// Markup wrapped around matched terms in highlighted fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpec {
    /// Inserted before each matched term.
    pub pre_tag: String,
    /// Inserted after each matched term.
    pub post_tag: String,
}

impl Default for HighlightSpec {
    fn default() -> Self {
        Self {
            pre_tag: String::from("<em>"),
            post_tag: String::from("</em>"),
        }
    }
}

/// One search round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Match criteria.
    pub predicate: PredicateTree,
    /// Boosted relevance or field sort.
    pub ranking: Ranking,
    /// Result window.
    pub window: PageWindow,
    /// Highlight the text-matched field when set.
    pub highlight: Option<HighlightSpec>,
}

/// A matched document as returned by the index.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHit {
    /// The stored document.
    pub document: Document,
    /// Final score; absent when results were sorted by a field.
    pub score: Option<f32>,
    /// Highlighted fragments keyed by field name.
    pub highlights: BTreeMap<String, Vec<String>>,
}

/// The page of hits plus the total match count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHits {
    /// Number of documents matching the predicate, independent of the window.
    pub total: u64,
    /// Hits inside the window, in rank order.
    pub hits: Vec<RawHit>,
}

/// A refinement dimension with grouped counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    /// Product category.
    Category,
    /// Product brand.
    Brand,
}

impl Dimension {
    /// Index field name.
    pub fn field(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Brand => "brand",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Requests the `top_n` most frequent values of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetSpec {
    /// Dimension to group by.
    pub dimension: Dimension,
    /// Maximum number of buckets.
    pub top_n: usize,
}

/// One distinct value of a dimension and the number of matching documents carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetBucket {
    /// The value.
    pub key: String,
    /// Number of matching documents.
    pub count: u64,
}

/// Grouped counts per dimension.
pub type FacetCounts = BTreeMap<Dimension, Vec<FacetBucket>>;

/// Read access to a product index.
///
/// `index` names the logical index; implementations serving a different index return
/// [`IndexError::UnknownIndex`].
pub trait IndexPort {
    /// Runs a search and returns the requested window of hits plus the total match count.
    fn search(&self, index: &str, request: &SearchRequest) -> Result<SearchHits, IndexError>;

    /// Fetches a single product by id.
    fn get(&self, index: &str, id: u64) -> Result<Option<Document>, IndexError>;

    /// Counts matching documents per value for each requested dimension.
    ///
    /// Buckets are ordered by count, largest first, and hold at most `top_n` entries.
    fn aggregate(
        &self,
        index: &str,
        predicate: &PredicateTree,
        facets: &[FacetSpec],
    ) -> Result<FacetCounts, IndexError>;
}
