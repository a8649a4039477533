//! Raw hits to public search results.

use serde::{Deserialize, Serialize};
use sift_query::{PagePlan, TextMatch};

use crate::{
    Document,
    port::{RawHit, SearchHits},
};

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Number of matching products as reported by the index.
    pub total: u64,
    /// 1-based page number.
    pub page_no: u32,
    /// Page size.
    pub page_size: u32,
    /// Products on this page, in rank order.
    #[serde(rename = "list")]
    pub items: Vec<Document>,
}

/// Builds the result page from the index response.
pub fn map_hits(hits: SearchHits, page: &PagePlan) -> SearchResult {
    SearchResult {
        total: hits.total,
        page_no: page.page_no,
        page_size: page.page_size,
        items: hits.hits.into_iter().map(map_hit).collect(),
    }
}

/// Converts a hit to a document, substituting the highlighted name when present.
pub fn map_hit(hit: RawHit) -> Document {
    let RawHit {
        mut document,
        mut highlights,
        ..
    } = hit;

    if let Some(fragment) = highlights
        .remove(TextMatch::FIELD)
        .and_then(|fragments| fragments.into_iter().next())
    {
        document.name = fragment;
    }
    document
}
