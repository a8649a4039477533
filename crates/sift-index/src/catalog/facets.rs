//! Refinement facets for the filter endpoint.

use serde::{Serialize, Serializer};

use crate::port::{Dimension, FacetBucket, FacetCounts, FacetSpec};

/// Distinct category and brand values among matching products, most frequent first.
///
/// Counts are kept for callers of the Rust API; the serialized form lists keys only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult {
    /// Category buckets.
    pub category: Vec<FacetBucket>,
    /// Brand buckets.
    pub brand: Vec<FacetBucket>,
}

impl FilterResult {
    /// Buckets of one dimension.
    pub fn buckets(&self, dimension: Dimension) -> &[FacetBucket] {
        match dimension {
            Dimension::Category => &self.category,
            Dimension::Brand => &self.brand,
        }
    }

    /// Bucket keys of one dimension, in order.
    pub fn keys(&self, dimension: Dimension) -> Vec<&str> {
        self.buckets(dimension)
            .iter()
            .map(|bucket| bucket.key.as_str())
            .collect()
    }
}

/// Keys-only wire form.
#[derive(Serialize)]
struct FilterKeys<'a> {
    /// Category keys.
    category: Vec<&'a str>,
    /// Brand keys.
    brand: Vec<&'a str>,
}

impl Serialize for FilterResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FilterKeys {
            category: self.keys(Dimension::Category),
            brand: self.keys(Dimension::Brand),
        }
        .serialize(serializer)
    }
}

/// The facet requests for the filter endpoint.
pub fn facet_specs(top_n: usize) -> [FacetSpec; 2] {
    [Dimension::Category, Dimension::Brand].map(|dimension| FacetSpec { dimension, top_n })
}

/// Builds the filter result, truncating each dimension to `top_n` buckets.
///
/// Blank keys are dropped; a product without a brand has no brand value.
pub fn collect_facets(mut counts: FacetCounts, top_n: usize) -> FilterResult {
    let mut take = |dimension| {
        let mut buckets = counts.remove(&dimension).unwrap_or_default();
        buckets.retain(|bucket: &FacetBucket| !bucket.key.trim().is_empty());
        buckets.truncate(top_n);
        buckets
    };
    FilterResult {
        category: take(Dimension::Category),
        brand: take(Dimension::Brand),
    }
}
