//! Terms aggregation over keyword fast fields.

use serde_json::{Value, json};
use tantivy::{
    Searcher,
    aggregation::{AggregationCollector, AggregationLimits, agg_req::Aggregations},
    query::Query,
};
use tracing::debug;

use crate::{
    IndexError,
    port::{Dimension, FacetBucket, FacetCounts, FacetSpec},
};

/// Counts matching documents per value for each requested dimension.
pub fn execute(
    searcher: &Searcher,
    query: &dyn Query,
    facets: &[FacetSpec],
) -> Result<FacetCounts, IndexError> {
    let mut counts = FacetCounts::new();
    let requested: Vec<&FacetSpec> = facets.iter().filter(|spec| spec.top_n > 0).collect();
    for spec in facets {
        counts.insert(spec.dimension, Vec::new());
    }
    if requested.is_empty() {
        return Ok(counts);
    }

    let mut request = serde_json::Map::new();
    for spec in &requested {
        request.insert(
            spec.dimension.field().to_string(),
            json!({ "terms": { "field": spec.dimension.field(), "size": spec.top_n } }),
        );
    }
    let aggs: Aggregations = serde_json::from_value(Value::Object(request))
        .map_err(|e| IndexError::Search(format!("invalid aggregation request: {e}")))?;

    let collector = AggregationCollector::from_aggs(aggs, AggregationLimits::default());
    let results = searcher
        .search(query, &collector)
        .map_err(|e| IndexError::search(&e))?;
    let payload = serde_json::to_value(&results)
        .map_err(|e| IndexError::decode("aggregation", e.to_string()))?;

    for spec in requested {
        let buckets = parse_buckets(&payload, spec.dimension)?;
        debug!(dimension = %spec.dimension, buckets = buckets.len(), "aggregated facet");
        counts.insert(
            spec.dimension,
            buckets.into_iter().take(spec.top_n).collect(),
        );
    }

    Ok(counts)
}

/// Reads the buckets of one dimension out of an aggregation payload.
///
/// A dimension absent from the payload has no buckets. A present dimension with a malformed
/// bucket list is a decode error.
fn parse_buckets(payload: &Value, dimension: Dimension) -> Result<Vec<FacetBucket>, IndexError> {
    let Some(result) = payload.get(dimension.field()) else {
        return Ok(Vec::new());
    };

    let buckets = result
        .get("buckets")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            IndexError::decode("aggregation", format!("{dimension} result has no bucket list"))
        })?;

    buckets
        .iter()
        .map(|bucket| {
            let key = match bucket.get("key") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => {
                    return Err(IndexError::decode(
                        "aggregation",
                        format!("{dimension} bucket has no key"),
                    ));
                }
            };
            let count = bucket
                .get("doc_count")
                .and_then(Value::as_u64)
                .ok_or_else(|| {
                    IndexError::decode("aggregation", format!("{dimension} bucket has no count"))
                })?;
            Ok(FacetBucket { key, count })
        })
        .collect()
}
