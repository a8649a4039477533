//! Catalog service tests against an in-memory port.

use std::{collections::BTreeMap, sync::Mutex};

use sift_query::{FilterClause, KeywordField, QueryError, SortField};

use super::*;
use crate::{
    IndexError,
    port::{Dimension, FacetBucket, FacetCounts, FacetSpec, RawHit, SearchHits},
};

/// Port returning canned responses and recording what it was asked.
#[derive(Default)]
struct FakePort {
    /// Hits returned from `search`.
    hits: Vec<RawHit>,
    /// Total returned from `search`.
    total: u64,
    /// Counts returned from `aggregate`.
    counts: FacetCounts,
    /// Error to fail every call with.
    fail: Option<fn() -> IndexError>,
    /// Search requests received.
    searches: Mutex<Vec<SearchRequest>>,
    /// Facet requests received.
    aggregations: Mutex<Vec<Vec<FacetSpec>>>,
}

impl FakePort {
    fn check(&self, index: &str) -> Result<(), IndexError> {
        if let Some(fail) = self.fail {
            return Err(fail());
        }
        assert_eq!(index, "items");
        Ok(())
    }
}

impl IndexPort for FakePort {
    fn search(&self, index: &str, request: &SearchRequest) -> Result<SearchHits, IndexError> {
        self.check(index)?;
        self.searches.lock().unwrap().push(request.clone());
        Ok(SearchHits {
            total: self.total,
            hits: self.hits.clone(),
        })
    }

    fn get(&self, index: &str, id: u64) -> Result<Option<Document>, IndexError> {
        self.check(index)?;
        Ok(self.hits.iter().map(|h| h.document.clone()).find(|d| d.id == id))
    }

    fn aggregate(
        &self,
        index: &str,
        _predicate: &sift_query::PredicateTree,
        facets: &[FacetSpec],
    ) -> Result<FacetCounts, IndexError> {
        self.check(index)?;
        self.aggregations.lock().unwrap().push(facets.to_vec());
        Ok(self.counts.clone())
    }
}

fn hit(id: u64, name: &str, fragment: Option<&str>) -> RawHit {
    let mut highlights = BTreeMap::new();
    if let Some(fragment) = fragment {
        highlights.insert("name".to_string(), vec![fragment.to_string()]);
    }
    RawHit {
        document: Document {
            id,
            name: name.to_string(),
            ..Document::default()
        },
        score: Some(1.0),
        highlights,
    }
}

fn service(port: FakePort) -> CatalogService<FakePort> {
    CatalogService::new(port, CatalogSettings::default())
}

#[test]
fn search_maps_hits_and_page() {
    let svc = service(FakePort {
        hits: vec![
            hit(2, "Milk B", Some("<em>Milk</em> B")),
            hit(1, "Milk A", None),
        ],
        total: 2,
        ..FakePort::default()
    });

    let result = svc
        .search(&SearchQuery {
            key: Some("Milk".into()),
            ..SearchQuery::default()
        })
        .unwrap();

    assert_eq!(result.total, 2);
    assert_eq!(result.page_no, 1);
    assert_eq!(result.page_size, 20);
    assert_eq!(result.items[0].name, "<em>Milk</em> B");
    assert_eq!(result.items[1].name, "Milk A");
}

#[test]
fn search_sends_planned_request() {
    let svc = service(FakePort::default());
    svc.search(&SearchQuery {
        category: Some("dairy".into()),
        page_no: Some(2),
        page_size: Some(7),
        ..SearchQuery::default()
    })
    .unwrap();

    let searches = svc.port().searches.lock().unwrap();
    let request = &searches[0];
    assert!(request.predicate.text().is_none());
    assert_eq!(
        request.predicate.filters(),
        &[FilterClause::Exact {
            field: KeywordField::Category,
            value: "dairy".into(),
        }]
    );
    assert_eq!(request.window.offset, 7);
    assert_eq!(request.window.limit, 7);
    assert_eq!(request.highlight, Some(HighlightSpec::default()));

    let function = request.ranking.score_function().unwrap();
    assert_eq!(function.rules()[0].factor, 10.0);
}

#[test]
fn sorted_search_has_no_score_function() {
    let svc = service(FakePort::default());
    svc.search(&SearchQuery {
        sort_by: Some("commentCount".into()),
        ..SearchQuery::default()
    })
    .unwrap();

    let searches = svc.port().searches.lock().unwrap();
    assert!(searches[0].ranking.score_function().is_none());
    assert_eq!(
        searches[0].ranking.sort().map(|s| s.field),
        Some(SortField::CommentCount)
    );
}

#[test]
fn invalid_page_never_reaches_index() {
    let svc = service(FakePort::default());
    for query in [
        SearchQuery {
            page_no: Some(0),
            ..SearchQuery::default()
        },
        SearchQuery {
            page_size: Some(0),
            ..SearchQuery::default()
        },
    ] {
        let err = svc.search(&query).unwrap_err();
        assert!(matches!(err, SearchError::InvalidQuery(_)), "{err}");
    }
    assert!(svc.port().searches.lock().unwrap().is_empty());
}

#[test]
fn unknown_sort_is_invalid_query() {
    let svc = service(FakePort::default());
    let err = svc
        .search(&SearchQuery {
            sort_by: Some("color".into()),
            ..SearchQuery::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidQuery(QueryError::UnknownSortField(_))
    ));
}

#[test]
fn inverted_range_follows_policy() {
    let query = SearchQuery {
        min_price: Some(500),
        max_price: Some(100),
        ..SearchQuery::default()
    };

    let lenient = service(FakePort::default());
    assert!(lenient.search(&query).is_ok());
    assert!(lenient.filters(&query).is_ok());

    let mut settings = CatalogSettings::default();
    settings.plan.reject_inverted_price_range = true;
    let strict = CatalogService::new(FakePort::default(), settings);
    assert!(matches!(
        strict.search(&query),
        Err(SearchError::InvalidQuery(_))
    ));
    assert!(matches!(
        strict.filters(&query),
        Err(SearchError::InvalidQuery(_))
    ));
}

#[test]
fn highlight_disabled_in_settings() {
    let settings = CatalogSettings {
        highlight: None,
        ..CatalogSettings::default()
    };
    let svc = CatalogService::new(FakePort::default(), settings);
    svc.search(&SearchQuery::default()).unwrap();
    assert!(svc.port().searches.lock().unwrap()[0].highlight.is_none());
}

#[test]
fn get_maps_missing_to_not_found() {
    let svc = service(FakePort {
        hits: vec![hit(1, "Milk A", None)],
        ..FakePort::default()
    });
    assert_eq!(svc.get(1).unwrap().name, "Milk A");
    assert!(matches!(svc.get(5), Err(SearchError::NotFound { id: 5 })));
}

#[test]
fn port_errors_are_classified() {
    let down = service(FakePort {
        fail: Some(|| IndexError::Search("connection refused".into())),
        ..FakePort::default()
    });
    assert!(matches!(
        down.search(&SearchQuery::default()),
        Err(SearchError::IndexUnavailable(_))
    ));
    assert!(matches!(down.get(1), Err(SearchError::IndexUnavailable(_))));

    let garbled = service(FakePort {
        fail: Some(|| IndexError::decode("aggregation", "no buckets")),
        ..FakePort::default()
    });
    assert!(matches!(
        garbled.filters(&SearchQuery::default()),
        Err(SearchError::Deserialization(_))
    ));
}

#[test]
fn filters_request_both_dimensions_capped() {
    let mut counts = FacetCounts::new();
    counts.insert(
        Dimension::Category,
        (0..12)
            .map(|i| FacetBucket {
                key: format!("cat-{i}"),
                count: 12 - i,
            })
            .collect(),
    );
    counts.insert(
        Dimension::Brand,
        vec![FacetBucket {
            key: "X".into(),
            count: 1,
        }],
    );
    let svc = service(FakePort {
        counts,
        ..FakePort::default()
    });

    let result = svc
        .filters(&SearchQuery {
            key: Some("milk".into()),
            page_no: Some(3),
            sort_by: Some("price".into()),
            ..SearchQuery::default()
        })
        .unwrap();

    assert_eq!(result.category.len(), 10);
    assert_eq!(result.keys(Dimension::Brand), vec!["X"]);

    let aggregations = svc.port().aggregations.lock().unwrap();
    assert_eq!(aggregations[0], facet_specs(10).to_vec());
    assert!(svc.port().searches.lock().unwrap().is_empty());
}

#[test]
fn settings_follow_config() {
    let mut config = Config::default();
    config.index.name = "catalog".into();
    config.search.promoted_boost = 4.0;
    config.search.max_page_size = 50;
    config.search.facet_size = 5;
    config.search.highlight_pre_tag = "<b>".into();
    config.search.inverted_price_range = PriceRangePolicy::Reject;

    let settings = CatalogSettings::from_config(&config);
    assert_eq!(settings.index_name, "catalog");
    assert_eq!(settings.plan.promoted_boost, 4.0);
    assert_eq!(settings.plan.limits.max_page_size, 50);
    assert_eq!(settings.facet_size, 5);
    assert!(settings.plan.reject_inverted_price_range);
    assert_eq!(settings.highlight.unwrap().pre_tag, "<b>");

    config.search.highlight = false;
    assert!(CatalogSettings::from_config(&config).highlight.is_none());
}

#[test]
fn facet_size_above_cap_is_clamped() {
    let mut config = Config::default();
    config.search.facet_size = 25;
    let settings = CatalogSettings::from_config(&config);
    assert_eq!(settings.facet_size, 10);

    let svc = CatalogService::new(FakePort::default(), settings);
    svc.filters(&SearchQuery::default()).unwrap();
    let aggregations = svc.port().aggregations.lock().unwrap();
    assert_eq!(aggregations[0], facet_specs(10).to_vec());
}
