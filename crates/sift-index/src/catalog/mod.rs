//! The catalog search service.
//!
//! [`CatalogService`] owns an [`IndexPort`] and turns raw [`SearchQuery`] requests into one
//! port round-trip each: search pages go through the result mapper, filter requests through
//! the facet aggregator. It holds no mutable state, so one instance serves all requests.

mod error;
mod facets;
mod mapper;
#[cfg(test)]
mod tests;

pub use error::SearchError;
pub use facets::{FilterResult, collect_facets, facet_specs};
pub use mapper::{SearchResult, map_hit, map_hits};
use sift_config::{Config, MAX_FACET_SIZE, PriceRangePolicy};
use sift_query::{PageLimits, PlanOptions, SearchQuery, check_price_range, compile, plan};
use tracing::debug;

use crate::{
    Document,
    port::{HighlightSpec, IndexPort, SearchRequest},
};

/// Tunables for the catalog service.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSettings {
    /// Logical index every request addresses.
    pub index_name: String,
    /// Planning options (page bounds, boost, price range policy).
    pub plan: PlanOptions,
    /// Maximum number of values per facet dimension, never above [`MAX_FACET_SIZE`].
    pub facet_size: usize,
    /// Name highlighting; `None` disables it.
    pub highlight: Option<HighlightSpec>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            index_name: String::from("items"),
            plan: PlanOptions::default(),
            facet_size: MAX_FACET_SIZE,
            highlight: Some(HighlightSpec::default()),
        }
    }
}

impl CatalogSettings {
    /// Derives settings from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let search = &config.search;
        Self {
            index_name: config.index.name.clone(),
            plan: PlanOptions {
                limits: PageLimits {
                    default_page_size: search.default_page_size,
                    max_page_size: search.max_page_size,
                },
                promoted_boost: search.promoted_boost,
                reject_inverted_price_range: search.inverted_price_range
                    == PriceRangePolicy::Reject,
            },
            facet_size: search.facet_size.min(MAX_FACET_SIZE),
            highlight: search.highlight.then(|| HighlightSpec {
                pre_tag: search.highlight_pre_tag.clone(),
                post_tag: search.highlight_post_tag.clone(),
            }),
        }
    }
}

/// Product search over an index port.
#[derive(Debug)]
pub struct CatalogService<P> {
    /// Index access.
    port: P,
    /// Tunables.
    settings: CatalogSettings,
}

impl<P: IndexPort> CatalogService<P> {
    /// Creates a service over an opened port.
    pub fn new(port: P, settings: CatalogSettings) -> Self {
        Self { port, settings }
    }

    /// Searches for one page of products.
    ///
    /// Fails with [`SearchError::InvalidQuery`] before touching the index when the page bounds,
    /// sort field or price range are invalid.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        let plan = plan(query, &self.settings.plan)?;
        debug!(
            predicate = %plan.predicate,
            page_no = plan.page.page_no,
            page_size = plan.page.page_size,
            sorted = plan.ranking.sort().is_some(),
            "planned search"
        );

        let request = SearchRequest {
            predicate: plan.predicate,
            ranking: plan.ranking,
            window: plan.page.window,
            highlight: self.settings.highlight.clone(),
        };
        let hits = self.port.search(&self.settings.index_name, &request)?;
        Ok(map_hits(hits, &plan.page))
    }

    /// Fetches one product by id.
    pub fn get(&self, id: u64) -> Result<Document, SearchError> {
        self.port
            .get(&self.settings.index_name, id)?
            .ok_or(SearchError::NotFound { id })
    }

    /// Lists the most frequent categories and brands among products matching `query`.
    ///
    /// Pagination and sort fields of the query are ignored.
    pub fn filters(&self, query: &SearchQuery) -> Result<FilterResult, SearchError> {
        check_price_range(query, &self.settings.plan)?;
        let predicate = compile(query);
        debug!(predicate = %predicate, "aggregating filters");

        let facet_size = self.settings.facet_size;
        let counts = self.port.aggregate(
            &self.settings.index_name,
            &predicate,
            &facet_specs(facet_size),
        )?;
        Ok(collect_facets(counts, facet_size))
    }

    /// Service settings.
    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// The underlying port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Consumes the service and returns its port, for shutdown.
    pub fn into_port(self) -> P {
        self.port
    }
}
