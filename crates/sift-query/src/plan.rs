//! Whole-request planning.

use crate::{
    QueryError, SearchQuery,
    compile::compile,
    page::{PageLimits, PagePlan, plan_page},
    predicate::PredicateTree,
    rank::{Ranking, compose_ranking},
};

/// Tunables applied while planning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanOptions {
    /// Page size bounds.
    pub limits: PageLimits,
    /// Score multiplier for promoted documents.
    pub promoted_boost: f32,
    /// Fail requests whose minimum price exceeds their maximum price.
    pub reject_inverted_price_range: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            limits: PageLimits::default(),
            promoted_boost: 10.0,
            reject_inverted_price_range: false,
        }
    }
}

/// Everything an index needs to execute a search.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    /// Match criteria.
    pub predicate: PredicateTree,
    /// Result ordering.
    pub ranking: Ranking,
    /// Result window.
    pub page: PagePlan,
}

/// Plans a search request: compiles the predicate, chooses the ranking and resolves the page.
pub fn plan(query: &SearchQuery, options: &PlanOptions) -> Result<QueryPlan, QueryError> {
    check_price_range(query, options)?;
    let page = plan_page(query.page_no, query.page_size, options.limits)?;
    let ranking = compose_ranking(query.sort_field(), query.is_asc, options.promoted_boost)?;

    Ok(QueryPlan {
        predicate: compile(query),
        ranking,
        page,
    })
}

/// Rejects inverted price bounds when the options ask for it.
///
/// With rejection disabled an inverted range is passed through and simply matches nothing.
pub fn check_price_range(query: &SearchQuery, options: &PlanOptions) -> Result<(), QueryError> {
    match (query.min_price, query.max_price) {
        (Some(min), Some(max)) if options.reject_inverted_price_range && min > max => {
            Err(QueryError::InvertedPriceRange { min, max })
        }
        _ => Ok(()),
    }
}
