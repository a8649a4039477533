//! Query compilation, ranking and page planning for sift product search.
//!
//! This crate turns a raw [`SearchQuery`] into engine-neutral pieces:
//!
//! - **Predicate**: [`compile`] builds a [`PredicateTree`] of one optional text clause and
//!   exact or range filter clauses, all ANDed together
//! - **Ranking**: [`compose_ranking`] either wraps relevance in a multiplicative
//!   [`ScoreFunction`] that boosts promoted products, or replaces scoring with a field sort
//! - **Paging**: [`plan_page`] derives the offset/limit window from 1-based page numbers
//!
//! [`plan`] runs all three and returns a [`QueryPlan`] that an index backend executes.
//!
//! # Example
//!
//! ```
//! use sift_query::{PlanOptions, SearchQuery, plan};
//!
//! let query = SearchQuery {
//!     key: Some("milk".into()),
//!     category: Some("dairy".into()),
//!     page_no: Some(2),
//!     page_size: Some(7),
//!     ..SearchQuery::default()
//! };
//!
//! let plan = plan(&query, &PlanOptions::default()).unwrap();
//! assert_eq!(plan.predicate.filters().len(), 1);
//! assert_eq!(plan.page.window.offset, 7);
//! assert!(plan.ranking.score_function().is_some());
//! ```

#![warn(missing_docs)]

mod compile;
mod error;
mod page;
mod plan;
mod predicate;
mod rank;
mod request;
mod sort;

pub use compile::compile;
pub use error::QueryError;
pub use page::{PageLimits, PagePlan, PageWindow, plan_page};
pub use plan::{PlanOptions, QueryPlan, check_price_range, plan};
pub use predicate::{FilterClause, KeywordField, NumericField, PredicateTree, TextMatch};
pub use rank::{BoostRule, FlagField, Ranking, ScoreFunction, compose_ranking};
pub use request::SearchQuery;
pub use sort::{SortField, SortOrder, SortSpec};
