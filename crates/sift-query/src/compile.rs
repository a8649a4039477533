//! Filter compilation.
//!
//! Builds a [`PredicateTree`] from a [`SearchQuery`] in a single pass. Each present field
//! contributes exactly one clause; absent or blank fields contribute none.

use crate::{
    SearchQuery,
    predicate::{FilterClause, KeywordField, NumericField, PredicateTree, TextMatch},
    request::non_blank,
};

/// Compiles the match criteria of a request into a predicate tree.
///
/// - a non-blank `key` becomes the text clause against the product name
/// - non-blank `category` and `brand` become exact-match filters
/// - `min_price` and `max_price` become independent inclusive bounds
///
/// Price bound ordering is not checked here; see [`crate::check_price_range`].
pub fn compile(query: &SearchQuery) -> PredicateTree {
    let text = non_blank(query.key.as_deref()).map(TextMatch::new);

    let exact = |field: KeywordField, value: Option<&str>| {
        non_blank(value).map(|value| FilterClause::Exact {
            field,
            value: value.to_string(),
        })
    };

    let filters = [
        exact(KeywordField::Category, query.category.as_deref()),
        exact(KeywordField::Brand, query.brand.as_deref()),
        query.min_price.map(|value| FilterClause::AtLeast {
            field: NumericField::Price,
            value,
        }),
        query.max_price.map(|value| FilterClause::AtMost {
            field: NumericField::Price,
            value,
        }),
    ]
    .into_iter()
    .flatten()
    .collect();

    PredicateTree::new(text, filters)
}
