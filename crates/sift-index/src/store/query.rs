//! Predicate tree to Tantivy query translation.
//!
//! The text clause is the only scoring clause. Filters are wrapped in zero-score constant
//! queries so they restrict matches without moving relevance. Filter-only trees score every
//! match at 1.0, which leaves the promotion boost as the only ordering signal.

use std::ops::Bound;

use sift_query::{FilterClause, KeywordField, PredicateTree, TextMatch};
use tantivy::{
    Term,
    query::{AllQuery, BooleanQuery, ConstScoreQuery, EmptyQuery, Occur, Query, RangeQuery, TermQuery},
    schema::{Field, IndexRecordOption},
    tokenizer::TextAnalyzer,
};

use crate::{analyzer::analyze, schema::ProductSchema};

/// Translates a predicate tree into a Tantivy query.
pub fn build_query(
    schema: &ProductSchema,
    analyzer: &TextAnalyzer,
    predicate: &PredicateTree,
) -> Box<dyn Query> {
    if predicate.is_match_all() {
        return Box::new(AllQuery);
    }

    let base: Box<dyn Query> = match predicate.text() {
        Some(text) => text_query(schema, analyzer, text),
        None => Box::new(AllQuery),
    };

    let mut clauses: Vec<(Occur, Box<dyn Query>)> =
        Vec::with_capacity(predicate.filters().len() + 1);
    clauses.push((Occur::Must, base));
    clauses.extend(
        predicate
            .filters()
            .iter()
            .map(|clause| (Occur::Must, filter_query(schema, clause))),
    );

    Box::new(BooleanQuery::new(clauses))
}

/// Builds the match query for the product name: any analyzed token may match.
///
/// Text that analyzes to no tokens matches nothing.
fn text_query(schema: &ProductSchema, analyzer: &TextAnalyzer, text: &TextMatch) -> Box<dyn Query> {
    let tokens = analyze(analyzer, text.text());
    if tokens.is_empty() {
        return Box::new(EmptyQuery);
    }

    let clauses: Vec<(Occur, Box<dyn Query>)> = tokens
        .iter()
        .map(|token| {
            let term = Term::from_field_text(schema.name, token);
            let query: Box<dyn Query> =
                Box::new(TermQuery::new(term, IndexRecordOption::WithFreqs));
            (Occur::Should, query)
        })
        .collect();

    Box::new(BooleanQuery::new(clauses))
}

/// Builds a non-scoring query for a filter clause.
fn filter_query(schema: &ProductSchema, clause: &FilterClause) -> Box<dyn Query> {
    let inner: Box<dyn Query> = match clause {
        FilterClause::Exact { field, value } => Box::new(TermQuery::new(
            Term::from_field_text(keyword_field(schema, *field), value),
            IndexRecordOption::Basic,
        )),
        FilterClause::AtLeast { field, value } => Box::new(RangeQuery::new_u64_bounds(
            field.name().to_string(),
            Bound::Included(*value),
            Bound::Unbounded,
        )),
        FilterClause::AtMost { field, value } => Box::new(RangeQuery::new_u64_bounds(
            field.name().to_string(),
            Bound::Unbounded,
            Bound::Included(*value),
        )),
    };
    Box::new(ConstScoreQuery::new(inner, 0.0))
}

/// Schema handle for a keyword field.
fn keyword_field(schema: &ProductSchema, field: KeywordField) -> Field {
    match field {
        KeywordField::Category => schema.category,
        KeywordField::Brand => schema.brand,
    }
}
