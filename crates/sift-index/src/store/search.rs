//! Search execution: ranking, windowing, total counting and highlighting.

use std::collections::{BTreeMap, HashSet};

use sift_query::{Ranking, ScoreFunction, SortField, SortOrder, SortSpec, TextMatch};
use tantivy::{
    DateTime, DocAddress, DocId, Order, Score, Searcher, SegmentReader, TantivyDocument,
    collector::{Count, TopDocs},
    query::Query,
    tokenizer::TextAnalyzer,
};
use tracing::debug;

use super::{highlight::highlight, query::build_query};
use crate::{
    Document, IndexError,
    analyzer::analyze,
    port::{HighlightSpec, RawHit, SearchHits, SearchRequest},
    schema::ProductSchema,
};

/// Runs a search request against a searcher.
pub fn execute(
    searcher: &Searcher,
    schema: &ProductSchema,
    analyzer: &TextAnalyzer,
    request: &SearchRequest,
) -> Result<SearchHits, IndexError> {
    let query = build_query(schema, analyzer, &request.predicate);
    let window = request.window;

    // The top-N collector reserves room for offset + limit entries up front, so the window
    // must never reach past the last document.
    let num_docs = usize::try_from(searcher.num_docs()).unwrap_or(usize::MAX);
    let limit = window.limit.min(num_docs.saturating_sub(window.offset));

    if limit == 0 {
        let total = searcher
            .search(query.as_ref(), &Count)
            .map_err(|e| IndexError::search(&e))?;
        return Ok(SearchHits {
            total: total as u64,
            hits: Vec::new(),
        });
    }

    let top = TopDocs::with_limit(limit).and_offset(window.offset);
    let (total, ranked) = match &request.ranking {
        Ranking::Relevance(function) => by_relevance(searcher, query.as_ref(), top, function)?,
        Ranking::Sorted(spec) => by_field(searcher, query.as_ref(), top, *spec)?,
    };

    let highlighter = request
        .highlight
        .as_ref()
        .zip(request.predicate.text())
        .map(|(spec, text)| Highlighter::new(analyzer, text, spec));

    let mut hits = Vec::with_capacity(ranked.len());
    for (score, address) in ranked {
        let doc: TantivyDocument = searcher.doc(address).map_err(|e| IndexError::search(&e))?;
        let document = Document::from_stored(&doc, schema)?;

        let mut highlights = BTreeMap::new();
        if let Some(highlighter) = &highlighter
            && let Some(fragment) = highlighter.fragment(&document.name)
        {
            highlights.insert(TextMatch::FIELD.to_string(), vec![fragment]);
        }

        hits.push(RawHit {
            document,
            score,
            highlights,
        });
    }

    debug!(
        predicate = %request.predicate,
        total,
        returned = hits.len(),
        offset = window.offset,
        "search executed"
    );

    Ok(SearchHits {
        total: total as u64,
        hits,
    })
}

/// Ranked addresses with their score, if scores were computed.
type Ranked = Vec<(Option<f32>, DocAddress)>;

/// Collects the window by boosted relevance.
fn by_relevance(
    searcher: &Searcher,
    query: &dyn Query,
    top: TopDocs,
    function: &ScoreFunction,
) -> Result<(usize, Ranked), IndexError> {
    let function = function.clone();
    let collector = top.tweak_score(move |segment: &SegmentReader| {
        let flags: Vec<_> = function
            .rules()
            .iter()
            .map(|rule| (rule.trigger, segment.fast_fields().bool(rule.trigger.name()).ok()))
            .collect();
        let function = function.clone();
        move |doc: DocId, base: Score| {
            function.apply(base, |trigger| {
                flags
                    .iter()
                    .find(|(flag, _)| *flag == trigger)
                    .and_then(|(_, column)| column.as_ref())
                    .and_then(|column| column.first(doc))
                    .unwrap_or(false)
            })
        }
    });

    let (total, top_docs) = searcher
        .search(query, &(Count, collector))
        .map_err(|e| IndexError::search(&e))?;
    let ranked = top_docs
        .into_iter()
        .map(|(score, address)| (Some(score), address))
        .collect();
    Ok((total, ranked))
}

/// Collects the window in field order without scoring.
fn by_field(
    searcher: &Searcher,
    query: &dyn Query,
    top: TopDocs,
    spec: SortSpec,
) -> Result<(usize, Ranked), IndexError> {
    let order = match spec.order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };
    let field = spec.field.name();

    let (total, addresses): (usize, Vec<DocAddress>) = if spec.field == SortField::UpdatedAt {
        let collector = top.order_by_fast_field::<DateTime>(field, order);
        let (total, docs) = searcher
            .search(query, &(Count, collector))
            .map_err(|e| IndexError::search(&e))?;
        (total, docs.into_iter().map(|(_, address)| address).collect())
    } else {
        let collector = top.order_by_fast_field::<u64>(field, order);
        let (total, docs) = searcher
            .search(query, &(Count, collector))
            .map_err(|e| IndexError::search(&e))?;
        (total, docs.into_iter().map(|(_, address)| address).collect())
    };

    Ok((
        total,
        addresses.into_iter().map(|address| (None, address)).collect(),
    ))
}

/// Marks query terms in product names.
struct Highlighter<'a> {
    /// Analyzer shared with the index.
    analyzer: &'a TextAnalyzer,
    /// Analyzed query terms.
    terms: HashSet<String>,
    /// Markup.
    spec: &'a HighlightSpec,
}

impl<'a> Highlighter<'a> {
    /// Prepares highlighting for the query text.
    fn new(analyzer: &'a TextAnalyzer, text: &TextMatch, spec: &'a HighlightSpec) -> Self {
        Self {
            analyzer,
            terms: analyze(analyzer, text.text()).into_iter().collect(),
            spec,
        }
    }

    /// The highlighted fragment, if any term occurs in `value`.
    fn fragment(&self, value: &str) -> Option<String> {
        highlight(self.analyzer, value, &self.terms, self.spec)
    }
}
