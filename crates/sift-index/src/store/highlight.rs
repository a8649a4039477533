//! Highlight span extraction and rendering.

use std::{collections::HashSet, ops::Range};

use tantivy::tokenizer::{TextAnalyzer, TokenStream};

use crate::port::HighlightSpec;

/// Merges byte ranges, combining overlapping or adjacent ranges.
///
/// The result is sorted by start position with no overlaps.
pub fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| r.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(current) if range.start <= current.end => {
                current.end = current.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Extracts byte ranges of tokens in `text` whose analyzed form is in `terms`.
///
/// Offsets are relative to the original text.
pub fn extract_match_ranges(
    analyzer: &TextAnalyzer,
    text: &str,
    terms: &HashSet<String>,
) -> Vec<Range<usize>> {
    if terms.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let mut analyzer = analyzer.clone();
    let mut stream = analyzer.token_stream(text);
    let mut ranges: Vec<Range<usize>> = Vec::new();

    while let Some(token) = stream.next() {
        if terms.contains(&token.text) {
            ranges.push(token.offset_from..token.offset_to);
        }
    }

    merge_ranges(ranges)
}

/// Wraps each range of `text` in the highlight tags.
pub fn render(text: &str, ranges: &[Range<usize>], spec: &HighlightSpec) -> String {
    let extra = ranges.len() * (spec.pre_tag.len() + spec.post_tag.len());
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;

    for range in ranges {
        if range.start < cursor || range.end > text.len() {
            continue;
        }
        let (Some(before), Some(inner)) = (text.get(cursor..range.start), text.get(range.clone()))
        else {
            continue;
        };
        out.push_str(before);
        out.push_str(&spec.pre_tag);
        out.push_str(inner);
        out.push_str(&spec.post_tag);
        cursor = range.end;
    }
    out.push_str(text.get(cursor..).unwrap_or(""));
    out
}

/// Highlights `text`, returning `None` when no term matched.
pub fn highlight(
    analyzer: &TextAnalyzer,
    text: &str,
    terms: &HashSet<String>,
    spec: &HighlightSpec,
) -> Option<String> {
    let ranges = extract_match_ranges(analyzer, text, terms);
    (!ranges.is_empty()).then(|| render(text, &ranges, spec))
}
