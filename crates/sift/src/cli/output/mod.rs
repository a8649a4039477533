//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use sift_index::{Dimension, Document, FilterResult, SearchError, SearchResult};

/// ANSI escape codes for terminal styling.
mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dimmed text.
    pub const DIM: &str = "\x1b[2m";
    /// Resets all styling.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Reports a failed catalog operation.
pub fn report_error(err: &SearchError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::FAILURE
}

/// Prints one page of search results as a table.
pub fn print_search_result(result: &SearchResult) {
    if result.items.is_empty() {
        println!(
            "{}",
            dim(&format!(
                "No results on page {} ({} total).",
                result.page_no, result.total
            ))
        );
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Id", "Name", "Price", "Category", "Brand", "Sold", "Reviews", "Ad",
    ]);
    for doc in &result.items {
        table.add_row(vec![
            Cell::new(doc.id).set_alignment(CellAlignment::Right),
            Cell::new(&doc.name),
            Cell::new(doc.price).set_alignment(CellAlignment::Right),
            Cell::new(&doc.category),
            Cell::new(&doc.brand),
            Cell::new(doc.sold).set_alignment(CellAlignment::Right),
            Cell::new(doc.comment_count).set_alignment(CellAlignment::Right),
            Cell::new(if doc.promoted { "yes" } else { "" }),
        ]);
    }
    println!("{table}");

    let first = u64::from(result.page_no.saturating_sub(1)) * u64::from(result.page_size) + 1;
    let last = first + result.items.len() as u64 - 1;
    println!(
        "{}",
        dim(&format!(
            "Showing {first}-{last} of {} (page {}, {} per page)",
            result.total, result.page_no, result.page_size
        ))
    );
}

/// Prints a single product as a field listing.
pub fn print_document(doc: &Document) {
    println!("{}", subheader(&doc.name));
    let rows = [
        ("id", doc.id.to_string()),
        ("price", doc.price.to_string()),
        ("category", doc.category.clone()),
        ("brand", doc.brand.clone()),
        ("sold", doc.sold.to_string()),
        ("reviews", doc.comment_count.to_string()),
        ("promoted", doc.promoted.to_string()),
        ("updated", doc.updated_at.to_string()),
        ("image", doc.image.clone()),
    ];
    for (label, value) in rows {
        println!("   {} {value}", dim(&format!("{label:<9}")));
    }
}

/// Prints facet buckets with their counts.
pub fn print_filters(result: &FilterResult) {
    for dimension in [Dimension::Category, Dimension::Brand] {
        println!("{}", subheader(&format!("{dimension}:")));
        let buckets = result.buckets(dimension);
        if buckets.is_empty() {
            println!("   {}", dim("(none)"));
            continue;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Value", "Products"]);
        for bucket in buckets {
            table.add_row(vec![
                Cell::new(&bucket.key),
                Cell::new(bucket.count).set_alignment(CellAlignment::Right),
            ]);
        }
        println!("{table}");
    }
}
