//! Implementation of `sift status`.

use std::process::ExitCode;

use sift_config::{Config, ConfigWarning, discover_config_files};
use sift_index::{TantivyStore, resolve_index_directory};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Reports which configs apply, the index state and any configuration problems.
///
/// Exits non-zero when the configuration has warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    section("Config files:");
    let files = discover_config_files(&ctx.cwd);
    if files.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
    }
    files.iter().for_each(|f| println!("   {}", f.display()));
    println!();

    section("Index:");
    report_index(&ctx.config);

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }
    section(&format!("Warnings ({}):", warnings.len()));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();
    print_hints(&warnings);
    ExitCode::FAILURE
}

/// Prints a bold heading.
fn section(title: &str) {
    println!("{}", subheader(title));
}

/// Prints the index name, location and document count.
fn report_index(config: &Config) {
    println!("   name {}", config.index.name);
    let Some(path) = resolve_index_directory(config) else {
        println!("   {}", warning("[no location: home directory unknown]"));
        return;
    };
    let location = dim(&format!("({})", path.display()));
    match TantivyStore::open_with_config(&path, config) {
        Ok(store) => {
            println!("   {} documents {location}", store.num_docs());
            store.close();
        }
        Err(e) => {
            println!("   {} {location}", warning("[unavailable]"));
            println!("   {}", dim(&e.to_string()));
        }
    }
    println!();
}

/// One remedy line per warning.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        let hint = match w {
            ConfigWarning::NonPositiveBoost { .. } => {
                "Hint: set search.promoted_boost to a value above 0 (1.0 disables the boost)"
            }
            ConfigWarning::ZeroPageSize { .. } | ConfigWarning::DefaultPageSizeAboveMax { .. } => {
                "Hint: page sizes must satisfy 1 <= search.default_page_size <= search.max_page_size"
            }
            ConfigWarning::ZeroFacetSize => {
                "Hint: set search.facet_size to at least 1 to return filter values"
            }
            ConfigWarning::FacetSizeAboveMax { .. } => {
                "Hint: search.facet_size is capped at 10, lower it to silence this warning"
            }
            ConfigWarning::InvalidBindAddress { .. } => {
                "Hint: server.bind takes HOST:PORT, for example 127.0.0.1:8080"
            }
        };
        println!("{}", dim(hint));
    }
}
