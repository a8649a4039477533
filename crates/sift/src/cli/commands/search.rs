//! Implementation of `sift search`.

use std::process::ExitCode;

use sift_index::CatalogSettings;
use sift_query::{Ranking, SearchQuery, plan};

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{print_json, print_search_result, report_error, subheader},
};

/// Searches the index and prints one page of products.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let query = cmd.to_query();

    if cmd.explain {
        return explain(&query, &CatalogSettings::from_config(&ctx.config));
    }

    let catalog = match ctx.catalog() {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    let result = match catalog.search(&query) {
        Ok(result) => result,
        Err(e) => return report_error(&e),
    };
    catalog.into_port().close();

    if cmd.json {
        return print_json(&result);
    }
    print_search_result(&result);
    ExitCode::SUCCESS
}

/// Prints the plan for a query without touching the index.
fn explain(query: &SearchQuery, settings: &CatalogSettings) -> ExitCode {
    let plan = match plan(query, &settings.plan) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("error: invalid query: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", subheader("Predicate:"));
    println!("   {}", plan.predicate);
    println!();

    println!("{}", subheader("Ranking:"));
    match &plan.ranking {
        Ranking::Relevance(function) => {
            println!("   relevance");
            for rule in function.rules() {
                println!("   x{} when {}", rule.factor, rule.trigger.name());
            }
        }
        Ranking::Sorted(spec) => println!("   sort by {spec}"),
    }
    println!();

    println!("{}", subheader("Page:"));
    println!(
        "   page {} of size {} (offset {}, limit {})",
        plan.page.page_no, plan.page.page_size, plan.page.window.offset, plan.page.window.limit
    );
    ExitCode::SUCCESS
}
