//! Implementation of `sift filters`.

use std::process::ExitCode;

use crate::cli::{
    args::FiltersCommand,
    context::CommandContext,
    output::{print_filters, print_json, report_error},
};

/// Lists the top categories and brands among matching products.
pub fn run(ctx: &CommandContext, cmd: &FiltersCommand) -> ExitCode {
    let catalog = match ctx.catalog() {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    let result = match catalog.filters(&cmd.query.to_query()) {
        Ok(result) => result,
        Err(e) => return report_error(&e),
    };
    catalog.into_port().close();

    if cmd.json {
        return print_json(&result);
    }
    print_filters(&result);
    ExitCode::SUCCESS
}
