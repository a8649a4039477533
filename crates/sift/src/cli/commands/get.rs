//! Implementation of `sift get`.

use std::process::ExitCode;

use crate::cli::{
    args::GetCommand,
    context::CommandContext,
    output::{print_document, print_json, report_error},
};

/// Retrieves a product by id.
pub fn run(ctx: &CommandContext, cmd: &GetCommand) -> ExitCode {
    let catalog = match ctx.catalog() {
        Ok(catalog) => catalog,
        Err(code) => return code,
    };

    let doc = match catalog.get(cmd.id) {
        Ok(doc) => doc,
        Err(e) => return report_error(&e),
    };
    catalog.into_port().close();

    if cmd.json {
        return print_json(&doc);
    }
    print_document(&doc);
    ExitCode::SUCCESS
}
