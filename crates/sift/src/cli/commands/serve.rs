//! Implementation of `sift serve`.

use std::process::ExitCode;

use sift_index::{CatalogService, CatalogSettings};
use tokio::runtime::Runtime;
use tracing::error;

use crate::{
    cli::{args::ServeCommand, context::CommandContext},
    server,
};

/// Serves the search HTTP API until interrupted.
pub fn run(ctx: &CommandContext, cmd: &ServeCommand) -> ExitCode {
    let bind = cmd.bind.as_deref().unwrap_or(&ctx.config.server.bind);

    let store = match ctx.open_store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let catalog = CatalogService::new(store, CatalogSettings::from_config(&ctx.config));

    let runtime = match Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(server::serve(catalog, bind)) {
        Ok(Some(store)) => {
            store.close();
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
