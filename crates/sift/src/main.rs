//! Command-line interface for the `sift` product search tool.

use std::process::ExitCode;

use clap::Parser;
use sift::{
    cli::{
        args::{Cli, Commands},
        commands,
        context::CommandContext,
    },
    logging::init_logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_directive = match cli.command {
        Commands::Serve(_) => "info",
        _ => "warn",
    };
    init_logging(default_directive);

    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
