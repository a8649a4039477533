//! Command implementations and dispatch.

pub mod config;
pub mod filters;
pub mod get;
pub mod init;
pub mod load;
pub mod search;
pub mod serve;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Get(cmd) => get::run(ctx, &cmd),
        Commands::Filters(cmd) => filters::run(ctx, &cmd),
        Commands::Serve(cmd) => serve::run(ctx, &cmd),
        Commands::Load(cmd) => load::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Status => status::run(ctx),
    }
}
