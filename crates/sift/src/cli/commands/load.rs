//! Implementation of `sift load`.

use std::process::ExitCode;

use sift_index::{IndexWriter, load_documents};
use tracing::info;

use crate::cli::{args::LoadCommand, context::CommandContext};

/// Loads products from a JSON-lines file into the configured index.
pub fn run(ctx: &CommandContext, cmd: &LoadCommand) -> ExitCode {
    let docs = match load_documents(&cmd.file) {
        Ok(docs) => docs,
        Err(e) => {
            eprintln!("error: {}: {e}", cmd.file.display());
            return ExitCode::FAILURE;
        }
    };

    let path = match ctx.index_path() {
        Ok(path) => path,
        Err(code) => return code,
    };

    let result = IndexWriter::open(&path, &ctx.config.index.stemmer).and_then(|mut writer| {
        if cmd.replace {
            writer.delete_all()?;
        }
        writer.add_documents(&docs)?;
        writer.commit()?;
        writer.num_docs()
    });

    match result {
        Ok(total) => {
            info!(path = %path.display(), loaded = docs.len(), total, "loaded products");
            println!(
                "Loaded {} products into {} ({total} total)",
                docs.len(),
                path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to load products: {e}");
            ExitCode::FAILURE
        }
    }
}
