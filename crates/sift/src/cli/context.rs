//! Per-invocation state shared by CLI commands.

use std::{env, fmt::Display, path::PathBuf, process::ExitCode};

use sift_config::Config;
use sift_index::{CatalogService, CatalogSettings, TantivyStore, resolve_index_directory};

/// Prints `error: {message}` and yields a failing exit code.
fn fail(message: impl Display) -> ExitCode {
    eprintln!("error: {message}");
    ExitCode::FAILURE
}

/// Working directory plus the configuration that applies to it.
pub struct CommandContext {
    /// Directory the command was started in.
    pub cwd: PathBuf,
    /// Effective configuration; defaults when no `.sift.toml` applies.
    pub config: Config,
}

impl CommandContext {
    /// Captures the working directory and loads its configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let mut ctx = Self::load_cwd_only()?;
        ctx.config = Config::load(&ctx.cwd)
            .map_err(|e| fail(format!("failed to load configuration: {e}")))?;
        Ok(ctx)
    }

    /// Captures the working directory without reading any configuration.
    ///
    /// `init` uses this so a broken config file can still be overwritten.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = env::current_dir()
            .map_err(|e| fail(format!("could not determine current directory: {e}")))?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Where the configured index lives on disk.
    pub fn index_path(&self) -> Result<PathBuf, ExitCode> {
        resolve_index_directory(&self.config)
            .ok_or_else(|| fail("could not determine index location (no home directory)"))
    }

    /// Opens the configured index read-only.
    pub fn open_store(&self) -> Result<TantivyStore, ExitCode> {
        let path = self.index_path()?;
        TantivyStore::open_with_config(&path, &self.config).map_err(|e| {
            let code = fail(e);
            eprintln!("Run 'sift load <FILE>' to build an index.");
            code
        })
    }

    /// A catalog service over the configured index.
    pub fn catalog(&self) -> Result<CatalogService<TantivyStore>, ExitCode> {
        let settings = CatalogSettings::from_config(&self.config);
        Ok(CatalogService::new(self.open_store()?, settings))
    }
}
