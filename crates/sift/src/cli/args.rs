//! Clap argument definitions for the `sift` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sift_query::SearchQuery;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Faceted product search over a local index")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Match criteria shared by `search` and `filters`.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Free text matched against product names
    pub key: Option<String>,

    /// Only products in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only products of this brand
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Minimum price, inclusive, in minor currency units
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Maximum price, inclusive, in minor currency units
    #[arg(long)]
    pub max_price: Option<u64>,
}

impl QueryArgs {
    /// Builds the match criteria of a search query.
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            key: self.key.clone(),
            category: self.category.clone(),
            brand: self.brand.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            ..SearchQuery::default()
        }
    }
}

/// Arguments for `sift search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Match criteria.
    #[command(flatten)]
    pub query: QueryArgs,

    /// Sort by field (price, sold, commentCount, updateTime) instead of relevance
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort ascending (default is descending)
    #[arg(long, requires = "sort")]
    pub asc: bool,

    /// Page number, starting at 1
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Results per page [default: from config]
    #[arg(short = 'n', long)]
    pub page_size: Option<u32>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show the compiled predicate, ranking and page window without searching
    #[arg(long)]
    pub explain: bool,
}

impl SearchCommand {
    /// Builds the full search query.
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            sort_by: self.sort.clone(),
            is_asc: self.asc,
            page_no: self.page,
            page_size: self.page_size,
            ..self.query.to_query()
        }
    }
}

/// Arguments for `sift get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Product id
    pub id: u64,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sift filters`.
#[derive(Args, Debug, Clone)]
pub struct FiltersCommand {
    /// Match criteria.
    #[command(flatten)]
    pub query: QueryArgs,

    /// Output in JSON format (keys only)
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sift serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeCommand {
    /// Address to listen on [default: from config]
    #[arg(long)]
    pub bind: Option<String>,
}

/// Arguments for `sift init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.sift.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `sift load`.
#[derive(Args, Debug, Clone)]
pub struct LoadCommand {
    /// JSON-lines file with one product per line
    pub file: PathBuf,

    /// Remove all existing products first
    #[arg(long)]
    pub replace: bool,
}

/// Supported `sift` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search products and print one page of results
    #[command(after_help = "\
EXAMPLES:
  sift search milk
  sift search milk --category dairy --max-price 500
  sift search --brand Meadow --sort price --asc
  sift search shoes --page 2 -n 10 --json")]
    Search(SearchCommand),

    /// Retrieve a product by id
    Get(GetCommand),

    /// List the most common categories and brands among matching products
    Filters(FiltersCommand),

    /// Serve the search HTTP API
    Serve(ServeCommand),

    /// Load products from a JSON-lines file into the index
    Load(LoadCommand),

    /// Initialize sift configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Show configuration files, index location and document count
    Status,
}
