//! Layered `.sift.toml` configuration.
//!
//! Settings come from every `.sift.toml` on the path from the working directory up to the
//! filesystem root, with `~/.sift.toml` as the weakest layer. A file marked `root = true`
//! ends the search.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawIndexSettings, RawSearchSettings, RawServerSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_index_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Largest number of values a facet dimension may return.
pub const MAX_FACET_SIZE: usize = 10;

/// Effective settings after all layers are merged.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Index location and text analysis settings.
    pub index: IndexSettings,
    /// Query planning, ranking and facet settings.
    pub search: SearchSettings,
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Directory containing the most specific config file (determines index location).
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Resolves the configuration that applies to `cwd`.
    ///
    /// Every `.sift.toml` between `cwd` and the filesystem root is read, followed by
    /// `~/.sift.toml`; nearer files override farther ones. No files means defaults.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Parses and merges `files`, listed strongest first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut parsed = Vec::with_capacity(files.len());
        for path in files {
            parsed.push(ParsedConfig {
                config: parse_config_file(path)?,
                path: path.clone(),
            });
        }
        if parsed.is_empty() {
            Ok(Self::default())
        } else {
            merge_configs(&parsed)
        }
    }

    /// Problems with the effective settings that do not prevent loading.
    ///
    /// Covers the promotion boost, page size limits, facet size and bind address.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Renders the effective settings as a `.sift.toml` document.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(&SettingsView {
            index: &self.index,
            search: &self.search,
            server: &self.server,
        })
        .map_err(ConfigError::SerializeToml)
    }
}

/// Index location and text analysis settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Explicit index directory, resolved to an absolute path during merging.
    ///
    /// When unset the index lives in `.sift/<name>` next to the winning config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Logical index name. Products live in `items`.
    pub name: String,
    /// Stemming language for the product name analyzer.
    pub stemmer: String,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            path: None,
            name: String::from("items"),
            stemmer: String::from("english"),
        }
    }
}

/// What to do with a query whose minimum price exceeds its maximum price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRangePolicy {
    /// Run the query as compiled; it matches nothing.
    #[default]
    Empty,
    /// Refuse the query as invalid.
    Reject,
}

/// Query planning, ranking and facet settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Page size used when a request does not carry one.
    pub default_page_size: u32,
    /// Largest page size a request may ask for.
    pub max_page_size: u32,
    /// Multiplicative relevance factor applied to promoted products.
    pub promoted_boost: f32,
    /// Number of values returned per facet dimension, capped at [`MAX_FACET_SIZE`].
    pub facet_size: usize,
    /// Whether search results carry highlighted product names.
    pub highlight: bool,
    /// Markup inserted before a highlighted term.
    pub highlight_pre_tag: String,
    /// Markup inserted after a highlighted term.
    pub highlight_post_tag: String,
    /// Handling of inverted price bounds.
    pub inverted_price_range: PriceRangePolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
            promoted_boost: 10.0,
            facet_size: 10,
            highlight: true,
            highlight_pre_tag: String::from("<em>"),
            highlight_post_tag: String::from("</em>"),
            inverted_price_range: PriceRangePolicy::Empty,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address the server listens on.
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: String::from("127.0.0.1:8080"),
        }
    }
}

/// Borrowed view of the file-backed sections, for rendering.
#[derive(Serialize)]
struct SettingsView<'a> {
    /// `[index]`
    index: &'a IndexSettings,
    /// `[search]`
    search: &'a SearchSettings,
    /// `[server]`
    server: &'a ServerSettings,
}
