//! Per-file parsing into optional-everything `Raw*` structs, merged later.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, PriceRangePolicy};

/// One `.sift.toml` as written; absent keys stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Marks the outermost config; parents and the global file are not read.
    pub root: Option<bool>,
    /// Index section.
    pub index: Option<RawIndexSettings>,
    /// Search section.
    pub search: Option<RawSearchSettings>,
    /// Server section.
    pub server: Option<RawServerSettings>,
}

/// Raw index settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIndexSettings {
    /// Index directory, relative to the config file or tilde-prefixed.
    pub path: Option<String>,
    /// Logical index name.
    pub name: Option<String>,
    /// Stemming language.
    pub stemmer: Option<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Page size used when a request omits one.
    pub default_page_size: Option<u32>,
    /// Largest accepted page size.
    pub max_page_size: Option<u32>,
    /// Relevance multiplier for promoted products.
    #[serde(alias = "ad_boost")]
    pub promoted_boost: Option<f32>,
    /// Values per facet dimension.
    pub facet_size: Option<usize>,
    /// Whether to highlight matched name terms.
    pub highlight: Option<bool>,
    /// Markup before a highlighted term.
    pub highlight_pre_tag: Option<String>,
    /// Markup after a highlighted term.
    pub highlight_post_tag: Option<String>,
    /// Handling of inverted price bounds.
    pub inverted_price_range: Option<PriceRangePolicy>,
}

/// Raw server settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawServerSettings {
    /// Listen address.
    pub bind: Option<String>,
}

/// Reads and parses one `.sift.toml`.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => parse_config_str(&text, path),
        Err(source) => Err(ConfigError::ReadFile {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Parses `contents`, attributing failures to `path`.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_owned(),
        source,
    })
}

/// Parses `contents` with the bare TOML error.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// True when `path` is a readable config that sets `root = true`.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|config| config.root.unwrap_or(false))
}
