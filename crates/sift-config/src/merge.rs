//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving the index path against the file that defined it.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, IndexSettings, SearchSettings, ServerSettings,
    parse::{RawConfig, RawIndexSettings, RawSearchSettings, RawServerSettings},
    resolve::resolve_index_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory holding the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). For every setting the first defined value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let Some(first) = configs.first() else {
        return Ok(Config::default());
    };

    Ok(Config {
        index: merge_index_settings(configs)?,
        search: merge_section(configs, |c| c.search.as_ref(), apply_raw_search),
        server: merge_section(configs, |c| c.server.as_ref(), apply_raw_server),
        config_root: Some(first.dir().to_path_buf()),
    })
}

/// Folds one section across all configs, lowest precedence first so higher precedence
/// overwrites.
fn merge_section<T, R>(
    configs: &[ParsedConfig],
    section: impl Fn(&RawConfig) -> Option<&R>,
    apply: impl Fn(&mut T, &R),
) -> T
where
    T: Default,
{
    let mut result = T::default();
    for parsed in configs.iter().rev() {
        if let Some(raw) = section(&parsed.config) {
            apply(&mut result, raw);
        }
    }
    result
}

/// Merges index settings, resolving `path` relative to its defining file.
fn merge_index_settings(configs: &[ParsedConfig]) -> Result<IndexSettings, ConfigError> {
    let mut result = IndexSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.index {
            apply_raw_index(&mut result, raw, parsed.dir())?;
        }
    }

    Ok(result)
}

/// Applies raw index settings to result.
fn apply_raw_index(
    result: &mut IndexSettings,
    raw: &RawIndexSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(ref v) = raw.path {
        result.path = Some(resolve_index_path(v, config_dir)?);
    }
    if let Some(ref v) = raw.name {
        result.name = v.clone();
    }
    if let Some(ref v) = raw.stemmer {
        result.stemmer = v.clone();
    }
    Ok(())
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.default_page_size {
        result.default_page_size = v;
    }
    if let Some(v) = raw.max_page_size {
        result.max_page_size = v;
    }
    if let Some(v) = raw.promoted_boost {
        result.promoted_boost = v;
    }
    if let Some(v) = raw.facet_size {
        result.facet_size = v;
    }
    if let Some(v) = raw.highlight {
        result.highlight = v;
    }
    if let Some(ref v) = raw.highlight_pre_tag {
        result.highlight_pre_tag = v.clone();
    }
    if let Some(ref v) = raw.highlight_post_tag {
        result.highlight_post_tag = v.clone();
    }
    if let Some(v) = raw.inverted_price_range {
        result.inverted_price_range = v;
    }
}

/// Applies raw server settings to result.
fn apply_raw_server(result: &mut ServerSettings, raw: &RawServerSettings) {
    if let Some(ref v) = raw.bind {
        result.bind = v.clone();
    }
}
