//! End-to-end configuration loading from real directory trees.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use sift_config::{Config, ConfigError, ConfigWarning, PriceRangePolicy};
use tempfile::TempDir;

/// Writes `body` to `rel` under `top`, creating parents, and returns the file path.
fn write(top: &Path, rel: &str, body: &str) -> PathBuf {
    let file = top.join(rel);
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(&file, body).unwrap();
    file
}

#[test]
fn single_root_config() {
    let tmp = TempDir::new().unwrap();
    let top = tmp.path();
    write(
        top,
        ".sift.toml",
        r#"
root = true

[index]
name = "catalog"

[search]
default_page_size = 12
"#,
    );

    let config = Config::load(top).unwrap();

    assert_eq!(config.index.name, "catalog");
    assert_eq!(config.search.default_page_size, 12);
    assert_eq!(config.search.facet_size, 10);
    assert_eq!(config.config_root.as_deref(), Some(top));
}

#[test]
fn nearer_config_overrides_farther() {
    let tmp = TempDir::new().unwrap();
    let top = tmp.path();
    let subdir = top.join("shop/search/handlers");
    fs::create_dir_all(&subdir).unwrap();

    write(
        top,
        ".sift.toml",
        r#"
root = true

[index]
path = "shared-index"

[search]
promoted_boost = 5.0
max_page_size = 40
"#,
    );
    write(
        top,
        "shop/search/.sift.toml",
        r#"
[search]
max_page_size = 25
inverted_price_range = "reject"
"#,
    );

    let config = Config::load(&subdir).unwrap();

    assert!((config.search.promoted_boost - 5.0).abs() < f32::EPSILON);
    assert_eq!(config.search.max_page_size, 25);
    assert_eq!(config.search.inverted_price_range, PriceRangePolicy::Reject);
    assert_eq!(
        config.index.path,
        Some(top.join("shared-index"))
    );
    assert_eq!(
        config.config_root.as_deref(),
        Some(top.join("shop/search").as_path())
    );
}

#[test]
fn type_mismatch_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let top = tmp.path();
    write(top, ".sift.toml", "root = true\n[search]\nfacet_size = \"ten\"\n");

    let result = Config::load(top);
    assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
}

#[test]
fn no_files_means_defaults() {
    let config = Config::load_from_files(&[]).unwrap();
    assert!(config.config_root.is_none());
    assert_eq!(config.server.bind, "127.0.0.1:8080");
}

#[test]
fn loaded_settings_are_validated() {
    let tmp = TempDir::new().unwrap();
    let top = tmp.path();
    write(
        top,
        ".sift.toml",
        "root = true\n[search]\npromoted_boost = -1.0\n[server]\nbind = \"nowhere\"\n",
    );

    let config = Config::load(top).unwrap();
    let warnings = config.validate();

    assert_eq!(warnings.len(), 2);
    assert!(matches!(warnings[0], ConfigWarning::NonPositiveBoost { .. }));
    assert!(matches!(warnings[1], ConfigWarning::InvalidBindAddress { .. }));
}

#[test]
fn rendered_settings_load_back() {
    let tmp = TempDir::new().unwrap();
    let top = tmp.path();
    write(
        top,
        ".sift.toml",
        "root = true\n[search]\nhighlight = false\nfacet_size = 4\n",
    );

    let config = Config::load(top).unwrap();
    let rendered = config.settings_to_toml().unwrap();

    let reloaded_path = write(top, "copy/.sift.toml", &format!("root = true\n{rendered}"));
    let reloaded = Config::load_from_files(&[reloaded_path]).unwrap();

    assert!(!reloaded.search.highlight);
    assert_eq!(reloaded.search.facet_size, 4);
    assert_eq!(reloaded.index.name, config.index.name);
}
