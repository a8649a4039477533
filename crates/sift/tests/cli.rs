//! CLI integration tests for sift commands.
//!
//! These tests focus on exit codes and the JSON output contract, not on table formatting
//! which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Fixture products, one JSON document per line.
const PRODUCTS: &str = r#"{"id":1,"name":"Milk A","price":100,"category":"dairy","brand":"X","isAD":false}
{"id":2,"name":"Milk B","price":200,"category":"dairy","brand":"Y","isAD":true}

{"id":3,"name":"Trail Shoes","price":9000,"category":"shoes","brand":"Stride","sold":12}
"#;

/// A working directory and an isolated home directory.
struct TestEnv {
    /// Working directory holding `.sift.toml`.
    work: TempDir,
    /// Home directory (keeps `~/.sift.toml` out of the way).
    home: TempDir,
}

impl TestEnv {
    /// Creates empty directories.
    fn new() -> Self {
        Self {
            work: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        }
    }

    /// Creates directories with a config and a loaded index.
    fn loaded() -> Self {
        let env = Self::new();
        env.sift().arg("init").assert().success();
        fs::write(env.path().join("products.jsonl"), PRODUCTS).unwrap();
        env.sift()
            .args(["load", "products.jsonl"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Loaded 3 products"));
        env
    }

    /// The working directory.
    fn path(&self) -> &Path {
        self.work.path()
    }

    /// A `sift` command running in the working directory.
    fn sift(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sift").unwrap();
        cmd.current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env_remove("SIFT_LOG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Runs a command expected to succeed and parses its stdout as JSON.
    fn json(&self, args: &[&str]) -> Value {
        let output = self.sift().args(args).assert().success().get_output().clone();
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let env = TestEnv::new();
        env.sift().arg("init").assert().success();

        let contents = fs::read_to_string(env.path().join(".sift.toml")).unwrap();
        assert!(contents.contains("[search]"));
        assert!(contents.contains("promoted_boost"));
    }

    #[test]
    fn fails_if_config_exists() {
        let env = TestEnv::new();
        fs::write(env.path().join(".sift.toml"), "existing").unwrap();

        env.sift()
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_existing() {
        let env = TestEnv::new();
        fs::write(env.path().join(".sift.toml"), "old content").unwrap();

        env.sift().args(["init", "--force"]).assert().success();

        let contents = fs::read_to_string(env.path().join(".sift.toml")).unwrap();
        assert!(contents.contains("[index]"));
    }

    #[test]
    fn updates_gitignore_once() {
        let env = TestEnv::new();
        fs::write(env.path().join(".gitignore"), "*.log\n.sift/\n").unwrap();

        env.sift().arg("init").assert().success();

        let gitignore = fs::read_to_string(env.path().join(".gitignore")).unwrap();
        assert_eq!(gitignore.matches(".sift/").count(), 1);
    }
}

mod config {
    use super::*;

    #[test]
    fn prints_effective_settings() {
        let env = TestEnv::new();
        fs::write(
            env.path().join(".sift.toml"),
            "[search]\npromoted_boost = 3.5\n",
        )
        .unwrap();

        env.sift()
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("promoted_boost = 3.5"))
            .stdout(predicate::str::contains("max_page_size = 100"));
    }

    #[test]
    fn invalid_config_fails() {
        let env = TestEnv::new();
        fs::write(env.path().join(".sift.toml"), "[search\n").unwrap();

        env.sift()
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

mod search {
    use super::*;

    fn ids(result: &Value) -> Vec<u64> {
        result["list"]
            .as_array()
            .unwrap()
            .iter()
            .map(|doc| doc["id"].as_u64().unwrap())
            .collect()
    }

    #[test]
    fn promoted_product_ranks_first() {
        let env = TestEnv::loaded();
        let result = env.json(&["search", "Milk", "--json"]);

        assert_eq!(result["total"], 2);
        assert_eq!(ids(&result), vec![2, 1]);
        assert_eq!(result["list"][0]["name"], "<em>Milk</em> B");
    }

    #[test]
    fn filters_and_sorts() {
        let env = TestEnv::loaded();
        let result = env.json(&[
            "search",
            "--category",
            "dairy",
            "--sort",
            "price",
            "--asc",
            "--json",
        ]);
        assert_eq!(ids(&result), vec![1, 2]);

        let result = env.json(&["search", "--min-price", "1000", "--json"]);
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn pages_results() {
        let env = TestEnv::loaded();
        let result = env.json(&[
            "search", "--sort", "price", "--asc", "-p", "2", "-n", "2", "--json",
        ]);
        assert_eq!(result["total"], 3);
        assert_eq!(result["pageNo"], 2);
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn table_output() {
        let env = TestEnv::loaded();
        env.sift()
            .args(["search", "shoes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Stride"))
            .stdout(predicate::str::contains("of 1"));
    }

    #[test]
    fn zero_page_is_invalid() {
        let env = TestEnv::loaded();
        env.sift()
            .args(["search", "milk", "--page", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid query"));
    }

    #[test]
    fn unknown_sort_is_invalid() {
        let env = TestEnv::loaded();
        env.sift()
            .args(["search", "--sort", "color"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid query"));
    }

    #[test]
    fn missing_index_fails() {
        let env = TestEnv::new();
        env.sift().arg("init").assert().success();

        env.sift()
            .args(["search", "milk"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("sift load"));
    }

    #[test]
    fn explain_needs_no_index() {
        let env = TestEnv::new();
        env.sift()
            .args(["search", "milk", "-c", "dairy", "-p", "2", "-n", "7", "--explain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("category=\"dairy\""))
            .stdout(predicate::str::contains("offset 7, limit 7"));
    }
}

mod get {
    use super::*;

    #[test]
    fn fetches_product() {
        let env = TestEnv::loaded();
        let doc = env.json(&["get", "3", "--json"]);
        assert_eq!(doc["name"], "Trail Shoes");
        assert_eq!(doc["sold"], 12);
    }

    #[test]
    fn missing_product_fails() {
        let env = TestEnv::loaded();
        env.sift()
            .args(["get", "99"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("product 99 not found"));
    }
}

mod filters {
    use super::*;

    #[test]
    fn lists_keys() {
        let env = TestEnv::loaded();
        let result = env.json(&["filters", "milk", "--json"]);
        assert_eq!(result["category"], serde_json::json!(["dairy"]));
        assert_eq!(result["brand"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn table_shows_counts() {
        let env = TestEnv::loaded();
        env.sift()
            .arg("filters")
            .assert()
            .success()
            .stdout(predicate::str::contains("dairy"))
            .stdout(predicate::str::contains("shoes"));
    }
}

mod load {
    use super::*;

    #[test]
    fn reports_bad_line() {
        let env = TestEnv::new();
        env.sift().arg("init").assert().success();
        fs::write(env.path().join("bad.jsonl"), "{\"id\":1,\"name\":\"ok\"}\nnot json\n").unwrap();

        env.sift()
            .args(["load", "bad.jsonl"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("line 2"));
    }

    #[test]
    fn replace_clears_existing() {
        let env = TestEnv::loaded();
        fs::write(
            env.path().join("one.jsonl"),
            "{\"id\":9,\"name\":\"Butter\"}\n",
        )
        .unwrap();

        env.sift()
            .args(["load", "one.jsonl", "--replace"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(1 total)"));
    }
}

mod status {
    use super::*;

    #[test]
    fn shows_document_count() {
        let env = TestEnv::loaded();
        env.sift()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("3 documents"));
    }

    #[test]
    fn warns_on_bad_settings() {
        let env = TestEnv::new();
        fs::write(
            env.path().join(".sift.toml"),
            "[search]\nfacet_size = 0\n",
        )
        .unwrap();

        env.sift().arg("status").assert().failure();
    }
}
