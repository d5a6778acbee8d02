//! CLI end-to-end tests.
//!
//! These tests drive the `sl` binary against a catalog and config file in
//! a temporary directory. They are scenario-driven (few tests, multi-step
//! flows) and never touch the user's real catalog or config.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Isolated environment for running the binary.
struct CliContext {
    dir: TempDir,
}

impl CliContext {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn store_path(&self) -> PathBuf {
        self.dir.path().join("catalog.json")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    /// Builds a command with the catalog and config pinned to the temp dir.
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = self.command_without_store(args);
        cmd.env("STRINGLENS_STORE", self.store_path());
        cmd
    }

    /// Builds a command that resolves the catalog from config or defaults.
    fn command_without_store(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sl"));
        cmd.args(args)
            .env("STRINGLENS_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env("HOME", self.dir.path())
            .env_remove("STRINGLENS_STORE")
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("XDG_CACHE_HOME")
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("failed to run sl")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "sl {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let stdout = self.run_ok(&full);
        serde_json::from_str(&stdout).expect("stdout is not valid JSON")
    }

    fn seed(&self, values: &[&str]) {
        for value in values {
            self.run_ok(&["add", value]);
        }
    }
}

fn values(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|r| r["value"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn stored_values(path: &Path) -> Vec<String> {
    let contents = std::fs::read_to_string(path).expect("catalog file should exist");
    let json: Value = serde_json::from_str(&contents).unwrap();
    values(&serde_json::json!({ "data": json["records"] }))
}

const SAMPLE: &[&str] = &[
    "racecar",
    "level",
    "hello world",
    "A man a plan a canal Panama",
    "zebra",
];

#[test]
fn test_add_show_and_duplicate() {
    let ctx = CliContext::new();

    let added = ctx.run_json(&["add", "racecar"]);
    assert_eq!(added["value"], "racecar");
    assert_eq!(
        added["id"],
        "e00f9ef51a95f6e854862eed28dc0f1a68f154d9f75ddd841ab00de6ede9209b"
    );
    assert_eq!(added["properties"]["length"], 7);
    assert_eq!(added["properties"]["is_palindrome"], true);
    assert_eq!(added["properties"]["unique_characters"], 4);
    assert_eq!(added["properties"]["word_count"], 1);
    assert_eq!(added["properties"]["character_frequency"]["r"], 2);
    assert!(added["created_at"].is_string());

    let shown = ctx.run_json(&["show", "racecar"]);
    assert_eq!(shown, added);

    let text = ctx.run_ok(&["show", "racecar"]);
    assert!(text.contains("Palindrome: yes"));

    // Second insert of the same content is rejected and leaves one record
    let dup = ctx.run(&["--json", "add", "racecar"]);
    assert_eq!(dup.status.code(), Some(4));
    let err: Value = serde_json::from_str(&stderr(&dup)).unwrap();
    assert_eq!(err["error"]["code"], "ALREADY_EXISTS");
    assert_eq!(stored_values(&ctx.store_path()), ["racecar"]);
}

#[test]
fn test_empty_string_is_a_valid_record() {
    let ctx = CliContext::new();

    let added = ctx.run_json(&["add", ""]);
    assert_eq!(added["value"], "");
    assert_eq!(added["properties"]["length"], 0);
    assert_eq!(added["properties"]["is_palindrome"], true);
    assert_eq!(added["properties"]["word_count"], 0);
    assert_eq!(
        added["id"],
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_list_with_explicit_filters() {
    let ctx = CliContext::new();
    ctx.seed(SAMPLE);

    let all = ctx.run_json(&["list"]);
    assert_eq!(all["count"], 5);
    assert_eq!(values(&all), SAMPLE);
    assert_eq!(all["filters_applied"], serde_json::json!({}));

    let palindromes = ctx.run_json(&["list", "--is-palindrome", "TRUE"]);
    assert_eq!(
        values(&palindromes),
        ["racecar", "level", "A man a plan a canal Panama"]
    );
    assert_eq!(palindromes["filters_applied"]["is_palindrome"], true);

    let long = ctx.run_json(&["list", "--min-length", "11"]);
    assert_eq!(values(&long), ["hello world", "A man a plan a canal Panama"]);

    let bounded = ctx.run_json(&["list", "--min-length", "5", "--max-length", "5"]);
    assert_eq!(values(&bounded), ["level", "zebra"]);

    let with_z = ctx.run_json(&["list", "--contains-character", "Z"]);
    assert_eq!(values(&with_z), ["zebra"]);

    let table = ctx.run_ok(&["list", "--word-count", "2"]);
    assert!(table.contains("\"hello world\""));
    assert!(!table.contains("racecar"));
}

#[test]
fn test_list_rejects_invalid_filters() {
    let ctx = CliContext::new();
    ctx.seed(SAMPLE);

    for args in [
        vec!["--json", "list", "--min-length", "abc"],
        vec!["--json", "list", "--is-palindrome", "yes"],
        vec!["--json", "list", "--contains-character", "ab"],
        vec!["--json", "list", "--min-length", "5", "--max-length", "2"],
    ] {
        let output = ctx.run(&args);
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        let err: Value = serde_json::from_str(&stderr(&output)).unwrap();
        assert_eq!(err["error"]["code"], "INVALID_FILTER");
    }
}

#[test]
fn test_natural_language_queries() {
    let ctx = CliContext::new();
    ctx.seed(SAMPLE);

    let result = ctx.run_json(&["query", "single", "word", "palindromic", "strings"]);
    assert_eq!(values(&result), ["racecar", "level"]);
    assert_eq!(result["count"], 2);
    assert_eq!(
        result["interpreted_query"]["original"],
        "single word palindromic strings"
    );
    assert_eq!(
        result["interpreted_query"]["parsed_filters"],
        serde_json::json!({ "is_palindrome": true, "word_count": 1 })
    );

    let result = ctx.run_json(&["query", "strings longer than 10 characters"]);
    assert_eq!(
        result["interpreted_query"]["parsed_filters"],
        serde_json::json!({ "min_length": 11 })
    );
    assert_eq!(
        values(&result),
        ["hello world", "A man a plan a canal Panama"]
    );

    let result = ctx.run_json(&["query", "strings containing the letter z"]);
    assert_eq!(values(&result), ["zebra"]);

    let result = ctx.run_json(&["query", "palindromic strings that contain the first vowel"]);
    assert_eq!(
        values(&result),
        ["racecar", "A man a plan a canal Panama"]
    );

    let table = ctx.run_ok(&["query", "two words"]);
    assert!(table.contains("Filters: word_count=2"));
    assert!(table.contains("\"hello world\""));
}

#[test]
fn test_query_errors() {
    let ctx = CliContext::new();

    let unrecognized = ctx.run(&["query", "tell", "me", "something"]);
    assert_eq!(unrecognized.status.code(), Some(1));
    assert!(stderr(&unrecognized).contains("unable to parse natural language query"));

    let blank = ctx.run(&["--json", "query", "   "]);
    assert_eq!(blank.status.code(), Some(1));
    let err: Value = serde_json::from_str(&stderr(&blank)).unwrap();
    assert_eq!(err["error"]["code"], "QUERY_ERROR");

    let impossible = ctx.run(&["--json", "query", "strings shorter than 0"]);
    assert_eq!(impossible.status.code(), Some(1));
    let err: Value = serde_json::from_str(&stderr(&impossible)).unwrap();
    assert_eq!(err["error"]["code"], "QUERY_ERROR");
    assert!(err["error"]["message"]
        .as_str()
        .unwrap_or_default()
        .contains("no string can satisfy"));

    let conflicting = ctx.run(&["query", "longer than 10 and shorter than 5"]);
    assert_eq!(conflicting.status.code(), Some(1));
    assert!(stderr(&conflicting).contains("conflicting"));
}

#[test]
fn test_delete_and_not_found_suggestion() {
    let ctx = CliContext::new();
    ctx.seed(&["racecar", "level"]);

    let deleted = ctx.run_json(&["delete", "level"]);
    assert_eq!(deleted["status"], "deleted");
    assert_eq!(stored_values(&ctx.store_path()), ["racecar"]);

    let missing = ctx.run(&["show", "level"]);
    assert_eq!(missing.status.code(), Some(4));

    let typo = ctx.run(&["show", "racecat"]);
    assert_eq!(typo.status.code(), Some(4));
    assert!(stderr(&typo).contains("Did you mean 'racecar'?"));

    let again = ctx.run(&["--json", "rm", "level"]);
    assert_eq!(again.status.code(), Some(4));
    let err: Value = serde_json::from_str(&stderr(&again)).unwrap();
    assert_eq!(err["error"]["code"], "NOT_FOUND");
}

#[test]
fn test_analyze_does_not_create_catalog() {
    let ctx = CliContext::new();

    let result = ctx.run_json(&["analyze", "Noon"]);
    assert_eq!(result["value"], "Noon");
    assert_eq!(result["properties"]["is_palindrome"], true);
    assert_eq!(result["properties"]["unique_characters"], 3);
    assert!(!ctx.store_path().exists());
}

#[test]
fn test_config_controls_store_location() {
    let ctx = CliContext::new();
    let custom = ctx.dir.path().join("custom").join("strings.json");
    let custom_str = custom.to_string_lossy().to_string();

    let path = ctx.run_ok(&["config", "path"]);
    assert_eq!(path.trim(), ctx.config_path().to_string_lossy());

    ctx.run_ok(&["config", "set", "store.path", &custom_str]);
    ctx.run_ok(&["config", "set", "output.color", "false"]);

    let shown = ctx.run_json(&["config", "show"]);
    assert_eq!(shown["exists"], true);
    assert_eq!(shown["config"]["store"]["path"], custom_str.as_str());
    assert_eq!(shown["config"]["output"]["color"], false);

    let output = ctx
        .command_without_store(&["add", "configured"])
        .output()
        .expect("failed to run sl");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stored_values(&custom), ["configured"]);

    let bad = ctx.run(&["config", "set", "nope", "1"]);
    assert_eq!(bad.status.code(), Some(5));
}

#[test]
fn test_malformed_config_is_reported() {
    let ctx = CliContext::new();
    let config_path = ctx.config_path();
    std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    std::fs::write(&config_path, "this is = = not toml").unwrap();

    // Store-free commands still run, but the bad file is logged
    let output = ctx.run(&["--json", "analyze", "level"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("ignoring unreadable config file"));
    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["properties"]["is_palindrome"], true);

    // Without --store the catalog location depends on the config
    let output = ctx
        .command_without_store(&["list"])
        .output()
        .expect("failed to run sl");
    assert_eq!(output.status.code(), Some(5));
}
