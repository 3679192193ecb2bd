//! Integration tests for the nav CLI
//!
//! Tests end-to-end command behavior using the CLI binary.
//! Uses tempfile for isolated working directories.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Run nav with the given args in the specified directory
fn run_nav(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nav"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute nav command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn json(dir: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    let output = run_nav(dir, &full);
    assert!(output.status.success(), "nav failed: {}", stderr(&output));
    serde_json::from_str(&stdout(&output)).expect("Output was not JSON")
}

/// Build the A-B-C triangle (A-B 5, B-C 3, A-C 10) in `dir/graph.json`
fn setup_triangle(dir: &Path) {
    for args in [
        vec!["add-location", "A"],
        vec!["add-location", "B"],
        vec!["add-location", "C"],
        vec!["add-path", "A", "B", "5"],
        vec!["add-path", "B", "C", "3"],
        vec!["add-path", "A", "C", "10"],
    ] {
        let output = run_nav(dir, &args);
        assert!(output.status.success(), "{:?} failed: {}", args, stderr(&output));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_no_command_prints_help() {
    let dir = TempDir::new().unwrap();
    let output = run_nav(dir.path(), &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn test_edit_and_show() {
    let dir = TempDir::new().unwrap();
    setup_triangle(dir.path());

    let graph = json(dir.path(), &["show"]);
    assert_eq!(graph["A"]["B"], 5.0);
    assert_eq!(graph["B"]["A"], 5.0);
    assert_eq!(graph["C"]["B"], 3.0);

    let on_disk: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("graph.json")).unwrap())
            .unwrap();
    assert_eq!(on_disk, graph);
}

#[test]
fn test_shortest_path() {
    let dir = TempDir::new().unwrap();
    setup_triangle(dir.path());

    let route = json(dir.path(), &["path", "A", "C"]);
    assert_eq!(route["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(route["distance"], 8.0);
}

#[test]
fn test_path_table_output() {
    let dir = TempDir::new().unwrap();
    setup_triangle(dir.path());

    let output = run_nav(dir.path(), &["path", "A", "C"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("8 m"));
}

#[test]
fn test_unknown_endpoint_reported() {
    let dir = TempDir::new().unwrap();
    setup_triangle(dir.path());

    let route = json(dir.path(), &["path", "A", "Q"]);
    assert_eq!(route["reason"], "InvalidEndpoint");
    assert_eq!(route["missing"], serde_json::json!(["Q"]));
}

#[test]
fn test_duplicate_location_fails() {
    let dir = TempDir::new().unwrap();
    setup_triangle(dir.path());

    let output = run_nav(dir.path(), &["add-location", "A"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already exists"));
}

#[test]
fn test_invalid_distance_rejected_by_parser() {
    let dir = TempDir::new().unwrap();
    setup_triangle(dir.path());

    let output = run_nav(dir.path(), &["add-path", "A", "B", "0"]);
    assert!(!output.status.success());

    let graph = json(dir.path(), &["show"]);
    assert_eq!(graph["A"]["B"], 5.0);
}

#[test]
fn test_remove_path_then_reroute() {
    let dir = TempDir::new().unwrap();
    setup_triangle(dir.path());

    for _ in 0..2 {
        let output = run_nav(dir.path(), &["remove-path", "B", "C"]);
        assert!(output.status.success());
    }

    let route = json(dir.path(), &["path", "A", "C"]);
    assert_eq!(route["path"], serde_json::json!(["A", "C"]));
    assert_eq!(route["distance"], 10.0);
}

#[test]
fn test_delete_location() {
    let dir = TempDir::new().unwrap();
    setup_triangle(dir.path());

    assert!(run_nav(dir.path(), &["delete-location", "B"]).status.success());
    let graph = json(dir.path(), &["show"]);
    assert!(graph.get("B").is_none());
    assert!(graph["A"].get("B").is_none());

    let output = run_nav(dir.path(), &["delete-location", "B"]);
    assert!(!output.status.success());
}

#[test]
fn test_stats() {
    let dir = TempDir::new().unwrap();
    setup_triangle(dir.path());
    run_nav(dir.path(), &["add-location", "Island"]);

    let stats = json(dir.path(), &["stats"]);
    assert_eq!(stats["location_count"], 4);
    assert_eq!(stats["path_count"], 3);
    assert_eq!(stats["component_count"], 2);
    assert_eq!(stats["unconnected"], serde_json::json!(["Island"]));
}

#[test]
fn test_graph_flag_and_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".navrc.toml"),
        "[storage]\ngraph_file = \"campus.json\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    assert!(run_nav(dir.path(), &["add-location", "Gate"]).status.success());
    assert!(dir.path().join("campus.json").exists());
    assert!(!dir.path().join("graph.json").exists());

    // --graph beats the config file
    assert!(run_nav(dir.path(), &["--graph", "other.json", "add-location", "Hall"])
        .status
        .success());
    let other: Value = serde_json::from_str(&stdout(&run_nav(
        dir.path(),
        &["--graph", "other.json", "show"],
    )))
    .unwrap();
    assert!(other.get("Hall").is_some());
    assert!(other.get("Gate").is_none());
}

#[test]
fn test_malformed_config_falls_back() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".navrc.toml"), "[output\n").unwrap();

    let output = run_nav(dir.path(), &["add-location", "Gate"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Failed to parse"));
    assert!(dir.path().join("graph.json").exists());
}

#[test]
fn test_color_follows_config() {
    let dir = TempDir::new().unwrap();

    // Piped stdout: no colors by default
    let output = run_nav(dir.path(), &["add-location", "Gate"]);
    assert!(!stdout(&output).contains("\x1b["));

    fs::write(dir.path().join(".navrc.toml"), "[output]\ncolor = true\n").unwrap();
    let output = run_nav(dir.path(), &["add-location", "Hall"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("\x1b["));
}
