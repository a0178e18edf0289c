//! Integration tests for the skein CLI
//!
//! These tests run the skein binary against graph documents written to a
//! temporary directory.

mod support;

use predicates::prelude::*;
use support::{skein, tree_graph, weighted_graph, write_fixture};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    skein()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: skein"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("dot"));
}

#[test]
fn test_version_flag() {
    skein()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("skein "));
}

#[test]
fn test_no_command_prints_banner() {
    skein()
        .assert()
        .success()
        .stdout(predicate::str::contains("skein --help"));
}

// ============================================================================
// Weight
// ============================================================================

#[test]
fn test_weight_of_existing_edge() {
    let dir = tempdir().unwrap();
    let graph = weighted_graph(dir.path());

    skein()
        .arg("--graph")
        .arg(&graph)
        .args(["weight", "A", "B"])
        .assert()
        .success()
        .stdout("2.0\n");
}

#[test]
fn test_weight_of_missing_edge_is_inf() {
    let dir = tempdir().unwrap();
    let graph = weighted_graph(dir.path());

    skein()
        .arg("--graph")
        .arg(&graph)
        .args(["weight", "B", "A"])
        .assert()
        .success()
        .stdout("inf\n");
}

#[test]
fn test_weight_json_uses_null_for_inf() {
    let dir = tempdir().unwrap();
    let graph = weighted_graph(dir.path());

    let output = skein()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "weight", "B", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["src"], "B");
    assert_eq!(json["dest"], "A");
    assert!(json["weight"].is_null());
}

#[test]
fn test_graph_from_env() {
    let dir = tempdir().unwrap();
    let graph = weighted_graph(dir.path());

    skein()
        .env("SKEIN_GRAPH", &graph)
        .args(["weight", "C", "D"])
        .assert()
        .success()
        .stdout("1.0\n");
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_bfs_order() {
    let dir = tempdir().unwrap();
    let graph = tree_graph(dir.path());

    skein()
        .arg("--graph")
        .arg(&graph)
        .args(["bfs", "A"])
        .assert()
        .success()
        .stdout("A\nB\nC\nD\nE\nF\n");
}

#[test]
fn test_dfs_order() {
    let dir = tempdir().unwrap();
    let graph = tree_graph(dir.path());

    skein()
        .arg("--graph")
        .arg(&graph)
        .args(["dfs", "A"])
        .assert()
        .success()
        .stdout("A\nC\nE\nF\nB\nD\n");
}

#[test]
fn test_bfs_json() {
    let dir = tempdir().unwrap();
    let graph = tree_graph(dir.path());

    let output = skein()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "bfs", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], "C");
    assert_eq!(json["order"], serde_json::json!(["C", "E", "F"]));
}

// ============================================================================
// DOT and stats
// ============================================================================

#[test]
fn test_dot_output() {
    let dir = tempdir().unwrap();
    let graph = tree_graph(dir.path());

    let expected = concat!(
        "digraph G {\n",
        "   A -> B [label=\"1.0\",weight=\"1.0\"];\n",
        "   A -> C [label=\"1.0\",weight=\"1.0\"];\n",
        "   B -> D [label=\"1.0\",weight=\"1.0\"];\n",
        "   C -> E [label=\"1.0\",weight=\"1.0\"];\n",
        "   E -> F [label=\"1.0\",weight=\"1.0\"];\n",
        "}\n",
    );

    skein()
        .arg("--graph")
        .arg(&graph)
        .arg("dot")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_dot_custom_name() {
    let dir = tempdir().unwrap();
    let graph = tree_graph(dir.path());

    skein()
        .arg("--graph")
        .arg(&graph)
        .args(["dot", "--name", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph tree {\n"));
}

#[test]
fn test_dot_name_must_be_identifier() {
    let dir = tempdir().unwrap();
    let graph = tree_graph(dir.path());

    for name in ["my graph", "2fast", "a\"b"] {
        skein()
            .arg("--graph")
            .arg(&graph)
            .args(["dot", "--name", name])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("invalid dot name"));
    }
}

#[test]
fn test_dot_scientific_weight() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(
        dir.path(),
        "far.json",
        r#"{"vertices": ["A", "B"], "edges": [{"src": "A", "dest": "B", "weight": 1e16}]}"#,
    );

    skein()
        .arg("--graph")
        .arg(&graph)
        .arg("dot")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "   A -> B [label=\"1e+16\",weight=\"1e+16\"];\n",
        ));
}

#[test]
fn test_stats() {
    let dir = tempdir().unwrap();
    let graph = weighted_graph(dir.path());

    skein()
        .arg("--graph")
        .arg(&graph)
        .arg("stats")
        .assert()
        .success()
        .stdout("vertices: 6\nedges: 10\n");
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_unknown_vertex_exits_3() {
    let dir = tempdir().unwrap();
    let graph = tree_graph(dir.path());

    skein()
        .arg("--graph")
        .arg(&graph)
        .args(["bfs", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: vertex not found: Z"));
}

#[test]
fn test_unknown_vertex_json_envelope() {
    let dir = tempdir().unwrap();
    let graph = tree_graph(dir.path());

    let output = skein()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "weight", "A", "Z"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "not_found");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    let graph = tree_graph(dir.path());

    skein()
        .arg("--graph")
        .arg(&graph)
        .args(["--quiet", "dfs", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_graph_is_usage_error() {
    skein()
        .args(["bfs", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph document given"));
}

#[test]
fn test_non_string_label_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "bad.json", r#"{"vertices": ["A", 42]}"#);

    skein()
        .arg("--graph")
        .arg(&graph)
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid vertex label"));
}

#[test]
fn test_null_and_list_labels_are_usage_errors() {
    let dir = tempdir().unwrap();

    for (name, doc) in [
        ("null.json", r#"{"vertices": [null]}"#),
        ("list.json", r#"{"vertices": ["A", ["B"]]}"#),
    ] {
        let graph = write_fixture(dir.path(), name, doc);
        skein()
            .arg("--graph")
            .arg(&graph)
            .arg("stats")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid vertex label"));
    }
}

#[test]
fn test_null_weight_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(
        dir.path(),
        "null_weight.json",
        r#"{"vertices": ["A", "B"], "edges": [{"src": "A", "dest": "B", "weight": null}]}"#,
    );

    skein()
        .arg("--graph")
        .arg(&graph)
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge weight: null is not numeric"));
}

#[test]
fn test_negative_weight_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(
        dir.path(),
        "bad.toml",
        "vertices = [\"A\", \"B\"]\n[[edges]]\nsrc = \"A\"\ndest = \"B\"\nweight = -1\n",
    );

    skein()
        .arg("--graph")
        .arg(&graph)
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge weight"));
}

#[test]
fn test_duplicate_vertex_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "dup.json", r#"{"vertices": ["A", "A"]}"#);

    skein()
        .arg("--graph")
        .arg(&graph)
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_unsupported_extension_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(dir.path(), "graph.yaml", "vertices: []\n");

    skein()
        .arg("--graph")
        .arg(&graph)
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph document format"));
}

#[test]
fn test_missing_graph_file_exits_1() {
    let dir = tempdir().unwrap();

    skein()
        .arg("--graph")
        .arg(dir.path().join("absent.toml"))
        .arg("stats")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph"));
}

#[test]
fn test_missing_argument_json_envelope() {
    skein()
        .args(["--format", "json", "path", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\": \"usage_error\"").or(
            predicate::str::contains("\"type\":\"usage_error\""),
        ));
}
