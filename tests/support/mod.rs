use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for skein with SKEIN_* and RUST_LOG cleared
pub fn skein() -> Command {
    let mut cmd = cargo_bin_cmd!("skein");
    cmd.env_remove("SKEIN_GRAPH")
        .env_remove("SKEIN_CONFIG")
        .env_remove("SKEIN_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Six-vertex tree: A -> {B, C}, B -> D, C -> E, E -> F
#[allow(dead_code)]
pub const TREE_TOML: &str = r#"
vertices = ["A", "B", "C", "D", "E", "F"]

[[edges]]
src = "A"
dest = "B"
weight = 1

[[edges]]
src = "A"
dest = "C"
weight = 1

[[edges]]
src = "B"
dest = "D"
weight = 1

[[edges]]
src = "C"
dest = "E"
weight = 1

[[edges]]
src = "E"
dest = "F"
weight = 1
"#;

/// Weighted graph with a B/F cycle; D is a sink
#[allow(dead_code)]
pub const WEIGHTED_JSON: &str = r#"{
  "vertices": ["A", "B", "C", "D", "E", "F"],
  "edges": [
    {"src": "A", "dest": "B", "weight": 2},
    {"src": "A", "dest": "F", "weight": 9},
    {"src": "B", "dest": "F", "weight": 6},
    {"src": "B", "dest": "D", "weight": 15},
    {"src": "B", "dest": "C", "weight": 8},
    {"src": "C", "dest": "D", "weight": 1},
    {"src": "E", "dest": "C", "weight": 7},
    {"src": "E", "dest": "D", "weight": 3},
    {"src": "F", "dest": "B", "weight": 6},
    {"src": "F", "dest": "E", "weight": 3}
  ]
}"#;

/// Write `content` to `dir/name` and return the path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[allow(dead_code)]
pub fn tree_graph(dir: &Path) -> PathBuf {
    write_fixture(dir, "tree.toml", TREE_TOML)
}

#[allow(dead_code)]
pub fn weighted_graph(dir: &Path) -> PathBuf {
    write_fixture(dir, "weighted.json", WEIGHTED_JSON)
}
