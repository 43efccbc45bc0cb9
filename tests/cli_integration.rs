// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the closerank CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Write an edge-list file and return its handle
fn graph_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Well-known fixture graph as an edge list
const REFERENCE_EDGES: &str = "0 1\n0 5\n1 2\n2 3\n2 4\n3 4\n";

fn closerank() -> Command {
    Command::cargo_bin("closerank").unwrap()
}

#[test]
fn test_rank_outputs_all_scored_nodes() {
    let file = graph_file(REFERENCE_EDGES);

    closerank()
        .args(["-q", "rank", "--graph"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("closeness"))
        .stdout(predicate::str::contains("2"));
}

#[test]
fn test_rank_json_is_sorted_descending() {
    let file = graph_file(REFERENCE_EDGES);

    let output = closerank()
        .args(["-q", "rank", "--json", "--graph"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Vec<serde_json::Value> =
        serde_json::from_slice(&output.stdout).expect("valid JSON array");
    assert_eq!(parsed.len(), 6);

    let scores: Vec<f64> = parsed
        .iter()
        .map(|v| v["score"].as_f64().unwrap())
        .collect();
    for window in scores.windows(2) {
        assert!(window[0] >= window[1], "scores must be descending");
    }
    // Nodes 1 and 2 tie for most central (farness 8 each); ascending id
    // breaks the tie, so node 1 leads
    assert_eq!(parsed[0]["node"].as_u64(), Some(1));
    assert_eq!(parsed[1]["node"].as_u64(), Some(2));
    assert!((parsed[0]["score"].as_f64().unwrap() - 0.125).abs() < 1e-9);
    assert!((parsed[1]["score"].as_f64().unwrap() - 0.125).abs() < 1e-9);
}

#[test]
fn test_rank_fraud_zeroes_marked_node() {
    let file = graph_file(REFERENCE_EDGES);

    let output = closerank()
        .args(["-q", "rank", "--fraud", "2", "--json", "--graph"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let marked = parsed
        .iter()
        .find(|v| v["node"].as_u64() == Some(2))
        .expect("node 2 present");
    assert!(marked["score"].as_f64().unwrap().abs() < 1e-9);
    assert_eq!(marked["fraudulent"].as_bool(), Some(true));
    // Zero sorts last, and unmarked nodes carry no fraud label
    assert_eq!(parsed.last().unwrap()["node"].as_u64(), Some(2));
    assert_eq!(parsed[0]["fraudulent"].as_bool(), Some(false));
}

#[test]
fn test_rank_top_limits_output() {
    let file = graph_file(REFERENCE_EDGES);

    let output = closerank()
        .args(["-q", "rank", "--top", "3", "--json", "--graph"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.len(), 3);
}

#[test]
fn test_link_refreshes_scores() {
    // Two components; linking them makes every node reachable
    let file = graph_file("0 1\n10 11\n");

    let output = closerank()
        .args(["-q", "link", "--json", "--graph"])
        .arg(file.path())
        .args(["1", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.len(), 4);
}

#[test]
fn test_malformed_graph_fails_cleanly() {
    let file = graph_file("0 1\nnot-a-node 2\n");

    closerank()
        .args(["-q", "rank", "--graph"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_missing_graph_file_fails() {
    closerank()
        .args(["-q", "rank", "--graph", "/nonexistent/edges.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_completions_generates_script() {
    closerank()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("closerank"));
}
