//! Phase 4 tests: CLI rendering, file-backed commands, and the `adjg` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use adjgraph::cli::commands::{
    cmd_add_edge, cmd_add_vertex, cmd_create, cmd_sample, load_graph, render_graph,
    render_traversal,
};
use adjgraph::format::{GraphDocument, GraphReader};
use adjgraph::graph::{sample_graph, NeighborScan, TraversalOrder, TraversalParams};
use adjgraph::types::error::GraphError;
use adjgraph::types::NO_EDGE;

// ==================== CLI Helpers ====================

/// Locate the `adjg` binary cargo built for these tests.
fn adjg_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_adjg"))
}

/// Run the `adjg` CLI with the given arguments and return the output.
fn run_adjg(args: &[&str]) -> Output {
    Command::new(adjg_bin())
        .args(args)
        .output()
        .expect("Failed to run adjg")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "adjg failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: assert the CLI exited with `code`.
fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper: parse stdout as JSON.
fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Rendering Tests ====================

#[test]
fn test_render_sample_graph() {
    let graph = sample_graph().unwrap();
    let expected = "\
The graph has 9 vertices.
The graph has 8 edges.
Edgelist:
  (0,1)
  (0,2)
  (0,3)
  (0,4)
  (1,5)
  (3,6)
  (5,7)
  (6,8)
Vertexlist:
  (A,0) id=0
  (B,0) id=1
  (C,0) id=2
  (D,0) id=3
  (E,0) id=4
  (F,0) id=5
  (G,0) id=6
  (H,0) id=7
  (I,0) id=8
";
    assert_eq!(render_graph(&graph), expected);
}

#[test]
fn test_render_dfs_report() {
    let graph = sample_graph().unwrap();
    let traversal = graph
        .traverse(TraversalParams {
            start: 0,
            order: TraversalOrder::DepthFirst,
            scan: NeighborScan::Forward,
        })
        .unwrap();

    let report = render_traversal(&graph, TraversalOrder::DepthFirst, &traversal);
    let expected = "DFS\n(A,1)\n(E,1)\n(D,1)\n(G,1)\n(I,1)\n(C,1)\n(B,1)\n(F,1)\n(H,1)\n";
    assert_eq!(report, expected);
}

#[test]
fn test_render_bfs_report() {
    let graph = sample_graph().unwrap();
    let traversal = graph
        .traverse(TraversalParams {
            start: 5,
            order: TraversalOrder::BreadthFirst,
            scan: NeighborScan::Forward,
        })
        .unwrap();

    let report = render_traversal(&graph, TraversalOrder::BreadthFirst, &traversal);
    assert_eq!(report, "BFS\n(F,1)\n(H,1)\n");
}

// ==================== File Command Tests ====================

#[test]
fn test_build_graph_through_commands() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    cmd_create(&path).unwrap();
    cmd_add_vertex(&path, "A", false).unwrap();
    cmd_add_vertex(&path, "B", true).unwrap();
    cmd_add_vertex(&path, "C", false).unwrap();
    cmd_add_edge(&path, 0, 2, false).unwrap();
    cmd_add_edge(&path, 2, 1, true).unwrap();

    let graph = GraphReader::read_from_file(&path).unwrap();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_list(), vec![(0, 2), (1, 2)]);
    assert_eq!(graph.dfs(0).unwrap(), vec![0, 2]);
}

#[test]
fn test_add_edge_command_rejects_missing_vertex() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    cmd_create(&path).unwrap();
    cmd_add_vertex(&path, "A", false).unwrap();
    let result = cmd_add_edge(&path, 0, 1, false);
    assert!(matches!(result, Err(GraphError::InvalidEdge { from: 0, to: 1 })));

    let graph = GraphReader::read_from_file(&path).unwrap();
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_sample_command_and_load() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.json");

    cmd_sample(&path).unwrap();
    let from_file = load_graph(Some(path.as_path())).unwrap();
    let builtin = load_graph(None).unwrap();

    assert_eq!(from_file.vertices(), builtin.vertices());
    assert_eq!(from_file.edge_list(), builtin.edge_list());
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info_text() {
    let output = run_adjg(&["info"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), render_graph(&sample_graph().unwrap()));
}

#[test]
fn test_cli_info_json() {
    let output = run_adjg(&["--format", "json", "info"]);
    assert_success(&output);

    let info = stdout_json(&output);
    assert_eq!(info["vertex_count"], 9);
    assert_eq!(info["edge_count"], 8);
    assert_eq!(info["edges"][7], serde_json::json!([6, 8]));
    assert_eq!(info["vertices"][0]["label"], "A");
}

#[test]
fn test_cli_weight() {
    let output = run_adjg(&["weight", "0", "1"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "(0,1) weight 1\n");

    let output = run_adjg(&["weight", "2", "3"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), format!("(2,3) no edge ({})\n", NO_EDGE));
}

#[test]
fn test_cli_weight_json_uses_sentinel() {
    let output = run_adjg(&["--format", "json", "weight", "2", "3"]);
    assert_success(&output);
    let result = stdout_json(&output);
    assert_eq!(result["weight"], NO_EDGE);
    assert_eq!(result["edge"], false);

    let output = run_adjg(&["--format", "json", "weight", "5", "1"]);
    assert_success(&output);
    let result = stdout_json(&output);
    assert_eq!(result["weight"], 1);
    assert_eq!(result["edge"], true);
}

#[test]
fn test_cli_dfs_forward() {
    let output = run_adjg(&["dfs", "0"]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "DFS\n(A,1)\n(E,1)\n(D,1)\n(G,1)\n(I,1)\n(C,1)\n(B,1)\n(F,1)\n(H,1)\n"
    );

    // A leaf has no higher-indexed neighbor.
    let output = run_adjg(&["dfs", "4", "--scan", "forward"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "DFS\n(E,1)\n");
}

#[test]
fn test_cli_dfs_all_neighbors() {
    let output = run_adjg(&["dfs", "4", "--scan", "all"]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "DFS\n(E,1)\n(A,1)\n(D,1)\n(G,1)\n(I,1)\n(C,1)\n(B,1)\n(F,1)\n(H,1)\n"
    );
}

#[test]
fn test_cli_bfs_json() {
    let output = run_adjg(&["--format", "json", "bfs", "0"]);
    assert_success(&output);
    let result = stdout_json(&output);
    assert_eq!(result["order"], "BFS");
    assert_eq!(result["scan"], "forward");
    let ids: Vec<u64> = result["visited"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);

    let output = run_adjg(&["--format", "json", "bfs", "4", "--scan", "all"]);
    assert_success(&output);
    let result = stdout_json(&output);
    assert_eq!(result["scan"], "all");
    let labels: Vec<&str> = result["visited"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["E", "A", "B", "C", "D", "F", "G", "H", "I"]);
}

#[test]
fn test_cli_export_pretty() {
    let output = run_adjg(&["export", "--pretty"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("\n  \"vertices\""));

    let document: GraphDocument = serde_json::from_slice(&output.stdout).unwrap();
    let graph = GraphReader::from_document(&document).unwrap();
    assert_eq!(document.vertices.len(), 9);
    assert_eq!(document.edges.len(), 8);
    assert_eq!(graph.dfs(0).unwrap(), vec![0, 4, 3, 6, 8, 2, 1, 5, 7]);
}

#[test]
fn test_cli_file_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    let file = path.to_str().unwrap();

    assert_success(&run_adjg(&["create", file]));
    assert_success(&run_adjg(&["add-vertex", file, "A"]));
    assert_success(&run_adjg(&["add-vertex", file, "B"]));
    assert_success(&run_adjg(&["add-edge", file, "0", "1"]));
    assert_success(&run_adjg(&["add-edge", file, "1", "1"]));

    let output = run_adjg(&["weight", "--graph", file, "1", "1"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "(1,1) weight 1\n");

    let output = run_adjg(&["bfs", "--graph", file, "0"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "BFS\n(A,1)\n(B,1)\n");
}

#[test]
fn test_cli_sample_command_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.json");

    assert_success(&run_adjg(&["sample", path.to_str().unwrap()]));
    let graph = GraphReader::read_from_file(&path).unwrap();
    assert_eq!(graph.edge_list(), sample_graph().unwrap().edge_list());
}

// ==================== CLI Exit Code Tests ====================

#[test]
fn test_cli_exit_code_io() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let output = run_adjg(&["info", "--graph", missing.to_str().unwrap()]);
    assert_exit_code(&output, 1);
}

#[test]
fn test_cli_exit_code_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"vertices\": [").unwrap();

    let output = run_adjg(&["dfs", "--graph", path.to_str().unwrap(), "0"]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_cli_exit_code_invalid_scan() {
    let output = run_adjg(&["dfs", "0", "--scan", "sideways"]);
    assert_exit_code(&output, 3);
}

#[test]
fn test_cli_exit_code_invalid_vertex() {
    assert_exit_code(&run_adjg(&["bfs", "99"]), 4);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    let file = path.to_str().unwrap();
    assert_success(&run_adjg(&["create", file]));
    assert_success(&run_adjg(&["add-vertex", file, "A"]));
    assert_exit_code(&run_adjg(&["add-edge", file, "0", "5"]), 4);
}
