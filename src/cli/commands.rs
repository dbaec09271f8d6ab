//! CLI command implementations.

use std::path::Path;

use crate::format::{GraphReader, GraphWriter};
use crate::graph::traversal::{NeighborScan, Traversal, TraversalOrder, TraversalParams};
use crate::graph::{sample_graph, Graph};
use crate::types::{GraphResult, VertexId, NO_EDGE};

/// Load the graph at `path`, or the built-in sample graph when no path is given.
pub fn load_graph(path: Option<&Path>) -> GraphResult<Graph> {
    match path {
        Some(path) => GraphReader::read_from_file(path),
        None => sample_graph(),
    }
}

/// Write the sample graph to a file.
pub fn cmd_sample(path: &Path) -> GraphResult<()> {
    let graph = sample_graph()?;
    GraphWriter::pretty().write_to_file(&graph, path)?;
    println!(
        "Wrote sample graph ({} vertices, {} edges) to {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(())
}

/// Create a new empty graph file.
pub fn cmd_create(path: &Path) -> GraphResult<()> {
    GraphWriter::pretty().write_to_file(&Graph::new(), path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Add a vertex to a graph file.
pub fn cmd_add_vertex(path: &Path, label: &str, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let id = graph.add_vertex(label);
    GraphWriter::pretty().write_to_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"id": id, "label": label}));
    } else {
        println!("Added vertex {} ({}) to {}", id, label, path.display());
    }
    Ok(())
}

/// Add an undirected edge to a graph file.
pub fn cmd_add_edge(path: &Path, from: VertexId, to: VertexId, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.try_add_edge(from, to)?;
    GraphWriter::pretty().write_to_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"from": from, "to": to}));
    } else {
        println!("Linked {} -- {}", from, to);
    }
    Ok(())
}

/// Display vertex and edge lists.
pub fn cmd_info(path: Option<&Path>, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;

    if json {
        let info = serde_json::json!({
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "edges": graph.edge_list(),
            "vertices": graph.vertices(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", render_graph(&graph));
    }
    Ok(())
}

/// Look up the weight of edge `(i, j)`.
pub fn cmd_weight(path: Option<&Path>, i: VertexId, j: VertexId, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let weight = graph.get_weight(i, j);

    if json {
        println!(
            "{}",
            serde_json::json!({"from": i, "to": j, "weight": weight, "edge": weight != NO_EDGE})
        );
    } else if weight == NO_EDGE {
        println!("({},{}) no edge ({})", i, j, weight);
    } else {
        println!("({},{}) weight {}", i, j, weight);
    }
    Ok(())
}

/// Run a DFS or BFS and print the visited vertices in order.
pub fn cmd_traverse(
    path: Option<&Path>,
    start: VertexId,
    order: TraversalOrder,
    scan: NeighborScan,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let traversal = graph.traverse(TraversalParams { start, order, scan })?;

    if json {
        let vertices = traversal.visited_vertices(&graph);
        let visits: Vec<serde_json::Value> = traversal
            .order()
            .iter()
            .map(|&id| serde_json::json!({"id": id, "label": vertices[id].label}))
            .collect();
        let output = serde_json::json!({
            "order": traversal_heading(order),
            "scan": scan_name(scan),
            "start": start,
            "visited": visits,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
    } else {
        print!("{}", render_traversal(&graph, order, &traversal));
    }
    Ok(())
}

/// Print the graph as a JSON description.
pub fn cmd_export(path: Option<&Path>, pretty: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let writer = if pretty {
        GraphWriter::pretty()
    } else {
        GraphWriter::new()
    };
    writer.write_to(&graph, &mut std::io::stdout().lock())
}

/// Render the vertex count, edge list and vertex list.
pub fn render_graph(graph: &Graph) -> String {
    let edges = graph.edge_list();
    let mut lines = vec![
        format!("The graph has {} vertices.", graph.vertex_count()),
        format!("The graph has {} edges.", edges.len()),
        "Edgelist:".to_string(),
    ];
    lines.extend(edges.iter().map(|(from, to)| format!("  ({},{})", from, to)));
    lines.push("Vertexlist:".to_string());
    lines.extend(
        graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(id, vertex)| format!("  {} id={}", vertex, id)),
    );
    terminate_lines(lines)
}

/// Render a traversal: a `DFS`/`BFS` heading, then one vertex per line in visit order.
pub fn render_traversal(graph: &Graph, order: TraversalOrder, traversal: &Traversal) -> String {
    let vertices = traversal.visited_vertices(graph);
    let mut lines = vec![traversal_heading(order).to_string()];
    lines.extend(traversal.order().iter().map(|&id| vertices[id].to_string()));
    terminate_lines(lines)
}

fn terminate_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn traversal_heading(order: TraversalOrder) -> &'static str {
    match order {
        TraversalOrder::DepthFirst => "DFS",
        TraversalOrder::BreadthFirst => "BFS",
    }
}

fn scan_name(scan: NeighborScan) -> &'static str {
    match scan {
        NeighborScan::Forward => "forward",
        NeighborScan::All => "all",
    }
}
