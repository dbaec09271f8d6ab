//! Fluent API for building Graph instances.

use crate::types::{GraphResult, VertexId};

use super::Graph;

/// Labels of the sample graph, in ID order.
pub const SAMPLE_LABELS: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];

/// Edges of the sample graph.
pub const SAMPLE_EDGES: [(VertexId, VertexId); 8] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 5),
    (3, 6),
    (5, 7),
    (6, 8),
];

/// Fluent builder for constructing a Graph.
///
/// Edges are checked when the graph is built, so they may name vertices that
/// are added later.
pub struct GraphBuilder {
    labels: Vec<String>,
    edges: Vec<(VertexId, VertexId)>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex, returns the ID it will have in the built graph.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        self.labels.push(label.into());
        self.labels.len() - 1
    }

    /// Add a vertex.
    pub fn vertex(&mut self, label: impl Into<String>) -> &mut Self {
        self.add_vertex(label);
        self
    }

    /// Add several vertices in order.
    pub fn vertices<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Add an undirected edge.
    pub fn edge(&mut self, from: VertexId, to: VertexId) -> &mut Self {
        self.edges.push((from, to));
        self
    }

    /// Add several undirected edges.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final Graph. Fails on the first edge naming a missing vertex.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for label in &self.labels {
            graph.add_vertex(label.as_str());
        }
        for &(from, to) in &self.edges {
            graph.try_add_edge(from, to)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The nine-vertex sample graph: a tree rooted at `A`.
pub fn sample_graph() -> GraphResult<Graph> {
    GraphBuilder::new()
        .vertices(SAMPLE_LABELS)
        .edges(SAMPLE_EDGES)
        .build()
}
