//! Core graph structure — labeled vertices + symmetric adjacency rows.

use crate::types::{GraphError, GraphResult, Vertex, VertexId, Weight, EDGE_WEIGHT, NO_EDGE};

use super::adjacency::AdjacencyStore;
use super::traversal::{self, NeighborScan, Traversal, TraversalOrder, TraversalParams};

/// A mutable undirected graph. Vertices are identified by insertion index.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All vertices, indexed by ID.
    vertices: Vec<Vertex>,
    /// One adjacency row per vertex.
    adjacency: AdjacencyStore,
    /// Next available vertex ID.
    next_id: VertexId,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: AdjacencyStore::new(),
            next_id: 0,
        }
    }

    /// Add a vertex, returns the assigned ID.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = self.next_id;
        self.next_id += 1;

        let vertex = Vertex::new(label);
        log::debug!("add vertex {} {}", id, vertex);
        self.vertices.push(vertex);
        self.adjacency.push_row();

        id
    }

    /// Add an undirected edge between two existing vertices.
    ///
    /// Returns `false`, leaving the graph untouched, when either endpoint does
    /// not exist. Adding an existing edge again is a no-op.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        self.try_add_edge(from, to).is_ok()
    }

    /// Like [`add_edge`](Self::add_edge), but reports which edge was rejected.
    pub fn try_add_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        // One row per vertex, so the store rejects exactly the missing endpoints.
        if !self.adjacency.connect(from, to, EDGE_WEIGHT) {
            log::warn!(
                "rejected edge ({},{}): graph has {} vertices",
                from,
                to,
                self.vertex_count()
            );
            return Err(GraphError::InvalidEdge { from, to });
        }
        log::debug!("add edge ({},{})", from, to);
        Ok(())
    }

    /// Whether `id` names an existing vertex.
    pub fn contains(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Weight of edge `(i, j)`, or [`NO_EDGE`] if there is none or either index
    /// is out of range.
    pub fn get_weight(&self, i: VertexId, j: VertexId) -> Weight {
        self.weight(i, j).unwrap_or(NO_EDGE)
    }

    /// Weight of edge `(i, j)`, if it exists.
    pub fn weight(&self, i: VertexId, j: VertexId) -> Option<Weight> {
        self.adjacency.weight(i, j)
    }

    /// Whether an edge connects `i` and `j`.
    pub fn has_edge(&self, i: VertexId, j: VertexId) -> bool {
        self.weight(i, j).is_some()
    }

    /// Number of vertices ever added.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges. Self-loops are not counted.
    pub fn edge_count(&self) -> usize {
        self.adjacency.upper_triangle().count()
    }

    /// All edges as `(i, j)` with `i < j`, sorted by `i` then `j`.
    pub fn edge_list(&self) -> Vec<(VertexId, VertexId)> {
        self.adjacency.upper_triangle().collect()
    }

    /// Snapshot of all vertices in ID order.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.vertices.clone()
    }

    /// All neighbors of `id` in ascending order, including lower-indexed ones.
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.adjacency.row_neighbors(id).collect()
    }

    /// The underlying adjacency rows.
    pub fn adjacency(&self) -> &AdjacencyStore {
        &self.adjacency
    }

    /// Depth-first traversal from `start`, returning vertex IDs in visit order.
    pub fn dfs(&self, start: VertexId) -> GraphResult<Vec<VertexId>> {
        self.traverse(TraversalParams {
            start,
            order: TraversalOrder::DepthFirst,
            scan: NeighborScan::Forward,
        })
        .map(Traversal::into_order)
    }

    /// Breadth-first traversal from `start`, returning vertex IDs in visit order.
    pub fn bfs(&self, start: VertexId) -> GraphResult<Vec<VertexId>> {
        self.traverse(TraversalParams {
            start,
            order: TraversalOrder::BreadthFirst,
            scan: NeighborScan::Forward,
        })
        .map(Traversal::into_order)
    }

    /// Run a traversal with explicit options.
    pub fn traverse(&self, params: TraversalParams) -> GraphResult<Traversal> {
        traversal::traverse(self, params)
    }
}
