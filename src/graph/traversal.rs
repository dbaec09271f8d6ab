//! Graph traversal algorithms (DFS and BFS).

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult, Vertex, VertexId};

use super::Graph;

/// Frontier discipline for a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Last-in-first-out frontier.
    DepthFirst,
    /// First-in-first-out frontier.
    BreadthFirst,
}

/// Which neighbors are considered when a vertex is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborScan {
    /// Only neighbors with a higher ID than the expanded vertex.
    ///
    /// A vertex reachable only through an edge to a lower ID is never
    /// discovered this way.
    #[default]
    Forward,
    /// Every neighbor, in ascending ID order.
    All,
}

impl NeighborScan {
    /// Parse a scan mode from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "forward" => Some(Self::Forward),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Parameters for a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalParams {
    /// Starting vertex ID.
    pub start: VertexId,
    /// Stack or queue frontier.
    pub order: TraversalOrder,
    /// Neighbor scan mode.
    pub scan: NeighborScan,
}

/// Result of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Vertex IDs in visit order.
    order: Vec<VertexId>,
    /// Per-vertex visited flags, indexed by ID.
    visited: Vec<bool>,
}

impl Traversal {
    /// Vertex IDs in visit order.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Consume the result, keeping only the visit order.
    pub fn into_order(self) -> Vec<VertexId> {
        self.order
    }

    /// Number of vertices visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was visited. Never true for a successful traversal.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the traversal reached `id`.
    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited.get(id).copied().unwrap_or(false)
    }

    /// Snapshot of the graph's vertices with `visited` set from this traversal.
    pub fn visited_vertices(&self, graph: &Graph) -> Vec<Vertex> {
        (0..graph.vertex_count())
            .filter_map(|id| graph.vertex(id).map(|v| v.with_visited(self.is_visited(id))))
            .collect()
    }
}

/// Traverse `graph` from `params.start`.
///
/// The start vertex is visited first. When a vertex is taken off the frontier
/// it is appended to the result, then its neighbors (per `params.scan`) are
/// checked in ascending order; each unvisited one is marked and pushed.
pub fn traverse(graph: &Graph, params: TraversalParams) -> GraphResult<Traversal> {
    let start = params.start;
    if !graph.contains(start) {
        return Err(GraphError::InvalidVertexId(start));
    }

    let adjacency = graph.adjacency();
    let mut visited = vec![false; graph.vertex_count()];
    let mut order: Vec<VertexId> = Vec::new();
    let mut frontier: VecDeque<VertexId> = VecDeque::new();

    visited[start] = true;
    frontier.push_back(start);

    loop {
        let next = match params.order {
            TraversalOrder::DepthFirst => frontier.pop_back(),
            TraversalOrder::BreadthFirst => frontier.pop_front(),
        };
        let Some(from) = next else {
            break;
        };
        order.push(from);

        let neighbors: Vec<VertexId> = match params.scan {
            NeighborScan::Forward => adjacency.forward_neighbors(from).collect(),
            NeighborScan::All => adjacency.row_neighbors(from).collect(),
        };
        for to in neighbors {
            if !visited[to] {
                visited[to] = true;
                frontier.push_back(to);
            }
        }
    }

    log::debug!(
        "{:?} from {} ({:?} scan) visited {} of {} vertices",
        params.order,
        start,
        params.scan,
        order.len(),
        graph.vertex_count()
    );

    Ok(Traversal { order, visited })
}
