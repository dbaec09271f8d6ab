//! adjgraph — an undirected graph with depth-first and breadth-first traversal.
//!
//! Vertices are labeled and identified by insertion index. Edges are stored in
//! symmetric, lazily grown adjacency rows.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeRecord, GraphDocument, GraphReader, GraphWriter};
pub use graph::{
    sample_graph, AdjacencyStore, Graph, GraphBuilder, NeighborScan, Traversal, TraversalOrder,
    TraversalParams,
};
pub use types::{GraphError, GraphResult, Vertex, VertexId, Weight, EDGE_WEIGHT, NO_EDGE};
