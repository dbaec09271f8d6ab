//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod adjacency_graph;
pub mod builder;
pub mod traversal;

pub use adjacency::AdjacencyStore;
pub use adjacency_graph::Graph;
pub use builder::{sample_graph, GraphBuilder};
pub use traversal::{traverse, NeighborScan, Traversal, TraversalOrder, TraversalParams};
