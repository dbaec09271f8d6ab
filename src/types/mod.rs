//! All data types for the adjgraph library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// Identifier of a vertex: its 0-based insertion index.
pub type VertexId = usize;

/// Edge weight as stored in the adjacency rows.
pub type Weight = i32;

/// Weight written for every edge. The graph is unweighted in practice.
pub const EDGE_WEIGHT: Weight = 1;

/// Sentinel reported by [`Graph::get_weight`](crate::Graph::get_weight) when no edge exists.
pub const NO_EDGE: Weight = Weight::MAX;
