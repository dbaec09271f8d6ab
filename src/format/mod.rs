//! JSON graph description files.
//!
//! A description lists vertex labels in ID order and the undirected edges:
//!
//! ```json
//! {"vertices": ["A", "B"], "edges": [{"from": 0, "to": 1}]}
//! ```

pub mod reader;
pub mod writer;

use serde::{Deserialize, Serialize};

use crate::types::VertexId;

pub use reader::GraphReader;
pub use writer::GraphWriter;

/// On-disk shape of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Vertex labels; the position is the vertex ID.
    #[serde(default)]
    pub vertices: Vec<String>,
    /// Undirected edges.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: VertexId,
    pub to: VertexId,
}
