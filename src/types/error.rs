//! Error types for the adjgraph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex identifier does not name an existing vertex.
    #[error("Vertex ID {0} not found")]
    InvalidVertexId(VertexId),

    /// An edge names at least one vertex that does not exist.
    #[error("Edge ({from},{to}) references a vertex that does not exist")]
    InvalidEdge { from: VertexId, to: VertexId },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph description.
    #[error("Invalid graph description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
