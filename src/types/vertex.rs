//! The vertex record.

use serde::{Deserialize, Serialize};

/// A labeled vertex.
///
/// `visited` is display state: vertices held by a [`Graph`](crate::Graph)
/// always report `false`, and a traversal hands out copies with the flag
/// set through [`Traversal::visited_vertices`](crate::Traversal::visited_vertices).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    /// Human-readable label.
    pub label: String,
    /// Whether a traversal reached this vertex.
    #[serde(default)]
    pub visited: bool,
}

impl Vertex {
    /// Create an unvisited vertex.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visited: false,
        }
    }

    /// Return a copy with the visited flag set to `visited`.
    pub fn with_visited(&self, visited: bool) -> Self {
        Self {
            label: self.label.clone(),
            visited,
        }
    }
}

/// Renders as `(label,visited)`, with the flag printed as `0` or `1`.
impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.label, u8::from(self.visited))
    }
}
