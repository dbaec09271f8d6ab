//! Reads graph description files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::{Graph, GraphBuilder};
use crate::types::GraphResult;

use super::GraphDocument;

/// Reader for JSON graph descriptions.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph description file into a Graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let graph = Self::read_from(&mut reader)?;
        log::debug!(
            "read {} vertices and {} edges from {}",
            graph.vertex_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Graph> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        Self::from_document(&document)
    }

    /// Build a Graph from a parsed description. Vertices are added first, so
    /// edges may appear in any order.
    pub fn from_document(document: &GraphDocument) -> GraphResult<Graph> {
        GraphBuilder::new()
            .vertices(document.vertices.iter().map(String::as_str))
            .edges(document.edges.iter().map(|e| (e.from, e.to)))
            .build()
    }
}
