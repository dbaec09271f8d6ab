//! Writes graph description files from an in-memory graph.

use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::{EdgeRecord, GraphDocument};

/// Writer for JSON graph descriptions.
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a writer producing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a writer producing indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Capture a graph as a description. Edges are `(i, j)` with `i <= j`,
    /// sorted, so self-loops are kept.
    pub fn to_document(graph: &Graph) -> GraphDocument {
        GraphDocument {
            vertices: graph.vertices().into_iter().map(|v| v.label).collect(),
            edges: graph
                .adjacency()
                .stored_pairs()
                .map(|(from, to)| EdgeRecord { from, to })
                .collect(),
        }
    }

    /// Write a complete Graph to a file.
    pub fn write_to_file(&self, graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        log::debug!("wrote {} vertices to {}", graph.vertex_count(), path.display());
        Ok(())
    }

    /// Write a complete Graph to any writer.
    pub fn write_to(&self, graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        let document = Self::to_document(graph);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
        } else {
            serde_json::to_writer(&mut *writer, &document)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Default for GraphWriter {
    fn default() -> Self {
        Self::new()
    }
}
