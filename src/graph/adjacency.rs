//! Per-vertex adjacency rows.

use crate::types::{VertexId, Weight};

/// Ragged adjacency storage: one row per vertex, indexed by neighbor ID.
///
/// Row `v` only grows as far as the largest neighbor ever connected to `v`.
/// Cells in between hold `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyStore {
    rows: Vec<Vec<Option<Weight>>>,
}

impl AdjacencyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Number of rows (one per vertex).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows have been allocated.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append an empty row for a new vertex.
    pub fn push_row(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Current length of row `v`, or 0 if the row does not exist.
    pub fn row_len(&self, v: VertexId) -> usize {
        self.rows.get(v).map_or(0, Vec::len)
    }

    /// Write `weight` at `[from][to]` and `[to][from]`, padding both rows.
    ///
    /// Returns `false` without writing anything if either row is missing.
    pub fn connect(&mut self, from: VertexId, to: VertexId, weight: Weight) -> bool {
        if from >= self.rows.len() || to >= self.rows.len() {
            return false;
        }
        self.set(from, to, weight);
        self.set(to, from, weight);
        true
    }

    fn set(&mut self, row: VertexId, col: VertexId, weight: Weight) {
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, None);
        }
        cells[col] = Some(weight);
    }

    /// Weight stored at `[i][j]`; `None` past either bound or for padding.
    pub fn weight(&self, i: VertexId, j: VertexId) -> Option<Weight> {
        self.rows.get(i).and_then(|row| row.get(j).copied().flatten())
    }

    /// Neighbors of `v` with an index strictly greater than `v`, ascending.
    pub fn forward_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.row_neighbors(v).filter(move |&to| to > v)
    }

    /// Every neighbor of `v`, ascending.
    pub fn row_neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.rows
            .get(v)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(to, cell)| cell.is_some().then_some(to))
    }

    /// Pairs `(i, j)`, `i <= j`, that hold an edge, in row-major order.
    ///
    /// Unlike [`upper_triangle`](Self::upper_triangle) this keeps self-loops.
    pub fn stored_pairs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        (0..self.rows.len()).flat_map(move |i| {
            self.row_neighbors(i)
                .filter(move |&j| j >= i)
                .map(move |j| (i, j))
        })
    }

    /// Upper-triangle pairs `(i, j)`, `i < j`, that hold an edge, in row-major order.
    pub fn upper_triangle(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        (0..self.rows.len()).flat_map(move |i| self.forward_neighbors(i).map(move |j| (i, j)))
    }
}
