//! Topology type definitions.
//!
//! The topology is a square matrix indexed by philosopher id. Cell (i, j)
//! holds the bottle shared by philosophers i and j, if any; both (i, j) and
//! (j, i) hold the same `Arc`. The structure never changes after
//! construction, so it is shared between threads without a lock.

use std::sync::Arc;

use crate::bottle::Bottle;

/// Errors raised while building a topology from explicit edges
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Philosopher {0} cannot share a bottle with themself")]
    SelfLoop(usize),

    #[error("Edge ({a}, {b}) is out of bounds for {size} philosophers")]
    OutOfBounds { a: usize, b: usize, size: usize },
}

/// An undirected edge, reported with `a < b`
#[derive(Debug, Clone)]
pub struct Edge<'a> {
    pub a: usize,
    pub b: usize,
    pub bottle: &'a Arc<Bottle>,
}

/// Random undirected graph of philosophers and the bottles between them
#[derive(Debug)]
pub struct Topology {
    pub(crate) names: Vec<String>,
    pub(crate) cells: Vec<Vec<Option<Arc<Bottle>>>>,
}

impl Topology {
    /// Creates a topology with the given names and no edges
    pub(crate) fn without_edges(names: Vec<String>) -> Self {
        let size = names.len();
        Self {
            names,
            cells: vec![vec![None; size]; size],
        }
    }

    /// Places one fresh bottle on both (a, b) and (b, a)
    pub(crate) fn connect(&mut self, a: usize, b: usize, capacity: u32) {
        let bottle = Arc::new(Bottle::new(capacity));
        self.cells[a][b] = Some(Arc::clone(&bottle));
        self.cells[b][a] = Some(bottle);
    }

    /// Number of philosophers (vertices)
    pub fn size(&self) -> usize {
        self.names.len()
    }

    pub fn name(&self, id: usize) -> &str {
        &self.names[id]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The bottle shared by `a` and `b`, if they share one
    pub fn bottle(&self, a: usize, b: usize) -> Option<&Arc<Bottle>> {
        self.cells.get(a)?.get(b)?.as_ref()
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.bottle(a, b).is_some()
    }

    /// Adjacent philosophers of `id` and their shared bottles, by ascending id
    pub fn neighbors(&self, id: usize) -> impl Iterator<Item = (usize, &Arc<Bottle>)> + '_ {
        self.cells[id]
            .iter()
            .enumerate()
            .filter_map(|(j, cell)| cell.as_ref().map(|bottle| (j, bottle)))
    }

    pub fn degree(&self, id: usize) -> usize {
        self.neighbors(id).count()
    }

    /// Every edge once, ordered by (a, b) with `a < b`
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.cells.iter().enumerate().flat_map(|(a, row)| {
            row.iter()
                .enumerate()
                .skip(a + 1)
                .filter_map(move |(b, cell)| cell.as_ref().map(|bottle| Edge { a, b, bottle }))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
