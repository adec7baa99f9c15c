//! Topology generation.
//!
//! Builds the shared-bottle graph either at random (one coin flip per
//! unordered pair) or from an explicit edge list.

use log::{debug, info, warn};
use rand::Rng;

use crate::topology::names::assign_names;
use crate::topology::types::{Topology, TopologyError};

impl Topology {
    /// Generates a random undirected topology of `count` named philosophers.
    ///
    /// Each pair (i, j) with i < j shares a bottle with probability
    /// `edge_probability`. With exactly two philosophers the single edge
    /// always exists so at least one interaction is possible.
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        edge_probability: f64,
        capacity: u32,
        rng: &mut R,
    ) -> Self {
        let names = assign_names(count, rng);
        let mut topology = Topology::without_edges(names);

        for i in 0..count {
            for j in (i + 1)..count {
                let is_edge = count == 2 || rng.gen_bool(edge_probability);
                if is_edge {
                    debug!("{} and {} share a bottle", topology.names[i], topology.names[j]);
                    topology.connect(i, j, capacity);
                }
            }
        }

        info!(
            "Generated topology with {} philosophers and {} bottles",
            count,
            topology.edge_count()
        );

        for id in 0..count {
            if topology.degree(id) == 0 {
                warn!("{} shares a bottle with no one", topology.names[id]);
            }
        }

        topology
    }

    /// Builds a topology with exactly the given undirected edges.
    pub fn from_edges(
        names: Vec<String>,
        edges: &[(usize, usize)],
        capacity: u32,
    ) -> Result<Self, TopologyError> {
        let size = names.len();
        let mut topology = Topology::without_edges(names);

        for &(a, b) in edges {
            if a >= size || b >= size {
                return Err(TopologyError::OutOfBounds { a, b, size });
            }
            if a == b {
                return Err(TopologyError::SelfLoop(a));
            }
            if !topology.has_edge(a, b) {
                topology.connect(a, b, capacity);
            }
        }

        Ok(topology)
    }
}
