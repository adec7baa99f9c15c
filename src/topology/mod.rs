//! Shared-bottle topology module.
//!
//! This module contains the random undirected graph of philosophers,
//! its generation, name assignment and text rendering.

pub mod types;
pub mod generation;
pub mod display;
pub mod names;

// Re-export key types and functions for easier access
pub use types::{Edge, Topology, TopologyError};
pub use display::{render_adjacency_summary, render_matrix};
pub use names::assign_names;
