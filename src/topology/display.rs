//! Adjacency matrix and neighbor summary rendering.

use std::fmt::Write;

use crate::topology::types::Topology;

/// Renders the adjacency matrix with name headers.
///
/// Every column is as wide as the longest name plus two spaces; cells
/// show `1` where a bottle is shared and `0` otherwise.
pub fn render_matrix(topology: &Topology) -> String {
    let width = topology.names().iter().map(|n| n.len()).max().unwrap_or(0) + 2;
    let mut out = String::new();

    let mut header = " ".repeat(width);
    for name in topology.names() {
        let _ = write!(header, "{:<width$}", name, width = width);
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for (i, name) in topology.names().iter().enumerate() {
        let mut row = format!("{:<width$}", name, width = width);
        for j in 0..topology.size() {
            let flag = if topology.has_edge(i, j) { 1 } else { 0 };
            let _ = write!(row, "{:<width$}", flag, width = width);
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out
}

/// Renders one "X shares a bottle with: ..." line per philosopher
pub fn render_adjacency_summary(topology: &Topology) -> String {
    let mut out = String::new();

    for id in 0..topology.size() {
        let neighbors: Vec<&str> = topology.neighbors(id).map(|(j, _)| topology.name(j)).collect();
        let listed = if neighbors.is_empty() {
            "No one".to_string()
        } else {
            neighbors.join(", ")
        };
        let _ = writeln!(out, "{} shares a bottle with: {}", topology.name(id), listed);
    }

    out
}
