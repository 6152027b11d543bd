//! Edge coloring for plotting highlighted node sets.

use crate::MotifGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

/// Color assigned to edges whose endpoints are both highlighted.
pub const HIGHLIGHT_COLOR: &str = "red";
/// Color assigned to every other edge.
pub const DEFAULT_COLOR: &str = "gray";

/// Compute one color per edge, in the graph's edge-storage order.
///
/// An edge is colored [`HIGHLIGHT_COLOR`] when both of its endpoints
/// appear in `highlight_nodes`, otherwise [`DEFAULT_COLOR`]. Indices
/// that name no node in the graph simply never match.
pub fn gen_edge_colors(graph: &MotifGraph, highlight_nodes: &[usize]) -> Vec<&'static str> {
    let highlight_set: HashSet<NodeIndex> =
        highlight_nodes.iter().map(|&i| NodeIndex::new(i)).collect();

    graph
        .edge_references()
        .map(|edge| {
            if highlight_set.contains(&edge.source()) && highlight_set.contains(&edge.target()) {
                HIGHLIGHT_COLOR
            } else {
                DEFAULT_COLOR
            }
        })
        .collect()
}
