//! The small example graph used throughout the tutorial notebooks.

use crate::MotifGraph;
use petgraph::graph::NodeIndex;

/// Edges of the example graph: two triangles sharing node 2.
const EXAMPLE_EDGES: [(usize, usize); 6] = [
    (0, 1),
    (1, 2),
    (2, 0), // Triangle 1
    (2, 3),
    (3, 4),
    (4, 2), // Triangle 2
];

/// Create a small example graph with 5 nodes and 6 edges containing
/// two triangles, {0,1,2} and {2,3,4}. Each node's payload is its
/// insertion index. Deterministic and infallible.
pub fn create_example_graph() -> MotifGraph {
    let mut graph = MotifGraph::new_undirected();

    let nodes: Vec<NodeIndex> = (0u32..5).map(|i| graph.add_node(i)).collect();

    for (src, dst) in EXAMPLE_EDGES {
        graph.add_edge(nodes[src], nodes[dst], ());
    }

    graph
}
