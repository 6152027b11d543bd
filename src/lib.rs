//! Helper routines for the triangle-motif tutorial notebooks.
//!
//! Three independent helpers, all working on the same undirected
//! petgraph container ([`MotifGraph`]):
//!
//! - [`example::create_example_graph`]: a fixed 5-node graph with two
//!   triangles sharing a node, used as the running example.
//! - [`colors::gen_edge_colors`]: per-edge color labels for plotting a
//!   highlighted node set.
//! - [`datasets::load_facebook_dataset`]: download, cache and parse
//!   the SNAP Facebook ego-network edge list.
//!
//! # Example
//!
//! ```rust
//! use motif_utils::{colors, example};
//!
//! let graph = example::create_example_graph();
//! let edge_colors = colors::gen_edge_colors(&graph, &[0, 1, 2]);
//! assert_eq!(edge_colors.len(), graph.edge_count());
//! ```

pub mod colors;
pub mod datasets;
pub mod example;

/// The graph container shared by all helpers: undirected, each node
/// carries its integer id, edges carry no payload.
pub type MotifGraph = petgraph::graph::UnGraph<u32, ()>;
