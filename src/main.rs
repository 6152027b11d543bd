//! motif-utils - tutorial notebook helpers, runnable from the shell
//!
//! Thin CLI wrapper over the library so the example graph and the
//! Facebook dataset loader can be exercised outside a notebook.

use anyhow::Result;
use clap::{Parser, Subcommand};
use petgraph::visit::EdgeRef;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use motif_utils::{colors, datasets, example};

#[derive(Parser)]
#[command(name = "motif-utils", version, about = "Helpers for the triangle-motif tutorial notebooks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the 5-node example graph and print its edge colors
    Example {
        /// Node indices to highlight
        #[arg(long, value_delimiter = ',', default_values_t = [0usize, 1, 2])]
        highlight: Vec<usize>,
    },
    /// Download (if needed) and load the Facebook ego-network dataset
    Fetch {
        /// Directory used to cache the downloaded dataset
        #[arg(long, env = "MOTIF_CACHE_DIR", default_value = datasets::DEFAULT_CACHE_DIR)]
        cache_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging; progress events are info-level
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Example { highlight } => {
            let graph = example::create_example_graph();
            println!(
                "example graph: {} nodes, {} edges",
                graph.node_count(),
                graph.edge_count()
            );
            let edge_colors = colors::gen_edge_colors(&graph, &highlight);
            for (edge, color) in graph.edge_references().zip(edge_colors) {
                println!(
                    "  ({}, {}) -> {}",
                    edge.source().index(),
                    edge.target().index(),
                    color
                );
            }
        }
        Command::Fetch { cache_dir } => {
            let graph = datasets::load_facebook_dataset_from(&cache_dir)?;
            println!(
                "{} nodes, {} edges (cached under {})",
                graph.node_count(),
                graph.edge_count(),
                cache_dir.display()
            );
        }
    }

    Ok(())
}
