// SPDX-License-Identifier: MIT OR Apache-2.0
// Command-line argument parsing for graphtool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// graphtool: spanning trees, shortest paths and diameter of an edge-list graph.
#[derive(Parser, Debug)]
#[command(name = "graphtool")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge list file: one `start end [weight]` per line
    pub file: PathBuf,

    /// Treat edges as directed
    #[arg(long = "directed")]
    pub directed: bool,

    /// Weight for edges listed without one
    #[arg(long = "default-weight")]
    pub default_weight: Option<f64>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Minimum spanning tree (forest when disconnected)
    Mst {
        /// kruskal or prim
        #[arg(short = 'a', long = "algorithm")]
        algorithm: Option<String>,
    },
    /// Cheapest path between two vertices (Dijkstra)
    Path { start: String, goal: String },
    /// Shortest distances between every pair of vertices
    AllPairs,
    /// Longest shortest path in the graph
    Diameter,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Table,
    /// JSON
    Json,
}
