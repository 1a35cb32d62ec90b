// SPDX-License-Identifier: MIT OR Apache-2.0
//! Classic algorithms over weighted graphs.
//!
//! - [`minimum_spanning_tree`]: Kruskal (union-find) or Prim, yielding a
//!   spanning forest on disconnected input
//! - [`shortest_path`] / [`dijkstra`]: best-first search with an optional heuristic
//! - [`all_shortest_paths`]: Floyd–Warshall distance matrix
//! - [`diameter`]: longest shortest path
//!
//! Algorithms read a graph through [`WeightedGraph`] and never modify it. Every
//! call builds its own working state, so calls are independent of one another.
//!
//! ```
//! use graph_algorithms::{dijkstra, Graph, MstAlgorithm};
//!
//! let graph = Graph::from_edges(false, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
//!
//! let mst = graph_algorithms::minimum_spanning_tree(&graph, MstAlgorithm::Kruskal);
//! assert_eq!(mst.total_weight, 3.0);
//!
//! let route = dijkstra(&graph, &0, &2).unwrap();
//! assert_eq!(route.cost(), Some(3.0));
//! ```

#![allow(clippy::missing_errors_doc)] // Error conditions are self-evident from Result types
#![allow(clippy::float_cmp)] // Exact comparisons against the 0.0 "no edge" sentinel are intended

mod algorithms;
pub mod config;
mod error;
mod graph;

pub use algorithms::{
    all_shortest_paths, diameter, dijkstra, euclidean_heuristic, floyd_warshall,
    manhattan_heuristic, minimum_spanning_tree, minimum_spanning_tree_by_name, shortest_path,
    DistanceMatrix, HeuristicFn, MstAlgorithm, MstResult, PathOutcome, SearchResult, WeightedPath,
};
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, Vertex, WeightedGraph};

#[cfg(test)]
mod tests;
