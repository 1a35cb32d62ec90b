// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph diameter: the longest shortest path between any two vertices.

use tracing::instrument;

use super::all_pairs::all_shortest_paths;
use crate::WeightedGraph;

/// Largest shortest-path distance over all ordered vertex pairs.
///
/// Infinite when some vertex cannot reach another, so any disconnected graph
/// (or a directed graph that is not strongly connected) has infinite diameter.
/// Graphs with fewer than two vertices have diameter 0.
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn diameter<G: WeightedGraph>(graph: &G) -> f64 {
    all_shortest_paths(graph).values().fold(0.0, f64::max)
}
