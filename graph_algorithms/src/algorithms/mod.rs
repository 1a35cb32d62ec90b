// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph algorithms module.
//!
//! This module provides:
//! - Minimum Spanning Tree (Kruskal's and Prim's algorithms)
//! - A* pathfinding with pluggable heuristics, and Dijkstra on top of it
//! - All-pairs shortest distances (Floyd–Warshall)
//! - Graph diameter

mod all_pairs;
mod diameter;
mod frontier;
mod mst;
mod shortest_path;
mod union_find;

pub use all_pairs::{all_shortest_paths, floyd_warshall, DistanceMatrix};
pub use diameter::diameter;
pub use mst::{minimum_spanning_tree, minimum_spanning_tree_by_name, MstAlgorithm, MstResult};
pub use shortest_path::{
    dijkstra, euclidean_heuristic, manhattan_heuristic, shortest_path, HeuristicFn, PathOutcome,
    SearchResult, WeightedPath,
};
