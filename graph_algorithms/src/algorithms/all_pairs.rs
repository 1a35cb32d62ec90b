// SPDX-License-Identifier: MIT OR Apache-2.0
//! All-pairs shortest distances with Floyd–Warshall.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{GraphError, Result, WeightedGraph};

/// Shortest distances between every ordered pair of vertices.
///
/// `distances[i][j]` is the distance from `vertices[i]` to `vertices[j]`, or
/// `f64::INFINITY` when no path exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix<V> {
    pub vertices: Vec<V>,
    pub distances: Vec<Vec<f64>>,
}

impl<V: PartialEq> DistanceMatrix<V> {
    /// Distance from `from` to `to`; `None` if either is not in the matrix.
    #[must_use]
    pub fn distance(&self, from: &V, to: &V) -> Option<f64> {
        let i = self.vertices.iter().position(|v| v == from)?;
        let j = self.vertices.iter().position(|v| v == to)?;
        Some(self.distances[i][j])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Every entry, row by row.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.distances.iter().flatten().copied()
    }
}

/// Shortest distances between all pairs of vertices of `graph`.
///
/// Time complexity: O(V³).
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn all_shortest_paths<G: WeightedGraph>(graph: &G) -> DistanceMatrix<G::Vertex> {
    let vertices = graph.vertices();
    let raw = graph.adjacency_matrix();
    let distances = relax_all(raw);

    let unreachable = distances
        .iter()
        .flatten()
        .filter(|d| d.is_infinite())
        .count();
    debug!(unreachable_pairs = unreachable, "all-pairs distances computed");

    DistanceMatrix {
        vertices,
        distances,
    }
}

/// Floyd–Warshall over a raw adjacency matrix.
///
/// Off-diagonal `0.0` entries mean "no edge" and become `f64::INFINITY`.
/// The diagonal is always 0: staying put costs nothing.
///
/// # Errors
///
/// Returns `GraphError::InvalidArgument` if `matrix` is not square.
pub fn floyd_warshall(matrix: Vec<Vec<f64>>) -> Result<Vec<Vec<f64>>> {
    let n = matrix.len();
    if let Some((row, cells)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(GraphError::InvalidArgument {
            argument: "adjacency matrix",
            message: format!("row {row} has {} entries, expected {n}", cells.len()),
        });
    }
    Ok(relax_all(matrix))
}

fn relax_all(mut dist: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    let n = dist.len();
    for (i, row) in dist.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            if i == j {
                *cell = 0.0;
            } else if *cell == 0.0 {
                *cell = f64::INFINITY;
            }
        }
    }

    // k must stay the outermost loop.
    for k in 0..n {
        let via = dist[k].clone();
        for row in &mut dist {
            let to_k = row[k];
            if to_k.is_infinite() {
                continue;
            }
            for (cell, &from_k) in row.iter_mut().zip(&via) {
                let through = to_k + from_k;
                if through < *cell {
                    *cell = through;
                }
            }
        }
    }

    dist
}
