// SPDX-License-Identifier: MIT OR Apache-2.0
//! Read interface consumed by the algorithms, plus an in-memory graph.
//!
//! Algorithms only ever see a graph through [`WeightedGraph`]. [`Graph`] is the
//! adjacency-list implementation used by the shell, the tests and the benches.

use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt::Debug,
    hash::Hash,
};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{GraphConfig, GraphError, Result};

/// Identity requirements for a vertex: hashable, totally ordered, cloneable.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Vertex for T {}

/// A weighted edge from `start` to `end`.
///
/// Edges order by weight first, then by `(start, end)`, so sorting an edge list
/// is deterministic even when weights tie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<V> {
    pub start: V,
    pub end: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub const fn new(start: V, end: V, weight: f64) -> Self {
        Self { start, end, weight }
    }
}

impl<V: Clone> Edge<V> {
    /// The same edge seen from its other endpoint.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end.clone(), self.start.clone(), self.weight)
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.weight.total_cmp(&other.weight).is_eq()
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Ord> PartialOrd for Edge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for Edge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

/// Read-only view of a weighted graph.
///
/// `adjacency_matrix` rows and columns follow the order of `vertices`, and an
/// absent edge is stored as `0.0`. Callers computing distances must translate
/// that sentinel themselves.
pub trait WeightedGraph {
    type Vertex: Vertex;

    /// All vertices, sorted and without duplicates.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Every edge once, in insertion order.
    fn edges(&self) -> Vec<Edge<Self::Vertex>>;

    /// Edges leaving `vertex`, oriented so that `start == vertex`.
    fn edges_from(&self, vertex: &Self::Vertex) -> Vec<Edge<Self::Vertex>>;

    /// Dense n×n weight matrix with `0.0` meaning "no edge".
    fn adjacency_matrix(&self) -> Vec<Vec<f64>>;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

/// Adjacency-list graph, directed or undirected.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    adjacency: BTreeMap<V, Vec<Edge<V>>>,
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> Graph<V> {
    #[must_use]
    pub const fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    #[must_use]
    pub const fn directed() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub const fn undirected() -> Self {
        Self::new(false)
    }

    /// Build a graph from `(start, end, weight)` triples.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new(directed);
        for (start, end, weight) in edges {
            graph.add_edge(start, end, weight);
        }
        graph
    }

    /// A graph with the given vertices and no edges.
    pub fn with_vertices<I: IntoIterator<Item = V>>(directed: bool, vertices: I) -> Self {
        let mut graph = Self::new(directed);
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    pub fn add_edge(&mut self, start: V, end: V, weight: f64) {
        if weight.is_nan() || weight < 0.0 {
            warn!(?start, ?end, weight, "edge weight outside algorithm contract");
        }

        let edge = Edge::new(start.clone(), end.clone(), weight);
        if !self.directed && start != end {
            self.adjacency
                .entry(end.clone())
                .or_default()
                .push(edge.reversed());
        }
        self.adjacency.entry(end).or_default();
        self.adjacency.entry(start).or_default().push(edge.clone());
        self.edges.push(edge);
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn index_of(&self) -> BTreeMap<&V, usize> {
        self.adjacency
            .keys()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect()
    }
}

impl Graph<String> {
    /// Parse a plain-text edge list.
    ///
    /// One edge per line as `start end [weight]`; a lone token declares an
    /// isolated vertex. Blank lines and `#` comments are skipped. Missing weights
    /// take `config.default_weight`.
    pub fn parse_edge_list(input: &str, config: &GraphConfig) -> Result<Self> {
        let mut graph = Self::new(config.directed);

        for (idx, raw) in input.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            match tokens.as_slice() {
                [v] => graph.add_vertex((*v).to_string()),
                [start, end] => {
                    graph.add_edge(
                        (*start).to_string(),
                        (*end).to_string(),
                        config.default_weight,
                    );
                },
                [start, end, weight] => {
                    let weight = parse_weight(weight, line)?;
                    graph.add_edge((*start).to_string(), (*end).to_string(), weight);
                },
                _ => {
                    return Err(GraphError::Parse {
                        line,
                        message: format!("expected `start end [weight]`, got {} fields", tokens.len()),
                    });
                },
            }
        }

        Ok(graph)
    }
}

fn parse_weight(token: &str, line: usize) -> Result<f64> {
    let weight: f64 = token.parse().map_err(|e| GraphError::Parse {
        line,
        message: format!("invalid weight '{token}': {e}"),
    })?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(GraphError::Parse {
            line,
            message: format!("weight must be finite and non-negative, got {weight}"),
        });
    }
    Ok(weight)
}

impl<V: Vertex> WeightedGraph for Graph<V> {
    type Vertex = V;

    fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn edges(&self) -> Vec<Edge<V>> {
        self.edges.clone()
    }

    fn edges_from(&self, vertex: &V) -> Vec<Edge<V>> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    fn adjacency_matrix(&self) -> Vec<Vec<f64>> {
        let index = self.index_of();
        let n = index.len();
        let mut matrix = vec![vec![0.0; n]; n];

        let mut set = |i: usize, j: usize, w: f64| {
            let cell = &mut matrix[i][j];
            // Parallel edges keep the lightest weight.
            if *cell == 0.0 || w < *cell {
                *cell = w;
            }
        };

        for edge in &self.edges {
            let i = index[&edge.start];
            let j = index[&edge.end];
            set(i, j, edge.weight);
            if !self.directed {
                set(j, i, edge.weight);
            }
        }
        matrix
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}
