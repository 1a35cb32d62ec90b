// SPDX-License-Identifier: MIT OR Apache-2.0
//! Minimum Spanning Tree using Kruskal's or Prim's algorithm.
//!
//! Computes the minimum spanning tree (or forest) of a graph using edge weights.
//! Edge direction is ignored.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{frontier::Frontier, union_find::UnionFind};
use crate::{Edge, GraphError, Result, Vertex, WeightedGraph};

/// Strategy used to build the spanning forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MstAlgorithm {
    Kruskal,
    Prim,
}

impl MstAlgorithm {
    pub const ALL: [Self; 2] = [Self::Kruskal, Self::Prim];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MstAlgorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GraphError::InvalidArgument {
                argument: "mst algorithm",
                message: format!("'{s}' is not one of: kruskal, prim"),
            })
    }
}

impl TryFrom<String> for MstAlgorithm {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Result of MST computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult<V> {
    /// Edges in the minimum spanning tree (or forest), in acceptance order.
    pub edges: Vec<Edge<V>>,
    /// Total weight of the MST.
    pub total_weight: f64,
    /// Number of trees in the forest (1 for connected graphs).
    pub tree_count: usize,
}

impl<V> MstResult<V> {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
            tree_count: 0,
        }
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.tree_count == 1
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V> Default for MstResult<V> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compute the minimum spanning tree (or forest) with the chosen strategy.
///
/// A graph with k connected components yields n - k edges. Both strategies
/// return a forest of the same total weight.
///
/// Time complexity: O(E log E).
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn minimum_spanning_tree<G: WeightedGraph>(
    graph: &G,
    algorithm: MstAlgorithm,
) -> MstResult<G::Vertex> {
    let result = match algorithm {
        MstAlgorithm::Kruskal => kruskal(graph),
        MstAlgorithm::Prim => prim(graph),
    };
    debug!(
        edges = result.edge_count(),
        trees = result.tree_count,
        total_weight = result.total_weight,
        "spanning forest computed"
    );
    result
}

/// Like [`minimum_spanning_tree`], selecting the strategy by name.
///
/// # Errors
///
/// Returns `GraphError::InvalidArgument` if `algorithm` is not `kruskal` or `prim`.
pub fn minimum_spanning_tree_by_name<G: WeightedGraph>(
    graph: &G,
    algorithm: &str,
) -> Result<MstResult<G::Vertex>> {
    Ok(minimum_spanning_tree(graph, algorithm.parse()?))
}

fn kruskal<G: WeightedGraph>(graph: &G) -> MstResult<G::Vertex> {
    let vertices = graph.vertices();
    if vertices.is_empty() {
        return MstResult::empty();
    }

    let mut weighted_edges = graph.edges();
    weighted_edges.sort();

    let mut uf = UnionFind::new(&vertices);
    let mut mst_edges = Vec::with_capacity(vertices.len() - 1);
    let mut total_weight = 0.0;

    for edge in weighted_edges {
        if mst_edges.len() == vertices.len() - 1 {
            break;
        }

        let root_start = uf.find(&edge.start);
        let root_end = uf.find(&edge.end);
        if root_start == root_end {
            continue; // Would close a cycle
        }

        uf.union(root_start, root_end);
        total_weight += edge.weight;
        mst_edges.push(edge);
    }

    MstResult {
        edges: mst_edges,
        total_weight,
        tree_count: uf.component_count(),
    }
}

fn prim<G: WeightedGraph>(graph: &G) -> MstResult<G::Vertex> {
    let vertices = graph.vertices();
    let edges = graph.edges();

    let mut incident: HashMap<&G::Vertex, Vec<usize>> = HashMap::new();
    for (idx, edge) in edges.iter().enumerate() {
        incident.entry(&edge.start).or_default().push(idx);
        if edge.start != edge.end {
            incident.entry(&edge.end).or_default().push(idx);
        }
    }

    let mut in_tree: HashSet<G::Vertex> = HashSet::with_capacity(vertices.len());
    let mut result = MstResult::empty();

    for root in &vertices {
        if !in_tree.insert(root.clone()) {
            continue;
        }
        result.tree_count += 1;

        let mut frontier = Frontier::new();
        push_incident(&mut frontier, &edges, &incident, &in_tree, root);

        while let Some((_, idx)) = frontier.pop() {
            let edge = &edges[idx];
            let next = if in_tree.contains(&edge.start) {
                &edge.end
            } else {
                &edge.start
            };
            if !in_tree.insert(next.clone()) {
                continue;
            }

            result.total_weight += edge.weight;
            result.edges.push(edge.clone());
            push_incident(&mut frontier, &edges, &incident, &in_tree, next);
        }
    }

    result
}

fn push_incident<V: Vertex>(
    frontier: &mut Frontier<usize>,
    edges: &[Edge<V>],
    incident: &HashMap<&V, Vec<usize>>,
    in_tree: &HashSet<V>,
    vertex: &V,
) {
    for &idx in incident.get(vertex).into_iter().flatten() {
        let edge = &edges[idx];
        let other = if edge.start == *vertex {
            &edge.end
        } else {
            &edge.start
        };
        if !in_tree.contains(other) {
            frontier.push(edge.weight, idx);
        }
    }
}
