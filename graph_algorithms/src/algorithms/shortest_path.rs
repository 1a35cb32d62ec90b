// SPDX-License-Identifier: MIT OR Apache-2.0
//! Best-first shortest path search (A*) with pluggable heuristics.
//!
//! The frontier is ordered by `f = g + h`, where `g` is the cost travelled from
//! the start and `h` the heuristic estimate to the goal. Dijkstra is the same
//! search with `h = 0`.
//!
//! Edge weights must be non-negative. This is not checked; a negative weight is
//! logged and the result is unspecified.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::frontier::Frontier;
use crate::{GraphError, Result, Vertex, WeightedGraph};

/// Heuristic function type for A* pathfinding.
///
/// Takes the current vertex and the goal, returns an estimated remaining cost.
/// Must never overestimate for the returned path to be optimal.
pub type HeuristicFn<V> = Box<dyn Fn(&V, &V) -> f64 + Send + Sync>;

/// A path and its total weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedPath<V> {
    pub cost: f64,
    /// Vertices from start to goal inclusive.
    pub vertices: Vec<V>,
}

/// Whether the goal could be reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome<V> {
    Found(WeightedPath<V>),
    Unreachable,
}

/// Result of a shortest path search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<V> {
    pub outcome: PathOutcome<V>,
    /// Number of vertices finalized during the search.
    pub nodes_explored: usize,
}

impl<V> SearchResult<V> {
    #[must_use]
    pub const fn found(&self) -> bool {
        matches!(self.outcome, PathOutcome::Found(_))
    }

    #[must_use]
    pub const fn path(&self) -> Option<&WeightedPath<V>> {
        match &self.outcome {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable => None,
        }
    }

    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.path().map(|p| p.cost)
    }

    #[must_use]
    pub fn path_length(&self) -> Option<usize> {
        self.path().map(|p| p.vertices.len().saturating_sub(1))
    }
}

struct Candidate<V> {
    vertex: V,
    cost: f64,
    predecessor: Option<V>,
}

/// Find the cheapest path from `start` to `goal` guided by `heuristic`.
///
/// Time complexity: O((V + E) log V) with a consistent heuristic.
///
/// # Errors
///
/// Returns `GraphError::NotFound` if `start` or `goal` is not in the graph.
/// An unreachable goal is reported as [`PathOutcome::Unreachable`].
#[instrument(skip(graph, heuristic), fields(vertices = graph.vertex_count()))]
pub fn shortest_path<G, H>(
    graph: &G,
    start: &G::Vertex,
    goal: &G::Vertex,
    heuristic: H,
) -> Result<SearchResult<G::Vertex>>
where
    G: WeightedGraph,
    H: Fn(&G::Vertex, &G::Vertex) -> f64,
{
    for vertex in [start, goal] {
        if !graph.contains_vertex(vertex) {
            return Err(GraphError::vertex_not_found(vertex));
        }
    }

    let mut frontier = Frontier::new();
    let mut distances: HashMap<G::Vertex, f64> = HashMap::new();
    let mut predecessors: HashMap<G::Vertex, Option<G::Vertex>> = HashMap::new();
    let mut best_cost: HashMap<G::Vertex, f64> = HashMap::new();
    let mut warned_negative = false;

    best_cost.insert(start.clone(), 0.0);
    frontier.push(heuristic(start, goal), Candidate {
        vertex: start.clone(),
        cost: 0.0,
        predecessor: None,
    });

    while let Some((_, candidate)) = frontier.pop() {
        if distances.contains_key(&candidate.vertex) {
            continue;
        }

        let current = candidate.vertex;
        let g = candidate.cost;
        distances.insert(current.clone(), g);
        predecessors.insert(current.clone(), candidate.predecessor);

        if current == *goal {
            let vertices = reconstruct_path(&predecessors, goal);
            debug!(
                cost = g,
                hops = vertices.len() - 1,
                explored = distances.len(),
                remaining = frontier.len(),
                "goal reached"
            );
            return Ok(SearchResult {
                outcome: PathOutcome::Found(WeightedPath { cost: g, vertices }),
                nodes_explored: distances.len(),
            });
        }

        for edge in graph.edges_from(&current) {
            if distances.contains_key(&edge.end) {
                continue;
            }
            if edge.weight < 0.0 && !warned_negative {
                warn!(from = ?edge.start, to = ?edge.end, weight = edge.weight, "negative edge weight");
                warned_negative = true;
            }

            let tentative = g + edge.weight;
            let known = best_cost.get(&edge.end).copied().unwrap_or(f64::INFINITY);
            if tentative < known {
                best_cost.insert(edge.end.clone(), tentative);
                let h = heuristic(&edge.end, goal);
                frontier.push(tentative + h, Candidate {
                    vertex: edge.end,
                    cost: tentative,
                    predecessor: Some(current.clone()),
                });
            }
        }
    }

    debug!(explored = distances.len(), "goal unreachable");
    Ok(SearchResult {
        outcome: PathOutcome::Unreachable,
        nodes_explored: distances.len(),
    })
}

/// Uniform-cost search: [`shortest_path`] with a zero heuristic.
///
/// # Errors
///
/// Returns `GraphError::NotFound` if `start` or `goal` is not in the graph.
pub fn dijkstra<G: WeightedGraph>(
    graph: &G,
    start: &G::Vertex,
    goal: &G::Vertex,
) -> Result<SearchResult<G::Vertex>> {
    shortest_path(graph, start, goal, |_, _| 0.0)
}

/// Straight-line distance between vertex positions.
///
/// Vertices without a position estimate 0, which keeps the heuristic admissible.
pub fn euclidean_heuristic<V>(positions: HashMap<V, (f64, f64)>) -> HeuristicFn<V>
where
    V: Vertex + Send + Sync + 'static,
{
    Box::new(move |current, target| {
        let (Some(&(cx, cy)), Some(&(tx, ty))) = (positions.get(current), positions.get(target))
        else {
            return 0.0;
        };
        (tx - cx).hypot(ty - cy)
    })
}

/// Grid distance between vertex positions.
///
/// Vertices without a position estimate 0.
pub fn manhattan_heuristic<V>(positions: HashMap<V, (f64, f64)>) -> HeuristicFn<V>
where
    V: Vertex + Send + Sync + 'static,
{
    Box::new(move |current, target| {
        let (Some(&(cx, cy)), Some(&(tx, ty))) = (positions.get(current), positions.get(target))
        else {
            return 0.0;
        };
        (tx - cx).abs() + (ty - cy).abs()
    })
}

fn reconstruct_path<V: Vertex>(predecessors: &HashMap<V, Option<V>>, goal: &V) -> Vec<V> {
    let mut vertices = vec![goal.clone()];
    let mut current = goal;
    while let Some(Some(parent)) = predecessors.get(current) {
        vertices.push(parent.clone());
        current = parent;
    }
    vertices.reverse();
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;

    fn unit_triangle() -> Graph<u32> {
        Graph::from_edges(false, [(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)])
    }

    #[test]
    fn test_dijkstra_triangle() {
        let result = dijkstra(&unit_triangle(), &0, &2).unwrap();
        let path = result.path().unwrap();
        assert!((path.cost - 1.0).abs() < f64::EPSILON);
        assert_eq!(path.vertices, vec![0, 2]);
        assert_eq!(result.path_length(), Some(1));
    }

    #[test]
    fn test_same_start_and_goal() {
        let result = dijkstra(&unit_triangle(), &1, &1).unwrap();
        assert_eq!(result.cost(), Some(0.0));
        assert_eq!(result.path().unwrap().vertices, vec![1]);
        assert_eq!(result.nodes_explored, 1);
    }

    #[test]
    fn test_unreachable_is_not_an_error() {
        let graph = Graph::with_vertices(false, ["0", "1"]);
        let result = dijkstra(&graph, &"0", &"1").unwrap();
        assert_eq!(result.outcome, PathOutcome::Unreachable);
        assert!(!result.found());
        assert_eq!(result.cost(), None);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let graph = Graph::from_edges(true, [("a", "b", 1.0)]);
        assert!(dijkstra(&graph, &"a", &"b").unwrap().found());
        assert!(!dijkstra(&graph, &"b", &"a").unwrap().found());
    }

    #[test]
    fn test_missing_vertices() {
        let graph = unit_triangle();
        assert!(matches!(dijkstra(&graph, &9, &0), Err(GraphError::NotFound(_))));
        assert!(matches!(dijkstra(&graph, &0, &9), Err(GraphError::NotFound(_))));
    }

    #[test]
    fn test_prefers_cheaper_longer_route() {
        let graph = Graph::from_edges(true, [
            ("s", "t", 10.0),
            ("s", "a", 1.0),
            ("a", "b", 2.0),
            ("b", "t", 3.0),
        ]);
        let result = dijkstra(&graph, &"s", &"t").unwrap();
        let path = result.path().unwrap();
        assert!((path.cost - 6.0).abs() < f64::EPSILON);
        assert_eq!(path.vertices, vec!["s", "a", "b", "t"]);
    }

    #[test]
    fn test_equal_cost_ties_follow_insertion_order() {
        // Two routes of cost 2; the one discovered first wins.
        let graph = Graph::from_edges(true, [
            ("s", "a", 1.0),
            ("s", "b", 1.0),
            ("a", "t", 1.0),
            ("b", "t", 1.0),
        ]);
        for _ in 0..5 {
            let result = dijkstra(&graph, &"s", &"t").unwrap();
            assert_eq!(result.path().unwrap().vertices, vec!["s", "a", "t"]);
        }
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = Graph::from_edges(true, [(0, 1, 0.0), (1, 2, 0.0)]);
        let result = dijkstra(&graph, &0, &2).unwrap();
        assert_eq!(result.cost(), Some(0.0));
        assert_eq!(result.path().unwrap().vertices, vec![0, 1, 2]);
    }

    fn grid(width: i32, height: i32) -> (Graph<(i32, i32)>, HashMap<(i32, i32), (f64, f64)>) {
        let mut graph = Graph::undirected();
        let mut positions = HashMap::new();
        for x in 0..width {
            for y in 0..height {
                positions.insert((x, y), (f64::from(x), f64::from(y)));
                if x + 1 < width {
                    graph.add_edge((x, y), (x + 1, y), 1.0);
                }
                if y + 1 < height {
                    graph.add_edge((x, y), (x, y + 1), 1.0);
                }
            }
        }
        (graph, positions)
    }

    #[test]
    fn test_astar_manhattan_matches_dijkstra() {
        let (graph, positions) = grid(8, 8);
        let plain = dijkstra(&graph, &(0, 0), &(7, 7)).unwrap();
        let guided =
            shortest_path(&graph, &(0, 0), &(7, 7), manhattan_heuristic(positions)).unwrap();

        assert_eq!(plain.cost(), Some(14.0));
        assert_eq!(guided.cost(), Some(14.0));
        assert!(guided.nodes_explored <= plain.nodes_explored);
    }

    #[test]
    fn test_astar_euclidean_matches_dijkstra() {
        let (graph, positions) = grid(6, 4);
        let plain = dijkstra(&graph, &(0, 3), &(5, 0)).unwrap();
        let guided =
            shortest_path(&graph, &(0, 3), &(5, 0), euclidean_heuristic(positions)).unwrap();
        assert_eq!(plain.cost(), guided.cost());
        assert!(guided.nodes_explored <= plain.nodes_explored);
    }

    #[test]
    fn test_heuristic_without_positions_is_zero() {
        let h = euclidean_heuristic::<u32>(HashMap::new());
        assert!(h(&1, &2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inadmissible_heuristic_still_terminates() {
        let graph = Graph::from_edges(true, [
            ("s", "t", 10.0),
            ("s", "a", 1.0),
            ("a", "t", 1.0),
        ]);
        let result = shortest_path(&graph, &"s", &"t", |v: &&str, _: &&str| {
            if *v == "a" { 100.0 } else { 0.0 }
        })
        .unwrap();
        // Misled into the direct edge, but still a valid path.
        assert_eq!(result.cost(), Some(10.0));
    }

    #[test]
    fn test_serialize_outcome() {
        let result = dijkstra(&unit_triangle(), &0, &1).unwrap();
        let json = serde_json::to_value(&result.outcome).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["vertices"], serde_json::json!([0, 1]));

        let json = serde_json::to_value(PathOutcome::<u32>::Unreachable).unwrap();
        assert_eq!(json["status"], "unreachable");
    }
}
