// SPDX-License-Identifier: MIT OR Apache-2.0
use super::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, vertices: u32, edges: usize, directed: bool) -> Graph<u32> {
    let mut graph = Graph::with_vertices(directed, 0..vertices);
    for _ in 0..edges {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        // Small integer weights keep sums exact and force ties.
        let w = f64::from(rng.gen_range(1..6u32));
        graph.add_edge(a, b, w);
    }
    graph
}

/// Components by repeated relaxation, independent of union-find.
fn component_count(graph: &Graph<u32>) -> usize {
    let vertices = graph.vertices();
    let mut label: std::collections::HashMap<u32, u32> =
        vertices.iter().map(|&v| (v, v)).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for e in graph.edges() {
            let m = label[&e.start].min(label[&e.end]);
            for v in [e.start, e.end] {
                if label[&v] != m {
                    label.insert(v, m);
                    changed = true;
                }
            }
        }
    }
    let mut roots: Vec<u32> = label.into_values().collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

/// Minimum spanning forest weight by trying every edge subset of size n - k.
fn brute_force_forest_weight(graph: &Graph<u32>) -> f64 {
    let edges = graph.edges();
    let n = graph.vertex_count();
    let want = n - component_count(graph);
    let mut best = f64::INFINITY;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != want {
            continue;
        }
        let chosen: Vec<&Edge<u32>> = edges
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, e)| e)
            .collect();
        let mut full = Graph::with_vertices(false, graph.vertices());
        for e in &chosen {
            full.add_edge(e.start, e.end, e.weight);
        }
        // n - k edges leaving k components means no cycle: a spanning forest.
        if component_count(&full) == n - want {
            best = best.min(chosen.iter().map(|e| e.weight).sum());
        }
    }
    best
}

#[test]
fn mst_triangle_picks_two_lightest_edges() {
    let graph = Graph::from_edges(false, [(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0)]);
    let result = minimum_spanning_tree(&graph, MstAlgorithm::Kruskal);
    let weights: Vec<f64> = result.edges.iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![1.0, 2.0]);
    assert_eq!(result.total_weight, 3.0);
}

#[test]
fn mst_matches_brute_force_on_small_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let graph = random_graph(&mut rng, 5, 8, false);
        let expected = brute_force_forest_weight(&graph);
        for algo in MstAlgorithm::ALL {
            let result = minimum_spanning_tree(&graph, algo);
            assert_eq!(result.total_weight, expected, "{algo} on {:?}", graph.edges());
        }
    }
}

#[test]
fn mst_forest_size_is_n_minus_components() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let graph = random_graph(&mut rng, 12, 10, false);
        let n = graph.vertex_count();
        let k = component_count(&graph);
        for algo in MstAlgorithm::ALL {
            let result = minimum_spanning_tree(&graph, algo);
            assert_eq!(result.edge_count(), n - k);
            assert_eq!(result.tree_count, k);
        }
    }
}

#[test]
fn kruskal_and_prim_agree() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..30 {
        let graph = random_graph(&mut rng, 20, 45, false);
        let kruskal = minimum_spanning_tree(&graph, MstAlgorithm::Kruskal);
        let prim = minimum_spanning_tree(&graph, MstAlgorithm::Prim);
        assert_eq!(kruskal.edge_count(), prim.edge_count());
        assert_eq!(kruskal.total_weight, prim.total_weight);
        assert_eq!(kruskal.tree_count, prim.tree_count);
    }
}

#[test]
fn kruskal_emits_edges_in_ascending_weight() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = random_graph(&mut rng, 30, 90, false);
    let result = minimum_spanning_tree(&graph, MstAlgorithm::Kruskal);
    assert!(result.edges.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn dijkstra_agrees_with_floyd_warshall() {
    let mut rng = StdRng::seed_from_u64(19);
    for directed in [false, true] {
        let graph = random_graph(&mut rng, 15, 30, directed);
        let matrix = all_shortest_paths(&graph);
        for a in 0..15 {
            for b in 0..15 {
                let expected = matrix.distance(&a, &b).unwrap();
                let search = dijkstra(&graph, &a, &b).unwrap();
                match search.outcome {
                    PathOutcome::Found(path) => {
                        assert_eq!(path.cost, expected, "{a} -> {b}");
                        assert_eq!(path.vertices.first(), Some(&a));
                        assert_eq!(path.vertices.last(), Some(&b));
                        let summed: f64 = path
                            .vertices
                            .windows(2)
                            .map(|hop| matrix.distance(&hop[0], &hop[1]).unwrap())
                            .sum();
                        assert!(summed <= path.cost);
                    },
                    PathOutcome::Unreachable => assert!(expected.is_infinite(), "{a} -> {b}"),
                }
            }
        }
    }
}

#[test]
fn floyd_warshall_self_distance_is_zero() {
    let mut rng = StdRng::seed_from_u64(23);
    let graph = random_graph(&mut rng, 10, 25, true);
    let matrix = all_shortest_paths(&graph);
    for v in graph.vertices() {
        assert_eq!(matrix.distance(&v, &v), Some(0.0));
    }
}

#[test]
fn diameter_of_triangle_and_empty_pair() {
    let triangle = Graph::from_edges(false, [("0", "1", 1.0), ("1", "2", 1.0), ("2", "0", 1.0)]);
    assert_eq!(diameter(&triangle), 1.0);
    assert_eq!(diameter(&Graph::with_vertices(false, ["0", "1"])), f64::INFINITY);
}

#[test]
fn diameter_is_largest_finite_entry_when_connected() {
    let graph = Graph::from_edges(false, [(0, 1, 3.0), (1, 2, 3.0), (0, 2, 5.0), (2, 3, 1.0)]);
    let matrix = all_shortest_paths(&graph);
    let largest = matrix.values().fold(0.0, f64::max);
    assert_eq!(diameter(&graph), largest);
    assert_eq!(largest, 6.0);
}

#[test]
fn algorithms_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(29);
    let graph = random_graph(&mut rng, 12, 30, false);

    for algo in MstAlgorithm::ALL {
        assert_eq!(
            minimum_spanning_tree(&graph, algo),
            minimum_spanning_tree(&graph, algo)
        );
    }
    assert_eq!(dijkstra(&graph, &0, &11), dijkstra(&graph, &0, &11));
    assert_eq!(all_shortest_paths(&graph), all_shortest_paths(&graph));
    assert_eq!(diameter(&graph).to_bits(), diameter(&graph).to_bits());
}

#[test]
fn algorithms_do_not_modify_the_graph() {
    let graph = Graph::from_edges(false, [(0, 1, 2.0), (1, 2, 3.0)]);
    let before = (graph.vertices(), graph.edges(), graph.adjacency_matrix());

    let _ = minimum_spanning_tree(&graph, MstAlgorithm::Prim);
    let _ = dijkstra(&graph, &0, &2).unwrap();
    let _ = diameter(&graph);

    assert_eq!(before, (graph.vertices(), graph.edges(), graph.adjacency_matrix()));
}

#[test]
fn parsed_edge_list_feeds_every_algorithm() {
    let input = "\
# weighted square with a diagonal
a b 1
b c 1
c d 1
d a 1
a c 5
e
";
    let graph = Graph::parse_edge_list(input, &GraphConfig::default()).unwrap();

    let mst = minimum_spanning_tree(&graph, GraphConfig::default().mst_algorithm);
    assert_eq!(mst.edge_count(), 3);
    assert_eq!(mst.tree_count, 2);

    let a = "a".to_string();
    let c = "c".to_string();
    let e = "e".to_string();
    assert_eq!(dijkstra(&graph, &a, &c).unwrap().cost(), Some(2.0));
    assert_eq!(
        dijkstra(&graph, &a, &e).unwrap().outcome,
        PathOutcome::Unreachable
    );
    assert_eq!(diameter(&graph), f64::INFINITY);
}

#[test]
fn results_serialize_to_json() {
    let graph = Graph::from_edges(false, [("x", "y", 1.5)]);
    let mst = minimum_spanning_tree(&graph, MstAlgorithm::Kruskal);
    let json = serde_json::to_value(&mst).unwrap();
    assert_eq!(json["total_weight"], 1.5);
    assert_eq!(json["edges"][0]["start"], "x");

    let disconnected = Graph::with_vertices(false, ["p", "q"]);
    let matrix = all_shortest_paths(&disconnected);
    let json = serde_json::to_value(&matrix).unwrap();
    assert!(json["distances"][0][1].is_null());
}
