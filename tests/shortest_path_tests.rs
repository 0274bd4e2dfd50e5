use std::collections::HashMap;

use ordered_float::OrderedFloat;
use weighted_sssp::graph::generators::{generate_grid, generate_random};
use weighted_sssp::graph::{Graph, MutableGraph, WeightedGraph};
use weighted_sssp::{reconstruct_path, shortest_paths, Dijkstra, Error, ShortestPathAlgorithm};

type Weight = OrderedFloat<f64>;

fn build<V>(directed: bool, edges: &[(V, V, f64)]) -> WeightedGraph<V, Weight>
where
    V: Eq + std::hash::Hash + Clone + std::fmt::Debug,
{
    let mut graph = WeightedGraph::new(directed);
    for (u, v, w) in edges {
        graph.add_edge(u.clone(), v.clone(), OrderedFloat(*w)).unwrap();
    }
    graph
}

fn letters_graph() -> WeightedGraph<char, Weight> {
    build(
        false,
        &[
            ('A', 'B', 4.0),
            ('A', 'C', 2.0),
            ('B', 'C', 1.0),
            ('B', 'D', 5.0),
            ('C', 'D', 8.0),
            ('C', 'E', 10.0),
            ('D', 'E', 2.0),
        ],
    )
}

fn numbered_graph() -> WeightedGraph<u32, Weight> {
    build(
        true,
        &[
            (0, 1, 10.0),
            (0, 2, 3.0),
            (1, 2, 1.0),
            (1, 3, 2.0),
            (2, 1, 4.0),
            (2, 3, 8.0),
            (2, 4, 2.0),
            (3, 4, 7.0),
            (4, 3, 9.0),
        ],
    )
}

// Check the standard optimality conditions of a finished run
fn assert_shortest_path_invariants<V>(graph: &WeightedGraph<V, Weight>, source: &V)
where
    V: Eq + std::hash::Hash + Clone + std::fmt::Debug,
{
    let result = Dijkstra::new().compute_shortest_paths(graph, source).unwrap();
    assert_eq!(result.distances[source], OrderedFloat(0.0));
    assert_eq!(result.distances.len(), graph.vertex_count());

    for u in graph.vertices() {
        let du = result.distances[u];
        for (v, w) in graph.outgoing_edges(u) {
            assert!(result.distances[v] <= du + w, "edge {:?}->{:?} can still relax", u, v);
        }

        if let Some(pred) = result.predecessor(u) {
            let w = graph.get_edge_weight(pred, u).expect("predecessor edge exists");
            assert_eq!(du, result.distances[pred] + w);
        }

        let path = result.path_to(u);
        if result.is_reachable(u) {
            assert_eq!(path.first(), Some(source));
            assert_eq!(path.last(), Some(u));
            for pair in path.windows(2) {
                assert!(graph.has_edge(&pair[0], &pair[1]));
            }
        } else {
            assert!(path.is_empty());
            assert!(result.predecessor(u).is_none());
        }
    }
}

#[test]
fn test_undirected_letters_graph() {
    let graph = letters_graph();
    let (distances, predecessors) = shortest_paths(&graph, &'A').unwrap();

    assert_eq!(distances[&'A'], OrderedFloat(0.0));
    assert_eq!(distances[&'B'], OrderedFloat(3.0));
    assert_eq!(distances[&'C'], OrderedFloat(2.0));
    assert_eq!(distances[&'D'], OrderedFloat(8.0));
    assert_eq!(distances[&'E'], OrderedFloat(10.0));

    assert_eq!(reconstruct_path(&predecessors, &'A', &'E'), vec!['A', 'C', 'B', 'D', 'E']);
    assert_eq!(predecessors[&'A'], None);
}

#[test]
fn test_directed_numbered_graph() {
    let graph = numbered_graph();
    let (distances, predecessors) = shortest_paths(&graph, &0).unwrap();

    assert_eq!(distances[&4], OrderedFloat(5.0));
    assert_eq!(distances[&1], OrderedFloat(7.0));
    assert_eq!(distances[&3], OrderedFloat(9.0));
    assert_eq!(reconstruct_path(&predecessors, &0, &4), vec![0, 2, 4]);
    assert_eq!(reconstruct_path(&predecessors, &0, &3), vec![0, 2, 1, 3]);
}

#[test]
fn test_self_loop_source() {
    let graph = build(false, &[('X', 'X', 0.0)]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, &'X').unwrap();

    assert_eq!(result.distance(&'X'), Some(OrderedFloat(0.0)));
    assert_eq!(result.predecessor(&'X'), None);
    assert_eq!(result.path_to(&'X'), vec!['X']);
}

#[test]
fn test_disconnected_graph() {
    let graph = build(false, &[("A", "B", 1.0), ("C", "D", 2.0)]);
    let (distances, predecessors) = shortest_paths(&graph, &"A").unwrap();

    assert_eq!(distances[&"B"], OrderedFloat(1.0));
    assert!(distances[&"C"].is_infinite());
    assert!(distances[&"D"].is_infinite());
    assert_eq!(predecessors[&"C"], None);
    assert!(reconstruct_path(&predecessors, &"A", &"C").is_empty());
}

#[test]
fn test_unknown_source() {
    let graph = letters_graph();
    let err = shortest_paths(&graph, &'Z').unwrap_err();
    assert_eq!(err, Error::VertexNotFound("'Z'".to_string()));
}

#[test]
fn test_negative_weight_leaves_graph_unchanged() {
    let mut graph = letters_graph();
    let edges_before = graph.edge_count();

    assert!(matches!(
        graph.add_edge('A', 'B', OrderedFloat(-1.0)),
        Err(Error::InvalidWeight(w)) if w == -1.0
    ));
    assert_eq!(graph.edge_count(), edges_before);
    assert_eq!(graph.get_edge_weight(&'A', &'B'), Some(OrderedFloat(4.0)));
}

#[test]
fn test_multi_edge_cheapest_wins() {
    let graph = build(true, &[(1, 2, 9.0), (1, 2, 3.0), (2, 3, 1.0), (1, 3, 5.0)]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, &1).unwrap();

    assert_eq!(result.distances[&2], OrderedFloat(3.0));
    assert_eq!(result.distances[&3], OrderedFloat(4.0));
    assert_eq!(result.path_to(&3), vec![1, 2, 3]);
    assert_shortest_path_invariants(&graph, &1);
}

#[test]
fn test_stale_entries_are_discarded() {
    // Vertex 2 is queued at 10 first, then improved to 2 via vertex 1
    let graph = build(true, &[(0, 2, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();

    assert_eq!(result.distances[&3], OrderedFloat(3.0));
    assert_eq!(result.stats.finalized, 4);
    assert_eq!(result.stats.stale_pops, 1);
    assert_eq!(result.stats.pops, result.stats.finalized + result.stats.stale_pops);
    assert_eq!(result.stats.relaxations, 4);
}

#[test]
fn test_isolated_vertex_is_unreachable() {
    let mut graph = build(true, &[(0u32, 1u32, 1.0)]);
    graph.add_vertex(7);
    let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();

    assert!(!result.is_reachable(&7));
    assert!(result.path_to(&7).is_empty());

    // A run from the isolated vertex itself finalizes only that vertex
    let lonely = Dijkstra::new().compute_shortest_paths(&graph, &7).unwrap();
    assert_eq!(lonely.distance(&7), Some(OrderedFloat(0.0)));
    assert_eq!(lonely.stats.finalized, 1);
}

#[test]
fn test_string_vertices() {
    let mut graph: WeightedGraph<String, f64> = WeightedGraph::directed();
    graph.add_edge("home".to_string(), "work".to_string(), 12.0).unwrap();
    graph.add_edge("home".to_string(), "gym".to_string(), 3.0).unwrap();
    graph.add_edge("gym".to_string(), "work".to_string(), 4.0).unwrap();

    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &"home".to_string())
        .unwrap();
    assert_eq!(result.distance(&"work".to_string()), Some(7.0));
    assert_eq!(
        result.path_to(&"work".to_string()),
        vec!["home".to_string(), "gym".to_string(), "work".to_string()]
    );
}

#[test]
fn test_shortest_path_between() {
    let graph = numbered_graph();
    let dijkstra = Dijkstra::new();

    let (distance, path) = dijkstra.shortest_path_between(&graph, &0, &3).unwrap().unwrap();
    assert_eq!(distance, OrderedFloat(9.0));
    assert_eq!(path, vec![0, 2, 1, 3]);

    // Nothing leaves vertex 4 except towards 3
    assert_eq!(dijkstra.shortest_path_between(&graph, &4, &0).unwrap(), None);
    assert_eq!(
        dijkstra.shortest_path_between(&graph, &0, &42).unwrap_err(),
        Error::VertexNotFound("42".to_string())
    );
}

#[test]
fn test_get_path_matches_reconstruct_path() {
    let graph = letters_graph();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &'B').unwrap();

    let path = <Dijkstra as ShortestPathAlgorithm<char, Weight, WeightedGraph<char, Weight>>>::get_path(
        &dijkstra, &result, &'E',
    );
    assert_eq!(path, reconstruct_path(&result.predecessors, &'B', &'E'));
    assert_eq!(path, vec!['B', 'D', 'E']);
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<char, Weight, WeightedGraph<char, Weight>>>::name(&dijkstra),
        "Dijkstra"
    );
}

#[test]
fn test_malformed_predecessor_chain_gives_empty_path() {
    let mut predecessors: HashMap<u32, Option<u32>> = HashMap::new();
    predecessors.insert(0, None);
    predecessors.insert(1, Some(2));
    predecessors.insert(2, Some(1));
    predecessors.insert(3, Some(4));

    assert!(reconstruct_path(&predecessors, &0, &1).is_empty());
    assert!(reconstruct_path(&predecessors, &0, &3).is_empty());
    assert_eq!(reconstruct_path(&predecessors, &0, &0), vec![0]);
}

#[test]
fn test_grid_distances_are_manhattan() {
    let graph = generate_grid(6, 5).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();

    for y in 0..5 {
        for x in 0..6 {
            assert_eq!(result.distances[&(y * 6 + x)], OrderedFloat((x + y) as f64));
        }
    }
    assert_eq!(result.path_to(&29).len(), 10);
}

#[test]
fn test_invariants_on_random_graphs() {
    for seed in 0..8 {
        let directed = seed % 2 == 0;
        let graph = generate_random(60, 2.5, directed, seed).unwrap();
        for source in [0, 17, 59] {
            assert_shortest_path_invariants(&graph, &source);
        }
    }
    assert_shortest_path_invariants(&letters_graph(), &'D');
    assert_shortest_path_invariants(&numbered_graph(), &2);
}
