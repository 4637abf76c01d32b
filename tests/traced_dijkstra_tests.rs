use ordered_float::OrderedFloat;
use traced_sssp::graph::generators::{random_geometric, random_sparse};
use traced_sssp::graph::Graph;
use traced_sssp::{
    AdjacencyGraph, Dijkstra, Error, ShortestPathAlgorithm, TraceRecorder,
};

/// No-edge marker for the dense matrix helper
const X: u32 = u32::MAX;

// The classic 10-vertex undirected teaching graph
fn ten_vertex_graph() -> AdjacencyGraph<u32> {
    let weights: Vec<Vec<u32>> = vec![
        vec![0, 3, X, X, X, 11, 12, X, X, X],
        vec![3, 0, 5, 4, 1, 7, 8, X, X, X],
        vec![X, 5, 0, 2, X, X, 6, 5, X, X],
        vec![X, 4, 2, 0, 13, X, X, X, X, 16],
        vec![X, 1, X, 13, 0, 9, X, X, 18, 17],
        vec![11, 7, X, X, 9, 0, X, X, X, X],
        vec![12, 8, 6, X, X, X, 0, 13, X, X],
        vec![X, X, 5, X, X, X, 13, 0, X, 15],
        vec![X, X, X, X, 18, X, X, X, 0, 10],
        vec![X, X, X, 16, 17, X, X, 15, 10, 0],
    ];
    AdjacencyGraph::from_weight_matrix(&weights, X).unwrap()
}

// Reference distances by exhaustive relaxation (Bellman-Ford)
fn brute_force_distances(graph: &AdjacencyGraph<u32>, source: usize) -> Vec<Option<u64>> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    dist[source] = Some(0);
    for _ in 0..n {
        for u in 0..n {
            if let Some(du) = dist[u] {
                for (v, w) in graph.outgoing_edges(u) {
                    let candidate = du + w as u64;
                    if dist[v].map_or(true, |dv| candidate < dv) {
                        dist[v] = Some(candidate);
                    }
                }
            }
        }
    }
    dist
}

#[test]
fn test_ten_vertex_graph_distances() {
    let graph = ten_vertex_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    let expected: Vec<Option<u32>> = [0, 3, 8, 7, 4, 10, 11, 13, 22, 21]
        .into_iter()
        .map(Some)
        .collect();
    assert_eq!(result.distances, expected);
    assert_eq!(result.source, 0);
}

#[test]
fn test_ten_vertex_graph_visitation_order() {
    let graph = ten_vertex_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    // vertices settle by increasing distance; no ties in this graph
    assert_eq!(result.order, vec![0, 1, 4, 3, 2, 5, 6, 7, 9, 8]);
}

#[test]
fn test_order_is_permutation_on_random_graphs() {
    for seed in 0..5 {
        let graph = random_sparse(30, 60, 20, seed);
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

        let mut seen = result.order.clone();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..graph.vertex_count()).collect();
        assert_eq!(seen, expected, "order must be a permutation (seed {})", seed);
    }
}

#[test]
fn test_matches_brute_force_on_random_graphs() {
    for seed in 0..10 {
        let graph = random_sparse(12, 30, 9, seed);
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        let reference = brute_force_distances(&graph, 0);

        for v in 0..graph.vertex_count() {
            assert_eq!(
                result.distances[v].map(u64::from),
                reference[v],
                "distance to {} disagrees with brute force (seed {})",
                v,
                seed
            );
        }
    }
}

#[test]
fn test_unreachable_vertices_stay_none_but_appear_in_order() {
    let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges(5, &[(0, 1, 2)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(
        result.distances,
        vec![Some(0), Some(2), None, None, None]
    );
    // unreached vertices are appended in ascending index order
    assert_eq!(result.order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_single_vertex_graph() {
    let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges(1, &[]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(0)]);
    assert_eq!(result.order, vec![0]);
}

#[test]
fn test_isolated_source() {
    let graph: AdjacencyGraph<u32> =
        AdjacencyGraph::from_edges(4, &[(1, 2, 1), (2, 3, 1)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(0), None, None, None]);
    assert_eq!(result.order, vec![0, 1, 2, 3]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = ten_vertex_graph();
    let dijkstra = Dijkstra::new();
    let first = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    let second = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(first, second);

    let random = random_sparse(25, 80, 50, 7);
    let first = dijkstra.compute_shortest_paths(&random, 3).unwrap();
    let second = dijkstra.compute_shortest_paths(&random, 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_trace_has_one_step_per_settlement_plus_bounds() {
    let graph = ten_vertex_graph();
    let mut recorder = TraceRecorder::new();
    let result = Dijkstra::new()
        .compute_with_observer(&graph, 0, &mut recorder)
        .unwrap();
    let steps = recorder.steps();

    // initial state + one per settlement + final state
    assert_eq!(steps.len(), result.order.len() + 2);

    let first = &steps[0];
    assert_eq!(first.distances[0], Some(0));
    assert!(first.distances[1..].iter().all(Option::is_none));
    assert!(first.visited.iter().all(|&v| !v));

    let last = steps.last().unwrap();
    assert!(last.visited.iter().all(|&v| v));
    assert_eq!(last.distances, result.distances);
}

#[test]
fn test_trace_distances_never_increase_and_freeze_on_visit() {
    let graph = ten_vertex_graph();
    let mut recorder = TraceRecorder::new();
    Dijkstra::new()
        .compute_with_observer(&graph, 0, &mut recorder)
        .unwrap();
    let steps = recorder.steps();

    for v in 0..graph.vertex_count() {
        for pair in steps.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            match (before.distances[v], after.distances[v]) {
                (Some(old), Some(new)) => assert!(new <= old, "distance of {} increased", v),
                (Some(_), None) => panic!("distance of {} was forgotten", v),
                _ => {}
            }
            if before.visited[v] {
                assert!(after.visited[v], "visited flag of {} was reset", v);
                assert_eq!(
                    before.distances[v], after.distances[v],
                    "distance of {} changed after settlement",
                    v
                );
            }
        }
    }
}

#[test]
fn test_out_of_range_source_is_rejected() {
    let graph = ten_vertex_graph();
    let err = Dijkstra::new()
        .compute_shortest_paths(&graph, 10)
        .unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(10)));
}

#[test]
fn test_construction_rejects_out_of_range_edge() {
    let err = AdjacencyGraph::<u32>::from_edges(3, &[(0, 5, 1)]).unwrap_err();
    assert!(matches!(err, Error::InvalidEdge(0, 5)));
}

#[test]
fn test_construction_rejects_negative_weight() {
    let err = AdjacencyGraph::<i32>::from_edges(2, &[(0, 1, -4)]).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight(_)));
}

#[test]
fn test_construction_rejects_ragged_matrix() {
    let matrix: Vec<Vec<u32>> = vec![vec![0, 1], vec![1, 0, 3]];
    let err = AdjacencyGraph::from_weight_matrix(&matrix, X).unwrap_err();
    assert!(matches!(err, Error::MatrixNotSquare { row: 1, .. }));
}

#[test]
fn test_float_weights() {
    let graph = AdjacencyGraph::from_edges(
        3,
        &[
            (0, 1, OrderedFloat(1.5)),
            (1, 2, OrderedFloat(2.25)),
            (0, 2, OrderedFloat(5.0)),
        ],
    )
    .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[2], Some(OrderedFloat(3.75)));
    assert_eq!(result.order, vec![0, 1, 2]);
}

#[test]
fn test_geometric_graph_smoke() {
    let graph = random_geometric(20, 0.5, 99);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    let mut seen = result.order.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..20).collect::<Vec<_>>());
    assert_eq!(result.distances[0], Some(OrderedFloat(0.0)));
}
