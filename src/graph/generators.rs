use crate::graph::AdjacencyGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random sparse directed graph with integer weights.
///
/// Roughly `edges` edges are sampled uniformly; self-loops are skipped, so
/// the actual count can be slightly lower. Weights lie in `1..=max_weight`.
/// The same seed always yields the same graph.
pub fn random_sparse(n: usize, edges: usize, max_weight: u32, seed: u64) -> AdjacencyGraph<u32> {
    assert!(n > 0, "graph must have at least one vertex");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut triples = Vec::with_capacity(edges);
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            triples.push((u, v, weight));
        }
    }

    AdjacencyGraph::from_edges(n, &triples).expect("sampled edges are in range and non-negative")
}

/// Generates a random geometric graph: `n` points in the unit square,
/// connected in both directions when within `radius`, weighted by their
/// Euclidean distance.
pub fn random_geometric(n: usize, radius: f64, seed: u64) -> AdjacencyGraph<OrderedFloat<f64>> {
    assert!(n > 0, "graph must have at least one vertex");
    let mut rng = StdRng::seed_from_u64(seed);

    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    let mut triples = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                let dist = f64::sqrt(dx * dx + dy * dy);
                if dist <= radius {
                    triples.push((i, j, OrderedFloat(dist)));
                }
            }
        }
    }

    AdjacencyGraph::from_edges(n, &triples).expect("sampled edges are in range and non-negative")
}
