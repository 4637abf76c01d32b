use crate::graph::Graph;
use crate::Result;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Result of a shortest path computation
///
/// `distances[v]` is `None` for vertices unreachable from the source, which
/// sidesteps any numeric "infinity" sentinel. `order` lists every vertex
/// exactly once, in the order each was settled; unreachable vertices come
/// last, in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Vertices in the order they were settled (a permutation of 0..n)
    pub order: Vec<usize>,

    /// Source vertex ID
    pub source: usize,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Copy + Ord + Zero + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
