use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::Zero;
use std::fmt::Debug;

/// A directed graph stored as per-vertex adjacency lists
///
/// Vertices are the dense indices `0..n`. The graph is immutable after
/// construction; both constructors validate every edge up front so the
/// shortest path run can never encounter an out-of-range endpoint or a
/// negative weight.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Outgoing edges for each vertex: index -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Builds a graph with `vertices` vertices from `(from, to, weight)`
    /// triples.
    ///
    /// Rejects edges whose endpoints fall outside `0..vertices` and edges
    /// with negative weights.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut outgoing_edges = vec![Vec::new(); vertices];
        for &(from, to, weight) in edges {
            if from >= vertices || to >= vertices {
                return Err(Error::InvalidEdge(from, to));
            }
            if weight < W::zero() {
                return Err(Error::NegativeWeight(format!("{:?}", weight)));
            }
            outgoing_edges[from].push((to, weight));
        }
        Ok(AdjacencyGraph { outgoing_edges })
    }

    /// Builds a graph from a dense weight matrix.
    ///
    /// `matrix[i][j]` is the weight of the edge `i -> j`; cells equal to
    /// `no_edge` and the zero self-weights on the diagonal produce no edge.
    /// The matrix must be square and free of negative weights.
    pub fn from_weight_matrix(matrix: &[Vec<W>], no_edge: W) -> Result<Self> {
        let vertices = matrix.len();
        let mut outgoing_edges = vec![Vec::new(); vertices];
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != vertices {
                return Err(Error::MatrixNotSquare {
                    row: i,
                    expected: vertices,
                    actual: row.len(),
                });
            }
            for (j, &weight) in row.iter().enumerate() {
                if weight == no_edge || (i == j && weight == W::zero()) {
                    continue;
                }
                if weight < W::zero() {
                    return Err(Error::NegativeWeight(format!("{:?}", weight)));
                }
                outgoing_edges[i].push((j, weight));
            }
        }
        Ok(AdjacencyGraph { outgoing_edges })
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Copy + Ord + Zero + Debug,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing_edges.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges.get(from).and_then(|edges| {
            edges
                .iter()
                .find(|(target, _)| *target == to)
                .map(|(_, weight)| *weight)
        })
    }
}
