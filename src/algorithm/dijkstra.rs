use log::{debug, trace};
use num_traits::Zero;
use std::fmt::Debug;
use std::ops::Add;

use crate::algorithm::trace::{NullObserver, ProgressObserver, StateView};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm with step-by-step state observation
///
/// Greedy label-setting over a binary min-heap without decrease-key:
/// an improved tentative distance is pushed as a fresh heap entry, and
/// entries for already settled vertices are dropped when popped. The
/// observer sees the distance table and visited set after initialization
/// and after every settlement, so a caller can replay the whole run.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest paths from `source`, reporting each state change
    /// to `observer`.
    ///
    /// All working state (heap, distance table, visited set, order) is
    /// created here and dropped on return; repeated calls share nothing.
    pub fn compute_with_observer<W, G>(
        &self,
        graph: &G,
        source: usize,
        observer: &mut dyn ProgressObserver<W>,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Copy + Ord + Zero + Add<Output = W> + Debug,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);

        distances[source] = Some(W::zero());

        // Worst case one push per relaxed edge plus the seed entry
        let mut heap = MinHeap::with_capacity(graph.edge_count() + 1);
        heap.push(source, W::zero());

        observer.on_state(StateView {
            distances: &distances,
            visited: &visited,
        });

        while let Some((u, dist_u)) = heap.pop() {
            if visited[u] {
                // Stale entry: u settled with a smaller distance earlier
                continue;
            }
            visited[u] = true;
            order.push(u);
            debug!("settled vertex {} at distance {:?}", u, dist_u);

            for (v, weight) in graph.outgoing_edges(u) {
                if visited[v] {
                    continue;
                }
                let new_dist = dist_u + weight;
                let improves = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };
                if improves {
                    trace!("relaxed edge {} -> {} to distance {:?}", u, v, new_dist);
                    distances[v] = Some(new_dist);
                    heap.push(v, new_dist);
                }
            }

            observer.on_state(StateView {
                distances: &distances,
                visited: &visited,
            });
        }

        // Vertices the heap never reached still take a slot in the
        // visitation order; their distances stay None.
        for v in 0..n {
            if !visited[v] {
                visited[v] = true;
                order.push(v);
                debug!("vertex {} unreachable from {}", v, source);
            }
        }

        observer.on_state(StateView {
            distances: &distances,
            visited: &visited,
        });

        Ok(ShortestPathResult {
            distances,
            order,
            source,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Copy + Ord + Zero + Add<Output = W> + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.compute_with_observer(graph, source, &mut NullObserver)
    }
}
