//! Traced SSSP - Step-Traced Single-Source Shortest Paths
//!
//! This library computes single-source shortest paths over small, static,
//! weighted directed graphs with a priority-queue-driven relaxation loop,
//! and exposes the algorithm's internal state (tentative distances, visited
//! set, visitation order) after every settlement so a caller can inspect or
//! display each step.
//!
//! The priority queue is a hand-rolled binary min-heap without decrease-key:
//! improved distances are pushed as fresh entries and stale entries are
//! discarded lazily when popped.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    trace::{ProgressObserver, StateView, Trace, TraceRecorder, TraceStep},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    #[error("Weight matrix row {row} has {actual} columns, expected {expected}")]
    MatrixNotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
