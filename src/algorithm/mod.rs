pub mod dijkstra;
pub mod trace;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
