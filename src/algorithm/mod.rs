pub mod traits;
pub mod relaxation;
pub mod path;
pub mod dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use relaxation::RelaxationStats;
