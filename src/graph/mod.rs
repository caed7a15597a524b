pub mod traits;
pub mod adjacency;
pub mod generators;
pub mod sample;

pub use traits::{Edge, Graph, NodeId, Weight};
pub use adjacency::AdjacencyList;
