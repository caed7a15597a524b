//! Dijkstra Paths - single-source shortest distances and paths
//!
//! This library computes shortest distances and shortest-path node sequences from
//! one source over a weighted directed graph with non-negative edge weights.
//!
//! The search uses a lazy frontier: instead of decrease-key, improved distances are
//! pushed as fresh entries and stale ones are tolerated. Node identifiers are
//! opaque (`usize`, `&str`, `String`, tuples, ...) and weights are any ordered
//! float type such as `OrderedFloat<f64>`.
//!
//! ```
//! use dijkstra_paths::{shortest_distance, shortest_path, AdjacencyList};
//! use ordered_float::OrderedFloat;
//!
//! let graph = AdjacencyList::from_adjacency(vec![
//!     ("a", vec![("b", OrderedFloat(2.0)), ("c", OrderedFloat(7.0))]),
//!     ("b", vec![("c", OrderedFloat(3.0))]),
//!     ("c", vec![]),
//! ])
//! .unwrap();
//!
//! assert_eq!(shortest_distance(&graph, &"a", &"c").unwrap(), OrderedFloat(5.0));
//! assert_eq!(shortest_path(&graph, &"a", &"c").unwrap(), vec!["a", "b", "c"]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

use std::collections::HashMap;

pub use algorithm::{
    dijkstra::Dijkstra, path::reconstruct_path, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, Edge, Graph, NodeId, Weight};

/// Shortest known distance per node; unreached nodes hold `+infinity`
pub type DistanceMap<N, W> = HashMap<N, W>;

/// Node from which each node's best distance was last derived (self when never updated)
pub type PredecessorMap<N> = HashMap<N, N>;

/// Shortest path per reachable node, source first
pub type PathMap<N> = HashMap<N, Vec<N>>;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),
}

impl Error {
    pub(crate) fn no_path<N: NodeId>(from: &N, to: &N) -> Self {
        Error::NoPath {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn unknown_node<N: NodeId>(node: &N) -> Self {
        Error::UnknownNode(format!("{:?}", node))
    }

    /// True for the recoverable "target cannot be reached" condition
    pub fn is_no_path(&self) -> bool {
        matches!(self, Error::NoPath { .. })
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Shortest distances from `source` to every node of `graph`
pub fn shortest_distances<N, W, G>(graph: &G, source: &N) -> Result<DistanceMap<N, W>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    Dijkstra::new().shortest_distances(graph, source)
}

/// Shortest distance from `source` to `target`, or [`Error::NoPath`] when unreachable
pub fn shortest_distance<N, W, G>(graph: &G, source: &N, target: &N) -> Result<W>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    Dijkstra::new().shortest_distance(graph, source, target)
}

/// Shortest paths from `source` to every reachable node of `graph`
pub fn shortest_paths<N, W, G>(graph: &G, source: &N) -> Result<PathMap<N>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    Dijkstra::new().shortest_paths(graph, source)
}

/// Shortest path from `source` to `target`, or [`Error::NoPath`] when unreachable
pub fn shortest_path<N, W, G>(graph: &G, source: &N, target: &N) -> Result<Vec<N>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    Dijkstra::new().shortest_path(graph, source, target)
}
