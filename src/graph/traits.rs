use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

/// Opaque node identifier: anything hashable, comparable and printable
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

/// Edge weight: an ordered float type with a `+infinity` value (e.g. `OrderedFloat<f64>`)
pub trait Weight: Float + Zero + Debug + Copy + Ord {}

impl<T> Weight for T where T: Float + Zero + Debug + Copy + Ord {}

/// A directed, weighted edge as stored in an adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<N, W> {
    /// Node the edge points to; need not be a key of the graph
    pub target: N,
    /// Non-negative weight
    pub weight: W,
}

impl<N, W> Edge<N, W> {
    pub fn new(target: N, weight: W) -> Self {
        Edge { target, weight }
    }
}

/// Trait representing a read-only weighted directed graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes (keys) in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the nodes of the graph in a stable order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns true if the node is a key of the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns the ordered outgoing edges of a node, or `None` if it is not a key
    fn outgoing_edges(&self, node: &N) -> Option<&[Edge<N, W>]>;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of the first edge from `from` to `to`, if any
    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.outgoing_edges(from)?
            .iter()
            .find(|edge| edge.target == *to)
            .map(|edge| edge.weight)
    }
}
