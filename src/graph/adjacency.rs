use crate::graph::traits::{Edge, Graph, NodeId, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed graph stored as ordered adjacency lists
///
/// Nodes keep their insertion order. Edge targets are not required to be nodes
/// of the graph; a search that reaches such a target fails with
/// [`Error::UnknownNode`] when it tries to expand it.
#[derive(Debug, Clone)]
pub struct AdjacencyList<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Nodes in insertion order
    nodes: Vec<N>,

    /// Position of each node in `nodes` and `edges`
    index: HashMap<N, usize>,

    /// Outgoing edges per node, parallel to `nodes`
    edges: Vec<Vec<Edge<N, W>>>,
}

impl<N, W> AdjacencyList<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyList {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a new empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyList {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(nodes),
        }
    }

    /// Builds a graph from `(node, [(target, weight), ...])` pairs
    ///
    /// A node listed twice has its edge lists concatenated.
    pub fn from_adjacency<I, E>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, W)>,
    {
        let mut graph = AdjacencyList::new();
        for (node, edges) in adjacency {
            graph.add_node(node.clone());
            for (target, weight) in edges {
                graph.add_edge(node.clone(), target, weight)?;
            }
        }
        Ok(graph)
    }

    /// Adds a node with no outgoing edges; returns false if it was already present
    pub fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.index.insert(node.clone(), self.nodes.len());
        self.nodes.push(node);
        self.edges.push(Vec::new());
        true
    }

    /// Appends a directed edge, adding `from` as a node if needed
    ///
    /// `to` is not added. Parallel edges are kept in order.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        if weight.is_nan() || weight < W::zero() {
            return Err(Error::NegativeWeight(format!("{:?}", weight)));
        }

        self.add_node(from.clone());
        let slot = self.index[&from];
        self.edges[slot].push(Edge::new(to, weight));
        Ok(())
    }

    /// Edge targets that are not nodes of the graph
    pub fn dangling_targets(&self) -> Vec<&N> {
        let mut dangling: Vec<&N> = Vec::new();
        for edge in self.edges.iter().flatten() {
            if !self.index.contains_key(&edge.target) && !dangling.contains(&&edge.target) {
                dangling.push(&edge.target);
            }
        }
        dangling
    }
}

impl<N, W> Default for AdjacencyList<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for AdjacencyList<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.iter().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.iter())
    }

    fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    fn outgoing_edges(&self, node: &N) -> Option<&[Edge<N, W>]> {
        self.index.get(node).map(|&slot| self.edges[slot].as_slice())
    }
}
