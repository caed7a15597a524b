use log::debug;

use crate::algorithm::relaxation::relax;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::{DistanceMap, Error, PathMap, Result};

/// Dijkstra's algorithm over a lazy frontier
///
/// Stateless: every query allocates its own distance, predecessor and guard
/// maps, so one instance can serve any number of graphs and callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Shortest distances from `source` to every node; unreached nodes map to `+infinity`
    pub fn shortest_distances<N, W, G>(&self, graph: &G, source: &N) -> Result<DistanceMap<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        Ok(relax(graph, source)?.distances)
    }

    /// Shortest distance from `source` to `target`
    pub fn shortest_distance<N, W, G>(&self, graph: &G, source: &N, target: &N) -> Result<W>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        if !graph.contains_node(target) {
            return Err(Error::unknown_node(target));
        }
        relax(graph, source)?.distance_to(target)
    }

    /// Shortest paths from `source` to every node it reaches
    ///
    /// Nodes without a path are left out of the map instead of failing the query.
    pub fn shortest_paths<N, W, G>(&self, graph: &G, source: &N) -> Result<PathMap<N>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        let result = relax(graph, source)?;

        let mut paths = PathMap::with_capacity(graph.node_count());
        for node in graph.nodes() {
            match result.path_to(node) {
                Ok(path) => {
                    paths.insert(node.clone(), path);
                }
                Err(Error::NoPath { .. }) => {
                    debug!("no path from {:?} to {:?}, omitted", source, node);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(paths)
    }

    /// Shortest path from `source` to `target`
    pub fn shortest_path<N, W, G>(&self, graph: &G, source: &N, target: &N) -> Result<Vec<N>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        if !graph.contains_node(target) {
            return Err(Error::unknown_node(target));
        }
        relax(graph, source)?.path_to(target)
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        relax(graph, source)
    }
}
