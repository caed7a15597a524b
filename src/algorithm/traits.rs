use crate::algorithm::path::reconstruct_path;
use crate::graph::{Graph, NodeId, Weight};
use crate::{DistanceMap, Error, PredecessorMap, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distances from source to each node, `+infinity` when unreached
    pub distances: DistanceMap<N, W>,

    /// Predecessor of each node in the shortest path tree (itself when unreached)
    pub predecessors: PredecessorMap<N>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distance to `target`; fails with [`Error::NoPath`] if it was never reached
    pub fn distance_to(&self, target: &N) -> Result<W> {
        let distance = *self
            .distances
            .get(target)
            .ok_or_else(|| Error::unknown_node(target))?;
        if distance.is_infinite() {
            return Err(Error::no_path(&self.source, target));
        }
        Ok(distance)
    }

    /// Returns true if `target` has a finite distance
    pub fn is_reachable(&self, target: &N) -> bool {
        self.distances
            .get(target)
            .map_or(false, |distance| distance.is_finite())
    }

    /// Path from the source to `target`, rebuilt from the predecessor links
    pub fn path_to(&self, target: &N) -> Result<Vec<N>> {
        reconstruct_path(&self.source, target, &self.predecessors)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<N, W>, target: &N) -> Option<Vec<N>> {
        result.path_to(target).ok()
    }
}
