//! The relaxation loop shared by distance and path queries.
//!
//! The frontier is seeded with the source at distance zero and every node at
//! `+infinity`. Each popped node relaxes its outgoing edges through an admission
//! guard keyed on the raw weight of the edge into the neighbour: an edge into
//! `u` is only considered when no edge into `u` was admitted before, or its
//! weight is strictly smaller than the last admitted one. Admitted edges then go
//! through the usual `dist[u] > dist[v] + w` update.

use std::collections::HashMap;

use log::{debug, trace};

use crate::algorithm::ShortestPathResult;
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeId, Weight};
use crate::{DistanceMap, Error, PredecessorMap, Result};

/// Counters collected while relaxing, reported through `log`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RelaxationStats {
    /// Entries taken off the frontier, stale and infinite ones included
    pub pops: usize,
    /// Entries pushed after the initial seeding
    pub pushes: usize,
    /// Edges rejected by the admission guard
    pub blocked: usize,
}

/// Runs the relaxation loop from `source` until the frontier is empty
pub fn relax<N, W, G>(graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    relax_with_stats(graph, source).map(|(result, _)| result)
}

/// Same as [`relax`], also returning the loop counters
pub fn relax_with_stats<N, W, G>(
    graph: &G,
    source: &N,
) -> Result<(ShortestPathResult<N, W>, RelaxationStats)>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    if !graph.contains_node(source) {
        return Err(Error::unknown_node(source));
    }

    let n = graph.node_count();
    let mut stats = RelaxationStats::default();

    let mut distances: DistanceMap<N, W> = HashMap::with_capacity(n);
    let mut predecessors: PredecessorMap<N> = HashMap::with_capacity(n);
    for node in graph.nodes() {
        distances.insert(node.clone(), W::infinity());
        predecessors.insert(node.clone(), node.clone());
    }
    distances.insert(source.clone(), W::zero());

    // Last edge weight admitted into each node
    let mut guard: HashMap<N, W> = HashMap::with_capacity(n);
    guard.insert(source.clone(), W::zero());

    let mut frontier = Frontier::with_capacity(n + 1);
    frontier.push(source.clone(), W::zero());
    for node in graph.nodes() {
        frontier.push(node.clone(), W::infinity());
    }

    while let Some((v, _)) = frontier.pop() {
        stats.pops += 1;

        let edges = graph
            .outgoing_edges(&v)
            .ok_or_else(|| Error::unknown_node(&v))?;
        // Expansion always uses the current best distance, not the popped one
        let dist_v = distances.get(&v).copied().unwrap_or_else(W::infinity);

        for edge in edges {
            let u = &edge.target;
            let w = edge.weight;

            let admitted = match guard.get(u) {
                None => true,
                Some(&last) => w < last,
            };
            if !admitted {
                stats.blocked += 1;
                trace!("blocked {:?} -> {:?} (weight {:?})", v, u, w);
                continue;
            }
            guard.insert(u.clone(), w);

            let candidate = dist_v + w;
            let dist_u = distances.get(u).copied().unwrap_or_else(W::infinity);
            if dist_u > candidate {
                trace!("relaxed {:?} -> {:?}: {:?} -> {:?}", v, u, dist_u, candidate);
                distances.insert(u.clone(), candidate);
                predecessors.insert(u.clone(), v.clone());
                frontier.push(u.clone(), candidate);
                stats.pushes += 1;
            }
        }
    }

    debug!(
        "relaxation from {:?} over {} nodes: {} pops, {} pushes, {} blocked",
        source, n, stats.pops, stats.pushes, stats.blocked
    );

    Ok((
        ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        },
        stats,
    ))
}
