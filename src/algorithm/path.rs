use std::collections::HashSet;

use log::warn;

use crate::graph::NodeId;
use crate::{Error, PredecessorMap, Result};

/// Rebuilds the path from `source` to `target` by walking predecessor links
///
/// The predecessor map is expected to be self-initialized: a node whose
/// predecessor is itself was never reached. The returned path starts with
/// `source`, ends with `target` and never repeats a node.
///
/// # Errors
///
/// - [`Error::NoPath`] if `target` was never reached, or the walk hits an
///   unreached node or a cycle before getting back to `source`.
/// - [`Error::UnknownNode`] if a node on the walk is missing from the map.
pub fn reconstruct_path<N: NodeId>(
    source: &N,
    target: &N,
    predecessors: &PredecessorMap<N>,
) -> Result<Vec<N>> {
    let predecessor_of = |node: &N| {
        predecessors
            .get(node)
            .ok_or_else(|| Error::unknown_node(node))
    };

    let mut previous = predecessor_of(target)?;
    if target == source {
        return Ok(vec![source.clone()]);
    }
    if previous == target {
        return Err(Error::no_path(source, target));
    }

    // Build path in reverse order
    let mut path = vec![target.clone()];
    let mut visited = HashSet::new();
    visited.insert(target);
    let mut current = target;

    while previous != source {
        if previous == current {
            return Err(Error::no_path(source, target));
        }
        if !visited.insert(previous) {
            warn!("cycle in predecessor links at {:?} while walking to {:?}", previous, source);
            return Err(Error::no_path(source, target));
        }

        path.push(previous.clone());
        current = previous;
        previous = predecessor_of(current)?;
    }

    path.push(source.clone());
    path.reverse();

    Ok(path)
}
