use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::{NodeId, Weight};

/// A (node, tentative distance) pair waiting in the frontier
///
/// Entries compare by distance only; ties between nodes are unordered.
#[derive(Debug, Clone)]
pub struct FrontierEntry<N, W> {
    pub node: N,
    pub distance: W,
}

impl<N, W: Ord> PartialEq for FrontierEntry<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<N, W: Ord> Eq for FrontierEntry<N, W> {}

impl<N, W: Ord> PartialOrd for FrontierEntry<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: Ord> Ord for FrontierEntry<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

/// Min-priority queue of tentative distances without decrease-key
///
/// Lowering a node's distance is done by pushing a new entry. The old entry
/// stays in the heap and is popped later as a stale duplicate.
#[derive(Debug)]
pub struct Frontier<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<FrontierEntry<N, W>>>,
}

impl<N, W> Frontier<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a new empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts an entry; existing entries for the same node are left in place
    pub fn push(&mut self, node: N, distance: W) {
        self.heap.push(Reverse(FrontierEntry { node, distance }));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(N, W)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.distance))
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn peek(&self) -> Option<(&N, W)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.node, entry.distance))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<N, W> Default for Frontier<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}
