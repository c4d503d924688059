use std::cmp::Ordering;
use std::collections::HashMap;

use crate::traits::{Cost, Node};

/// Read-only outcome of a single-pair search.
pub trait PathFinder<N> {
    /// Whether `finish` was reached from `start`.
    fn has_solution(&self) -> bool;

    /// Total cost of [`path`](PathFinder::path). Zero when unsolved.
    fn total_cost(&self) -> Cost;

    /// Nodes from start to finish inclusive, empty when unsolved.
    fn path(&self) -> &[N];
}

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Frontier entry ordered for use in `BinaryHeap`.
#[derive(Clone, Eq, PartialEq)]
pub(crate) struct Prioritized<N> {
    pub(crate) priority: Cost,
    pub(crate) node: N,
}

impl<N: Ord> Ord for Prioritized<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and the smallest node among equal priorities.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord> PartialOrd for Prioritized<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Path reconstruction
// ---------------------------------------------------------------------------

/// Walk predecessor links from `finish` back to `start` and return the path
/// in travel order. Returns an empty path if the chain is broken or loops.
pub(crate) fn reconstruct_path<N: Node>(came_from: &HashMap<N, N>, start: &N, finish: &N) -> Vec<N> {
    let mut path = vec![finish.clone()];
    let mut current = finish;
    while current != start {
        let Some(prev) = came_from.get(current) else {
            return Vec::new();
        };
        if path.len() > came_from.len() {
            return Vec::new();
        }
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}
