use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::pathfinder::{PathFinder, reconstruct_path};
use crate::traits::{Cost, Graph, Node};

/// Unweighted breadth-first search. Every edge counts as one hop and edge
/// costs are ignored.
#[derive(Debug, Clone)]
pub struct BreadthFirst<N> {
    has_solution: bool,
    total_cost: Cost,
    path: Vec<N>,
    distances: HashMap<N, Cost>,
}

impl<N: Node> BreadthFirst<N> {
    /// Explore everything reachable from `start`, then report the path to
    /// `finish`. [`distances`](Self::distances) covers the whole component.
    pub fn new<G: Graph<Node = N>>(graph: &G, start: N, finish: N) -> Self {
        Self::search(graph, start, finish, false)
    }

    /// Like [`new`](Self::new), but stop as soon as `finish` is dequeued.
    pub fn with_early_exit<G: Graph<Node = N>>(graph: &G, start: N, finish: N) -> Self {
        Self::search(graph, start, finish, true)
    }

    fn search<G: Graph<Node = N>>(graph: &G, start: N, finish: N, early_exit: bool) -> Self {
        let mut distances = HashMap::new();
        let mut came_from = HashMap::new();
        let mut frontier = VecDeque::new();
        let mut nbuf = Vec::new();

        distances.insert(start.clone(), 0);
        frontier.push_back((start.clone(), 0));

        while let Some((current, dist)) = frontier.pop_front() {
            if early_exit && current == finish {
                break;
            }
            graph.neighbours(&current, &mut nbuf);
            for next in nbuf.drain(..) {
                if let Entry::Vacant(e) = distances.entry(next.clone()) {
                    e.insert(dist + 1);
                    came_from.insert(next.clone(), current.clone());
                    frontier.push_back((next, dist + 1));
                }
            }
        }

        let total_cost = distances.get(&finish).copied();
        let path = match total_cost {
            Some(_) => reconstruct_path(&came_from, &start, &finish),
            None => Vec::new(),
        };
        log::debug!(
            "bfs: discovered {} nodes, solved: {}",
            distances.len(),
            total_cost.is_some()
        );

        Self {
            has_solution: total_cost.is_some(),
            total_cost: total_cost.unwrap_or(0),
            path,
            distances,
        }
    }

    /// Hop distance from start to every discovered node, start included.
    pub fn distances(&self) -> &HashMap<N, Cost> {
        &self.distances
    }

    /// Hop distance to `node`, or `None` if it was never discovered.
    pub fn distance(&self, node: &N) -> Option<Cost> {
        self.distances.get(node).copied()
    }
}

impl<N> PathFinder<N> for BreadthFirst<N> {
    fn has_solution(&self) -> bool {
        self.has_solution
    }

    fn total_cost(&self) -> Cost {
        self.total_cost
    }

    fn path(&self) -> &[N] {
        &self.path
    }
}
