use std::collections::{BinaryHeap, HashMap};

use crate::pathfinder::{PathFinder, Prioritized, reconstruct_path};
use crate::traits::{Cost, Graph, INFINITE_COST, Node};

/// Weighted shortest path with an optional distance estimate.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AStar<N> {
    has_solution: bool,
    total_cost: Cost,
    path: Vec<N>,
}

impl<N: Node> AStar<N> {
    /// Search with a constant heuristic of 1, which makes A* behave like
    /// Dijkstra's algorithm.
    pub fn new<G: Graph<Node = N>>(graph: &G, start: N, finish: N) -> Self {
        Self::with_heuristic(graph, start, finish, |_, _| 1)
    }

    /// Search guided by `heuristic(node, finish)`. The path is only
    /// guaranteed shortest when the heuristic never overestimates.
    pub fn with_heuristic<G, H>(graph: &G, start: N, finish: N, heuristic: H) -> Self
    where
        G: Graph<Node = N>,
        H: Fn(&N, &N) -> Cost,
    {
        let mut cost_so_far: HashMap<N, Cost> = HashMap::new();
        let mut came_from: HashMap<N, N> = HashMap::new();
        let mut open = BinaryHeap::new();
        let mut nbuf = Vec::new();
        let mut expanded = 0usize;

        cost_so_far.insert(start.clone(), 0);
        open.push(Prioritized {
            priority: heuristic(&start, &finish),
            node: start.clone(),
        });

        while let Some(Prioritized { node: current, .. }) = open.pop() {
            if current == finish {
                break;
            }
            let Some(&current_cost) = cost_so_far.get(&current) else {
                continue;
            };
            expanded += 1;

            graph.neighbours(&current, &mut nbuf);
            for next in nbuf.drain(..) {
                let step = graph.cost(&current, &next);
                if step == INFINITE_COST {
                    continue;
                }
                let tentative = current_cost.saturating_add(step);
                if cost_so_far.get(&next).is_some_and(|&known| tentative >= known) {
                    continue;
                }
                log::trace!("astar: relaxed node to {tentative}");
                cost_so_far.insert(next.clone(), tentative);
                came_from.insert(next.clone(), current.clone());
                open.push(Prioritized {
                    priority: tentative.saturating_add(heuristic(&next, &finish)),
                    node: next,
                });
            }
        }

        let has_solution = start == finish || came_from.contains_key(&finish);
        let path = if has_solution {
            reconstruct_path(&came_from, &start, &finish)
        } else {
            Vec::new()
        };
        let total_cost = if has_solution {
            cost_so_far.get(&finish).copied().unwrap_or(0)
        } else {
            0
        };
        log::debug!("astar: expanded {expanded} nodes, solved: {has_solution}");

        Self {
            has_solution,
            total_cost,
            path,
        }
    }
}

impl<N> PathFinder<N> for AStar<N> {
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
