use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::CycleError;
use crate::toposort::topological_sort;
use crate::traits::{Cost, Graph, INFINITE_COST, Node};

/// Replacement for the stored edge weights, given `(from, to)`.
pub type CostFn<N> = Box<dyn Fn(&N, &N) -> Cost>;

/// A sparse graph stored as an adjacency map.
///
/// Nodes are registered under their `Display` form, which is the key
/// [`Graph::node`] looks them up by. Two nodes that display the same way
/// share a key, and the later one wins.
pub struct WeightedGraph<N> {
    directed: bool,
    nodes: BTreeMap<String, N>,
    adjacency: BTreeMap<N, BTreeMap<N, Cost>>,
    cost_fn: Option<CostFn<N>>,
}

impl<N: Node + fmt::Display> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node + fmt::Display> WeightedGraph<N> {
    /// An empty directed graph.
    pub fn new() -> Self {
        Self {
            directed: true,
            nodes: BTreeMap::new(),
            adjacency: BTreeMap::new(),
            cost_fn: None,
        }
    }

    /// An empty undirected graph: every connection is stored both ways.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::new()
        }
    }

    /// Compute costs with `f` instead of reading stored weights.
    pub fn with_cost_fn(mut self, f: impl Fn(&N, &N) -> Cost + 'static) -> Self {
        self.cost_fn = Some(Box::new(f));
        self
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed edges. An undirected connection counts twice.
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Add or overwrite the edge `from -> to`, registering both endpoints.
    pub fn add_connection(&mut self, from: N, to: N, cost: Cost) {
        self.register(&from);
        self.register(&to);
        if !self.directed {
            self.set_edge(to.clone(), from.clone(), cost);
        }
        self.set_edge(from, to, cost);
    }

    /// Remove the edge `from -> to` (and `to -> from` when undirected).
    /// Missing edges are ignored.
    pub fn delete_connection(&mut self, from: &N, to: &N) {
        if let Some(out) = self.adjacency.get_mut(from) {
            out.remove(to);
        }
        if !self.directed {
            if let Some(out) = self.adjacency.get_mut(to) {
                out.remove(from);
            }
        }
    }

    /// Remove `node` and every edge touching it. Returns `false` if the
    /// node was not in the graph.
    pub fn delete_node(&mut self, node: &N) -> bool {
        if self.adjacency.remove(node).is_none() {
            return false;
        }
        for out in self.adjacency.values_mut() {
            out.remove(node);
        }
        self.nodes.retain(|_, n| n != node);
        true
    }

    /// Negate every stored weight, so a shortest-path search finds the
    /// longest path in a DAG.
    pub fn reverse_distances(&mut self) {
        for cost in self.adjacency.values_mut().flat_map(BTreeMap::values_mut) {
            *cost = -*cost;
        }
    }

    /// Render the graph as a PlantUML use-case diagram, one
    /// `(from) --> (to) : cost` line per edge in sorted order.
    pub fn to_uml(&self, render: impl Fn(&N) -> String) -> String {
        let mut lines: Vec<String> = self
            .connections()
            .map(|(from, to, cost)| format!("({}) --> ({}) : {cost}", render(&from), render(&to)))
            .collect();
        lines.sort();

        let mut out = String::from("@startuml\n");
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("@enduml\n");
        out
    }

    /// Cost of the most expensive simple path from `start` to `finish` over
    /// the stored weights, or `None` if `finish` cannot be reached.
    ///
    /// Exhaustive depth-first search, so only practical on small graphs. On a
    /// DAG, [`reverse_distances`](Self::reverse_distances) plus a shortest
    /// path search scales better.
    pub fn longest_path(&self, start: &N, finish: &N) -> Option<Cost> {
        let mut visited = HashSet::from([start.clone()]);
        self.longest_from(start, finish, &mut visited)
    }

    fn longest_from(&self, current: &N, finish: &N, visited: &mut HashSet<N>) -> Option<Cost> {
        if current == finish {
            return Some(0);
        }
        let mut best = None;
        for (next, &cost) in self.adjacency.get(current)? {
            if cost == INFINITE_COST || !visited.insert(next.clone()) {
                continue;
            }
            if let Some(rest) = self.longest_from(next, finish, visited) {
                best = best.max(Some(rest.saturating_add(cost)));
            }
            visited.remove(next);
        }
        best
    }

    /// Topologically sort the graph's nodes along its edges.
    pub fn topological_sort(&self) -> Result<Vec<N>, CycleError> {
        topological_sort(
            self.nodes(),
            self.connections().map(|(from, to, _)| (from, to)),
        )
    }

    fn register(&mut self, node: &N) {
        self.nodes.insert(node.to_string(), node.clone());
        self.adjacency.entry(node.clone()).or_default();
    }

    fn set_edge(&mut self, from: N, to: N, cost: Cost) {
        self.adjacency.entry(from).or_default().insert(to, cost);
    }

    fn stored_cost(&self, from: &N, to: &N) -> Cost {
        self.adjacency
            .get(from)
            .and_then(|out| out.get(to))
            .copied()
            .unwrap_or(INFINITE_COST)
    }
}

impl<N: Node + fmt::Display> Graph for WeightedGraph<N> {
    type Node = N;

    fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.values().cloned()
    }

    fn connections(&self) -> impl Iterator<Item = (N, N, Cost)> + '_ {
        self.adjacency.iter().flat_map(|(from, out)| {
            out.iter()
                .map(move |(to, &cost)| (from.clone(), to.clone(), cost))
        })
    }

    fn cost(&self, from: &N, to: &N) -> Cost {
        match &self.cost_fn {
            Some(f) => f(from, to),
            None => self.stored_cost(from, to),
        }
    }

    fn neighbours(&self, node: &N, buf: &mut Vec<N>) {
        if let Some(out) = self.adjacency.get(node) {
            buf.extend(out.keys().cloned());
        }
    }

    fn node(&self, key: &str) -> Option<N> {
        self.nodes.get(key).cloned()
    }
}

impl<N: fmt::Debug> fmt::Debug for WeightedGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("directed", &self.directed)
            .field("adjacency", &self.adjacency)
            .field("custom_cost", &self.cost_fn.is_some())
            .finish()
    }
}
