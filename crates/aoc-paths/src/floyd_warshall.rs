use std::collections::HashMap;

use crate::pathfinder::PathFinder;
use crate::traits::{Cost, Graph, INFINITE_COST, Node};

/// All-pairs shortest paths. Negative edge weights are allowed; negative
/// cycles are not.
///
/// Besides the `start`/`finish` path it keeps the full distance table, which
/// can be queried with [`distance`](Self::distance) or listed with
/// [`distances`](Self::distances).
#[derive(Debug, Clone)]
pub struct FloydWarshall<N> {
    has_solution: bool,
    total_cost: Cost,
    path: Vec<N>,
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    dist: Vec<Vec<Option<Cost>>>,
}

impl<N: Node> FloydWarshall<N> {
    pub fn new<G: Graph<Node = N>>(graph: &G, start: N, finish: N) -> Self {
        let mut nodes: Vec<N> = graph.nodes().collect();
        nodes.sort();
        nodes.dedup();
        let index: HashMap<N, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        let n = nodes.len();

        // dist[i][j] is None while j is unreachable from i. prev[i][j] is the
        // node before j on the best known path from i.
        let mut dist: Vec<Vec<Option<Cost>>> = vec![vec![None; n]; n];
        let mut prev: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        for (from, to, cost) in graph.connections() {
            if cost == INFINITE_COST {
                continue;
            }
            let (Some(&i), Some(&j)) = (index.get(&from), index.get(&to)) else {
                continue;
            };
            if i == j {
                dist[i][i] = Some(cost.min(0));
            } else {
                dist[i][j] = Some(cost);
                prev[i][j] = Some(i);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(ik) = dist[i][k] else {
                    continue;
                };
                for j in 0..n {
                    let Some(kj) = dist[k][j] else {
                        continue;
                    };
                    let through = ik.saturating_add(kj);
                    if dist[i][j].is_none_or(|ij| through < ij) {
                        dist[i][j] = Some(through);
                        prev[i][j] = prev[k][j];
                    }
                }
            }
        }

        let negative = (0..n).filter(|&i| dist[i][i].is_some_and(|d| d < 0)).count();
        if negative > 0 {
            log::warn!("floyd-warshall: {negative} node(s) lie on a negative cycle");
        }

        let endpoints = index.get(&start).zip(index.get(&finish));
        let total_cost = endpoints.and_then(|(&s, &f)| dist[s][f]);
        let path = match (endpoints, total_cost) {
            (Some((&s, &f)), Some(_)) => walk_back(&prev, &nodes, s, f),
            _ => Vec::new(),
        };
        let has_solution = !path.is_empty();
        log::debug!("floyd-warshall: {n} nodes, solved: {has_solution}");

        Self {
            has_solution,
            total_cost: if has_solution { total_cost.unwrap_or(0) } else { 0 },
            path,
            nodes,
            index,
            dist,
        }
    }

    /// Every node of the graph, in the order used for the table.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Shortest distance from `from` to `to`, or `None` if unreachable.
    pub fn distance(&self, from: &N, to: &N) -> Option<Cost> {
        let (&i, &j) = self.index.get(from).zip(self.index.get(to))?;
        self.dist[i][j]
    }

    /// Every reachable pair with its distance, row by row.
    pub fn distances(&self) -> impl Iterator<Item = (&N, &N, Cost)> + '_ {
        self.dist.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(j, d)| d.map(|d| (&self.nodes[i], &self.nodes[j], d)))
        })
    }

    /// Format the distance table with one row and one column per node.
    /// Unreachable pairs show as `-`.
    pub fn render_distances(&self, render: impl Fn(&N) -> String) -> String {
        let labels: Vec<String> = self.nodes.iter().map(&render).collect();
        let cells: Vec<Vec<String>> = self
            .dist
            .iter()
            .map(|row| {
                row.iter()
                    .map(|d| d.map_or_else(|| "-".to_string(), |d| d.to_string()))
                    .collect()
            })
            .collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let width = cells
            .iter()
            .flatten()
            .chain(&labels)
            .map(String::len)
            .max()
            .unwrap_or(1);

        let mut out = format!("{:label_width$}", "");
        for label in &labels {
            out.push_str(&format!(" {label:>width$}"));
        }
        out.push('\n');
        for (label, row) in labels.iter().zip(&cells) {
            out.push_str(&format!("{label:>label_width$}"));
            for cell in row {
                out.push_str(&format!(" {cell:>width$}"));
            }
            out.push('\n');
        }
        out
    }
}

/// Follow the predecessor matrix from `f` back to `s`. Gives up once the
/// path outgrows the node count, which only a negative cycle can cause.
fn walk_back<N: Clone>(prev: &[Vec<Option<usize>>], nodes: &[N], s: usize, f: usize) -> Vec<N> {
    let mut path = vec![nodes[f].clone()];
    let mut current = f;
    while current != s {
        let Some(p) = prev[s][current] else {
            return Vec::new();
        };
        if path.len() > nodes.len() {
            return Vec::new();
        }
        path.push(nodes[p].clone());
        current = p;
    }
    path.reverse();
    path
}

impl<N> PathFinder<N> for FloydWarshall<N> {
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
