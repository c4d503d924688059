use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::CycleError;
use crate::traits::Node;

/// Order `nodes` so that every edge `(from, to)` has `from` before `to`
/// (Kahn's algorithm).
///
/// Endpoints of `edges` that are missing from `nodes` are added, and
/// duplicate edges count once. When several nodes are ready at the same time
/// the smallest by `Ord` goes first, so the result is deterministic.
///
/// Empty input gives `Ok(vec![])`. Any cycle gives [`CycleError`].
pub fn topological_sort<N: Node>(
    nodes: impl IntoIterator<Item = N>,
    edges: impl IntoIterator<Item = (N, N)>,
) -> Result<Vec<N>, CycleError> {
    let mut in_degree: BTreeMap<N, usize> = nodes.into_iter().map(|n| (n, 0)).collect();
    let mut outgoing: HashMap<N, Vec<N>> = HashMap::new();
    let mut seen = HashSet::new();

    for (from, to) in edges {
        if !seen.insert((from.clone(), to.clone())) {
            continue;
        }
        in_degree.entry(from.clone()).or_insert(0);
        *in_degree.entry(to.clone()).or_insert(0) += 1;
        outgoing.entry(from).or_default().push(to);
    }
    let total_edges = seen.len();

    let mut ready: BTreeSet<N> = in_degree
        .iter()
        .filter(|&(_, &d)| d == 0)
        .map(|(n, _)| n.clone())
        .collect();
    let mut order = Vec::with_capacity(in_degree.len());
    let mut removed = 0;

    while let Some(node) = ready.pop_first() {
        for next in outgoing.remove(&node).unwrap_or_default() {
            removed += 1;
            if let Some(d) = in_degree.get_mut(&next) {
                *d -= 1;
                if *d == 0 {
                    ready.insert(next);
                }
            }
        }
        order.push(node);
    }

    if removed < total_edges {
        let remaining_edges = total_edges - removed;
        log::debug!(
            "topological sort: cycle detected, {remaining_edges} of {total_edges} edges left"
        );
        return Err(CycleError { remaining_edges });
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn respects_edges<N: Node>(order: &[N], edges: &[(N, N)]) -> bool {
        let pos: HashMap<&N, usize> = order.iter().enumerate().map(|(i, n)| (n, i)).collect();
        edges.iter().all(|(a, b)| pos[a] < pos[b])
    }

    #[test]
    fn sorts_integer_dag() {
        let nodes = [7, 5, 3, 8, 11, 2, 9, 10];
        let edges = [
            (7, 11),
            (7, 8),
            (5, 11),
            (3, 8),
            (3, 10),
            (11, 2),
            (11, 9),
            (11, 10),
            (8, 9),
        ];
        let order = topological_sort(nodes, edges).unwrap();
        assert_eq!(order, vec![3, 5, 7, 8, 11, 2, 9, 10]);
        assert!(respects_edges(&order, &edges));
    }

    #[test]
    fn string_nodes_tie_break_lexicographically() {
        let s = |a: &str, b: &str| (a.to_string(), b.to_string());
        let edges = [
            s("7", "11"),
            s("7", "8"),
            s("5", "11"),
            s("3", "8"),
            s("3", "10"),
            s("11", "2"),
            s("11", "9"),
            s("11", "10"),
            s("8", "9"),
        ];
        let order = topological_sort(Vec::new(), edges).unwrap();
        assert_eq!(order, vec!["3", "5", "7", "11", "10", "2", "8", "9"]);
    }

    #[test]
    fn endpoints_are_added_and_duplicates_ignored() {
        let order = topological_sort([1], [(2, 3), (2, 3)]).unwrap();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn empty_input_is_not_a_cycle() {
        let order: Vec<u32> = topological_sort([], []).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn cycles_are_reported() {
        let err = topological_sort([0], [(1, 2), (2, 3), (3, 1), (0, 1)]).unwrap_err();
        assert_eq!(err, CycleError { remaining_edges: 3 });
        assert_eq!(
            topological_sort([], [(4, 4)]).unwrap_err(),
            CycleError { remaining_edges: 1 }
        );
    }

    #[test]
    fn random_dags_are_ordered() {
        let mut rng = StdRng::seed_from_u64(0x70_70);
        for _ in 0..50 {
            let n = rng.random_range(1..30u32);
            let mut edges = Vec::new();
            for _ in 0..rng.random_range(0..60) {
                let a = rng.random_range(0..n);
                let b = rng.random_range(0..n);
                // Edges only go from low to high, so the graph is acyclic.
                if a < b {
                    edges.push((a, b));
                }
            }
            let order = topological_sort(0..n, edges.iter().copied()).unwrap();
            assert_eq!(order.len(), n as usize);
            assert!(respects_edges(&order, &edges));
        }
    }
}
