use std::hash::Hash;

/// Weight of a single edge, and the running total along a path.
pub type Cost = i64;

/// Sentinel returned by [`Graph::cost`] when there is no edge between two
/// nodes. Pathfinders treat it as "impassable" and never add it to a total.
pub const INFINITE_COST: Cost = Cost::MAX;

/// Requirements on a vertex type: cheap identity (`Eq + Hash`) plus a total
/// order used for deterministic tie-breaking.
pub trait Node: Clone + Eq + Hash + Ord {}

impl<T: Clone + Eq + Hash + Ord> Node for T {}

/// Minimal weighted-graph interface consumed by every pathfinder.
pub trait Graph {
    type Node: Node;

    /// Every node currently in the graph. Calling it again restarts.
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// Every directed edge as `(from, to, cost)`.
    fn connections(&self) -> impl Iterator<Item = (Self::Node, Self::Node, Cost)> + '_;

    /// Cost of the edge from `from` to `to`, or [`INFINITE_COST`] if there is
    /// no such edge.
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Cost;

    /// Append the nodes reachable from `node` in one step into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbours(&self, node: &Self::Node, buf: &mut Vec<Self::Node>);

    /// Look a node up by its string key.
    fn node(&self, key: &str) -> Option<Self::Node>;
}
