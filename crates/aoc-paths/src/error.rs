use thiserror::Error;

/// Returned by [`topological_sort`](crate::topological_sort) when the edges
/// contain at least one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("graph contains a cycle: {remaining_edges} edge(s) could not be ordered")]
pub struct CycleError {
    /// Edges left over once no node without incoming edges remained.
    pub remaining_edges: usize,
}
