//! [`GraphNode`]: a general-purpose vertex for puzzle graphs.

use std::cmp::Ordering;
use std::fmt;

use crate::geom::Coordinates;
use crate::grid::Grid;

/// A named vertex carrying an integer value and an optional position.
///
/// Equality covers all three fields. Ordering is by value first, then name,
/// then position, so it agrees with equality and still sorts cheapest-first
/// when values are used as weights.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphNode {
    pub name: String,
    pub value: i32,
    pub coords: Option<Coordinates>,
}

impl GraphNode {
    /// A node without a position.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            coords: None,
        }
    }

    /// A node placed at `coords`.
    pub fn at(name: impl Into<String>, value: i32, coords: Coordinates) -> Self {
        Self {
            name: name.into(),
            value,
            coords: Some(coords),
        }
    }

    /// Wrap every cell of an integer grid in a node named `"x,y"` that
    /// carries the cell value and its position.
    pub fn grid_from_values(values: &Grid<i32>) -> Grid<GraphNode> {
        values.map(|c, &v| GraphNode::at(c.to_string(), v, c))
    }
}

impl PartialOrd for GraphNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GraphNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.coords.cmp(&other.coords))
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
