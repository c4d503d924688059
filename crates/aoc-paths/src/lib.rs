//! Generic weighted graphs and pathfinding for puzzle solvers.
//!
//! A graph is anything implementing [`Graph`]: two implementations are
//! provided, the sparse [`WeightedGraph`] and the cell-based
//! [`WeightedGrid`]. Every search takes a graph by reference plus a start and
//! finish node, runs once, and keeps its result:
//!
//! - **Breadth-first search** by hop count ([`BreadthFirst`])
//! - **A\*** weighted shortest path ([`AStar`])
//! - **Floyd–Warshall** all-pairs shortest paths ([`FloydWarshall`])
//!
//! [`topological_sort`] orders the nodes of a DAG and reports cycles as
//! [`CycleError`].
//!
//! # Trait overview
//!
//! | Trait | Role |
//! |---|---|
//! | [`Node`] | Vertex type bound: `Clone + Eq + Hash + Ord` |
//! | [`Graph`] | Nodes, edges, costs and neighbours consumed by searches |
//! | [`PathFinder`] | Common result interface of the searches |
//!
//! Nothing here installs a logger. Searches report through the `log` facade
//! at `debug` and `trace` level.

mod astar;
mod bfs;
mod error;
mod floyd_warshall;
mod graph;
mod grid;
mod pathfinder;
mod toposort;
mod traits;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use error::CycleError;
pub use floyd_warshall::FloydWarshall;
pub use graph::{CostFn, WeightedGraph};
pub use grid::WeightedGrid;
pub use pathfinder::PathFinder;
pub use toposort::topological_sort;
pub use traits::{Cost, Graph, INFINITE_COST, Node};
