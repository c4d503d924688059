//! **aoc-core**: shared building blocks for the daily puzzle solvers.
//!
//! This crate provides the types every solver ends up needing: integer
//! coordinates and compass directions, a dense text-backed grid, and a
//! general-purpose graph vertex. The graph algorithms themselves live in
//! `aoc-paths`.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::CoreError;
pub use geom::{Bounds, BoundsIter, Coordinates, Direction};
pub use grid::{Grid, GridIter, lines};
pub use node::GraphNode;
