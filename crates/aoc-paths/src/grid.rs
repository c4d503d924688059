//! [`WeightedGrid`]: a [`Graph`] over the cells of a rectangular grid.

use std::collections::BTreeMap;
use std::fmt;

use aoc_core::{Bounds, Coordinates, Grid};

use crate::bfs::BreadthFirst;
use crate::graph::CostFn;
use crate::pathfinder::PathFinder;
use crate::traits::{Cost, Graph, INFINITE_COST, Node};

/// A grid of nodes where each cell connects to its four cardinal neighbours.
///
/// Cells can be deleted to make them impassable. Deletion is permanent:
/// [`set_node`](Self::set_node) only replaces cells that still exist.
pub struct WeightedGrid<N> {
    bounds: Bounds,
    // Coordinates order row-major, so iteration here is row-major too.
    nodes: BTreeMap<Coordinates, N>,
    cost_fn: Option<CostFn<N>>,
}

impl<N: Node> WeightedGrid<N> {
    /// Take ownership of every cell of `grid`.
    pub fn new(grid: Grid<N>) -> Self {
        Self {
            bounds: grid.bounds(),
            nodes: grid.into_iter().collect(),
            cost_fn: None,
        }
    }

    /// Compute the cost of a step with `f(from, to)` instead of the default
    /// of one per step.
    pub fn with_cost_fn(mut self, f: impl Fn(&N, &N) -> Cost + 'static) -> Self {
        self.cost_fn = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height
    }

    /// The node at `c`, or `None` if `c` was deleted or is off the grid.
    pub fn node_at(&self, c: Coordinates) -> Option<&N> {
        self.nodes.get(&c)
    }

    /// The first coordinate in row-major order holding a node equal to `node`.
    pub fn coordinates_of(&self, node: &N) -> Option<Coordinates> {
        self.nodes
            .iter()
            .find_map(|(&c, n)| (n == node).then_some(c))
    }

    /// Replace the node at `c`. Returns `false` if `c` is off the grid or
    /// has been deleted.
    pub fn set_node(&mut self, c: Coordinates, node: N) -> bool {
        match self.nodes.get_mut(&c) {
            Some(slot) => {
                *slot = node;
                true
            }
            None => false,
        }
    }

    /// Remove the node at `c`. Returns `false` if there was nothing to remove.
    pub fn delete_node(&mut self, c: Coordinates) -> bool {
        self.nodes.remove(&c).is_some()
    }

    /// Render the grid as text, one space-separated token per cell and one
    /// line per row.
    ///
    /// Cells on `path` are drawn as `S` (first node), `F` (last node) or `*`.
    /// Every other cell is drawn with `render`, which receives `None` for
    /// deleted cells.
    pub fn draw(
        &self,
        render: impl Fn(Option<&N>) -> String,
        path: Option<&dyn PathFinder<N>>,
    ) -> String {
        let path = path.map_or(&[][..], |p| p.path());
        self.render_rows(|c| match self.nodes.get(&c) {
            None => render(None),
            Some(n) if path.first() == Some(n) => "S".to_string(),
            Some(n) if path.last() == Some(n) => "F".to_string(),
            Some(n) if path.contains(n) => "*".to_string(),
            Some(n) => render(Some(n)),
        })
    }

    /// Render the hop distances found by `bfs`, right-aligned to the widest
    /// value. Unreached cells are filled with `?` and deleted cells with `X`.
    pub fn draw_distances(&self, bfs: &BreadthFirst<N>) -> String {
        let width = self
            .nodes
            .values()
            .filter_map(|n| bfs.distance(n))
            .map(|d| d.to_string().len())
            .max()
            .unwrap_or(1);
        self.render_rows(|c| match self.nodes.get(&c) {
            None => "X".repeat(width),
            Some(n) => match bfs.distance(n) {
                Some(d) => format!("{d:>width$}"),
                None => "?".repeat(width),
            },
        })
    }

    fn render_rows(&self, mut cell: impl FnMut(Coordinates) -> String) -> String {
        let mut out = String::new();
        for y in 0..self.bounds.height {
            let row: Vec<String> = (0..self.bounds.width)
                .map(|x| cell(Coordinates::new(x as i64, y as i64)))
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }

    fn step_cost(&self, from: &N, to: &N) -> Cost {
        match &self.cost_fn {
            Some(f) => f(from, to),
            None => 1,
        }
    }
}

impl<N: Node> Graph for WeightedGrid<N> {
    type Node = N;

    fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.values().cloned()
    }

    fn connections(&self) -> impl Iterator<Item = (N, N, Cost)> + '_ {
        self.nodes.iter().flat_map(move |(&c, from)| {
            c.neighbours_cardinal().into_iter().filter_map(move |nc| {
                let to = self.nodes.get(&nc)?;
                Some((from.clone(), to.clone(), self.step_cost(from, to)))
            })
        })
    }

    /// A custom cost function decides every pair on its own. Without one,
    /// cardinal neighbours cost 1 and anything else is [`INFINITE_COST`].
    fn cost(&self, from: &N, to: &N) -> Cost {
        if let Some(f) = &self.cost_fn {
            return f(from, to);
        }
        let (Some(a), Some(b)) = (self.coordinates_of(from), self.coordinates_of(to)) else {
            return INFINITE_COST;
        };
        if a.manhattan_distance(b) == 1 { 1 } else { INFINITE_COST }
    }

    fn neighbours(&self, node: &N, buf: &mut Vec<N>) {
        let Some(c) = self.coordinates_of(node) else {
            return;
        };
        buf.extend(
            c.neighbours_cardinal()
                .into_iter()
                .filter_map(|nc| self.nodes.get(&nc).cloned()),
        );
    }

    /// `key` is `"x,y"`.
    fn node(&self, key: &str) -> Option<N> {
        let c: Coordinates = key.parse().ok()?;
        self.nodes.get(&c).cloned()
    }
}

impl<N: fmt::Debug> fmt::Debug for WeightedGrid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGrid")
            .field("bounds", &self.bounds)
            .field("nodes", &self.nodes.len())
            .field("custom_cost", &self.cost_fn.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_core::GraphNode;

    fn named(width: usize, height: usize) -> WeightedGrid<String> {
        WeightedGrid::new(Grid::filled(width, height, ()).map(|c, _| c.to_string()))
    }

    #[test]
    fn draw_marks_deleted_cells() {
        let mut grid = WeightedGrid::new(Grid::filled(10, 10, 1));
        for i in 0..10 {
            assert!(grid.delete_node(Coordinates::new(i, i)));
        }
        let text = grid.draw(|n| n.map_or("X".into(), |v| v.to_string()), None);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], "X 1 1 1 1 1 1 1 1 1");
        assert_eq!(rows[3], "1 1 1 X 1 1 1 1 1 1");
        assert_eq!(rows[9], "1 1 1 1 1 1 1 1 1 X");
        assert!(text.ends_with("X\n"));
    }

    #[test]
    fn draw_uses_render_for_names() {
        let mut grid = named(10, 10);
        for i in 0..10 {
            grid.delete_node(Coordinates::new(9 - i, i));
        }
        let text = grid.draw(|n| n.cloned().unwrap_or_else(|| "XXX".into()), None);
        let first = text.lines().next().unwrap();
        assert_eq!(first, "0,0 1,0 2,0 3,0 4,0 5,0 6,0 7,0 8,0 XXX");
        let last = text.lines().last().unwrap();
        assert_eq!(last, "XXX 1,9 2,9 3,9 4,9 5,9 6,9 7,9 8,9 9,9");
    }

    #[test]
    fn default_cost_is_one_between_neighbours() {
        let grid = named(3, 3);
        let (a, b, far) = ("0,0".to_string(), "1,0".to_string(), "2,2".to_string());
        assert_eq!(grid.cost(&a, &b), 1);
        assert_eq!(grid.cost(&b, &a), 1);
        assert_eq!(grid.cost(&a, &far), INFINITE_COST);
        assert_eq!(grid.cost(&a, &a), INFINITE_COST);
        assert_eq!(grid.cost(&a, &"nowhere".to_string()), INFINITE_COST);
    }

    #[test]
    fn custom_cost_uses_node_values() {
        let values = Grid::from_rows(vec![vec![1], vec![2], vec![4], vec![8]]).unwrap();
        let grid = WeightedGrid::new(GraphNode::grid_from_values(&values))
            .with_cost_fn(|a: &GraphNode, b: &GraphNode| i64::from(b.value - a.value));
        let at = |y| grid.node_at(Coordinates::new(0, y)).unwrap();
        assert_eq!(grid.cost(at(1), at(2)), 2);
        assert_eq!(grid.cost(at(2), at(3)), 4);
        assert_eq!(grid.cost(at(3), at(2)), -4);
        assert_eq!(grid.cost(at(0), at(3)), 7);
    }

    #[test]
    fn custom_cost_applies_to_any_pair() {
        let grid = WeightedGrid::new(Grid::filled(3, 3, ()).map(|c, _| c)).with_cost_fn(|_, _| 7);
        assert_eq!(grid.cost(&Coordinates::new(0, 0), &Coordinates::new(2, 2)), 7);
        assert_eq!(grid.cost(&Coordinates::new(0, 0), &Coordinates::new(0, 1)), 7);
    }

    #[test]
    fn neighbours_are_cardinal_and_skip_deleted() {
        let mut grid = named(3, 3);
        let centre = "1,1".to_string();
        let mut buf = Vec::new();
        grid.neighbours(&centre, &mut buf);
        assert_eq!(buf, ["1,0", "2,1", "1,2", "0,1"]);

        grid.delete_node(Coordinates::new(2, 1));
        buf.clear();
        grid.neighbours(&centre, &mut buf);
        assert_eq!(buf, ["1,0", "1,2", "0,1"]);

        buf.clear();
        grid.neighbours(&"0,0".to_string(), &mut buf);
        assert_eq!(buf, ["1,0", "0,1"]);
    }

    #[test]
    fn deletion_is_permanent() {
        let mut grid = named(2, 2);
        let c = Coordinates::new(1, 1);
        assert!(grid.set_node(c, "new".into()));
        assert_eq!(grid.node_at(c).map(String::as_str), Some("new"));
        assert!(grid.delete_node(c));
        assert!(!grid.delete_node(c));
        assert!(!grid.set_node(c, "back".into()));
        assert_eq!(grid.node_at(c), None);
        assert!(!grid.set_node(Coordinates::new(5, 5), "off".into()));
        assert_eq!(grid.nodes().count(), 3);
    }

    #[test]
    fn lookup_by_key_and_coordinates() {
        let grid = named(4, 2);
        assert_eq!(grid.node("3,1").as_deref(), Some("3,1"));
        assert_eq!(grid.node("4,1"), None);
        assert_eq!(grid.node("junk"), None);
        assert_eq!(grid.coordinates_of(&"2,1".to_string()), Some(Coordinates::new(2, 1)));
        assert_eq!((grid.width(), grid.height()), (4, 2));
    }

    #[test]
    fn connections_cover_every_adjacent_pair() {
        let mut grid = named(3, 2);
        // 3x2 has 7 undirected adjacencies.
        assert_eq!(grid.connections().count(), 14);
        grid.delete_node(Coordinates::new(1, 0));
        assert_eq!(grid.connections().count(), 8);
        assert!(grid.connections().all(|(_, _, cost)| cost == 1));
        let first: Vec<_> = grid.connections().collect();
        assert_eq!(first, grid.connections().collect::<Vec<_>>());
    }

    #[test]
    fn distance_map_pads_and_fills() {
        let mut grid = named(4, 3);
        grid.delete_node(Coordinates::new(1, 0));
        grid.delete_node(Coordinates::new(1, 1));
        grid.delete_node(Coordinates::new(0, 2));
        let bfs = BreadthFirst::new(&grid, "0,0".to_string(), "3,2".to_string());
        assert_eq!(grid.draw_distances(&bfs), "0 X ? ?\n1 X ? ?\nX ? ? ?\n");

        let bfs = BreadthFirst::new(&grid, "2,0".to_string(), "0,0".to_string());
        assert_eq!(grid.draw_distances(&bfs), "? X 0 1\n? X 1 2\nX 3 2 3\n");

        let mut line = named(12, 1);
        line.delete_node(Coordinates::new(11, 0));
        let bfs = BreadthFirst::new(&line, "0,0".to_string(), "10,0".to_string());
        assert_eq!(
            line.draw_distances(&bfs),
            " 0  1  2  3  4  5  6  7  8  9 10 XX\n"
        );
    }
}
