//! The [`Grid`] type, a dense rectangular 2D array stored row by row.
//!
//! Puzzle input usually arrives as lines of characters; [`Grid::parse_chars`]
//! and [`Grid::parse_digits`] turn that text into a grid addressed by
//! [`Coordinates`], with `(0, 0)` at the top-left of the first line.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::CoreError;
use crate::geom::{Bounds, BoundsIter, Coordinates};

/// Split puzzle text into lines, trimming surrounding whitespace from the
/// whole input and from every line. `\r\n` line endings are accepted.
pub fn lines(input: &str) -> Vec<&str> {
    input.trim().lines().map(str::trim).collect()
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular 2D array of `T` stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Bounds,
}

impl<T> Grid<T> {
    /// Build a grid from rows of equal length.
    ///
    /// An empty `rows` vector yields an empty grid.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, CoreError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(CoreError::RaggedRow {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols);
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(width, height),
        })
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coordinates) -> bool {
        self.bounds.contains(c)
    }

    /// Read the cell at `c`, or `None` outside the grid.
    pub fn get(&self, c: Coordinates) -> Option<&T> {
        self.bounds.index(c).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `c`, or `None` outside the grid.
    pub fn get_mut(&mut self, c: Coordinates) -> Option<&mut T> {
        self.bounds.index(c).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `c`. Returns `false` if `c` is outside the grid.
    pub fn set(&mut self, c: Coordinates, value: T) -> bool {
        match self.get_mut(c) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Row-major iterator over `(Coordinates, &T)` pairs.
    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter {
            inner: self.bounds.iter(),
            cells: self.cells.iter(),
        }
    }

    /// Iterator over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero size; an empty grid has no rows anyway.
        self.cells
            .chunks(self.bounds.width.max(1))
            .take(self.bounds.height)
    }

    /// Positions of every cell matching `pred`, in row-major order.
    pub fn positions<'a>(
        &'a self,
        mut pred: impl FnMut(&T) -> bool + 'a,
    ) -> impl Iterator<Item = Coordinates> + 'a {
        self.iter().filter_map(move |(c, v)| pred(v).then_some(c))
    }

    /// Build a new grid of the same shape by applying `f` to every cell.
    pub fn map<U>(&self, mut f: impl FnMut(Coordinates, &T) -> U) -> Grid<U> {
        Grid {
            cells: self.iter().map(|(c, v)| f(c, v)).collect(),
            bounds: self.bounds,
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            cells: vec![value; width * height],
            bounds: Bounds::new(width, height),
        }
    }
}

impl Grid<char> {
    /// Parse text into a character grid, one row per line.
    pub fn parse_chars(input: &str) -> Result<Self, CoreError> {
        Self::from_rows(lines(input).into_iter().map(|l| l.chars().collect()).collect())
    }

    /// Row `y` as a string.
    pub fn row_string(&self, y: usize) -> String {
        self.rows().nth(y).map(|r| r.iter().collect()).unwrap_or_default()
    }
}

impl Grid<i32> {
    /// Parse text made of single decimal digits into an integer grid.
    pub fn parse_digits(input: &str) -> Result<Self, CoreError> {
        let chars = Grid::parse_chars(input)?;
        let cells = chars
            .iter()
            .map(|(c, &ch)| {
                ch.to_digit(10).map(|d| d as i32).ok_or(CoreError::InvalidDigit {
                    x: c.x as usize,
                    y: c.y as usize,
                    ch,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            cells,
            bounds: chars.bounds,
        })
    }
}

impl<T> Index<Coordinates> for Grid<T> {
    type Output = T;

    /// Panics if `c` is outside the grid.
    fn index(&self, c: Coordinates) -> &T {
        match self.get(c) {
            Some(v) => v,
            None => panic!("{c} is outside a {}x{} grid", self.width(), self.height()),
        }
    }
}

impl<T> IndexMut<Coordinates> for Grid<T> {
    fn index_mut(&mut self, c: Coordinates) -> &mut T {
        let (w, h) = (self.width(), self.height());
        match self.get_mut(c) {
            Some(v) => v,
            None => panic!("{c} is outside a {w}x{h} grid"),
        }
    }
}

impl<T> IntoIterator for Grid<T> {
    type Item = (Coordinates, T);
    type IntoIter = std::iter::Zip<BoundsIter, std::vec::IntoIter<T>>;

    /// Consume the grid, yielding `(Coordinates, T)` in row-major order.
    fn into_iter(self) -> Self::IntoIter {
        self.bounds.iter().zip(self.cells)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// Each row's cells concatenated, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coordinates, &T)` pairs in a [`Grid`].
pub struct GridIter<'a, T> {
    inner: BoundsIter,
    cells: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (Coordinates, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some((self.inner.next()?, self.cells.next()?))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
