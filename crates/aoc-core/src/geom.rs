//! Geometry primitives: [`Coordinates`], [`Direction`] and [`Bounds`].
//!
//! X grows east, Y grows south (the order lines appear in puzzle input), Z is
//! an optional third axis that defaults to zero.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// The eight planar compass directions plus the vertical axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Up,
    Down,
}

impl Direction {
    /// North, East, South, West. Grid neighbours are reported in this order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four diagonal directions.
    pub const ORDINAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Rotate counter-clockwise by `half_steps` 45° steps.
    ///
    /// `turn_left(2)` is a quarter turn. Up and Down are unaffected.
    pub fn turn_left(self, half_steps: u32) -> Self {
        match half_steps % 8 {
            0 => self,
            1 => match self {
                Direction::North => Direction::NorthWest,
                Direction::NorthWest => Direction::West,
                Direction::West => Direction::SouthWest,
                Direction::SouthWest => Direction::South,
                Direction::South => Direction::SouthEast,
                Direction::SouthEast => Direction::East,
                Direction::East => Direction::NorthEast,
                Direction::NorthEast => Direction::North,
                Direction::Up | Direction::Down => self,
            },
            n => self.turn_left(n - 1).turn_left(1),
        }
    }

    /// Rotate clockwise by `half_steps` 45° steps.
    ///
    /// `turn_right(2)` is a quarter turn. Up and Down are unaffected.
    pub fn turn_right(self, half_steps: u32) -> Self {
        match half_steps % 8 {
            0 => self,
            1 => match self {
                Direction::North => Direction::NorthEast,
                Direction::NorthEast => Direction::East,
                Direction::East => Direction::SouthEast,
                Direction::SouthEast => Direction::South,
                Direction::South => Direction::SouthWest,
                Direction::SouthWest => Direction::West,
                Direction::West => Direction::NorthWest,
                Direction::NorthWest => Direction::North,
                Direction::Up | Direction::Down => self,
            },
            n => self.turn_right(n - 1).turn_right(1),
        }
    }

    /// Unit offset for one step in this direction.
    #[inline]
    pub const fn offset(self) -> Coordinates {
        match self {
            Direction::North => Coordinates::new(0, -1),
            Direction::South => Coordinates::new(0, 1),
            Direction::East => Coordinates::new(1, 0),
            Direction::West => Coordinates::new(-1, 0),
            Direction::NorthEast => Coordinates::new(1, -1),
            Direction::NorthWest => Coordinates::new(-1, -1),
            Direction::SouthEast => Coordinates::new(1, 1),
            Direction::SouthWest => Coordinates::new(-1, 1),
            Direction::Up => Coordinates::new_3d(0, 0, 1),
            Direction::Down => Coordinates::new_3d(0, 0, -1),
        }
    }
}

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// An immutable integer position.
///
/// Equality, hashing and ordering only look at `x` and `y`, so two
/// coordinates on different `z` levels identify the same grid cell. Use
/// [`eq_3d`](Coordinates::eq_3d) when the third axis matters.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub x: i64,
    pub y: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: i64,
}

impl Coordinates {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a planar position (z = 0).
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y, z: 0 }
    }

    /// Create a position on all three axes.
    #[inline]
    pub const fn new_3d(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Whether x and y are both zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Component-wise comparison including `z`.
    #[inline]
    pub fn eq_3d(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Return the position `distance` steps away in `direction`.
    ///
    /// Planar moves keep `z`; Up and Down change only `z`.
    #[inline]
    pub fn step(self, direction: Direction, distance: i64) -> Self {
        let d = direction.offset();
        Self::new_3d(
            self.x + d.x * distance,
            self.y + d.y * distance,
            self.z + d.z * distance,
        )
    }

    /// Shorthand for a single step.
    #[inline]
    pub fn moved(self, direction: Direction) -> Self {
        self.step(direction, 1)
    }

    /// Whether the position lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(self, width: i64, height: i64) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }

    /// The planar direction leading from `self` to an adjacent `other`, if any.
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::CARDINAL
            .into_iter()
            .chain(Direction::ORDINAL)
            .find(|&d| self.moved(d) == other)
    }

    /// Manhattan (L1) distance in the plane.
    #[inline]
    pub fn manhattan_distance(self, other: Self) -> i64 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// Euclidean distance in the plane, truncated toward zero.
    pub fn euclidean_distance(self, other: Self) -> i64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt() as i64
    }

    /// The four cardinal neighbours (north, east, south, west).
    #[inline]
    pub fn neighbours_cardinal(self) -> [Coordinates; 4] {
        Direction::CARDINAL.map(|d| self.moved(d))
    }

    /// The four diagonal neighbours.
    #[inline]
    pub fn neighbours_ordinal(self) -> [Coordinates; 4] {
        Direction::ORDINAL.map(|d| self.moved(d))
    }

    /// All eight planar neighbours, cardinal first.
    pub fn neighbours(self) -> [Coordinates; 8] {
        let [n, e, s, w] = self.neighbours_cardinal();
        let [ne, nw, se, sw] = self.neighbours_ordinal();
        [n, e, s, w, ne, nw, se, sw]
    }
}

// --- trait impls for Coordinates ---

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Coordinates {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinates {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.z != 0 {
            write!(f, "{},{},{}", self.x, self.y, self.z)
        } else {
            write!(f, "{},{}", self.x, self.y)
        }
    }
}

impl FromStr for Coordinates {
    type Err = CoreError;

    /// Parse `x,y` or `x,y,z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidCoordinates(s.to_string());
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<i64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match parts[..] {
            [x, y] => Ok(Self::new(x, y)),
            [x, y, z] => Ok(Self::new_3d(x, y, z)),
            _ => Err(invalid()),
        }
    }
}

impl Add for Coordinates {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new_3d(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coordinates {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new_3d(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Coordinates {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new_3d(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div for Coordinates {
    type Output = Self;
    /// Component-wise division. Panics if any component of `rhs` is zero.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new_3d(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A `width × height` rectangle anchored at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.width * self.height
    }

    /// Whether the rectangle has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `c` is inside the rectangle.
    #[inline]
    pub fn contains(self, c: Coordinates) -> bool {
        c.in_bounds(self.width as i64, self.height as i64)
    }

    /// Flat row-major index of `c`, or `None` if it is outside.
    #[inline]
    pub fn index(self, c: Coordinates) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.y as usize * self.width + c.x as usize)
    }

    /// Row-major iterator over every position (y outer, x inner).
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Coordinates::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coordinates;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Coordinates,
}

impl Iterator for BoundsIter {
    type Item = Coordinates;

    #[inline]
    fn next(&mut self) -> Option<Coordinates> {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.height as i64 {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.bounds.width as i64 {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.height as i64 {
            return (0, Some(0));
        }
        let remaining_in_row = self.bounds.width - self.cur.x as usize;
        let remaining_rows = self.bounds.height - self.cur.y as usize - 1;
        let total = remaining_in_row + remaining_rows * self.bounds.width;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coordinates_arithmetic() {
        let a = Coordinates::new_3d(1, 2, 3);
        let b = Coordinates::new_3d(4, 6, 9);
        assert!((a + b).eq_3d(Coordinates::new_3d(5, 8, 12)));
        assert!((b - a).eq_3d(Coordinates::new_3d(3, 4, 6)));
        assert!((a * b).eq_3d(Coordinates::new_3d(4, 12, 27)));
        assert!((b / a).eq_3d(Coordinates::new_3d(4, 3, 3)));
    }

    #[test]
    fn equality_ignores_z() {
        assert_eq!(Coordinates::new(0, 0), Coordinates::new(0, 0));
        assert_ne!(Coordinates::new(0, 0), Coordinates::new(0, 1));

        let flat = Coordinates::new(2, 3);
        let raised = Coordinates::new_3d(2, 3, 7);
        assert_eq!(flat, raised);
        assert!(!flat.eq_3d(raised));

        let mut set = HashSet::new();
        set.insert(flat);
        assert!(set.contains(&raised));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cs = vec![
            Coordinates::new(1, 1),
            Coordinates::new(0, 1),
            Coordinates::new(5, 0),
        ];
        cs.sort();
        assert_eq!(
            cs,
            vec![
                Coordinates::new(5, 0),
                Coordinates::new(0, 1),
                Coordinates::new(1, 1)
            ]
        );
    }

    #[test]
    fn step_and_move() {
        let c = Coordinates::new(5, 5);
        assert_eq!(c.moved(Direction::North), Coordinates::new(5, 4));
        assert_eq!(c.moved(Direction::SouthWest), Coordinates::new(4, 6));
        assert_eq!(c.step(Direction::East, 3), Coordinates::new(8, 5));
        assert!(c.moved(Direction::Up).eq_3d(Coordinates::new_3d(5, 5, 1)));
        assert!(c.moved(Direction::Down).eq_3d(Coordinates::new_3d(5, 5, -1)));
    }

    #[test]
    fn planar_steps_stay_on_their_level() {
        let c = Coordinates::new_3d(2, 2, 4);
        assert!(c.moved(Direction::East).eq_3d(Coordinates::new_3d(3, 2, 4)));
        assert!(c.step(Direction::NorthWest, 2).eq_3d(Coordinates::new_3d(0, 0, 4)));
        assert!(c.step(Direction::Up, 3).eq_3d(Coordinates::new_3d(2, 2, 7)));
    }

    #[test]
    fn turning_left_from_north() {
        let expected = [
            Direction::NorthWest,
            Direction::West,
            Direction::SouthWest,
            Direction::South,
            Direction::SouthEast,
            Direction::East,
            Direction::NorthEast,
            Direction::North,
        ];
        for (steps, want) in (1..=8).zip(expected) {
            assert_eq!(Direction::North.turn_left(steps), want, "{steps} steps");
        }
    }

    #[test]
    fn turning_right_from_south() {
        let expected = [
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
        ];
        for (steps, want) in (1..=8).zip(expected) {
            assert_eq!(Direction::South.turn_right(steps), want, "{steps} steps");
        }
    }

    #[test]
    fn turning_is_identity_for_zero_steps_and_vertical() {
        assert_eq!(Direction::East.turn_left(0), Direction::East);
        assert_eq!(Direction::Up.turn_left(3), Direction::Up);
        assert_eq!(Direction::Down.turn_right(5), Direction::Down);
    }

    #[test]
    fn turning_by_many_steps_wraps_around() {
        assert_eq!(Direction::North.turn_left(8_000_001), Direction::NorthWest);
        assert_eq!(Direction::North.turn_right(u32::MAX), Direction::NorthWest);
        assert_eq!(Direction::East.turn_right(16), Direction::East);
        assert_eq!(Direction::Up.turn_left(u32::MAX), Direction::Up);
    }

    #[test]
    fn distances() {
        let a = Coordinates::new(1, 1);
        let b = Coordinates::new(4, 5);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(a.euclidean_distance(b), 5);
    }

    #[test]
    fn bounds_checks() {
        assert!(Coordinates::new(0, 0).in_bounds(3, 2));
        assert!(Coordinates::new(2, 1).in_bounds(3, 2));
        assert!(!Coordinates::new(3, 0).in_bounds(3, 2));
        assert!(!Coordinates::new(0, -1).in_bounds(3, 2));
    }

    #[test]
    fn direction_to_adjacent() {
        let c = Coordinates::new(3, 3);
        assert_eq!(c.direction_to(Coordinates::new(3, 2)), Some(Direction::North));
        assert_eq!(
            c.direction_to(Coordinates::new(2, 4)),
            Some(Direction::SouthWest)
        );
        assert_eq!(c.direction_to(Coordinates::new(5, 3)), None);
    }

    #[test]
    fn neighbour_enumeration() {
        let c = Coordinates::new(1, 1);
        assert_eq!(
            c.neighbours_cardinal(),
            [
                Coordinates::new(1, 0),
                Coordinates::new(2, 1),
                Coordinates::new(1, 2),
                Coordinates::new(0, 1)
            ]
        );
        let all: HashSet<_> = c.neighbours().into_iter().collect();
        assert_eq!(all.len(), 8);
        assert!(!all.contains(&c));
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Coordinates::new(3, -4).to_string(), "3,-4");
        assert_eq!(Coordinates::new_3d(1, 2, 3).to_string(), "1,2,3");

        assert_eq!("7,8".parse::<Coordinates>().ok(), Some(Coordinates::new(7, 8)));
        let c: Coordinates = "1, 2, 3".parse().unwrap();
        assert!(c.eq_3d(Coordinates::new_3d(1, 2, 3)));

        assert!("7".parse::<Coordinates>().is_err());
        assert!("a,b".parse::<Coordinates>().is_err());
        assert!("1,2,3,4".parse::<Coordinates>().is_err());
    }

    #[test]
    fn bounds_iter_row_major() {
        let b = Bounds::new(3, 2);
        let pts: Vec<_> = b.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Coordinates::new(0, 0));
        assert_eq!(pts[2], Coordinates::new(2, 0));
        assert_eq!(pts[3], Coordinates::new(0, 1));
        assert_eq!(pts[5], Coordinates::new(2, 1));
        assert_eq!(b.iter().len(), 6);
    }

    #[test]
    fn bounds_index() {
        let b = Bounds::new(4, 3);
        assert_eq!(b.index(Coordinates::new(0, 0)), Some(0));
        assert_eq!(b.index(Coordinates::new(3, 2)), Some(11));
        assert_eq!(b.index(Coordinates::new(4, 0)), None);
        assert!(Bounds::new(0, 5).is_empty());
        assert_eq!(Bounds::new(0, 5).iter().count(), 0);
    }
}
