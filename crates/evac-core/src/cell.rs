//! Grid coordinates and the distance metrics the movement rules use.
//!
//! `x` is the column and `y` the row, with `y` growing downwards, so "north"
//! is `y - 1`.  Coordinates are signed so that neighborhood offsets can step
//! off the grid; callers clip against the grid bounds.

use std::fmt;

/// An integer grid coordinate.  A value, not an object.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.  May lie outside any grid.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy)
    }

    /// Chessboard distance: the ring index of `other` around `self`.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Straight-line distance.
    #[inline]
    pub fn euclidean(self, other: Cell) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// The `8 * d` cells at Chebyshev distance exactly `d`, unclipped.
    ///
    /// The ring is walked clockwise starting due north, so ring 1 comes out
    /// as N, NE, E, SE, S, SW, W, NW.  Ring 0 is empty.
    pub fn ring(self, d: u32) -> impl Iterator<Item = Cell> {
        let r = d as i32;
        let top_east    = (0..=r).map(move |dx| (dx, -r));
        let east_down   = (-r + 1..=r).map(move |dy| (r, dy));
        let bottom_west = (-r..r).rev().map(move |dx| (dx, r));
        let west_up     = (-r..r).rev().map(move |dy| (-r, dy));
        let top_back    = (-r + 1..0).map(move |dx| (dx, -r));

        top_east
            .chain(east_down)
            .chain(bottom_west)
            .chain(west_up)
            .chain(top_back)
            .take(8 * d as usize)
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
