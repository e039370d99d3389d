//! The immutable obstacle field.
//!
//! Stored row-major as a flat `Vec<bool>` (`true` = obstacle); the cell
//! `(x, y)` lives at `y * width + x`.  Nothing mutates the field after
//! construction.

use evac_core::Cell;

use crate::{GridError, GridResult};

/// Walkable/blocked field plus bounds.  The ground truth every other
/// component queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleGrid {
    width:   usize,
    height:  usize,
    blocked: Vec<bool>,
}

impl ObstacleGrid {
    /// Build from a row-major matrix indexed `[row][col]`, `true` = obstacle.
    ///
    /// # Errors
    ///
    /// `InvalidMatrix` if the matrix has no rows, no columns, or rows of
    /// unequal length.
    pub fn from_matrix<R: AsRef<[bool]>>(rows: &[R]) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(GridError::InvalidMatrix("matrix is empty".into()));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(GridError::InvalidMatrix(format!("{width}x{height} is too large")));
        }

        let mut blocked = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::InvalidMatrix(format!(
                    "row {y} has {} columns, expected {width}",
                    row.len()
                )));
            }
            blocked.extend_from_slice(row);
        }
        Ok(Self { width, height, blocked })
    }

    /// A `width × height` grid with no obstacles at all.
    pub fn open(width: usize, height: usize) -> GridResult<Self> {
        Self::from_matrix(&vec![vec![false; width]; height])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.blocked.len()
    }

    /// `true` if `cell` lies on the grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// `true` if `cell` is blocked.  Off-grid cells count as blocked.
    #[inline]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.index_of(cell).is_none_or(|i| self.blocked[i])
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    /// Flat row-major index of an in-bounds cell.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.width + cell.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Every in-bounds cell within Chebyshev distance `radius` of `center`.
    ///
    /// Order: `center` first when `include_center` is set, then ring 1, ring
    /// 2, … each walked clockwise from due north (see [`Cell::ring`]).  For
    /// radius 1 that is N, NE, E, SE, S, SW, W, NW, which is the tie-break
    /// order of the greedy movement rule.
    pub fn neighborhood(&self, center: Cell, radius: u32, include_center: bool) -> Vec<Cell> {
        let mut out = Vec::new();
        if include_center && self.in_bounds(center) {
            out.push(center);
        }
        // Rings beyond the longer side lie entirely off the grid.
        let radius = radius.min(self.width.max(self.height) as u32);
        for d in 1..=radius {
            out.extend(center.ring(d).filter(|&c| self.in_bounds(c)));
        }
        out
    }
}
