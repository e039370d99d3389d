//! Boundary exit discovery.

use evac_core::Cell;

use crate::ObstacleGrid;

/// Every walkable cell on the grid border, in scan order.
///
/// Scan order: the top row left→right, the bottom row left→right, then the
/// left column top→bottom and the right column top→bottom, both without
/// their corner cells.  Each border cell is visited once even when the grid
/// is a single row or column.
///
/// The result is empty when the whole border is blocked; callers treat that
/// as a configuration error.  The simulation designates one of the returned
/// cells as the exit target.
pub fn find_boundary_exits(grid: &ObstacleGrid) -> Vec<Cell> {
    let w = grid.width() as i32;
    let h = grid.height() as i32;

    let top = (0..w).map(|x| Cell::new(x, 0));
    let bottom = (0..w)
        .filter(move |_| h > 1)
        .map(move |x| Cell::new(x, h - 1));
    let left = (1..h - 1).map(|y| Cell::new(0, y));
    let right = (1..h - 1)
        .filter(move |_| w > 1)
        .map(move |y| Cell::new(w - 1, y));

    top.chain(bottom)
        .chain(left)
        .chain(right)
        .filter(|&c| !grid.is_obstacle(c))
        .collect()
}
