//! Read-only state lent to a behavior model for one decision.

use evac_core::{Cell, Tick};
use evac_grid::OccupancyGrid;

/// What an agent may look at when deciding.
///
/// Built by the simulation for each activation, so it always reflects the
/// moves already applied earlier in the same tick.
pub struct StepContext<'a> {
    pub tick: Tick,

    /// Current occupancy, including the obstacle field.
    pub occupancy: &'a OccupancyGrid,

    /// The single cell every agent is attracted to.
    pub exit: Cell,
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(tick: Tick, occupancy: &'a OccupancyGrid, exit: Cell) -> Self {
        Self { tick, occupancy, exit }
    }

    /// `true` if the exit lies in the vision area around `from`.
    ///
    /// The vision area is `neighbors(from, vision, include_center = false)`,
    /// i.e. every cell at Chebyshev distance `1..=vision`.  Standing on the
    /// exit does not count as seeing it, and a vision of 0 sees nothing.
    #[inline]
    pub fn exit_visible(&self, from: Cell, vision: u32) -> bool {
        let d = from.chebyshev(self.exit);
        d >= 1 && d <= vision
    }

    /// Adjacent cells an agent at `from` could step onto right now, in
    /// N, NE, E, SE, S, SW, W, NW order.  Obstacles and full cells are
    /// filtered out.
    pub fn open_steps(&self, from: Cell) -> Vec<Cell> {
        self.occupancy
            .neighbors(from, 1, false)
            .into_iter()
            .filter(|&c| self.occupancy.can_enter(c))
            .collect()
    }
}
