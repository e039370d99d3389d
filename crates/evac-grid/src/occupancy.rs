//! The capacity-limited multi-occupancy grid.
//!
//! # Invariants
//!
//! - `count(cell) <= capacity` for every cell at all times.
//! - An agent occupies exactly one cell or is absent.
//! - `positions` and `cells` always agree: `positions[a] == c` iff `a` is in
//!   `cells[c]`.
//!
//! Every mutation goes through [`place`](OccupancyGrid::place),
//! [`move_agent`](OccupancyGrid::move_agent) or
//! [`remove`](OccupancyGrid::remove).  A failed call leaves the grid exactly
//! as it was.

use std::collections::{BTreeMap, HashMap};

use evac_core::{AgentId, CELL_CAPACITY, Cell};

use crate::{GridError, GridResult, ObstacleGrid};

/// Maps each cell to the ordered list of agents standing on it.
pub struct OccupancyGrid {
    obstacles: ObstacleGrid,
    capacity:  usize,
    /// Occupants per cell, row-major, in arrival order.
    cells:     Vec<Vec<AgentId>>,
    /// Reverse index: where each placed agent stands.
    positions: HashMap<AgentId, Cell>,
}

impl OccupancyGrid {
    /// An empty occupancy grid over `obstacles` with the standard
    /// [`CELL_CAPACITY`].
    pub fn new(obstacles: ObstacleGrid) -> Self {
        Self::with_capacity(obstacles, CELL_CAPACITY)
    }

    /// An empty occupancy grid with a custom per-cell capacity.
    pub fn with_capacity(obstacles: ObstacleGrid, capacity: usize) -> Self {
        let cells = vec![Vec::new(); obstacles.cell_count()];
        Self {
            obstacles,
            capacity,
            cells,
            positions: HashMap::new(),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The obstacle field this grid was built over.
    #[inline]
    pub fn obstacles(&self) -> &ObstacleGrid {
        &self.obstacles
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// See [`ObstacleGrid::neighborhood`].
    #[inline]
    pub fn neighbors(&self, cell: Cell, radius: u32, include_center: bool) -> Vec<Cell> {
        self.obstacles.neighborhood(cell, radius, include_center)
    }

    /// Agents on `cell`, in arrival order.  Empty for off-grid cells.
    pub fn occupants(&self, cell: Cell) -> &[AgentId] {
        match self.obstacles.index_of(cell) {
            Some(i) => &self.cells[i],
            None => &[],
        }
    }

    #[inline]
    pub fn count(&self, cell: Cell) -> usize {
        self.occupants(cell).len()
    }

    /// `true` if another agent could step onto `cell` right now.
    #[inline]
    pub fn can_enter(&self, cell: Cell) -> bool {
        !self.obstacles.is_obstacle(cell) && self.count(cell) < self.capacity
    }

    /// Where `agent` stands, if it is on the grid.
    #[inline]
    pub fn position_of(&self, agent: AgentId) -> Option<Cell> {
        self.positions.get(&agent).copied()
    }

    /// Total number of agents on the grid.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.positions.len()
    }

    /// Occupant count per occupied cell.  Empty cells are omitted.
    pub fn density(&self) -> BTreeMap<Cell, usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, agents)| !agents.is_empty())
            .map(|(i, agents)| (self.obstacles.cell_at(i), agents.len()))
            .collect()
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Put an unplaced agent on `cell`.
    ///
    /// # Errors
    ///
    /// `AlreadyPlaced`, or any destination error (see `move_agent`).
    pub fn place(&mut self, agent: AgentId, cell: Cell) -> GridResult<()> {
        if self.positions.contains_key(&agent) {
            return Err(GridError::AlreadyPlaced(agent));
        }
        let dest = self.check_destination(cell)?;
        self.cells[dest].push(agent);
        self.positions.insert(agent, cell);
        Ok(())
    }

    /// Relocate a placed agent to `cell` in one step.
    ///
    /// The source count drops and the destination count rises together; no
    /// caller can observe the agent on both cells or on neither.  Moving onto
    /// the cell the agent already occupies is a no-op.
    ///
    /// # Errors
    ///
    /// `NotPlaced`, `OutOfBounds`, `Obstructed`, or `CapacityExceeded`.  On
    /// error the agent stays where it was.
    pub fn move_agent(&mut self, agent: AgentId, cell: Cell) -> GridResult<()> {
        let from = self.position_of(agent).ok_or(GridError::NotPlaced(agent))?;
        if from == cell {
            return Ok(());
        }
        let dest = self.check_destination(cell)?;
        self.detach(agent, from);
        self.cells[dest].push(agent);
        self.positions.insert(agent, cell);
        Ok(())
    }

    /// Take `agent` off the grid, returning the cell it stood on.
    pub fn remove(&mut self, agent: AgentId) -> GridResult<Cell> {
        let from = self.positions.remove(&agent).ok_or(GridError::NotPlaced(agent))?;
        self.detach(agent, from);
        Ok(from)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_destination(&self, cell: Cell) -> GridResult<usize> {
        let index = self.obstacles.index_of(cell).ok_or(GridError::OutOfBounds(cell))?;
        if self.obstacles.is_obstacle(cell) {
            return Err(GridError::Obstructed(cell));
        }
        if self.cells[index].len() >= self.capacity {
            return Err(GridError::CapacityExceeded { cell, capacity: self.capacity });
        }
        Ok(index)
    }

    /// Drop `agent` from the occupant list of `from`, keeping arrival order.
    fn detach(&mut self, agent: AgentId, from: Cell) {
        if let Some(i) = self.obstacles.index_of(from) {
            self.cells[i].retain(|&a| a != agent);
        }
    }
}
