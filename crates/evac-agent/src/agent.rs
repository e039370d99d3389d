//! A single evacuee.

use evac_core::{AgentId, Cell};

/// Lifecycle of an agent.  `Exited` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    #[default]
    Active,
    Exited,
}

/// A mobile agent.
///
/// `position` mirrors the agent's entry in the occupancy grid; the simulation
/// updates both together.  `None` means "not on the grid", either before
/// placement or after exiting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,

    /// Chebyshev radius within which the exit is visible.
    pub vision: u32,

    pub position: Option<Cell>,

    /// Where the agent stood before its last movement attempt.
    pub previous_position: Option<Cell>,

    pub state: AgentState,
}

impl Agent {
    /// A fresh, unplaced, active agent.
    pub fn new(id: AgentId, vision: u32) -> Self {
        Self {
            id,
            vision,
            position: None,
            previous_position: None,
            state: AgentState::Active,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == AgentState::Active
    }

    #[inline]
    pub fn has_exited(&self) -> bool {
        self.state == AgentState::Exited
    }

    /// Transition to `Exited` and drop off the grid.
    pub fn mark_exited(&mut self) {
        self.previous_position = self.position.take();
        self.state = AgentState::Exited;
    }
}
