//! The outcome of one agent activation.

use evac_core::Cell;

/// What an agent wants to do this tick.
///
/// `Approach` and `Wander` carry `None` when no adjacent cell was open; the
/// agent then stays put but still counts as having attempted a move (its
/// `previous_position` is refreshed).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The agent stands on the exit and leaves the simulation.
    Exit,

    /// Greedy step toward the visible exit.
    Approach(Option<Cell>),

    /// Random step; the exit is out of sight.
    Wander(Option<Cell>),

    /// Do nothing at all this tick.
    Hold,
}

impl Decision {
    /// The destination cell, if the decision moves the agent.
    #[inline]
    pub fn target(self) -> Option<Cell> {
        match self {
            Decision::Approach(target) | Decision::Wander(target) => target,
            Decision::Exit | Decision::Hold => None,
        }
    }

    /// `true` for `Approach` and `Wander`, whether or not a cell was found.
    #[inline]
    pub fn is_move_attempt(self) -> bool {
        matches!(self, Decision::Approach(_) | Decision::Wander(_))
    }
}
