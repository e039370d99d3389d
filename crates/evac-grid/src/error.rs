//! Grid-subsystem error type.

use thiserror::Error;

use evac_core::{AgentId, Cell};

/// Errors produced by `evac-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("cell {0} is an obstacle")]
    Obstructed(Cell),

    #[error("cell {cell} already holds {capacity} agents")]
    CapacityExceeded { cell: Cell, capacity: usize },

    #[error("agent {0} is already on the grid")]
    AlreadyPlaced(AgentId),

    #[error("agent {0} is not on the grid")]
    NotPlaced(AgentId),

    #[error("invalid obstacle matrix: {0}")]
    InvalidMatrix(String),

    #[error("floor plan parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

impl GridError {
    /// `true` for the two outcomes that merely reject a move attempt.
    ///
    /// The tick loop absorbs these (the agent stays where it is); any other
    /// variant raised during a tick means the grid and population disagree.
    pub fn is_rejection(&self) -> bool {
        matches!(self, GridError::CapacityExceeded { .. } | GridError::Obstructed(_))
    }
}

pub type GridResult<T> = Result<T, GridError>;
