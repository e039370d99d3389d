use evac_core::{Cell, ConfigError};
use evac_grid::GridError;
use thiserror::Error;

/// Errors raised while building or running a simulation.
///
/// Everything except `Grid` is a configuration problem detected before the
/// first tick.  `Grid` during a tick means the occupancy grid and the
/// population disagree; ordinary move rejections never surface here.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("no walkable cell on the grid border to use as an exit")]
    NoExit,

    #[error("exit target {0} is not a walkable border cell")]
    ExitNotOnBoundary(Cell),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("placed {placed} of {requested} agents: {reason}")]
    Placement {
        placed:    usize,
        requested: usize,
        reason:    String,
    },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
