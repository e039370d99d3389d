//! Run configuration.

use crate::{ConfigError, ConfigResult};

/// Maximum number of agents that may share one cell.  Fixed for every run.
pub const CELL_CAPACITY: usize = 8;

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from a JSON file by the application
/// crate (with the `serde` feature) and handed to `evac_sim::SimBuilder`.
/// The obstacle matrix is supplied separately; grid wrap-around is always
/// disabled and cell capacity is [`CELL_CAPACITY`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Size of the initial population.
    pub num_agents: usize,

    /// Chebyshev radius within which an agent perceives the exit.
    pub agent_vision: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Random draws allowed per agent during initial placement before the
    /// build gives up with a placement error.
    pub placement_attempts: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_agents:         100,
            agent_vision:       5,
            seed:               42,
            placement_attempts: 10_000,
        }
    }
}

impl SimConfig {
    /// Configuration for `num_agents` agents, everything else default.
    pub fn with_agents(num_agents: usize) -> Self {
        Self { num_agents, ..Self::default() }
    }

    /// Reject configurations that can never run.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_agents == 0 {
            return Err(ConfigError::NoAgents);
        }
        if self.agent_vision == 0 {
            return Err(ConfigError::ZeroVision);
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        Ok(())
    }
}
