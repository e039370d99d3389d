//! Configuration error type.
//!
//! Grid, placement and runtime errors live in the crates that raise them;
//! `evac-sim` wraps this type as `SimError::Config`.

use thiserror::Error;

/// A run configuration that can never produce a valid simulation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("agent count must be positive")]
    NoAgents,

    #[error("agent vision must be positive")]
    ZeroVision,

    #[error("placement attempt budget must be positive")]
    ZeroPlacementAttempts,
}

/// Shorthand result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
