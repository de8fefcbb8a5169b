//! Error types for simulation setup.

use sim_core::SimCoreError;
use thiserror::Error;
use types::Tick;

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Invalid simulation or experiment configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("simulation needs at least one timestep")]
    ZeroTimesteps,

    #[error("jump location {location} is outside a run of {timesteps} timesteps")]
    JumpLocationOutOfRange { location: Tick, timesteps: Tick },

    #[error("jump probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("jump standard deviation must be finite and non-negative, got {0}")]
    InvalidJumpStdDev(f64),

    #[error("experiment needs at least one simulation")]
    NoSimulations,

    #[error(transparent)]
    Market(#[from] SimCoreError),
}
