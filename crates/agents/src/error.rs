//! Error types for strategy configuration.

use thiserror::Error;

/// Result type for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;

/// A strategy configuration that would break a trader's invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    #[error("smoothing must be within [0, 1], got {0}")]
    InvalidSmoothing(f64),

    #[error("initial belief must be within [0, 100], got {0}")]
    InvalidInitialBelief(f64),

    #[error("belief bounds must satisfy 0 <= floor <= ceiling <= 100, got [{floor}, {ceiling}]")]
    InvalidBeliefBounds { floor: f64, ceiling: f64 },

    #[error("market weight must be finite and non-negative, got {0}")]
    InvalidMarketWeight(f64),

    #[error("lurk threshold must be finite, got {0}")]
    InvalidLurkThreshold(f64),

    #[error("minimum block must be at least one share")]
    ZeroMinBlock,
}
