//! Error types for sim-core operations.

use thiserror::Error;

/// Result type for sim-core operations.
pub type Result<T> = std::result::Result<T, SimCoreError>;

/// Errors that can occur while building a market.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimCoreError {
    /// LMSR liquidity parameter must be finite and positive.
    #[error("liquidity must be finite and positive, got {0}")]
    InvalidLiquidity(f64),
    /// Starting belief must lie strictly inside the belief scale.
    #[error("initial belief must be strictly between 0 and 100, got {0}")]
    InvalidBelief(f64),
}
