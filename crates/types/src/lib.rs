//! Core types for the lurker gym.
//!
//! This crate provides the data types shared between the strategies, the
//! LMSR market maker and the simulation host: share quantities, order sides,
//! binary signals, trade ledger entries and per-run parameters.
//!
//! Prices and beliefs are plain `f64` on the `[0, 100]` scale, where a share
//! pays out 100 if the underlying event resolves at value 1.

use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::fmt;

mod trade;

pub use trade::{RunParameters, TradeRecord};

// =============================================================================
// Constants
// =============================================================================

/// Upper bound of the belief / price scale.
pub const BELIEF_SCALE: f64 = 100.0;

/// Belief of maximal uncertainty.
pub const NEUTRAL_BELIEF: f64 = BELIEF_SCALE / 2.0;

// =============================================================================
// Core ID Types
// =============================================================================

/// Unique identifier for a participant in one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent({})", self.0)
    }
}

// =============================================================================
// Time Types
// =============================================================================

/// Simulation timestep (discrete trading round).
pub type Tick = u64;

// =============================================================================
// Quantity Type (Newtype for shares)
// =============================================================================

/// Number of shares (newtype for type safety).
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Sum,
    From,
    Into,
)]
pub struct Quantity(pub u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Get raw value.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Check if zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Quantity as a float, for pricing math.
    #[inline]
    pub fn to_float(self) -> f64 {
        self.0 as f64
    }

    /// Integer halving, never going below `floor`.
    #[inline]
    pub fn halve_floored(self, floor: Quantity) -> Self {
        Quantity((self.0 / 2).max(floor.0))
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qty({})", self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Allow `quantity == 27` comparisons
impl PartialEq<u64> for Quantity {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Order Side
// =============================================================================

/// Direction of an order against the market maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// +1 for buys, -1 for sells. Multiplies a quantity into a position delta.
    pub fn sign(self) -> i64 {
        match self {
            Side::Buy => 1,
            Side::Sell => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

// =============================================================================
// Signal
// =============================================================================

/// One noisy binary observation of the underlying value.
///
/// The host draws `One` with probability equal to the current true value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Zero,
    One,
}

impl Signal {
    /// Numeric value of the signal (0.0 or 1.0).
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Signal::Zero => 0.0,
            Signal::One => 1.0,
        }
    }
}

impl From<bool> for Signal {
    fn from(hit: bool) -> Self {
        if hit { Signal::One } else { Signal::Zero }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Zero => write!(f, "0"),
            Signal::One => write!(f, "1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_halving_floors() {
        assert_eq!(Quantity(20).halve_floored(Quantity(2)), Quantity(10));
        assert_eq!(Quantity(5).halve_floored(Quantity(2)), Quantity(2));
        assert_eq!(Quantity(3).halve_floored(Quantity(2)), Quantity(2));
        assert_eq!(Quantity(2).halve_floored(Quantity(2)), Quantity(2));
    }

    #[test]
    fn test_side_sign_and_display() {
        assert_eq!(Side::Buy.sign(), 1);
        assert_eq!(Side::Sell.sign(), -1);
        assert_eq!(Side::Sell.to_string(), "SELL");
    }

    #[test]
    fn test_signal_from_bool() {
        assert_eq!(Signal::from(true), Signal::One);
        assert_eq!(Signal::from(false).value(), 0.0);
        assert_eq!(Signal::One.value(), 1.0);
    }
}
