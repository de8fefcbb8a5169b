//! Logarithmic market scoring rule market maker for a binary outcome.
//!
//! The maker tracks `q`, the net number of shares it has sold. Its cost
//! function is
//!
//! ```text
//! C(q) = 100 · b · ln(1 + e^(q / b))
//! ```
//!
//! so trading `n` shares costs `C(q + n) - C(q)` and the marginal price is
//! `100 · σ(q / b)`, which doubles as the maker's public belief. Larger `b`
//! means prices move less per share and the maker can lose more.

use serde::{Deserialize, Serialize};
use types::{BELIEF_SCALE, Quantity, Side};

use crate::error::{Result, SimCoreError};

/// Liquidity used by the reference experiments.
pub const DEFAULT_LIQUIDITY: f64 = 250.0;

/// Numerically stable `ln(1 + e^x)`.
#[inline]
fn softplus(x: f64) -> f64 {
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}

/// Numerically stable logistic function.
#[inline]
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Binary-outcome LMSR market maker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LmsrMarketMaker {
    /// Liquidity parameter `b`.
    liquidity: f64,
    /// Net shares sold to participants (negative when participants are net short).
    outstanding: f64,
}

impl LmsrMarketMaker {
    /// Create a maker with liquidity `b`, starting at belief 50.
    pub fn new(liquidity: f64) -> Result<Self> {
        if !liquidity.is_finite() || liquidity <= 0.0 {
            return Err(SimCoreError::InvalidLiquidity(liquidity));
        }
        Ok(Self {
            liquidity,
            outstanding: 0.0,
        })
    }

    /// Create a maker whose opening belief is `belief` (strictly inside `(0, 100)`).
    pub fn with_initial_belief(liquidity: f64, belief: f64) -> Result<Self> {
        if !(belief > 0.0 && belief < BELIEF_SCALE) {
            return Err(SimCoreError::InvalidBelief(belief));
        }
        let mut maker = Self::new(liquidity)?;
        let p = belief / BELIEF_SCALE;
        maker.outstanding = liquidity * (p / (1.0 - p)).ln();
        Ok(maker)
    }

    /// Liquidity parameter `b`.
    pub fn liquidity(&self) -> f64 {
        self.liquidity
    }

    /// Net shares outstanding.
    pub fn outstanding(&self) -> f64 {
        self.outstanding
    }

    /// Marginal price, i.e. the maker's current belief on the `[0, 100]` scale.
    pub fn belief(&self) -> f64 {
        BELIEF_SCALE * sigmoid(self.outstanding / self.liquidity)
    }

    fn cost(&self, outstanding: f64) -> f64 {
        BELIEF_SCALE * self.liquidity * softplus(outstanding / self.liquidity)
    }

    /// Per-share price of trading `quantity` on `side` at the current state.
    ///
    /// Zero quantity returns the marginal price.
    pub fn quote(&self, side: Side, quantity: Quantity) -> f64 {
        if quantity.is_zero() {
            return self.belief();
        }
        let n = quantity.to_float();
        let total = match side {
            Side::Buy => self.cost(self.outstanding + n) - self.cost(self.outstanding),
            Side::Sell => self.cost(self.outstanding) - self.cost(self.outstanding - n),
        };
        total / n
    }

    /// Fill an order and return the per-share price paid (buy) or received (sell).
    pub fn execute(&mut self, side: Side, quantity: Quantity) -> f64 {
        let price = self.quote(side, quantity);
        self.outstanding += side.sign() as f64 * quantity.to_float();
        price
    }
}

impl Default for LmsrMarketMaker {
    fn default() -> Self {
        Self {
            liquidity: DEFAULT_LIQUIDITY,
            outstanding: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_even_odds() {
        let maker = LmsrMarketMaker::new(250.0).unwrap();
        assert!((maker.belief() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_liquidity() {
        assert_eq!(
            LmsrMarketMaker::new(0.0),
            Err(SimCoreError::InvalidLiquidity(0.0))
        );
        assert!(LmsrMarketMaker::new(f64::NAN).is_err());
        assert!(LmsrMarketMaker::new(-5.0).is_err());
    }

    #[test]
    fn test_initial_belief() {
        let maker = LmsrMarketMaker::with_initial_belief(150.0, 80.0).unwrap();
        assert!((maker.belief() - 80.0).abs() < 1e-9);
        assert!(LmsrMarketMaker::with_initial_belief(150.0, 100.0).is_err());
        assert!(LmsrMarketMaker::with_initial_belief(150.0, 0.0).is_err());
    }

    #[test]
    fn test_spread_around_belief() {
        let maker = LmsrMarketMaker::default();
        let belief = maker.belief();
        let buy = maker.quote(Side::Buy, Quantity(20));
        let sell = maker.quote(Side::Sell, Quantity(20));
        assert!(buy > belief);
        assert!(sell < belief);
        assert_eq!(maker.quote(Side::Buy, Quantity::ZERO), belief);
    }

    #[test]
    fn test_larger_blocks_cost_more_per_share() {
        let maker = LmsrMarketMaker::default();
        assert!(maker.quote(Side::Buy, Quantity(50)) > maker.quote(Side::Buy, Quantity(5)));
        assert!(maker.quote(Side::Sell, Quantity(50)) < maker.quote(Side::Sell, Quantity(5)));
    }

    #[test]
    fn test_execute_moves_belief() {
        let mut maker = LmsrMarketMaker::default();
        let quoted = maker.quote(Side::Buy, Quantity(30));
        let paid = maker.execute(Side::Buy, Quantity(30));
        assert_eq!(quoted, paid);
        assert!(maker.belief() > 50.0);
        assert_eq!(maker.outstanding(), 30.0);

        maker.execute(Side::Sell, Quantity(30));
        assert!((maker.belief() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_is_path_independent() {
        let mut maker = LmsrMarketMaker::default();
        let paid = maker.execute(Side::Buy, Quantity(40));
        let received = maker.execute(Side::Sell, Quantity(40));
        assert!((paid - received).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_positions_stay_finite() {
        let mut maker = LmsrMarketMaker::new(10.0).unwrap();
        maker.execute(Side::Buy, Quantity(100_000));
        assert!(maker.belief() <= 100.0);
        assert!(maker.quote(Side::Buy, Quantity(10)).is_finite());
        assert!(maker.quote(Side::Sell, Quantity(10)).is_finite());
    }
}
