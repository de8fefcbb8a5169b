//! Trade ledger entries and per-run parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Quantity, Side, Tick};

/// One executed trade against the market maker, as every participant sees it.
///
/// The host hands participants the full cumulative list of these before each
/// trading opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Per-share execution price on the `[0, 100]` scale.
    pub price: f64,
    /// Whether the participant bought from or sold to the market maker.
    pub side: Side,
    /// Number of shares traded.
    pub quantity: Quantity,
    /// Market maker belief immediately before the trade.
    pub prior_market_belief: f64,
}

impl TradeRecord {
    pub fn new(price: f64, side: Side, quantity: Quantity, prior_market_belief: f64) -> Self {
        Self {
            price,
            side,
            quantity,
            prior_market_belief,
        }
    }
}

impl fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {:.2} (prior belief {:.2})",
            self.side, self.quantity, self.price, self.prior_market_belief
        )
    }
}

/// Parameters handed to every participant once at the start of a run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunParameters {
    /// Number of trading opportunities in the run.
    pub timesteps: Tick,
    /// Timesteps at which the underlying value may jump.
    pub jump_locations: Vec<Tick>,
    /// Probability of a jump at each entry of `jump_locations`.
    pub jump_probability: Vec<f64>,
}

impl RunParameters {
    pub fn new(timesteps: Tick, jump_locations: Vec<Tick>, jump_probability: Vec<f64>) -> Self {
        Self {
            timesteps,
            jump_locations,
            jump_probability,
        }
    }

    /// Fraction of the run elapsed at `tick`.
    ///
    /// A run with zero timesteps counts as fully elapsed.
    pub fn elapsed_fraction(&self, tick: Tick) -> f64 {
        if self.timesteps == 0 {
            return 1.0;
        }
        tick as f64 / self.timesteps as f64
    }

    /// Iterate `(location, probability)` pairs.
    pub fn jumps(&self) -> impl Iterator<Item = (Tick, f64)> + '_ {
        self.jump_locations
            .iter()
            .copied()
            .zip(self.jump_probability.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_fraction() {
        let params = RunParameters::new(100, vec![], vec![]);
        assert_eq!(params.elapsed_fraction(25), 0.25);
        assert_eq!(params.elapsed_fraction(0), 0.0);
    }

    #[test]
    fn test_elapsed_fraction_zero_timesteps() {
        let params = RunParameters::default();
        assert_eq!(params.elapsed_fraction(0), 1.0);
    }

    #[test]
    fn test_jump_pairs() {
        let params = RunParameters::new(100, vec![10, 50], vec![0.1, 0.2]);
        let pairs: Vec<_> = params.jumps().collect();
        assert_eq!(pairs, vec![(10, 0.1), (50, 0.2)]);
    }
}
