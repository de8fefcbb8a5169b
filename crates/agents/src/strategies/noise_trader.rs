//! Noise Trader - generates uninformed market activity.
//!
//! Trades a random side and size at random opportunities, ignoring its
//! signals entirely. Noise traders keep the trade ledger non-empty and push
//! the market maker's belief around, which gives informed participants
//! something to trade against.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use types::{Quantity, RunParameters, Side, Signal, Tick, TradeRecord};

use crate::{MarketAccess, Trader};

/// Configuration for a NoiseTrader agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseTraderConfig {
    /// Probability of trading at each opportunity (0.0 to 1.0).
    pub order_probability: f64,
    /// Minimum order size.
    pub min_quantity: u64,
    /// Maximum order size.
    pub max_quantity: u64,
}

impl Default for NoiseTraderConfig {
    fn default() -> Self {
        Self {
            order_probability: 0.5,
            min_quantity: 1,
            max_quantity: 20,
        }
    }
}

/// A random trader that generates market activity.
pub struct NoiseTrader {
    /// Configuration.
    config: NoiseTraderConfig,
    /// Random number generator (Send-compatible).
    rng: StdRng,
}

impl NoiseTrader {
    /// Create a new NoiseTrader with the given configuration.
    pub fn new(config: NoiseTraderConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a new NoiseTrader with a specific seed (for reproducible testing).
    pub fn with_seed(config: NoiseTraderConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a NoiseTrader with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(NoiseTraderConfig::default())
    }

    /// Draw a random order, or `None` if the trader sits this one out.
    fn generate_order(&mut self) -> Option<(Side, Quantity)> {
        if !self.rng.random_bool(self.config.order_probability.clamp(0.0, 1.0)) {
            return None;
        }

        let side = if self.rng.random_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        };

        let min = self.config.min_quantity.max(1);
        let max = self.config.max_quantity.max(min);
        Some((side, Quantity(self.rng.random_range(min..=max))))
    }
}

impl Trader for NoiseTrader {
    fn configure(&mut self, _params: &RunParameters) {}

    fn observe(&mut self, _signal: Signal, _tick: Tick) {}

    fn record_trades(&mut self, _trades: &[TradeRecord], _tick: Tick) {}

    fn act(&mut self, market: &mut dyn MarketAccess, _market_belief: f64) {
        if let Some((side, quantity)) = self.generate_order() {
            market.execute(side, quantity);
        }
    }

    fn name(&self) -> &str {
        "NoiseTrader"
    }
}
