//! Informed Trader - trades its running signal average against the quote.
//!
//! Estimates the underlying value as the share of `One` signals seen so far,
//! starting from a single pseudo-observation at 1/2. It buys when the market
//! maker sells below that estimate by more than `edge`, and sells when the
//! market maker buys above it. Unlike the lurker it trades from the first
//! timestep, so it is the participant that moves prices early in a run.

use serde::{Deserialize, Serialize};
use types::{BELIEF_SCALE, Quantity, RunParameters, Side, Signal, Tick, TradeRecord};

use crate::{MarketAccess, Trader};

/// Configuration for an InformedTrader agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InformedTraderConfig {
    /// Shares per order.
    pub quantity: u64,
    /// Minimum mispricing (belief points) before trading.
    pub edge: f64,
}

impl Default for InformedTraderConfig {
    fn default() -> Self {
        Self {
            quantity: 10,
            edge: 5.0,
        }
    }
}

/// Frequency-count estimator of the true value.
pub struct InformedTrader {
    config: InformedTraderConfig,
    ones: u64,
    seen: u64,
}

impl InformedTrader {
    /// Create a new InformedTrader with the given configuration.
    pub fn new(config: InformedTraderConfig) -> Self {
        Self {
            config,
            ones: 0,
            seen: 0,
        }
    }

    /// Create an InformedTrader with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(InformedTraderConfig::default())
    }

    /// Current estimate on the `[0, 100]` scale.
    pub fn estimate(&self) -> f64 {
        // One pseudo-observation at 1/2 keeps the estimate off the bounds.
        (self.ones as f64 + 0.5) / (self.seen as f64 + 1.0) * BELIEF_SCALE
    }
}

impl Trader for InformedTrader {
    fn configure(&mut self, _params: &RunParameters) {
        self.ones = 0;
        self.seen = 0;
    }

    fn observe(&mut self, signal: Signal, _tick: Tick) {
        self.seen += 1;
        if signal == Signal::One {
            self.ones += 1;
        }
    }

    fn record_trades(&mut self, _trades: &[TradeRecord], _tick: Tick) {}

    fn act(&mut self, market: &mut dyn MarketAccess, _market_belief: f64) {
        let quantity = Quantity(self.config.quantity.max(1));
        let estimate = self.estimate();

        if market.quote(Side::Buy, quantity) + self.config.edge < estimate {
            market.execute(Side::Buy, quantity);
        } else if market.quote(Side::Sell, quantity) - self.config.edge > estimate {
            market.execute(Side::Sell, quantity);
        }
    }

    fn name(&self) -> &str {
        "InformedTrader"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMarket {
        price: f64,
        executions: Vec<(Side, Quantity)>,
    }

    impl MarketAccess for FixedMarket {
        fn balance(&self) -> f64 {
            0.0
        }

        fn position(&self) -> i64 {
            0
        }

        fn quote(&self, _side: Side, _quantity: Quantity) -> f64 {
            self.price
        }

        fn execute(&mut self, side: Side, quantity: Quantity) {
            self.executions.push((side, quantity));
        }
    }

    #[test]
    fn test_estimate_starts_neutral() {
        let trader = InformedTrader::with_defaults();
        assert_eq!(trader.estimate(), 50.0);
    }

    #[test]
    fn test_estimate_tracks_signals() {
        let mut trader = InformedTrader::with_defaults();
        for _ in 0..3 {
            trader.observe(Signal::One, 0);
        }
        // (3 + 0.5) / (3 + 1) = 87.5%
        assert!((trader.estimate() - 87.5).abs() < 1e-12);

        trader.configure(&RunParameters::default());
        assert_eq!(trader.estimate(), 50.0);
    }

    #[test]
    fn test_buys_cheap_sells_dear() {
        let mut trader = InformedTrader::with_defaults();
        for _ in 0..3 {
            trader.observe(Signal::One, 0);
        }
        let mut cheap = FixedMarket {
            price: 60.0,
            executions: vec![],
        };
        trader.act(&mut cheap, 60.0);
        assert_eq!(cheap.executions, vec![(Side::Buy, Quantity(10))]);

        let mut dear = FixedMarket {
            price: 95.0,
            executions: vec![],
        };
        trader.act(&mut dear, 95.0);
        assert_eq!(dear.executions, vec![(Side::Sell, Quantity(10))]);
    }

    #[test]
    fn test_holds_inside_edge() {
        let mut trader = InformedTrader::with_defaults();
        let mut market = FixedMarket {
            price: 52.0,
            executions: vec![],
        };
        trader.act(&mut market, 52.0);
        assert!(market.executions.is_empty());
    }
}
