//! Lurker - holds back until the market has shown its hand, then takes liquidity.
//!
//! The lurker keeps a smoothed private belief from its signals but does not
//! trade on it early. Until a fraction of the run has elapsed and somebody
//! else has traded, it stays out of the market so its information is not
//! priced in by the market maker.
//!
//! Once active it blends its belief with the market maker's (weighted toward
//! the market), then greedily takes the largest block that is favorably
//! priced, halving the block each time neither side is attractive.
//!
//! # Order sizing
//!
//! ```text
//! block = base + growth * elapsed          (20 → 50 shares over the run)
//! loop:
//!   buy  block   if not yet bought and quote(buy)  < belief
//!   sell block   if not yet sold   and quote(sell) > belief
//!   otherwise    stop at min block, else block = max(block / 2, min)
//! ```
//!
//! Each side fires at most once per opportunity.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use types::{
    BELIEF_SCALE, NEUTRAL_BELIEF, Quantity, RunParameters, Side, Signal, Tick, TradeRecord,
};

use crate::belief::{DEFAULT_SMOOTHING, SmoothedBelief};
use crate::error::{AgentError, Result};
use crate::{MarketAccess, Trader};

/// Configuration for a Lurker agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LurkerConfig {
    /// Weight the previous belief keeps on each signal (α).
    pub smoothing: f64,
    /// Belief at the start of each run.
    pub initial_belief: f64,
    /// Fraction of the run that must elapse before trading.
    pub lurk_threshold: f64,
    /// Weight of the market maker's belief relative to our own (own weight is 1).
    pub market_weight: f64,
    /// Lower clamp for the blended belief.
    pub belief_floor: f64,
    /// Upper clamp for the blended belief.
    pub belief_ceiling: f64,
    /// Block size at the start of the run.
    pub base_block: u64,
    /// Extra shares added to the block by the end of the run.
    pub block_growth: u64,
    /// Smallest block worth trading; the sizing loop halts here.
    pub min_block: u64,
}

impl Default for LurkerConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            initial_belief: NEUTRAL_BELIEF,
            lurk_threshold: 0.2,
            market_weight: 2.0,
            belief_floor: 1.0,
            belief_ceiling: 99.0,
            base_block: 20,
            block_growth: 30,
            min_block: 2,
        }
    }
}

impl LurkerConfig {
    /// Check the configuration, returning the first problem found.
    ///
    /// A valid config keeps the private belief inside `[0, 100]` and gives the
    /// blended-belief clamp a non-empty range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(AgentError::InvalidSmoothing(self.smoothing));
        }
        if !(0.0..=BELIEF_SCALE).contains(&self.initial_belief) {
            return Err(AgentError::InvalidInitialBelief(self.initial_belief));
        }
        let (floor, ceiling) = (self.belief_floor, self.belief_ceiling);
        if !(0.0 <= floor && floor <= ceiling && ceiling <= BELIEF_SCALE) {
            return Err(AgentError::InvalidBeliefBounds { floor, ceiling });
        }
        if !self.market_weight.is_finite() || self.market_weight < 0.0 {
            return Err(AgentError::InvalidMarketWeight(self.market_weight));
        }
        if !self.lurk_threshold.is_finite() {
            return Err(AgentError::InvalidLurkThreshold(self.lurk_threshold));
        }
        if self.min_block == 0 {
            return Err(AgentError::ZeroMinBlock);
        }
        Ok(())
    }
}

/// Liquidity-taking strategy that lurks early in the run.
pub struct Lurker {
    config: LurkerConfig,
    params: RunParameters,
    belief: SmoothedBelief,
    /// Latest full trade ledger from the host.
    trades: Vec<TradeRecord>,
    tick: Tick,
}

impl Lurker {
    /// Create a new Lurker with the given configuration.
    pub fn new(config: LurkerConfig) -> Self {
        let belief = SmoothedBelief::new(config.initial_belief, config.smoothing);
        Self {
            config,
            params: RunParameters::default(),
            belief,
            trades: Vec::new(),
            tick: 0,
        }
    }

    /// Create a Lurker with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(LurkerConfig::default())
    }

    /// Strategy configuration.
    pub fn config(&self) -> &LurkerConfig {
        &self.config
    }

    /// Current private belief.
    pub fn belief(&self) -> f64 {
        self.belief.value()
    }

    /// Signals received this run.
    pub fn signals(&self) -> &[Signal] {
        self.belief.history()
    }

    /// Trade ledger as of the last `record_trades`.
    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    /// Timestep of the last `record_trades`.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Fraction of the run elapsed.
    pub fn time_fraction(&self) -> f64 {
        self.params.elapsed_fraction(self.tick)
    }

    /// Whether the agent holds back this opportunity.
    pub fn is_lurking(&self) -> bool {
        self.trades.is_empty() || self.time_fraction() < self.config.lurk_threshold
    }

    /// Own belief blended with the market maker's, clamped away from the extremes.
    pub fn blended_belief(&self, market_belief: f64) -> f64 {
        let weight = self.config.market_weight;
        let blended = (self.belief.value() + weight * market_belief) / (1.0 + weight);
        blended.clamp(self.config.belief_floor, self.config.belief_ceiling)
    }

    /// Opening block size for the current timestep.
    pub fn initial_block(&self) -> Quantity {
        let size = self.config.base_block as f64
            + self.config.block_growth as f64 * self.time_fraction();
        Quantity((size as u64).max(self.config.min_block))
    }

    /// Run the sizing loop against `market` using `belief` as the fair value.
    fn take_liquidity(&self, market: &mut dyn MarketAccess, belief: f64) {
        let min_block = Quantity(self.config.min_block);
        let mut block = self.initial_block();
        let mut bought = false;
        let mut sold = false;

        loop {
            if !bought && market.quote(Side::Buy, block) < belief {
                debug!(%block, belief, "lurker buying");
                market.execute(Side::Buy, block);
                bought = true;
            } else if !sold && market.quote(Side::Sell, block) > belief {
                debug!(%block, belief, "lurker selling");
                market.execute(Side::Sell, block);
                sold = true;
            } else if block <= min_block {
                break;
            } else {
                block = block.halve_floored(min_block);
                continue;
            }

            if bought && sold {
                break;
            }
        }
    }
}

impl Default for Lurker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Trader for Lurker {
    fn configure(&mut self, params: &RunParameters) {
        self.params = params.clone();
        self.belief.reset(self.config.initial_belief);
        self.trades.clear();
        self.tick = 0;
    }

    fn observe(&mut self, signal: Signal, tick: Tick) {
        let belief = self.belief.update(signal);
        trace!(tick, %signal, belief, "lurker observed signal");
    }

    fn record_trades(&mut self, trades: &[TradeRecord], tick: Tick) {
        self.trades = trades.to_vec();
        self.tick = tick;
    }

    fn act(&mut self, market: &mut dyn MarketAccess, market_belief: f64) {
        if self.is_lurking() {
            debug!(
                tick = self.tick,
                trades = self.trades.len(),
                "lurker holding back"
            );
            return;
        }

        let belief = self.blended_belief(market_belief);
        debug!(
            tick = self.tick,
            own = self.belief.value(),
            market_belief,
            blended = belief,
            "lurker active"
        );
        self.take_liquidity(market, belief);
    }

    fn name(&self) -> &str {
        "Lurker"
    }
}
