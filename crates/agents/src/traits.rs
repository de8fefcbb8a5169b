//! Participant lifecycle trait and market-access capability.
//!
//! The host drives every participant through the same four entry points:
//!
//! ```text
//! configure ─► (observe* ─► record_trades ─► act)*  per timestep
//! ```
//!
//! During `act` the participant gets a `&mut dyn MarketAccess` for the
//! duration of the call only. It cannot store it, so a participant never holds
//! a reference back into the host.

use types::{Quantity, RunParameters, Side, Signal, Tick, TradeRecord};

/// Capability handed to a participant for one trading opportunity.
///
/// Every call is synchronous and reflects the market state at the moment it
/// is made: an `execute` is visible to the next `quote`.
pub trait MarketAccess {
    /// Current cash balance. May be negative; the host lends freely.
    fn balance(&self) -> f64;

    /// Current share position. Negative means short.
    fn position(&self) -> i64;

    /// Per-share price of trading `quantity` on `side` right now.
    ///
    /// Pure query with no side effects.
    fn quote(&self, side: Side, quantity: Quantity) -> f64;

    /// Commit an order of `quantity` shares on `side`.
    fn execute(&mut self, side: Side, quantity: Quantity);
}

/// The lifecycle every market participant implements.
///
/// Implementations own all of their state. One instance serves exactly one
/// simulation run; `configure` resets anything left over.
///
/// # Example
/// ```ignore
/// struct Idle;
///
/// impl Trader for Idle {
///     fn configure(&mut self, _params: &RunParameters) {}
///     fn observe(&mut self, _signal: Signal, _tick: Tick) {}
///     fn record_trades(&mut self, _trades: &[TradeRecord], _tick: Tick) {}
///     fn act(&mut self, _market: &mut dyn MarketAccess, _market_belief: f64) {}
/// }
/// ```
pub trait Trader: Send {
    /// One-time setup at the start of a run.
    fn configure(&mut self, params: &RunParameters);

    /// Receive one noisy signal about the underlying value.
    fn observe(&mut self, signal: Signal, tick: Tick);

    /// Receive the full trade history so far (not just new trades).
    fn record_trades(&mut self, trades: &[TradeRecord], tick: Tick);

    /// Trading opportunity. Orders go through `market.execute`.
    fn act(&mut self, market: &mut dyn MarketAccess, market_belief: f64);

    /// Human-readable name for logs and reports.
    fn name(&self) -> &str {
        "Trader"
    }
}
