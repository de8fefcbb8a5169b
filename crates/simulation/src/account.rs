//! Per-participant cash and share accounting.
//!
//! Borrowing is unrestricted: a participant may buy with no cash and sell
//! shares it does not hold. Cash and position simply go negative, and the
//! account is settled at the final true value when the run ends.

use types::{BELIEF_SCALE, Quantity, Side};

/// Cash, position and trade count for one participant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    /// Current cash balance (negative when borrowing).
    cash: f64,
    /// Current position in shares (positive = long, negative = short).
    position: i64,
    /// Number of executions.
    trades: u64,
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn trades(&self) -> u64 {
        self.trades
    }

    /// Apply a fill at `price` per share.
    pub fn on_fill(&mut self, side: Side, quantity: Quantity, price: f64) {
        let shares = quantity.raw();
        self.position += side.sign() * shares as i64;
        self.cash -= side.sign() as f64 * price * shares as f64;
        self.trades += 1;
    }

    /// Account value if every share settles at `value` (on the `[0, 1]` scale).
    pub fn equity(&self, value: f64) -> f64 {
        self.cash + self.position as f64 * BELIEF_SCALE * value
    }
}
