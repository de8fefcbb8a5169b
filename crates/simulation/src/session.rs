//! Market access handed to one participant for one trading opportunity.
//!
//! A `MarketSession` borrows the market maker, the acting participant's
//! account and the shared trade ledger. Every execution fills against the
//! maker immediately, updates the account and appends to the ledger, so the
//! next `quote` in the same `act` call sees the new state.

use agents::MarketAccess;
use sim_core::LmsrMarketMaker;
use tracing::trace;
use types::{AgentId, Quantity, Side, TradeRecord};

use crate::account::Account;

pub struct MarketSession<'a> {
    agent: AgentId,
    market: &'a mut LmsrMarketMaker,
    account: &'a mut Account,
    ledger: &'a mut Vec<TradeRecord>,
}

impl<'a> MarketSession<'a> {
    pub fn new(
        agent: AgentId,
        market: &'a mut LmsrMarketMaker,
        account: &'a mut Account,
        ledger: &'a mut Vec<TradeRecord>,
    ) -> Self {
        Self {
            agent,
            market,
            account,
            ledger,
        }
    }
}

impl MarketAccess for MarketSession<'_> {
    fn balance(&self) -> f64 {
        self.account.cash()
    }

    fn position(&self) -> i64 {
        self.account.position()
    }

    fn quote(&self, side: Side, quantity: Quantity) -> f64 {
        self.market.quote(side, quantity)
    }

    fn execute(&mut self, side: Side, quantity: Quantity) {
        if quantity.is_zero() {
            return;
        }
        let prior = self.market.belief();
        let price = self.market.execute(side, quantity);
        self.account.on_fill(side, quantity, price);

        let record = TradeRecord::new(price, side, quantity, prior);
        trace!(agent = %self.agent, %record, "fill");
        self.ledger.push(record);
    }
}
