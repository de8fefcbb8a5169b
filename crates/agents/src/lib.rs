//! Agents crate: market participants for the lurker gym.
//!
//! This crate provides:
//! - The `Trader` trait, the four-call lifecycle every participant implements
//! - The `MarketAccess` trait, the capability a participant trades through
//! - `SmoothedBelief`, the exponentially smoothed signal belief
//! - Concrete strategy implementations (`strategies` module)
//! - `AgentError`, returned when a strategy configuration is unusable
//!
//! # Architecture
//! The host calls `configure` once per run, then each timestep delivers
//! signals via `observe`, the full trade ledger via `record_trades`, and a
//! trading opportunity via `act`. Participants never call the host; orders go
//! through the `MarketAccess` borrowed for the duration of `act`.
//!
//! # Available Strategies
//! - [`strategies::Lurker`] - Belief-blending liquidity taker that lurks early
//! - [`strategies::NoiseTrader`] - Random orders to generate market activity
//! - [`strategies::InformedTrader`] - Signal-frequency value trader

pub mod belief;
mod error;
pub mod strategies;
mod traits;

pub use belief::SmoothedBelief;
pub use error::{AgentError, Result};
pub use strategies::{
    InformedTrader, InformedTraderConfig, Lurker, LurkerConfig, NoiseTrader, NoiseTraderConfig,
};
pub use traits::{MarketAccess, Trader};
