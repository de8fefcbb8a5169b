//! Core market mechanics for the lurker gym.
//!
//! Provides the automated market maker every participant trades against.
//! Participants never see this type directly; the simulation wraps it in a
//! per-participant session implementing `agents::MarketAccess`.

mod error;
mod lmsr;

pub use error::{Result, SimCoreError};
pub use lmsr::{DEFAULT_LIQUIDITY, LmsrMarketMaker};
