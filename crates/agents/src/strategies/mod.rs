//! Trading strategy implementations.
//!
//! Concrete `Trader` implementations. The lurker is the strategy under study;
//! the others populate the market around it.
//!
//! # Available Strategies
//! - [`Lurker`] - Withholds trading early, then takes liquidity in shrinking blocks
//! - [`NoiseTrader`] - Random side and size to generate activity
//! - [`InformedTrader`] - Trades its running signal average against the quote

mod informed;
mod lurker;
mod noise_trader;

pub use informed::{InformedTrader, InformedTraderConfig};
pub use lurker::{Lurker, LurkerConfig};
pub use noise_trader::{NoiseTrader, NoiseTraderConfig};
