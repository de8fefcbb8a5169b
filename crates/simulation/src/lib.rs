//! Simulation crate: drives participants through runs of the market game.
//!
//! This crate provides:
//! - `Simulation`, which owns the true value, the LMSR market maker, the trade
//!   ledger and one account per participant, and plays timesteps
//! - `MarketSession`, the `agents::MarketAccess` a participant trades through
//! - `run_experiments`, which repeats independent runs and summarizes profits
//!
//! # Example
//! ```ignore
//! use agents::{Lurker, NoiseTrader};
//! use simulation::{Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::new(SimulationConfig::default().with_seed(1))?;
//! sim.add_trader(Box::new(Lurker::with_defaults()));
//! sim.add_trader(Box::new(NoiseTrader::with_defaults()));
//! let outcome = sim.run();
//! ```

mod account;
mod config;
mod error;
mod experiments;
mod runner;
mod session;
mod stats;

pub use account::Account;
pub use config::{DEFAULT_JUMP_COUNT, SimulationConfig};
pub use error::{Result, SimulationError};
pub use experiments::{ExperimentReport, ParticipantSummary, run_experiments};
pub use runner::{ParticipantResult, RunOutcome, Simulation};
pub use session::MarketSession;
