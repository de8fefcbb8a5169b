//! Simulation configuration options.

use serde::{Deserialize, Serialize};
use sim_core::{DEFAULT_LIQUIDITY, LmsrMarketMaker};
use types::{RunParameters, Tick};

use crate::error::{Result, SimulationError};

/// Number of jump locations when none are given: the run's quartiles.
pub const DEFAULT_JUMP_COUNT: u64 = 3;

/// Configuration for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of trading rounds.
    pub timesteps: Tick,

    /// Timesteps at which the true value may jump. `None` spreads
    /// [`DEFAULT_JUMP_COUNT`] locations evenly over the run.
    pub jump_locations: Option<Vec<Tick>>,

    /// Probability of a jump at each location.
    pub jump_probability: f64,

    /// Standard deviation of a jump on the `[0, 1]` value scale.
    pub jump_std_dev: f64,

    /// LMSR liquidity `b`. Higher means prices move less per share.
    pub liquidity: f64,

    /// Seed for reproducible runs. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timesteps: 100,
            jump_locations: None,
            jump_probability: 0.25,
            jump_std_dev: 0.2,
            liquidity: DEFAULT_LIQUIDITY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Set the number of timesteps.
    pub fn with_timesteps(mut self, timesteps: Tick) -> Self {
        self.timesteps = timesteps;
        self
    }

    /// Set the jump schedule.
    pub fn with_jumps(mut self, locations: Vec<Tick>, probability: f64) -> Self {
        self.jump_locations = Some(locations);
        self.jump_probability = probability;
        self
    }

    /// Set the LMSR liquidity.
    pub fn with_liquidity(mut self, liquidity: f64) -> Self {
        self.liquidity = liquidity;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.timesteps == 0 {
            return Err(SimulationError::ZeroTimesteps);
        }
        let locations = self.jump_schedule();
        if let Some(&location) = locations.iter().find(|&&l| l >= self.timesteps) {
            return Err(SimulationError::JumpLocationOutOfRange {
                location,
                timesteps: self.timesteps,
            });
        }
        if !(0.0..=1.0).contains(&self.jump_probability) {
            return Err(SimulationError::InvalidProbability(self.jump_probability));
        }
        if !self.jump_std_dev.is_finite() || self.jump_std_dev < 0.0 {
            return Err(SimulationError::InvalidJumpStdDev(self.jump_std_dev));
        }
        LmsrMarketMaker::new(self.liquidity)?;
        Ok(())
    }

    /// Jump locations for this run: the explicit list, or evenly spaced ones.
    pub fn jump_schedule(&self) -> Vec<Tick> {
        match &self.jump_locations {
            Some(locations) => locations.clone(),
            None => {
                let mut locations: Vec<Tick> = (1..=DEFAULT_JUMP_COUNT)
                    .map(|k| k * self.timesteps / (DEFAULT_JUMP_COUNT + 1))
                    .collect();
                locations.dedup();
                locations
            }
        }
    }

    /// Parameters handed to each participant's `configure`.
    pub fn run_parameters(&self) -> RunParameters {
        let locations = self.jump_schedule();
        let probabilities = vec![self.jump_probability; locations.len()];
        RunParameters::new(self.timesteps, locations, probabilities)
    }
}
