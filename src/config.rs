//! Central configuration for the lurker gym experiments.
//!
//! Defaults match the reference experiment: one lurker against five informed
//! and two noise traders, 1000 runs of 100 timesteps with LMSR `b = 250`.
//! A TOML file can override any field; CLI flags override the file.

use std::path::Path;

use agents::{InformedTraderConfig, LurkerConfig, NoiseTraderConfig};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use simulation::SimulationConfig;
use types::Tick;

/// Master configuration for an experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Experiment Control
    // ─────────────────────────────────────────────────────────────────────────
    /// Number of independent runs.
    pub simulations: usize,
    /// Run sequentially even when built with the `parallel` feature.
    pub sequential: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Market
    // ─────────────────────────────────────────────────────────────────────────
    /// Trading rounds per run.
    pub timesteps: Tick,
    /// LMSR liquidity. Higher means prices change less.
    pub lmsr_b: f64,
    /// Timesteps where the true value may jump. Unset spreads them over the run.
    pub jump_locations: Option<Vec<Tick>>,
    /// Probability of a jump at each location.
    pub jump_probability: f64,
    /// Jump standard deviation on the `[0, 1]` value scale.
    pub jump_std_dev: f64,
    /// Base seed; run `i` uses `seed + i`.
    pub seed: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Participants
    // ─────────────────────────────────────────────────────────────────────────
    /// Number of informed traders.
    pub informed_traders: usize,
    /// Number of noise traders.
    pub noise_traders: usize,
    pub lurker: LurkerConfig,
    pub informed: InformedTraderConfig,
    pub noise: NoiseTraderConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        let market = SimulationConfig::default();
        Self {
            simulations: 1000,
            sequential: false,

            timesteps: market.timesteps,
            lmsr_b: market.liquidity,
            jump_locations: market.jump_locations,
            jump_probability: market.jump_probability,
            jump_std_dev: market.jump_std_dev,
            seed: None,

            informed_traders: 5,
            noise_traders: 2,
            lurker: LurkerConfig::default(),
            informed: InformedTraderConfig::default(),
            noise: NoiseTraderConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load a config from a TOML file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters for fluent configuration
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the number of runs.
    pub fn simulations(mut self, count: usize) -> Self {
        self.simulations = count;
        self
    }

    /// Set timesteps per run.
    pub fn timesteps(mut self, timesteps: Tick) -> Self {
        self.timesteps = timesteps;
        self
    }

    /// Set LMSR liquidity.
    pub fn lmsr_b(mut self, b: f64) -> Self {
        self.lmsr_b = b;
        self
    }

    /// Set number of informed traders.
    pub fn informed_traders(mut self, count: usize) -> Self {
        self.informed_traders = count;
        self
    }

    /// Set number of noise traders.
    pub fn noise_traders(mut self, count: usize) -> Self {
        self.noise_traders = count;
        self
    }

    /// Set the base seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Force sequential runs.
    pub fn sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    /// Check the market and lurker settings before any run starts.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.lurker.validate().context("invalid [lurker] config")?;
        self.simulation_config()
            .validate()
            .context("invalid market config")?;
        Ok(())
    }

    /// Market configuration for a single run.
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            timesteps: self.timesteps,
            jump_locations: self.jump_locations.clone(),
            jump_probability: self.jump_probability,
            jump_std_dev: self.jump_std_dev,
            liquidity: self.lmsr_b,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_experiment() {
        let config = SimConfig::default();
        assert_eq!(config.simulations, 1000);
        assert_eq!(config.timesteps, 100);
        assert_eq!(config.lmsr_b, 250.0);
        assert_eq!(config.informed_traders, 5);
        assert_eq!(config.noise_traders, 2);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SimConfig = toml::from_str(
            r#"
            simulations = 10
            lmsr_b = 150.0

            [lurker]
            lurk_threshold = 0.3
            "#,
        )
        .unwrap();

        assert_eq!(config.simulations, 10);
        assert_eq!(config.lmsr_b, 150.0);
        assert_eq!(config.timesteps, 100);
        assert_eq!(config.lurker.lurk_threshold, 0.3);
        assert_eq!(config.lurker.min_block, 2);
    }

    #[test]
    fn test_short_runs_keep_default_jumps_in_range() {
        let config = SimConfig::default().timesteps(40);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.simulation_config().run_parameters().jump_locations,
            vec![10, 20, 30]
        );
    }

    #[test]
    fn test_validate_rejects_inverted_lurker_bounds() {
        let config: SimConfig = toml::from_str(
            r#"
            [lurker]
            belief_floor = 99.0
            belief_ceiling = 1.0
            "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("lurker"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_jump() {
        let mut config = SimConfig::default().timesteps(20);
        config.jump_locations = Some(vec![5, 30]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_simulation_config_carries_market_fields() {
        let config = SimConfig::default().timesteps(40).lmsr_b(90.0).seed(4);
        let market = config.simulation_config();
        assert_eq!(market.timesteps, 40);
        assert_eq!(market.liquidity, 90.0);
        assert_eq!(market.seed, Some(4));
    }
}
