//! Lurker Gym - Main binary
//!
//! Runs repeated simulations of the lurker strategy against an LMSR market
//! maker, alongside informed and noise traders, and prints the mean and
//! standard deviation of every participant's profit.
//!
//! Configuration layers, lowest to highest priority:
//! 1. Built-in defaults (`SimConfig::default()`)
//! 2. A TOML file passed with `--config`
//! 3. CLI flags / environment variables

mod config;

use std::path::PathBuf;

use agents::{InformedTrader, Lurker, NoiseTrader, Trader};
use clap::Parser;
use simulation::run_experiments;
use tracing::info;

pub use config::SimConfig;

/// Spreads noise-trader seeds away from the run seeds derived from the same base.
const NOISE_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Lurker Gym - prediction-market simulation for the lurker strategy
#[derive(Parser, Debug)]
#[command(name = "lurker-gym")]
#[command(about = "Repeated LMSR market simulations of the lurker strategy")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(long, env = "GYM_CONFIG")]
    config: Option<PathBuf>,

    /// Number of independent runs
    #[arg(long, env = "GYM_SIMULATIONS")]
    simulations: Option<usize>,

    /// Trading rounds per run
    #[arg(long, env = "GYM_TIMESTEPS")]
    timesteps: Option<u64>,

    /// LMSR liquidity parameter
    #[arg(long, env = "GYM_LMSR_B")]
    lmsr_b: Option<f64>,

    /// Number of informed traders
    #[arg(long, env = "GYM_INFORMED")]
    informed_traders: Option<usize>,

    /// Number of noise traders
    #[arg(long, env = "GYM_NOISE")]
    noise_traders: Option<usize>,

    /// Base RNG seed for reproducible experiments
    #[arg(long, env = "GYM_SEED")]
    seed: Option<u64>,

    /// Run simulations one at a time
    #[arg(long, env = "GYM_SEQUENTIAL")]
    sequential: bool,
}

impl Args {
    /// Layer CLI overrides on top of `config`.
    fn apply(&self, mut config: SimConfig) -> SimConfig {
        if let Some(n) = self.simulations {
            config = config.simulations(n);
        }
        if let Some(t) = self.timesteps {
            config = config.timesteps(t);
        }
        if let Some(b) = self.lmsr_b {
            config = config.lmsr_b(b);
        }
        if let Some(n) = self.informed_traders {
            config = config.informed_traders(n);
        }
        if let Some(n) = self.noise_traders {
            config = config.noise_traders(n);
        }
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        if self.sequential {
            config = config.sequential(true);
        }
        config
    }
}

/// Build the participant roster for run `run`: the lurker first, then informed
/// and noise traders. Noise traders are seeded from the base seed when one is set.
fn roster(config: &SimConfig, run: usize) -> Vec<Box<dyn Trader>> {
    let mut bots: Vec<Box<dyn Trader>> = Vec::new();
    bots.push(Box::new(Lurker::new(config.lurker.clone())));
    for _ in 0..config.informed_traders {
        bots.push(Box::new(InformedTrader::new(config.informed.clone())));
    }
    for slot in 0..config.noise_traders {
        let noise = match config.seed {
            Some(seed) => {
                let offset = (run * config.noise_traders + slot + 1) as u64;
                let seed = seed ^ offset.wrapping_mul(NOISE_SEED_STRIDE);
                NoiseTrader::with_seed(config.noise.clone(), seed)
            }
            None => NoiseTrader::new(config.noise.clone()),
        };
        bots.push(Box::new(noise));
    }
    bots
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let base = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let config = args.apply(base);
    config.validate()?;

    info!(
        simulations = config.simulations,
        timesteps = config.timesteps,
        lmsr_b = config.lmsr_b,
        informed = config.informed_traders,
        noise = config.noise_traders,
        "starting experiment"
    );

    let report = run_experiments(
        &config.simulation_config(),
        config.simulations,
        |run| roster(&config, run),
        config.sequential,
    )?;

    print!("{report}");
    Ok(())
}
