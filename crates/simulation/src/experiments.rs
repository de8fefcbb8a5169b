//! Repeated independent runs with per-participant profit statistics.
//!
//! A single run is very noisy: the true value is random and so are the
//! signals. Experiments play many runs, each with fresh participants built by
//! a factory from the run index, and report the mean and standard deviation
//! of each participant's profit.
//!
//! With the `parallel` feature runs execute on rayon's pool. Runs share no
//! mutable state, so the result does not depend on scheduling; seeded
//! experiments give run `i` the seed `base + i`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use agents::Trader;
use std::fmt;
use tracing::info;

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::runner::{RunOutcome, Simulation};
use crate::stats;

/// Profit statistics for one participant slot across all runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantSummary {
    pub name: String,
    pub mean_profit: f64,
    /// Sample standard deviation; zero for a single run.
    pub std_dev: f64,
    pub mean_trades: f64,
}

/// Aggregated result of an experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    pub simulations: usize,
    /// One entry per participant slot, in factory order.
    pub participants: Vec<ParticipantSummary>,
}

impl ExperimentReport {
    /// Summary for the first participant named `name`.
    pub fn get(&self, name: &str) -> Option<&ParticipantSummary> {
        self.participants.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} simulations", self.simulations)?;
        for (i, p) in self.participants.iter().enumerate() {
            writeln!(
                f,
                "{:>3} {:<16} mean {:>10.2}  std {:>10.2}  trades {:>6.1}",
                i + 1,
                p.name,
                p.mean_profit,
                p.std_dev,
                p.mean_trades
            )?;
        }
        Ok(())
    }
}

/// Play one run with participants from `factory`.
fn run_once<F>(config: &SimulationConfig, index: usize, factory: &F) -> Result<RunOutcome>
where
    F: Fn(usize) -> Vec<Box<dyn Trader>>,
{
    let mut config = config.clone();
    if let Some(seed) = config.seed {
        config.seed = Some(seed.wrapping_add(index as u64));
    }
    let mut sim = Simulation::new(config)?;
    for trader in factory(index) {
        sim.add_trader(trader);
    }
    Ok(sim.run())
}

/// Run `simulations` independent runs and summarize profits per participant.
///
/// `factory` receives the run index and returns that run's participants. Every
/// run must return the same roster layout; slot `k` is summarized across runs.
///
/// # Parameters
/// - `force_sequential`: When true, runs sequentially even if the `parallel` feature is enabled
pub fn run_experiments<F>(
    config: &SimulationConfig,
    simulations: usize,
    factory: F,
    force_sequential: bool,
) -> Result<ExperimentReport>
where
    F: Fn(usize) -> Vec<Box<dyn Trader>> + Sync + Send,
{
    if simulations == 0 {
        return Err(SimulationError::NoSimulations);
    }
    config.validate()?;

    #[cfg(feature = "parallel")]
    let outcomes: Vec<RunOutcome> = if force_sequential {
        (0..simulations)
            .map(|i| run_once(config, i, &factory))
            .collect::<Result<_>>()?
    } else {
        (0..simulations)
            .into_par_iter()
            .map(|i| run_once(config, i, &factory))
            .collect::<Result<_>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<RunOutcome> = {
        let _ = force_sequential;
        (0..simulations)
            .map(|i| run_once(config, i, &factory))
            .collect::<Result<_>>()?
    };

    let report = summarize(&outcomes);
    info!(
        simulations,
        participants = report.participants.len(),
        "experiment finished"
    );
    Ok(report)
}

fn summarize(outcomes: &[RunOutcome]) -> ExperimentReport {
    let slots = outcomes.first().map_or(0, |o| o.participants.len());

    let participants = (0..slots)
        .map(|slot| {
            let profits: Vec<f64> = outcomes
                .iter()
                .map(|o| o.participants[slot].profit)
                .collect();
            let trades: Vec<f64> = outcomes
                .iter()
                .map(|o| o.participants[slot].trades as f64)
                .collect();
            ParticipantSummary {
                name: outcomes[0].participants[slot].name.clone(),
                mean_profit: stats::mean(&profits).unwrap_or(0.0),
                std_dev: stats::sample_std_dev(&profits).unwrap_or(0.0),
                mean_trades: stats::mean(&trades).unwrap_or(0.0),
            }
        })
        .collect();

    ExperimentReport {
        simulations: outcomes.len(),
        participants,
    }
}
