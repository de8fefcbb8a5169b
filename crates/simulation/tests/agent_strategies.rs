//! Integration tests for the Lurker against a live LMSR market.
//!
//! These drive full simulations with background traders and check the
//! lurker's externally visible behavior through its account.

use agents::{InformedTrader, Lurker, NoiseTrader, NoiseTraderConfig, Trader};
use simulation::{Simulation, SimulationConfig, run_experiments};

fn busy_noise(seed: u64) -> NoiseTrader {
    NoiseTrader::with_seed(
        NoiseTraderConfig {
            order_probability: 1.0,
            min_quantity: 5,
            max_quantity: 15,
        },
        seed,
    )
}

/// The lurker must not trade during the first 20% of the run, and may trade at
/// most once per side per timestep afterwards.
#[test]
fn test_lurker_waits_then_trades_at_most_twice_per_step() {
    let config = SimulationConfig::default().with_timesteps(100).with_seed(17);
    let mut sim = Simulation::new(config).unwrap();

    let lurker = sim.add_trader(Box::new(Lurker::with_defaults()));
    for seed in 0..4 {
        sim.add_trader(Box::new(busy_noise(seed)));
    }

    let mut previous = 0;
    while !sim.is_finished() {
        let tick = sim.tick();
        sim.step();

        let trades = sim.account(lurker).unwrap().trades();
        let delta = trades - previous;
        if tick < 20 {
            assert_eq!(delta, 0, "lurker traded at tick {tick}");
        }
        assert!(delta <= 2, "lurker traded {delta} times at tick {tick}");
        previous = trades;
    }
}

/// Alone in the market, nobody else ever trades, so the lurker never does.
#[test]
fn test_lurker_alone_never_trades() {
    let config = SimulationConfig::default().with_timesteps(60).with_seed(2);
    let mut sim = Simulation::new(config).unwrap();
    let lurker = sim.add_trader(Box::new(Lurker::with_defaults()));

    let outcome = sim.run();
    assert_eq!(outcome.total_trades, 0);
    assert_eq!(outcome.participants[0].id, lurker);
    assert_eq!(outcome.participants[0].profit, 0.0);
}

/// With noise traders moving prices, the lurker finds favorable blocks.
#[test]
fn test_lurker_trades_in_busy_market() {
    let config = SimulationConfig::default()
        .with_timesteps(100)
        .with_liquidity(100.0)
        .with_seed(23);
    let mut sim = Simulation::new(config).unwrap();

    let lurker = sim.add_trader(Box::new(Lurker::with_defaults()));
    for seed in 0..6 {
        sim.add_trader(Box::new(busy_noise(100 + seed)));
    }

    let outcome = sim.run();
    let result = outcome
        .participants
        .iter()
        .find(|p| p.id == lurker)
        .unwrap();
    assert_eq!(result.name, "Lurker");
    assert!(result.trades > 0, "lurker never traded in a busy market");
}

/// Informed traders push the market toward the true value.
#[test]
fn test_informed_traders_move_market_toward_value() {
    let config = SimulationConfig::default()
        .with_timesteps(200)
        .with_jumps(vec![], 0.0)
        .with_seed(31);
    let mut sim = Simulation::new(config).unwrap().with_true_value(0.9);
    for _ in 0..5 {
        sim.add_trader(Box::new(InformedTrader::with_defaults()));
    }

    let outcome = sim.run();
    assert!(outcome.total_trades > 0);
    assert!(
        outcome.final_market_belief > 70.0,
        "market belief {} did not approach 90",
        outcome.final_market_belief
    );
}

/// Mirrors the reference experiment: one lurker among informed and noise traders.
#[test]
fn test_experiment_with_mixed_roster() {
    let config = SimulationConfig::default().with_seed(1000);
    let roster = |run: usize| {
        let mut bots: Vec<Box<dyn Trader>> = Vec::new();
        bots.push(Box::new(Lurker::with_defaults()));
        for _ in 0..5 {
            bots.push(Box::new(InformedTrader::with_defaults()));
        }
        for slot in 0..2 {
            bots.push(Box::new(busy_noise(run as u64 * 10 + slot)));
        }
        bots
    };

    let report = run_experiments(&config, 20, roster, false).unwrap();
    assert_eq!(report.simulations, 20);
    assert_eq!(report.participants.len(), 8);
    assert_eq!(report.participants[0].name, "Lurker");
    assert!(report.participants.iter().all(|p| p.mean_profit.is_finite()));
}
