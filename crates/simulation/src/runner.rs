//! Simulation runner implementing the timestep loop.
//!
//! Each timestep:
//! 1. Apply a possible jump to the true value at a jump location
//! 2. Deliver one signal to every participant (`One` with probability = value)
//! 3. In shuffled order, give each participant the full trade ledger and a
//!    trading opportunity against the LMSR market maker
//! 4. Advance the tick
//!
//! At the end of the run every account is settled at the final true value.

use agents::Trader;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use sim_core::LmsrMarketMaker;
use tracing::debug;
use types::{AgentId, RunParameters, Signal, Tick, TradeRecord};

use crate::account::Account;
use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::session::MarketSession;

/// A trader together with its account.
struct Participant {
    id: AgentId,
    trader: Box<dyn Trader>,
    account: Account,
}

/// Settled result for one participant.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantResult {
    pub id: AgentId,
    pub name: String,
    /// Cash plus shares settled at the final true value.
    pub profit: f64,
    pub position: i64,
    pub trades: u64,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// True value at the end of the run, on the `[0, 1]` scale.
    pub final_value: f64,
    /// Market maker belief at the end of the run.
    pub final_market_belief: f64,
    /// Number of executions across all participants.
    pub total_trades: usize,
    /// One entry per participant, in the order they were added.
    pub participants: Vec<ParticipantResult>,
}

/// The main simulation runner.
pub struct Simulation {
    config: SimulationConfig,
    params: RunParameters,
    market: LmsrMarketMaker,
    participants: Vec<Participant>,
    ledger: Vec<TradeRecord>,
    /// Underlying true value on the `[0, 1]` scale.
    value: f64,
    tick: Tick,
    rng: StdRng,
    jump: Normal<f64>,
}

impl Simulation {
    /// Create a new simulation. The true value is drawn uniformly from `[0, 1]`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let market = LmsrMarketMaker::new(config.liquidity)?;
        let jump = Normal::new(0.0, config.jump_std_dev)
            .map_err(|_| SimulationError::InvalidJumpStdDev(config.jump_std_dev))?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let value = rng.random::<f64>();

        Ok(Self {
            params: config.run_parameters(),
            config,
            market,
            participants: Vec::new(),
            ledger: Vec::new(),
            value,
            tick: 0,
            rng,
            jump,
        })
    }

    /// Override the starting true value (clamped to `[0, 1]`).
    pub fn with_true_value(mut self, value: f64) -> Self {
        self.value = value.clamp(0.0, 1.0);
        self
    }

    /// Add a participant and configure it for this run.
    pub fn add_trader(&mut self, mut trader: Box<dyn Trader>) -> AgentId {
        let id = AgentId(self.participants.len() as u64 + 1);
        trader.configure(&self.params);
        self.participants.push(Participant {
            id,
            trader,
            account: Account::new(),
        });
        id
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Current true value on the `[0, 1]` scale.
    pub fn true_value(&self) -> f64 {
        self.value
    }

    pub fn market_belief(&self) -> f64 {
        self.market.belief()
    }

    /// Every trade executed so far.
    pub fn ledger(&self) -> &[TradeRecord] {
        &self.ledger
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Account of the participant with `id`.
    pub fn account(&self, id: AgentId) -> Option<&Account> {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .map(|p| &p.account)
    }

    /// Whether every timestep has been played.
    pub fn is_finished(&self) -> bool {
        self.tick >= self.config.timesteps
    }

    /// Play one timestep. Does nothing once the run is finished.
    pub fn step(&mut self) {
        if self.is_finished() {
            return;
        }
        let tick = self.tick;

        self.maybe_jump(tick);

        for participant in &mut self.participants {
            let signal = Signal::from(self.rng.random_bool(self.value));
            participant.trader.observe(signal, tick);
        }

        let mut order: Vec<usize> = (0..self.participants.len()).collect();
        order.shuffle(&mut self.rng);

        let market = &mut self.market;
        let ledger = &mut self.ledger;
        for idx in order {
            let Participant {
                id,
                trader,
                account,
            } = &mut self.participants[idx];

            trader.record_trades(ledger.as_slice(), tick);
            let market_belief = market.belief();
            let mut session = MarketSession::new(*id, market, account, ledger);
            trader.act(&mut session, market_belief);
        }

        self.tick += 1;
    }

    fn maybe_jump(&mut self, tick: Tick) {
        let probability = self
            .params
            .jumps()
            .find(|&(location, _)| location == tick)
            .map(|(_, p)| p);

        let jumped = match probability {
            Some(p) => self.rng.random_bool(p),
            None => false,
        };
        if jumped {
            let before = self.value;
            self.value = (self.value + self.jump.sample(&mut self.rng)).clamp(0.0, 1.0);
            debug!(tick, before, after = self.value, "true value jumped");
        }
    }

    /// Play the remaining timesteps and settle every account.
    pub fn run(mut self) -> RunOutcome {
        while !self.is_finished() {
            self.step();
        }
        self.outcome()
    }

    /// Settle every account at the current true value.
    pub fn outcome(&self) -> RunOutcome {
        let participants: Vec<ParticipantResult> = self
            .participants
            .iter()
            .map(|p| ParticipantResult {
                id: p.id,
                name: p.trader.name().to_string(),
                profit: p.account.equity(self.value),
                position: p.account.position(),
                trades: p.account.trades(),
            })
            .collect();

        debug!(
            ticks = self.tick,
            trades = self.ledger.len(),
            final_value = self.value,
            market_belief = self.market.belief(),
            "simulation finished"
        );

        RunOutcome {
            final_value: self.value,
            final_market_belief: self.market.belief(),
            total_trades: self.ledger.len(),
            participants,
        }
    }
}
