//! Exponentially smoothed belief over binary signals.
//!
//! Each signal moves the belief a fixed fraction of the way toward 0 or 100:
//!
//! `belief' = belief * α + signal * 100 * (1 - α)`
//!
//! With α = 0.9 new evidence carries 10% weight. Starting anywhere inside
//! `(0, 100)`, a finite number of updates never reaches either bound.

use types::{BELIEF_SCALE, NEUTRAL_BELIEF, Signal};

/// Default smoothing factor (weight kept by the previous belief).
pub const DEFAULT_SMOOTHING: f64 = 0.9;

/// Belief on the `[0, 100]` scale plus the signals that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedBelief {
    value: f64,
    smoothing: f64,
    history: Vec<Signal>,
}

impl SmoothedBelief {
    /// Create a belief starting at `initial` with smoothing factor `smoothing`.
    pub fn new(initial: f64, smoothing: f64) -> Self {
        Self {
            value: initial,
            smoothing,
            history: Vec::new(),
        }
    }

    /// Current belief.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Every signal seen since the last reset, oldest first.
    pub fn history(&self) -> &[Signal] {
        &self.history
    }

    /// Fold one signal into the belief.
    pub fn update(&mut self, signal: Signal) -> f64 {
        self.history.push(signal);
        self.value =
            self.value * self.smoothing + signal.value() * BELIEF_SCALE * (1.0 - self.smoothing);
        self.value
    }

    /// Forget all signals and start over from `initial`.
    pub fn reset(&mut self, initial: f64) {
        self.value = initial;
        self.history.clear();
    }
}

impl Default for SmoothedBelief {
    fn default() -> Self {
        Self::new(NEUTRAL_BELIEF, DEFAULT_SMOOTHING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_neutral() {
        let belief = SmoothedBelief::default();
        assert_eq!(belief.value(), 50.0);
        assert!(belief.history().is_empty());
    }

    #[test]
    fn test_single_update() {
        let mut belief = SmoothedBelief::default();
        assert!((belief.update(Signal::One) - 55.0).abs() < 1e-12);

        let mut belief = SmoothedBelief::default();
        assert!((belief.update(Signal::Zero) - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_ones_increase_toward_100() {
        let mut belief = SmoothedBelief::default();
        let mut prev = belief.value();
        for _ in 0..200 {
            let next = belief.update(Signal::One);
            assert!(next > prev);
            assert!(next < 100.0);
            prev = next;
        }
        assert!(prev > 99.0);
    }

    #[test]
    fn test_zeros_decrease_toward_0() {
        let mut belief = SmoothedBelief::default();
        let mut prev = belief.value();
        for _ in 0..200 {
            let next = belief.update(Signal::Zero);
            assert!(next < prev);
            assert!(next > 0.0);
            prev = next;
        }
        assert!(prev < 1.0);
    }

    #[test]
    fn test_repeated_signal_is_not_idempotent() {
        let mut once = SmoothedBelief::default();
        once.update(Signal::One);

        let mut twice = SmoothedBelief::default();
        twice.update(Signal::One);
        twice.update(Signal::One);

        assert_ne!(once.value(), twice.value());
        assert_eq!(twice.history(), &[Signal::One, Signal::One]);
    }

    #[test]
    fn test_order_sensitive() {
        let mut a = SmoothedBelief::default();
        a.update(Signal::One);
        a.update(Signal::Zero);

        let mut b = SmoothedBelief::default();
        b.update(Signal::Zero);
        b.update(Signal::One);

        assert!(a.value() < b.value());
    }

    #[test]
    fn test_reset_clears_history() {
        let mut belief = SmoothedBelief::default();
        belief.update(Signal::One);
        belief.reset(50.0);
        assert_eq!(belief.value(), 50.0);
        assert!(belief.history().is_empty());
    }
}
