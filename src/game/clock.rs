//! Simulation Time
//!
//! Arena time is the sum of frame deltas handed to `Simulation::step`, not
//! wall-clock time. Cooldowns compare timestamps from `SimClock`; periodic
//! rules (spawning, escalation) use `Timer` accumulators.

/// Monotonic simulation clock, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    now: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self { now: 0.0 }
    }

    /// Current timestamp
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Move time forward. Negative or non-finite deltas are dropped so the
    /// clock never runs backwards.
    pub fn advance(&mut self, delta: f64) {
        if delta.is_finite() && delta > 0.0 {
            self.now += delta;
        }
    }

    /// Seconds elapsed since `timestamp`
    pub fn since(&self, timestamp: f64) -> f64 {
        self.now - timestamp
    }
}

/// Periodic accumulator.
///
/// Fires once the accumulated time reaches the period, then starts over
/// from zero (any overshoot is discarded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    period: f64,
    accumulated: f64,
}

impl Timer {
    pub fn new(period: f64) -> Self {
        Self {
            period,
            accumulated: 0.0,
        }
    }

    /// Add `delta` seconds. Returns true when the period has been reached.
    pub fn tick(&mut self, delta: f64) -> bool {
        if delta.is_finite() && delta > 0.0 {
            self.accumulated += delta;
        }
        if self.accumulated >= self.period {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Seconds left until the next firing
    pub fn remaining(&self) -> f64 {
        (self.period - self.accumulated).max(0.0)
    }
}
