//! Rate gate: the shared "has enough time passed" decision behind both
//! terminal animations.
//!
//! The gate is a passive, pollable object. Any scheduling model can drive it:
//! a tight busy loop, a sleep-throttled loop, or a cooperative tick. Each
//! [`poll`](RateGate::poll) compares the supplied clock reading against the
//! last firing and answers whether a new frame is due.

use crate::error::{Result, TickgateError};
use std::time::Duration;

/// Epsilon added to the frequency before inverting, so the period stays
/// finite for very small positive frequencies.
const FREQ_EPSILON: f64 = 1e-6;

/// Default tolerance band: a frame may fire up to this long *before* the
/// nominal period has fully elapsed.
const DEFAULT_TOLERANCE: Duration = Duration::from_millis(1);

/// Pollable rate limiter with a fixed target period and tolerance band.
///
/// Fires when `period - elapsed_since_last_fire < tolerance`. On fire the
/// reference point moves to the supplied `now`, so firing intervals are
/// measured trigger-to-trigger, not against an absolute schedule.
#[derive(Debug, Clone)]
pub struct RateGate {
    period: Duration,
    tolerance: Duration,
    last_fire: Duration,
}

impl RateGate {
    /// Build a gate targeting `hz` firings per second, referenced to the
    /// clock reading `now`.
    ///
    /// Rejects non-positive and non-finite frequencies; there is no sensible
    /// rendering rate for those.
    pub fn from_frequency(hz: f64, now: Duration) -> Result<Self> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(TickgateError::invalid_frequency(hz));
        }
        let period = Duration::from_secs_f64(1.0 / (hz + FREQ_EPSILON));
        log::debug!("rate gate: {} Hz, period {:?}", hz, period);
        Ok(Self {
            period,
            tolerance: DEFAULT_TOLERANCE,
            last_fire: now,
        })
    }

    /// Replace the tolerance band. Mostly useful in tests.
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Would the gate fire at clock reading `now`? Pure predicate, no state
    /// change.
    pub fn should_fire(&self, now: Duration) -> bool {
        let elapsed = now.saturating_sub(self.last_fire);
        elapsed + self.tolerance > self.period
    }

    /// Poll the gate: returns true and advances the reference point when a
    /// firing is due, otherwise leaves all state untouched.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.should_fire(now) {
            self.last_fire = now;
            true
        } else {
            false
        }
    }

    /// Effective gating period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Early-fire tolerance band.
    pub fn tolerance(&self) -> Duration {
        self.tolerance
    }
}
