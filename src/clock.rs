//! Monotonic time sources for the rate gate and lap timer.
//!
//! A [`Clock`] is a passive time reference: components query it, it never
//! schedules or wakes anything. Timestamps are [`Duration`]s measured from an
//! arbitrary per-clock epoch and are guaranteed non-decreasing, immune to
//! wall-clock adjustments.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Passive monotonic time reference.
pub trait Clock {
    /// Time elapsed since this clock's epoch. Non-decreasing across reads.
    fn now(&self) -> Duration;
}

/// Clock backed by the OS monotonic clock via [`Instant`].
///
/// The epoch is the moment the clock was constructed.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock advanced explicitly by the caller.
///
/// Starts at zero and only moves when [`advance`](ManualClock::advance) or
/// [`set`](ManualClock::set) is called. Intended for tests and offline
/// (stepped) animation driving.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.now.set(self.now.get() + step);
    }

    /// Jump the clock to an absolute reading. Must not move backwards.
    pub fn set(&self, now: Duration) {
        debug_assert!(now >= self.now.get(), "manual clock moved backwards");
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

// Shared handles keep a clock drivable from outside the component that owns it.
impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}
