//! Lap timer over a monotonic clock.
//!
//! Tracks a start instant plus an append-only history of lap intervals with
//! nanosecond precision. Polled on demand (start / lap / elapsed), never
//! driven by the rate gate.

use crate::clock::{Clock, MonotonicClock};
use std::time::Duration;

/// Lap timer.
///
/// Constructed in the non-running state with both reference points set to the
/// construction-time clock reading. `elapsed()` reports zero unless the timer
/// is running; `lap()` works regardless of running state. All operations are
/// infallible.
pub struct Timer {
    clock: Box<dyn Clock>,
    started_at: Duration,
    last_lap: Duration,
    laps: Vec<Duration>,
    running: bool,
}

impl Timer {
    /// Timer over the OS monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(MonotonicClock::new()))
    }

    /// Timer over an injected clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            clock,
            started_at: now,
            last_lap: now,
            laps: Vec::new(),
            running: false,
        }
    }

    /// Start (or restart) the timer: both the elapsed and lap reference
    /// points move to now. Idempotent; calling twice simply resets them.
    /// Recorded laps are kept.
    pub fn start(&mut self) {
        let now = self.clock.now();
        self.started_at = now;
        self.last_lap = now;
        self.running = true;
    }

    /// Stop the timer. Laps and the start reference are retained, but
    /// [`elapsed`](Timer::elapsed) reports zero until the next start.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Time since the last start, or zero when stopped.
    ///
    /// Reporting zero (not the frozen value) after a stop is the timer's
    /// contract: a stopped timer has no current measurement.
    pub fn elapsed(&self) -> Duration {
        if self.running {
            self.clock.now() - self.started_at
        } else {
            Duration::ZERO
        }
    }

    /// Close the current lap: returns the time since the previous lap (or
    /// since the last start), appends it to the history, and resets the lap
    /// reference point. Works whether or not the timer is running.
    pub fn lap(&mut self) -> Duration {
        let now = self.clock.now();
        let lap = now - self.last_lap;
        self.laps.push(lap);
        self.last_lap = now;
        lap
    }

    /// Peek at the current lap's time so far without closing it.
    pub fn current_lap(&self) -> Duration {
        self.clock.now() - self.last_lap
    }

    /// Recorded lap history, oldest first.
    pub fn laps(&self) -> &[Duration] {
        &self.laps
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
