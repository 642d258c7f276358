//! Sliding dot-pattern terminal animation.
//!
//! Same polling contract as [`Spinner`](crate::spinner::Spinner): a rate gate
//! decides when a frame is due, and each fired frame shows a four-byte window
//! sliding over a fixed dot pattern. The window wraps each byte independently
//! modulo the pattern length, so reads near the end of the pattern fold back
//! to its start instead of running past it.

use crate::clock::{Clock, MonotonicClock};
use crate::error::Result;
use crate::gate::RateGate;
use std::io::{self, Write};

/// The fixed dot pattern the animation window slides over.
pub const DOT_PATTERN: &[u8] = b"... .. .. .. .... .... .";

/// Bytes shown (and stride advanced) per fired frame.
const WINDOW: usize = 4;

/// Rate-gated dot animation writing to `W`.
pub struct Dotter<W: Write = io::Stdout> {
    clock: Box<dyn Clock>,
    gate: RateGate,
    frame: u64,
    out: W,
}

impl Dotter<io::Stdout> {
    /// Dotter targeting `hz` frames per second on standard output.
    pub fn new(hz: f64) -> Result<Self> {
        Self::with_writer(hz, io::stdout())
    }
}

impl<W: Write> Dotter<W> {
    /// Dotter writing to an arbitrary writer, clocked by the OS monotonic
    /// clock.
    pub fn with_writer(hz: f64, out: W) -> Result<Self> {
        Self::with_parts(hz, out, Box::new(MonotonicClock::new()))
    }

    /// Fully injected construction: caller supplies writer and clock.
    pub fn with_parts(hz: f64, out: W, clock: Box<dyn Clock>) -> Result<Self> {
        let gate = RateGate::from_frequency(hz, clock.now())?;
        Ok(Self {
            clock,
            gate,
            frame: 0,
            out,
        })
    }

    /// Poll the animation. When the gate fires, writes ` dddd \r` (space,
    /// four pattern bytes, space, carriage return), flushes, and advances the
    /// frame counter by the window width. Returns whether a frame was emitted.
    pub fn poll(&mut self) -> Result<bool> {
        let now = self.clock.now();
        if !self.gate.poll(now) {
            return Ok(false);
        }

        let len = DOT_PATTERN.len() as u64;
        let base = self.frame % len;
        let mut buf = [b' '; WINDOW + 3];
        for (k, slot) in buf[1..=WINDOW].iter_mut().enumerate() {
            // Each offset wraps independently so the window never reads past
            // the end of the pattern.
            *slot = DOT_PATTERN[((base + k as u64) % len) as usize];
        }
        buf[WINDOW + 2] = b'\r';
        self.out.write_all(&buf)?;
        self.out.flush()?;
        self.frame = self.frame.wrapping_add(WINDOW as u64);
        Ok(true)
    }

    /// Number of frames emitted so far (the frame counter divided by the
    /// window stride).
    pub fn frame_count(&self) -> u64 {
        self.frame / WINDOW as u64
    }

    /// Effective gating period.
    pub fn period(&self) -> std::time::Duration {
        self.gate.period()
    }

    /// The underlying writer, for inspection.
    pub fn writer(&self) -> &W {
        &self.out
    }
}
