//! Rotating four-glyph terminal spinner.
//!
//! Designed to sit inside a polling loop with negligible per-iteration cost:
//! every [`poll`](Spinner::poll) consults the rate gate, and only when a frame
//! is due does it touch the output writer. Frames overwrite each other in
//! place via a carriage return; no ANSI sequences are emitted.

use crate::clock::{Clock, MonotonicClock};
use crate::error::Result;
use crate::gate::RateGate;
use std::io::{self, Write};

/// The glyph cycle, one byte per frame: `/ - \ |`.
pub const SPIN_GLYPHS: &[u8; 4] = b"/-\\|";

/// Rate-gated spinner animation writing to `W`.
///
/// Holds its own clock, gate, and frame counter; multiple spinners coexist
/// without interference. Single-threaded by design, no internal locking.
pub struct Spinner<W: Write = io::Stdout> {
    clock: Box<dyn Clock>,
    gate: RateGate,
    frame: u64,
    out: W,
}

impl Spinner<io::Stdout> {
    /// Spinner targeting `hz` frames per second on standard output.
    pub fn new(hz: f64) -> Result<Self> {
        Self::with_writer(hz, io::stdout())
    }
}

impl<W: Write> Spinner<W> {
    /// Spinner writing to an arbitrary writer, clocked by the OS monotonic
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

    /// Poll the animation. When the gate fires, writes ` X \r` (space, glyph,
    /// space, carriage return), flushes, and advances the frame counter.
    /// Returns whether a frame was emitted.
    pub fn poll(&mut self) -> Result<bool> {
        let now = self.clock.now();
        if !self.gate.poll(now) {
            return Ok(false);
        }

        let glyph = SPIN_GLYPHS[(self.frame % SPIN_GLYPHS.len() as u64) as usize];
        self.out.write_all(&[b' ', glyph, b' ', b'\r'])?;
        self.out.flush()?;
        self.frame = self.frame.wrapping_add(1);
        Ok(true)
    }

    /// Number of frames emitted so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::rc::Rc;
    use std::time::Duration;

    fn spinner_at_10hz(clock: &Rc<ManualClock>) -> Spinner<Vec<u8>> {
        Spinner::with_parts(10.0, Vec::new(), Box::new(Rc::clone(clock)))
            .expect("valid frequency")
    }

    #[test]
    fn rejects_bad_frequency() {
        assert!(Spinner::with_writer(0.0, Vec::new()).is_err());
        assert!(Spinner::with_writer(-5.0, Vec::new()).is_err());
        assert!(Spinner::with_writer(f64::NAN, Vec::new()).is_err());
    }

    #[test]
    fn no_output_until_gate_fires() {
        let clock = Rc::new(ManualClock::new());
        let mut spinner = spinner_at_10hz(&clock);

        clock.advance(Duration::from_millis(50));
        assert!(!spinner.poll().unwrap());
        assert!(spinner.writer().is_empty());
        assert_eq!(spinner.frame_count(), 0);
    }

    #[test]
    fn frame_is_space_glyph_space_cr() {
        let clock = Rc::new(ManualClock::new());
        let mut spinner = spinner_at_10hz(&clock);

        clock.advance(Duration::from_millis(100));
        assert!(spinner.poll().unwrap());
        assert_eq!(spinner.writer().as_slice(), b" / \r");
        assert_eq!(spinner.frame_count(), 1);
    }

    #[test]
    fn glyphs_cycle_with_period_four() {
        let clock = Rc::new(ManualClock::new());
        let mut spinner = spinner_at_10hz(&clock);

        let mut glyphs = Vec::new();
        for _ in 0..8 {
            clock.advance(Duration::from_millis(100));
            assert!(spinner.poll().unwrap());
            glyphs.push(spinner.writer()[spinner.writer().len() - 3]);
        }
        assert_eq!(&glyphs, b"/-\\|/-\\|");
    }

    #[test]
    fn independent_spinners_do_not_interfere() {
        let clock = Rc::new(ManualClock::new());
        let mut fast = spinner_at_10hz(&clock);
        let mut slow =
            Spinner::with_parts(5.0, Vec::new(), Box::new(Rc::clone(&clock))).unwrap();

        clock.advance(Duration::from_millis(100));
        assert!(fast.poll().unwrap());
        assert!(!slow.poll().unwrap());
        assert_eq!(fast.frame_count(), 1);
        assert_eq!(slow.frame_count(), 0);
    }
}
