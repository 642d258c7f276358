//! Property tests for the rate-limiting and bounds invariants.

use proptest::prelude::*;
use std::rc::Rc;
use std::time::Duration;
use tickgate::{Dotter, ManualClock, RateGate, Spinner, SPIN_GLYPHS};

proptest! {
    /// Under uniform polling at any rate, consecutive firings are never
    /// closer than `period - tolerance` and never further apart than one
    /// poll step past the period.
    #[test]
    fn fired_intervals_respect_the_rate_limit(
        hz in 0.5f64..200.0,
        step_us in 200u64..20_000,
    ) {
        let mut gate = RateGate::from_frequency(hz, Duration::ZERO).unwrap();
        let period = gate.period();
        let tolerance = gate.tolerance();
        let step = Duration::from_micros(step_us);

        let mut now = Duration::ZERO;
        let mut last_fire: Option<Duration> = None;
        for _ in 0..2_000 {
            now += step;
            if gate.poll(now) {
                if let Some(prev) = last_fire {
                    let interval = now - prev;
                    prop_assert!(interval + tolerance > period);
                    prop_assert!(interval <= period + step);
                }
                last_fire = Some(now);
            }
        }
    }

    /// Every fired frame is exactly ` dddd \r` with all four window bytes
    /// drawn from the pattern alphabet, at any frequency and frame count.
    #[test]
    fn dotter_never_reads_outside_the_pattern(
        hz in 1.0f64..100.0,
        fires in 1usize..80,
    ) {
        let clock = Rc::new(ManualClock::new());
        let mut dotter =
            Dotter::with_parts(hz, Vec::new(), Box::new(Rc::clone(&clock))).unwrap();
        let kick = dotter.period() + Duration::from_millis(1);

        for _ in 0..fires {
            clock.advance(kick);
            prop_assert!(dotter.poll().unwrap());
        }

        let out = dotter.writer();
        prop_assert_eq!(out.len(), fires * 7);
        for frame in out.chunks(7) {
            prop_assert_eq!(frame[0], b' ');
            prop_assert_eq!(frame[5], b' ');
            prop_assert_eq!(frame[6], b'\r');
            for &b in &frame[1..5] {
                prop_assert!(b == b'.' || b == b' ');
            }
        }
    }

    /// The glyph cycle holds for any number of fired frames.
    #[test]
    fn spinner_glyphs_cycle_in_order(
        hz in 1.0f64..100.0,
        fires in 1usize..64,
    ) {
        let clock = Rc::new(ManualClock::new());
        let mut spinner =
            Spinner::with_parts(hz, Vec::new(), Box::new(Rc::clone(&clock))).unwrap();
        let kick = spinner.period() + Duration::from_millis(1);

        for _ in 0..fires {
            clock.advance(kick);
            prop_assert!(spinner.poll().unwrap());
        }

        for (i, frame) in spinner.writer().chunks(4).enumerate() {
            prop_assert_eq!(frame[1], SPIN_GLYPHS[i % 4]);
        }
    }
}
