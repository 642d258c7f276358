//! # tickgate - Rate-Gated Terminal Animations & Lap Timing
//!
//! Small, allocation-free building blocks for terminal progress feedback:
//! a rotating [`Spinner`], a sliding dot animation ([`Dotter`]), and a
//! nanosecond-precision lap [`Timer`], all driven by a monotonic clock.
//!
//! ## Design
//!
//! - **Pollable, not scheduled**: the animations are passive gate objects.
//!   Call [`Spinner::poll`] from any loop shape (tight busy loop, sleep
//!   throttled, cooperative tick); frames are emitted at the configured
//!   frequency no matter how often you poll.
//! - **Monotonic time only**: all interval math uses the OS monotonic clock,
//!   immune to wall-clock adjustments. A [`ManualClock`] is provided for
//!   deterministic tests and offline stepping.
//! - **Single-threaded by contract**: no internal locking; callers impose
//!   external mutual exclusion if they share a component across threads.
//!
//! ## Modules
//!
//! - [`error`] - Centralized error types and handling
//! - [`clock`] - Monotonic time sources
//! - [`gate`] - The shared rate-limiting gate
//! - [`spinner`], [`dotter`] - The two animations
//! - [`timer`] - The lap timer

// Core modules
pub mod clock;
pub mod error;
pub mod gate;

// Components
pub mod dotter;
pub mod spinner;
pub mod timer;

// Optional configuration system
#[cfg(feature = "config")]
pub mod config;

// Re-export commonly used types for convenience
pub use error::{Result, TickgateError};

// Public API surface
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use dotter::{Dotter, DOT_PATTERN};
pub use gate::RateGate;
pub use spinner::{Spinner, SPIN_GLYPHS};
pub use timer::Timer;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
