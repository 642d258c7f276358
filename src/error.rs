//! Error types and handling infrastructure for tickgate.
//!
//! This module provides a centralized error handling system using `thiserror`
//! for custom error types and `anyhow` for application-level error handling
//! with context.
//!
//! The core is almost failure-free by design: every animation and timer
//! operation is total over valid inputs. What remains is misconfiguration
//! (a non-positive or non-finite frequency), which is rejected at construction
//! time instead of silently producing a degenerate gating period, and write
//! failures while emitting frames to the terminal.

use thiserror::Error;

/// The main error type for tickgate operations.
#[derive(Error, Debug)]
pub enum TickgateError {
    /// Rejected animation frequency (must be positive and finite)
    #[error("invalid frequency: {hz} Hz (must be positive and finite)")]
    InvalidFrequency { hz: f64 },

    /// Frame emission to the output writer failed
    #[error("frame write failed: {source}")]
    Write {
        #[from]
        source: std::io::Error,
    },

    /// Configuration file errors
    #[cfg(feature = "config")]
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Standard Result type for tickgate operations.
pub type Result<T> = std::result::Result<T, TickgateError>;

impl TickgateError {
    /// Create an InvalidFrequency error for a rejected construction parameter
    pub fn invalid_frequency(hz: f64) -> Self {
        Self::InvalidFrequency { hz }
    }

    /// Create a Config error with a descriptive message
    #[cfg(feature = "config")]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
