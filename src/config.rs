//! Optional configuration file support (feature `config`).
//!
//! Loads defaults for the CLI from `<config dir>/tickgate/config.toml`.
//! A missing file is not an error; every field falls back to its default.

use crate::error::{Result, TickgateError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default spinner frequency in Hz.
const DEFAULT_SPINNER_HZ: f64 = 10.0;
/// Default dotter frequency in Hz.
const DEFAULT_DOTTER_HZ: f64 = 5.0;
/// Default sleep between CLI polls, in milliseconds.
const DEFAULT_POLL_INTERVAL_MS: u64 = 1;

/// User-tunable defaults for the CLI driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub spinner_hz: f64,
    pub dotter_hz: f64,
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spinner_hz: DEFAULT_SPINNER_HZ,
            dotter_hz: DEFAULT_DOTTER_HZ,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TickgateError::config(format!("read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&raw)
            .map_err(|e| TickgateError::config(format!("parse {}: {}", path.display(), e)))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Default config file location, if a config directory exists on this
    /// platform.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tickgate").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!(config.spinner_hz > 0.0);
        assert!(config.dotter_hz > 0.0);
        assert!(config.poll_interval_ms >= 1);
    }

    #[test]
    fn parses_partial_file_with_defaults() {
        let config: Config = toml::from_str("spinner_hz = 24.0").unwrap();
        assert_eq!(config.spinner_hz, 24.0);
        assert_eq!(config.dotter_hz, Config::default().dotter_hz);
    }

    #[test]
    fn rejects_malformed_toml() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "spinner_hz = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, TickgateError::Config { .. }));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            spinner_hz: 12.5,
            dotter_hz: 3.0,
            poll_interval_ms: 2,
        };
        let raw = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
