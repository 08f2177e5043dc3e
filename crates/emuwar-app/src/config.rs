//! Application configuration, loaded from an optional JSON file.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use emuwar_core::constants::{TICK_PERIOD_MS, VOLLEY_PERIOD_MS};
use emuwar_sim::SimConfig;

use crate::error::AppError;

/// Settings for the driver thread and logging. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// RNG seed for the simulation.
    pub seed: u64,
    /// Wall-clock milliseconds between ticks.
    pub tick_period_ms: u64,
    /// Wall-clock milliseconds between volleys.
    pub volley_period_ms: u64,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: SimConfig::default().seed,
            tick_period_ms: TICK_PERIOD_MS,
            volley_period_ms: VOLLEY_PERIOD_MS,
            log_level: "info".into(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| AppError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Both periods must be non-zero.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.tick_period_ms == 0 {
            return Err(AppError::Config("tick_period_ms must be > 0".into()));
        }
        if self.volley_period_ms == 0 {
            return Err(AppError::Config("volley_period_ms must be > 0".into()));
        }
        Ok(())
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig { seed: self.seed }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn volley_period(&self) -> Duration {
        Duration::from_millis(self.volley_period_ms)
    }
}
