//! System configuration parameters
//!
//! All tunable parameters for the SoilWatch controller.
//! Values can be overridden by a JSON config file, environment variables
//! or command-line flags (in that order of precedence, lowest first).

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::garden::rules::{AutoThresholds, MoistureDrift};

/// Where moisture and pump readings come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// In-process simulator applying the drift rule.
    #[default]
    Simulated,
    /// Poll a live station over HTTP.
    Remote,
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Garden ---
    /// Moisture level at process start (0-100%)
    pub initial_moisture: u8,
    /// Simulator step sizes
    pub drift: MoistureDrift,
    /// Auto-mode hysteresis thresholds
    pub auto_thresholds: AutoThresholds,

    // --- Timing ---
    /// Length of one scheduler tick (milliseconds)
    pub tick_interval_ms: u32,
    /// Moisture step / remote poll cadence (ticks)
    pub moisture_step_ticks: u32,
    /// Auto-mode evaluation cadence (ticks)
    pub auto_check_ticks: u32,
    /// Clock display refresh cadence (ticks)
    pub clock_ticks: u32,
    /// Telemetry report cadence (ticks)
    pub telemetry_ticks: u32,

    // --- Remote station ---
    pub source: DataSource,
    /// Base URL tried first (e.g. the station's LAN address)
    pub primary_url: Option<String>,
    /// Base URL tried once when the primary fails (e.g. a tunnel)
    pub fallback_url: Option<String>,
    /// Per-request HTTP timeout (milliseconds)
    pub http_timeout_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Garden
            initial_moisture: 72,
            drift: MoistureDrift::default(),
            auto_thresholds: AutoThresholds::default(),

            // Timing
            tick_interval_ms: 1000, // 1 Hz
            moisture_step_ticks: 3,
            auto_check_ticks: 1,
            clock_ticks: 1,
            telemetry_ticks: 60,

            // Remote station
            source: DataSource::Simulated,
            primary_url: None,
            fallback_url: None,
            http_timeout_ms: 5000,
        }
    }
}

impl SystemConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_moisture > 100 {
            return Err(ConfigError::ValidationFailed("initial_moisture must be 0-100"));
        }
        let t = self.auto_thresholds;
        if t.low > 100 || t.high > 100 {
            return Err(ConfigError::ValidationFailed("auto thresholds must be 0-100"));
        }
        if t.low >= t.high {
            return Err(ConfigError::ValidationFailed(
                "auto_thresholds.low must be below auto_thresholds.high",
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_interval_ms must be > 0"));
        }
        if self.moisture_step_ticks == 0
            || self.auto_check_ticks == 0
            || self.clock_ticks == 0
            || self.telemetry_ticks == 0
        {
            return Err(ConfigError::ValidationFailed("trigger cadences must be > 0 ticks"));
        }
        if self.source == DataSource::Remote {
            if self.primary_url.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::ValidationFailed("remote source needs primary_url"));
            }
            if self.http_timeout_ms == 0 {
                return Err(ConfigError::ValidationFailed("http_timeout_ms must be > 0"));
            }
        }
        Ok(())
    }
}
