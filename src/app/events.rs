//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log them, print them to the
//! console, push them to a dashboard.

use crate::garden::{AutoMode, GardenState, LinkStatus, MoistureBand, MoistureLevel, PumpState};

/// Why the pump state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpCause {
    /// A start/stop command.
    Manual,
    /// The auto-mode threshold rule.
    Auto,
    /// A remote station reported a different pump state.
    Remote,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries initial state).
    Started(GardenState),

    /// Moisture moved between two levels.
    MoistureChanged { from: MoistureLevel, to: MoistureLevel },

    /// The pump switched.
    PumpChanged { to: PumpState, cause: PumpCause },

    /// Auto mode was toggled.
    AutoModeChanged(AutoMode),

    /// The remote data link changed freshness.
    LinkChanged(LinkStatus),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),

    /// Display-only wall-clock refresh (`HH:MM:SS`).
    Clock(String),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub moisture: MoistureLevel,
    pub band: MoistureBand,
    pub pump: PumpState,
    pub auto_mode: AutoMode,
    pub link: LinkStatus,
    /// Moisture steps applied since startup.
    pub steps: u64,
}
