//! Garden state record and the value types it is built from.
//!
//! `GardenState` is the single record the application service reads from
//! and writes to: the current soil moisture, whether the pump is running,
//! and whether the threshold controller is allowed to override the pump.
//! The pure update rules that operate on it live in [`rules`].

pub mod rules;

use core::fmt;

// ---------------------------------------------------------------------------
// Moisture level
// ---------------------------------------------------------------------------

/// Soil moisture as an integer percentage, always within `0..=100`.
///
/// Every constructor clamps, so an out-of-range value can never be
/// observed through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoistureLevel(u8);

impl MoistureLevel {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Build a level from any integer, clamping into `0..=100`.
    pub fn saturating_from(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Shift the level by `delta` percentage points, clamping at both ends.
    pub fn offset(self, delta: i16) -> Self {
        Self::saturating_from(i64::from(self.0) + i64::from(delta))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn band(self) -> MoistureBand {
        MoistureBand::of(self)
    }
}

impl Default for MoistureLevel {
    fn default() -> Self {
        Self(72)
    }
}

impl From<u8> for MoistureLevel {
    fn from(value: u8) -> Self {
        Self::saturating_from(i64::from(value))
    }
}

impl fmt::Display for MoistureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Coarse classification used by dashboards to colour the moisture gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoistureBand {
    /// Below 30 %.
    Dry,
    /// 30 % up to (not including) 60 %.
    Moderate,
    /// 60 % and above.
    Wet,
}

impl MoistureBand {
    pub fn of(level: MoistureLevel) -> Self {
        match level.get() {
            0..30 => Self::Dry,
            30..60 => Self::Moderate,
            _ => Self::Wet,
        }
    }
}

// ---------------------------------------------------------------------------
// Pump and auto-mode flags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PumpState {
    #[default]
    Off,
    On,
}

impl PumpState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for PumpState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for PumpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_on() { "ON" } else { "OFF" })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoMode {
    #[default]
    Disabled,
    Enabled,
}

impl AutoMode {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl From<bool> for AutoMode {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

impl fmt::Display for AutoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_enabled() { "Enabled" } else { "Disabled" })
    }
}

// ---------------------------------------------------------------------------
// State record
// ---------------------------------------------------------------------------

/// The complete mutable state of the garden controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GardenState {
    pub moisture: MoistureLevel,
    pub pump: PumpState,
    pub auto_mode: AutoMode,
}

/// One sample produced by a sensor port.
///
/// `pump` is only populated by sources that observe the real actuator
/// (a remote station); the simulator leaves it `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub moisture: MoistureLevel,
    pub pump: Option<PumpState>,
}

/// Freshness of the data behind the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    /// Values come from the in-process simulator.
    #[default]
    Local,
    /// The last remote poll succeeded.
    Connected,
    /// No remote poll has succeeded yet, or the last one failed on both
    /// endpoints; state is the last known good read.
    Disconnected,
}
