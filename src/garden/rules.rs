//! Pure update rules for the garden state.
//!
//! Nothing in here performs I/O or keeps state of its own: each rule maps
//! the current values to the next ones, so the scheduler, the simulator
//! and the tests can all drive them directly.

use serde::{Deserialize, Serialize};

use super::{GardenState, MoistureLevel, PumpState};

/// Per-step moisture change while the pump runs / while it is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoistureDrift {
    /// Points gained per step while the pump is on.
    pub wet_step: u8,
    /// Points lost per step while the pump is off.
    pub dry_step: u8,
}

impl Default for MoistureDrift {
    fn default() -> Self {
        Self {
            wet_step: 2,
            dry_step: 1,
        }
    }
}

/// Hysteresis thresholds for automatic pump control.
///
/// Below `low` the pump is started; above `high` it is stopped; inside
/// `low..=high` nothing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoThresholds {
    pub low: u8,
    pub high: u8,
}

impl Default for AutoThresholds {
    fn default() -> Self {
        Self { low: 40, high: 70 }
    }
}

/// Advance moisture by one simulation step.
pub fn step_moisture(
    moisture: MoistureLevel,
    pump: PumpState,
    drift: MoistureDrift,
) -> MoistureLevel {
    let delta = match pump {
        PumpState::On => i16::from(drift.wet_step),
        PumpState::Off => -i16::from(drift.dry_step),
    };
    moisture.offset(delta)
}

/// Decide whether the threshold controller wants to change the pump.
///
/// Returns `None` when auto mode is disabled or moisture sits inside the
/// hysteresis band; otherwise the pump state to switch to.
pub fn auto_decision(state: &GardenState, thresholds: AutoThresholds) -> Option<PumpState> {
    if !state.auto_mode.is_enabled() {
        return None;
    }
    let m = state.moisture.get();
    if m < thresholds.low && !state.pump.is_on() {
        Some(PumpState::On)
    } else if m > thresholds.high && state.pump.is_on() {
        Some(PumpState::Off)
    } else {
        None
    }
}
