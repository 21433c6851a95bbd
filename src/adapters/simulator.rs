//! Simulated soil adapter.
//!
//! Stands in for a real probe and pump.  Each moisture step applies the
//! drift rule to the current state: the soil dries while the pump is off
//! and soaks up water while it runs.  The pump itself *is* the state held
//! by the service, so actuator calls only log.

use log::debug;

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::garden::rules::{self, MoistureDrift};
use crate::garden::{GardenState, PumpState, Reading};

pub struct SimulatedSoil {
    drift: MoistureDrift,
}

impl SimulatedSoil {
    pub fn new(drift: MoistureDrift) -> Self {
        Self { drift }
    }
}

impl Default for SimulatedSoil {
    fn default() -> Self {
        Self::new(MoistureDrift::default())
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for SimulatedSoil {
    fn read(&mut self, current: &GardenState) -> Option<Reading> {
        Some(Reading {
            moisture: rules::step_moisture(current.moisture, current.pump, self.drift),
            pump: None,
        })
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for SimulatedSoil {
    fn set_pump(&mut self, state: PumpState) {
        debug!("SIM | pump {}", state);
    }

    fn set_auto_mode(&mut self, enabled: bool) {
        debug!("SIM | auto mode {}", enabled);
    }
}
