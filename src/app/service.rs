//! Application service, the hexagonal core.
//!
//! [`AppService`] is the single owner of the [`GardenState`] record.  It
//! exposes accessors for the presentation layer, interprets commands, and
//! runs the pure rules from [`crate::garden::rules`] when a trigger fires.
//! All I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService        │
//! ActuatorPort ◀──│  GardenState · rules    │
//!                 └────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::SystemConfig;
use crate::garden::rules::{self, AutoThresholds};
use crate::garden::{AutoMode, GardenState, LinkStatus, MoistureLevel, PumpState};

use super::commands::AppCommand;
use super::events::{AppEvent, PumpCause, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    state: GardenState,
    thresholds: AutoThresholds,
    link: LinkStatus,
    step_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            state: GardenState {
                moisture: MoistureLevel::from(config.initial_moisture),
                ..GardenState::default()
            },
            thresholds: config.auto_thresholds,
            link: LinkStatus::Local,
            step_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Take the initial link from the data source and announce the state.
    pub fn start(&mut self, sensor: &impl SensorPort, sink: &mut impl EventSink) {
        self.link = sensor.link();
        sink.emit(&AppEvent::Started(self.state));
        info!(
            "AppService started: moisture={} pump={} auto={} link={:?}",
            self.state.moisture, self.state.pump, self.state.auto_mode, self.link
        );
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn moisture_level(&self) -> MoistureLevel {
        self.state.moisture
    }

    pub fn pump_state(&self) -> PumpState {
        self.state.pump
    }

    pub fn auto_mode(&self) -> AutoMode {
        self.state.auto_mode
    }

    pub fn state(&self) -> GardenState {
        self.state
    }

    pub fn link(&self) -> LinkStatus {
        self.link
    }

    /// Moisture steps applied since startup.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    // ── Mutators ──────────────────────────────────────────────
    //
    // Unconditional assignments; calling twice equals calling once.

    pub fn start_pump(&mut self) {
        self.state.pump = PumpState::On;
    }

    pub fn stop_pump(&mut self) {
        self.state.pump = PumpState::Off;
    }

    /// Set the auto-mode flag.  Never touches the pump; the next
    /// [`evaluate_auto_mode`](Self::evaluate_auto_mode) does.
    pub fn set_auto_mode(&mut self, enabled: bool) {
        self.state.auto_mode = AutoMode::from(enabled);
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command (console, dashboard, etc.).
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            AppCommand::StartPump => {
                let was = self.state.pump;
                self.start_pump();
                self.after_pump_command(was, hw, sink);
            }
            AppCommand::StopPump => {
                let was = self.state.pump;
                self.stop_pump();
                self.after_pump_command(was, hw, sink);
            }
            AppCommand::SetAutoMode(enabled) => {
                let was = self.state.auto_mode;
                self.set_auto_mode(enabled);
                hw.set_auto_mode(enabled);
                if self.state.auto_mode != was {
                    sink.emit(&AppEvent::AutoModeChanged(self.state.auto_mode));
                }
            }
            AppCommand::ReportStatus => {
                sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
            }
        }
    }

    // ── Trigger handlers ──────────────────────────────────────

    /// Moisture-step trigger: pull the next reading from `sensor`.
    ///
    /// A missing reading leaves the state untouched.
    pub fn step_environment(&mut self, sensor: &mut impl SensorPort, sink: &mut impl EventSink) {
        let reading = sensor.read(&self.state);

        let link = sensor.link();
        if link != self.link {
            self.link = link;
            sink.emit(&AppEvent::LinkChanged(link));
        }

        let Some(reading) = reading else {
            debug!("No reading this step; keeping last known state");
            return;
        };
        self.step_count += 1;

        let from = self.state.moisture;
        self.state.moisture = reading.moisture;
        if from != reading.moisture {
            sink.emit(&AppEvent::MoistureChanged {
                from,
                to: reading.moisture,
            });
        }

        if let Some(pump) = reading.pump {
            if pump != self.state.pump {
                self.state.pump = pump;
                sink.emit(&AppEvent::PumpChanged {
                    to: pump,
                    cause: PumpCause::Remote,
                });
            }
        }
    }

    /// Auto-mode trigger: apply the threshold rule.
    pub fn evaluate_auto_mode(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        if let Some(next) = rules::auto_decision(&self.state, self.thresholds) {
            info!(
                "Auto mode: moisture {} -> pump {}",
                self.state.moisture, next
            );
            self.state.pump = next;
            hw.set_pump(next);
            sink.emit(&AppEvent::PumpChanged {
                to: next,
                cause: PumpCause::Auto,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            moisture: self.state.moisture,
            band: self.state.moisture.band(),
            pump: self.state.pump,
            auto_mode: self.state.auto_mode,
            link: self.link,
            steps: self.step_count,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn after_pump_command(
        &self,
        was: PumpState,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        hw.set_pump(self.state.pump);
        if self.state.pump != was {
            sink.emit(&AppEvent::PumpChanged {
                to: self.state.pump,
                cause: PumpCause::Manual,
            });
        }
    }
}
