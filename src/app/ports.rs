//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (simulator, remote station, event sinks, config
//! storage) implement these traits.  The
//! [`AppService`](super::service::AppService) consumes them via generics,
//! so the domain core never touches the network or the clock directly.

use crate::config::SystemConfig;
use crate::garden::{GardenState, LinkStatus, PumpState, Reading};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: environment → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this on every moisture step.
pub trait SensorPort {
    /// Produce the next reading.
    ///
    /// `current` is the state before the step, which lets a simulator
    /// derive the next value from it.  `None` means no data this step;
    /// the caller keeps its last known state.
    fn read(&mut self, current: &GardenState) -> Option<Reading>;

    /// Freshness of the data this port delivers.
    fn link(&self) -> LinkStatus {
        LinkStatus::Local
    }
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → pump)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this whenever its pump or auto-mode
/// decision changes.  Implementations are best-effort; failures are
/// logged by the adapter and never surface to the domain.
pub trait ActuatorPort {
    fn set_pump(&mut self, state: PumpState);

    fn set_auto_mode(&mut self, enabled: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / presentation)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (log, console,
/// dashboard push).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ config file)
// ───────────────────────────────────────────────────────────────

/// Loads system configuration.
///
/// Implementations MUST run [`SystemConfig::validate`] before handing a
/// config back; invalid ranges are rejected, not clamped.
pub trait ConfigPort {
    /// Returns [`ConfigError::NotFound`] if no stored config exists.
    fn load(&self) -> Result<SystemConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// HTTP transport (driven adapter: remote station ↔ network)
// ───────────────────────────────────────────────────────────────

/// Minimal blocking HTTP client used by the remote station adapter.
pub trait HttpTransport {
    /// GET `url`, returning the body of a 2xx response.
    fn get(&mut self, url: &str) -> Result<String, TransportError>;

    /// POST an optional JSON `body` to `url`; success means a 2xx status.
    fn post(&mut self, url: &str, body: Option<&str>) -> Result<(), TransportError>;
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate (decouples scheduler from event queue)
// ───────────────────────────────────────────────────────────────

/// Callback trait that the scheduler invokes when a schedule fires.
///
/// The runtime implements this by pushing into the
/// [`EventQueue`](crate::events::EventQueue); the scheduler itself knows
/// nothing about events or the service.
pub trait SchedulerDelegate {
    fn on_schedule_fired(&mut self, trigger: Trigger);
}

/// What a periodic schedule is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Refresh the wall-clock display.
    ClockRefresh,
    /// Advance the simulator or poll the remote station.
    MoistureStep,
    /// Evaluate the auto-mode threshold rule.
    AutoModeCheck,
    /// Emit a telemetry snapshot.
    Telemetry,
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// No config found (first run).
    NotFound,
    /// Stored config could not be parsed.
    Corrupted(String),
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error from the backing file.
    IoError(String),
}

/// Errors from [`HttpTransport`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection refused, DNS failure, TLS failure.
    Unreachable,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The server answered with a non-success status.
    Status(u16),
    /// The body could not be read or decoded.
    Body,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted(msg) => write!(f, "config corrupted: {}", msg),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unreachable => write!(f, "host unreachable"),
            Self::Timeout => write!(f, "request timed out"),
            Self::Status(code) => write!(f, "HTTP status {}", code),
            Self::Body => write!(f, "unreadable response body"),
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for TransportError {}
