//! Remote station adapter.
//!
//! Replaces the simulator with a live station reachable over HTTP.  Every
//! request goes to the primary base URL first and, if that fails for any
//! reason, once to the fallback base URL.  There is no retry beyond that
//! single fallback and no backoff; a failed poll simply yields no reading
//! so the service keeps the last known state.
//!
//! ## Wire contract
//!
//! | Request                       | Body                    | Response                    |
//! |-------------------------------|-------------------------|-----------------------------|
//! | `GET  <base>/data`            | none                    | `{"moisture": n, "pump": 0\|1}` |
//! | `POST <base>/api/pump/start`  | none                    | 2xx                         |
//! | `POST <base>/api/pump/stop`   | none                    | 2xx                         |
//! | `POST <base>/api/auto-mode`   | `{"enabled": bool}`     | 2xx                         |

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::app::ports::{ActuatorPort, HttpTransport, SensorPort, TransportError};
use crate::garden::{GardenState, LinkStatus, MoistureLevel, PumpState, Reading};

pub const DATA_PATH: &str = "/data";
pub const PUMP_START_PATH: &str = "/api/pump/start";
pub const PUMP_STOP_PATH: &str = "/api/pump/stop";
pub const AUTO_MODE_PATH: &str = "/api/auto-mode";

/// Body of `GET /data`.
#[derive(Debug, Clone, Copy, Deserialize)]
struct WireReading {
    moisture: i64,
    pump: u8,
}

/// Body of `POST /api/auto-mode`.
#[derive(Debug, Serialize)]
struct AutoModeBody {
    enabled: bool,
}

/// Decode a `/data` response body into a reading.
///
/// Moisture is clamped into `0..=100`; a pump value other than 0 or 1 is
/// rejected as malformed.
pub fn decode_reading(body: &str) -> Result<Reading, TransportError> {
    let wire: WireReading = serde_json::from_str(body).map_err(|_| TransportError::Body)?;
    let pump = match wire.pump {
        0 => PumpState::Off,
        1 => PumpState::On,
        _ => return Err(TransportError::Body),
    };
    Ok(Reading {
        moisture: MoistureLevel::saturating_from(wire.moisture),
        pump: Some(pump),
    })
}

/// Primary and optional fallback base URLs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub primary: String,
    pub fallback: Option<String>,
}

impl Endpoints {
    pub fn new(primary: impl Into<String>, fallback: Option<String>) -> Self {
        Self {
            primary: trim_base(primary.into()),
            fallback: fallback.map(trim_base).filter(|s| !s.is_empty()),
        }
    }

    fn bases(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.primary.as_str()).chain(self.fallback.as_deref())
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

/// Live station behind [`SensorPort`] and [`ActuatorPort`].
pub struct RemoteStation<T: HttpTransport> {
    transport: T,
    endpoints: Endpoints,
    link: LinkStatus,
}

impl<T: HttpTransport> RemoteStation<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        info!(
            "Remote station: primary={} fallback={}",
            endpoints.primary,
            endpoints.fallback.as_deref().unwrap_or("-")
        );
        Self {
            transport,
            endpoints,
            // Nothing read yet.
            link: LinkStatus::Disconnected,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Poll `/data` on primary, then fallback.  `None` if both fail.
    pub fn fetch(&mut self) -> Option<Reading> {
        let mut last_err = None;
        for base in self.endpoints.bases() {
            let url = format!("{base}{DATA_PATH}");
            let result = self
                .transport
                .get(&url)
                .and_then(|body| decode_reading(&body));
            match result {
                Ok(reading) => {
                    debug!("REMOTE | {} -> {:?}", url, reading);
                    return Some(reading);
                }
                Err(e) => {
                    warn!("REMOTE | GET {} failed: {}", url, e);
                    last_err = Some(e);
                }
            }
        }
        if let Some(e) = last_err {
            warn!("REMOTE | all endpoints failed (last: {}); keeping last state", e);
        }
        None
    }

    /// POST to `path` on primary, then fallback.  Returns whether any
    /// endpoint accepted it.
    fn post(&mut self, path: &str, body: Option<&str>) -> bool {
        for base in self.endpoints.bases() {
            let url = format!("{base}{path}");
            match self.transport.post(&url, body) {
                Ok(()) => {
                    debug!("REMOTE | POST {} ok", url);
                    return true;
                }
                Err(e) => warn!("REMOTE | POST {} failed: {}", url, e),
            }
        }
        warn!("REMOTE | command {} not delivered to any endpoint", path);
        false
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<T: HttpTransport> SensorPort for RemoteStation<T> {
    fn read(&mut self, _current: &GardenState) -> Option<Reading> {
        let reading = self.fetch();
        let link = if reading.is_some() {
            LinkStatus::Connected
        } else {
            LinkStatus::Disconnected
        };
        if link != self.link {
            info!("REMOTE | link {:?} -> {:?}", self.link, link);
            self.link = link;
        }
        reading
    }

    fn link(&self) -> LinkStatus {
        self.link
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<T: HttpTransport> ActuatorPort for RemoteStation<T> {
    fn set_pump(&mut self, state: PumpState) {
        let path = match state {
            PumpState::On => PUMP_START_PATH,
            PumpState::Off => PUMP_STOP_PATH,
        };
        self.post(path, None);
    }

    fn set_auto_mode(&mut self, enabled: bool) {
        match serde_json::to_string(&AutoModeBody { enabled }) {
            Ok(body) => {
                self.post(AUTO_MODE_PATH, Some(&body));
            }
            Err(e) => warn!("REMOTE | auto-mode body encode failed: {}", e),
        }
    }
}
