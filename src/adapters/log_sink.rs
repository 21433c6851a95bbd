//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade.  A dashboard push adapter would implement the same
//! trait.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::garden::LinkStatus;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | moisture={} ({:?}) | pump={} | auto={} | link={:?} | steps={}",
                    t.moisture, t.band, t.pump, t.auto_mode, t.link, t.steps,
                );
            }
            AppEvent::MoistureChanged { from, to } => {
                debug!("MOIST | {} -> {}", from, to);
            }
            AppEvent::PumpChanged { to, cause } => {
                info!("PUMP  | {} ({:?})", to, cause);
            }
            AppEvent::AutoModeChanged(mode) => {
                info!("AUTO  | {}", mode);
            }
            AppEvent::LinkChanged(LinkStatus::Disconnected) => {
                warn!("LINK  | station unreachable, showing last known data");
            }
            AppEvent::LinkChanged(link) => {
                info!("LINK  | {:?}", link);
            }
            AppEvent::Started(s) => {
                info!(
                    "START | moisture={} pump={} auto={}",
                    s.moisture, s.pump, s.auto_mode
                );
            }
            AppEvent::Clock(label) => {
                debug!("CLOCK | {}", label);
            }
        }
    }
}
