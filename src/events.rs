//! Runtime event queue.
//!
//! Events are produced by:
//! - The scheduler delegate (clock, moisture step, auto-mode, telemetry)
//! - The command inbox (console / dashboard commands)
//!
//! Events are consumed by the control loop, which processes them one at a
//! time in FIFO order.  Each event runs to completion before the next, so
//! handlers never observe a half-applied update.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Scheduler   │────▶│              │     │              │
//! │ Commands    │────▶│  EventQueue  │────▶│ Control loop │
//! │             │     │  (bounded)   │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use heapless::Deque;
use log::warn;

use crate::app::commands::AppCommand;
use crate::app::ports::{SchedulerDelegate, Trigger};

/// Maximum number of pending events.
pub const EVENT_QUEUE_CAP: usize = 32;

/// Runtime event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Clock display refresh timer fired.
    ClockRefresh,
    /// Moisture step / remote poll timer fired.
    MoistureStep,
    /// Auto-mode evaluation timer fired.
    AutoModeCheck,
    /// Telemetry report timer fired.
    TelemetryTick,
    /// Inbound command from the console or a dashboard.
    Command(AppCommand),
}

impl From<Trigger> for Event {
    fn from(trigger: Trigger) -> Self {
        match trigger {
            Trigger::ClockRefresh => Self::ClockRefresh,
            Trigger::MoistureStep => Self::MoistureStep,
            Trigger::AutoModeCheck => Self::AutoModeCheck,
            Trigger::Telemetry => Self::TelemetryTick,
        }
    }
}

/// Bounded FIFO of pending events.
pub struct EventQueue {
    events: Deque<Event, EVENT_QUEUE_CAP>,
    dropped: u32,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Push an event.  Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: Event) -> bool {
        if self.events.push_back(event).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            warn!("Event queue full, dropping {:?}", event);
            return false;
        }
        true
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Drain all pending events into a callback, in FIFO order.
    pub fn drain(&mut self, mut handler: impl FnMut(Event)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Events dropped on overflow since construction.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// The queue is the scheduler's delegate: every fire becomes an event.
impl SchedulerDelegate for EventQueue {
    fn on_schedule_fired(&mut self, trigger: Trigger) {
        self.push(Event::from(trigger));
    }
}
