//! Fixed-cadence trigger scheduler.
//!
//! The runtime calls [`Scheduler::tick`] once per base tick.  Each
//! schedule counts ticks independently and notifies a
//! [`SchedulerDelegate`] when its interval elapses; the delegate decides
//! what to do with it (the runtime pushes an event into the queue).
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Schedules                             │
//! │                                                              │
//! │  ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌──────────┐   │
//! │  │  Clock    │  │ Moisture  │  │ Auto-mode │  │Telemetry │   │
//! │  │  every 1  │  │ every 3   │  │ every 1   │  │ every 60 │   │
//! │  └─────┬─────┘  └─────┬─────┘  └─────┬─────┘  └─────┬────┘   │
//! │        ▼              ▼              ▼              ▼        │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                 SchedulerDelegate                      │  │
//! │  │            (runtime pushes into EventQueue)            │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Schedules fire in insertion order when several are due on the same
//! tick.

use log::{debug, info, warn};

use crate::app::ports::{SchedulerDelegate, Trigger};
use crate::config::SystemConfig;

/// Maximum number of concurrent schedules (stack-allocated).
const MAX_SCHEDULES: usize = 4;

/// One periodic schedule.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    pub trigger: Trigger,
    /// Fire every `interval_ticks` base ticks.  Must be non-zero.
    pub interval_ticks: u32,
}

#[derive(Debug, Clone, Copy)]
struct ScheduleEntry {
    schedule: Schedule,
    /// Ticks elapsed since last fire.
    elapsed_ticks: u32,
}

/// The scheduler engine.
pub struct Scheduler {
    schedules: heapless::Vec<ScheduleEntry, MAX_SCHEDULES>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            schedules: heapless::Vec::new(),
        }
    }

    /// Build the standard trigger set from configuration.
    ///
    /// Order matters: on a shared tick the clock refreshes first, then the
    /// moisture step, then the auto-mode check sees the stepped value.
    pub fn from_config(config: &SystemConfig) -> Self {
        let mut sched = Self::new();
        let wanted = [
            (Trigger::ClockRefresh, config.clock_ticks),
            (Trigger::MoistureStep, config.moisture_step_ticks),
            (Trigger::AutoModeCheck, config.auto_check_ticks),
            (Trigger::Telemetry, config.telemetry_ticks),
        ];
        for (trigger, interval_ticks) in wanted {
            let added = sched.add(Schedule {
                trigger,
                interval_ticks,
            });
            if added.is_none() {
                warn!("Scheduler: {:?} not scheduled (interval {})", trigger, interval_ticks);
            }
        }
        sched
    }

    /// Add a schedule.  Returns the slot index, or `None` if the table is
    /// full or the interval is zero.
    pub fn add(&mut self, schedule: Schedule) -> Option<usize> {
        if schedule.interval_ticks == 0 {
            return None;
        }
        let slot = self.schedules.len();
        self.schedules
            .push(ScheduleEntry {
                schedule,
                elapsed_ticks: 0,
            })
            .ok()?;
        info!(
            "Scheduler: {:?} every {} tick(s) at slot {}",
            schedule.trigger, schedule.interval_ticks, slot
        );
        Some(slot)
    }

    /// Advance every schedule by one tick.
    pub fn tick(&mut self, delegate: &mut dyn SchedulerDelegate) {
        for entry in &mut self.schedules {
            entry.elapsed_ticks += 1;
            if entry.elapsed_ticks >= entry.schedule.interval_ticks {
                entry.elapsed_ticks = 0;
                debug!("Scheduler: {:?} fired", entry.schedule.trigger);
                delegate.on_schedule_fired(entry.schedule.trigger);
            }
        }
    }

    /// Number of registered schedules.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
