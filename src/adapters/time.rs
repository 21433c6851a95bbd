//! Host time adapter.
//!
//! Provides the wall-clock label shown by the dashboard clock.  The clock
//! is display-only and never feeds the control rules.

use chrono::{DateTime, Local, TimeZone};

#[derive(Debug, Default)]
pub struct HostClock;

impl HostClock {
    pub fn new() -> Self {
        Self
    }

    /// Current local time as `HH:MM:SS`.
    pub fn clock_label(&self) -> String {
        format_clock(&Local::now())
    }
}

pub fn format_clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: core::fmt::Display,
{
    at.format("%H:%M:%S").to_string()
}
