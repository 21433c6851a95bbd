//! Inter-thread command channel.
//!
//! Uses an `embassy-sync` bounded MPMC channel to bridge the console
//! reader thread with the control executor.  The channel is a static, so
//! producers need no handle.
//!
//! ```text
//! ┌──────────────┐  AppCommand  ┌──────────────┐
//! │ Console      │────────────▶│ Command loop  │
//! │ (thread)     │              │ (async)       │
//! └──────────────┘              └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use crate::app::commands::AppCommand;

/// Channel depth for inbound commands.
pub const COMMAND_DEPTH: usize = 8;

/// Inbound command channel: console → command loop.
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, AppCommand, COMMAND_DEPTH> =
    Channel::new();

/// Queue a command for the control executor.
///
/// Never blocks.  Returns `false` (and logs) if the channel is full.
pub fn send_command(cmd: AppCommand) -> bool {
    if COMMAND_CHANNEL.try_send(cmd).is_err() {
        warn!("Command channel full, dropping {:?}", cmd);
        return false;
    }
    true
}

/// Try to receive a pending command without waiting.
pub fn try_recv_command() -> Option<AppCommand> {
    COMMAND_CHANNEL.try_receive().ok()
}
