//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (console,
//! dashboard, scheduler) that the [`AppService`](super::service::AppService)
//! interprets and acts upon.

use core::fmt;
use core::str::FromStr;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Switch the pump on (manual override).
    StartPump,

    /// Switch the pump off (manual override).
    StopPump,

    /// Enable or disable threshold-based auto mode.
    SetAutoMode(bool),

    /// Emit a telemetry snapshot immediately.
    ReportStatus,
}

/// Console input that does not name a known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParseError(pub String);

impl fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown command '{}' (expected: start, stop, auto on|off, status)",
            self.0
        )
    }
}

impl std::error::Error for CommandParseError {}

impl FromStr for AppCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace().map(str::to_ascii_lowercase);
        let head = words.next();
        let arg = words.next();
        if words.next().is_some() {
            return Err(CommandParseError(s.trim().to_string()));
        }

        match (head.as_deref(), arg.as_deref()) {
            (Some("start"), None) => Ok(Self::StartPump),
            (Some("stop"), None) => Ok(Self::StopPump),
            (Some("status"), None) => Ok(Self::ReportStatus),
            (Some("auto"), Some("on" | "enable" | "true" | "1")) => Ok(Self::SetAutoMode(true)),
            (Some("auto"), Some("off" | "disable" | "false" | "0")) => Ok(Self::SetAutoMode(false)),
            _ => Err(CommandParseError(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!("start".parse::<AppCommand>(), Ok(AppCommand::StartPump));
        assert_eq!("  STOP ".parse::<AppCommand>(), Ok(AppCommand::StopPump));
        assert_eq!("status".parse::<AppCommand>(), Ok(AppCommand::ReportStatus));
        assert_eq!("auto on".parse::<AppCommand>(), Ok(AppCommand::SetAutoMode(true)));
        assert_eq!("Auto Disable".parse::<AppCommand>(), Ok(AppCommand::SetAutoMode(false)));
        assert_eq!("auto 1".parse::<AppCommand>(), Ok(AppCommand::SetAutoMode(true)));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<AppCommand>().is_err());
        assert!("auto".parse::<AppCommand>().is_err());
        assert!("auto maybe".parse::<AppCommand>().is_err());
        assert!("start now please".parse::<AppCommand>().is_err());
        let err = "water".parse::<AppCommand>().unwrap_err();
        assert_eq!(err, CommandParseError("water".into()));
    }
}
