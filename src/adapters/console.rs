//! Line-oriented console adapter.
//!
//! Stands in for the dashboard buttons and toggle: a dedicated thread
//! reads stdin, parses each line into an [`AppCommand`] and queues it on
//! the command channel.  It never touches the service directly.

use std::io::BufRead;
use std::thread::JoinHandle;

use log::{info, warn};

use crate::app::commands::AppCommand;
use crate::channels::send_command;

/// Outcome of one console line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Queued(AppCommand),
    Dropped(AppCommand),
    Rejected,
    Blank,
}

/// Parse `line` and queue the resulting command.
pub fn submit_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }
    match line.parse::<AppCommand>() {
        Ok(cmd) if send_command(cmd) => LineOutcome::Queued(cmd),
        Ok(cmd) => LineOutcome::Dropped(cmd),
        Err(e) => {
            warn!("{} (try: start | stop | auto on | auto off | status)", e);
            LineOutcome::Rejected
        }
    }
}

/// Read commands from `input` until EOF or a read error.
pub fn read_commands(input: impl BufRead) {
    for line in input.lines() {
        match line {
            Ok(line) => {
                submit_line(&line);
            }
            Err(e) => {
                warn!("Console read failed: {}", e);
                break;
            }
        }
    }
    info!("Console closed; commands no longer accepted");
}

/// Spawn the stdin reader thread.
pub fn spawn() -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("console".into())
        .spawn(|| read_commands(std::io::stdin().lock()))
}
