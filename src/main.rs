//! SoilWatch: main entry point
//!
//! Hexagonal architecture with a cooperative, timer-driven runtime.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  SimulatedSoil / RemoteStation   LogEventSink   JsonConfigFile │
//! │  (Sensor+Actuator)               (EventSink)    (ConfigPort)   │
//! │  Console thread ──▶ COMMAND_CHANNEL                            │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  drift rule · auto-mode hysteresis                     │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Scheduler (delegate-driven) · EventQueue · Controller         │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use soilwatch::adapters::config_file::JsonConfigFile;
use soilwatch::adapters::console;
use soilwatch::adapters::log_sink::LogEventSink;
use soilwatch::adapters::simulator::SimulatedSoil;
use soilwatch::app::ports::{ConfigError, ConfigPort};
use soilwatch::config::{DataSource, SystemConfig};
use soilwatch::error::Error;
use soilwatch::runtime::{self, Controller};

// ── CLI ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceArg {
    Simulated,
    Remote,
}

impl From<SourceArg> for DataSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Simulated => Self::Simulated,
            SourceArg::Remote => Self::Remote,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "soilwatch")]
#[command(version, about = "Soil moisture monitor and pump controller")]
struct Cli {
    /// JSON config file (defaults are used if it does not exist)
    #[arg(long, default_value = "soilwatch.json")]
    config: PathBuf,

    /// Where readings come from
    #[arg(long, value_enum)]
    source: Option<SourceArg>,

    /// Station base URL tried first
    #[arg(long, env = "SOILWATCH_PRIMARY_URL")]
    primary_url: Option<String>,

    /// Station base URL tried once when the primary fails
    #[arg(long, env = "SOILWATCH_FALLBACK_URL")]
    fallback_url: Option<String>,
}

impl Cli {
    /// Layer flags and environment over the file config.
    fn apply(&self, config: &mut SystemConfig) {
        if let Some(source) = self.source {
            config.source = source.into();
        }
        if let Some(url) = &self.primary_url {
            config.primary_url = Some(url.clone());
        }
        if let Some(url) = &self.fallback_url {
            config.fallback_url = Some(url.clone());
        }
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("╔══════════════════════════════════════╗");
    info!("║  SoilWatch v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Load config (or defaults) ──────────────────────────
    let file = JsonConfigFile::new(&cli.config);
    let mut config = match file.load() {
        Ok(cfg) => cfg,
        Err(ConfigError::NotFound) => {
            warn!("No config at {}, using defaults", file.path().display());
            SystemConfig::default()
        }
        Err(e) => return Err(Error::from(e).into()),
    };
    cli.apply(&mut config);
    config.validate().map_err(Error::from)?;

    info!(
        "Config: source={:?} tick={}ms step every {} tick(s), auto {}..{}",
        config.source,
        config.tick_interval_ms,
        config.moisture_step_ticks,
        config.auto_thresholds.low,
        config.auto_thresholds.high
    );

    // ── 3. Console ────────────────────────────────────────────
    let _console = console::spawn()?;
    info!("Console ready: start | stop | auto on | auto off | status");

    // ── 4. Runtime ────────────────────────────────────────────
    let tick = Duration::from_millis(config.tick_interval_ms.into());
    match config.source {
        DataSource::Simulated => {
            let hw = SimulatedSoil::new(config.drift);
            runtime::run(Controller::new(&config, hw, LogEventSink::new()), tick);
        }
        DataSource::Remote => run_remote(&config, tick)?,
    }
    Ok(())
}

#[cfg(feature = "remote")]
fn run_remote(config: &SystemConfig, tick: Duration) -> Result<()> {
    use soilwatch::adapters::http::ReqwestTransport;
    use soilwatch::adapters::remote::{Endpoints, RemoteStation};

    let Some(primary) = config.primary_url.clone() else {
        bail!("remote source needs a primary URL");
    };
    let transport = ReqwestTransport::new(Duration::from_millis(config.http_timeout_ms.into()))?;
    let station = RemoteStation::new(
        transport,
        Endpoints::new(primary, config.fallback_url.clone()),
    );
    runtime::run(Controller::new(config, station, LogEventSink::new()), tick);
    Ok(())
}

#[cfg(not(feature = "remote"))]
fn run_remote(_config: &SystemConfig, _tick: Duration) -> Result<()> {
    bail!("built without the `remote` feature; only the simulated source is available")
}
