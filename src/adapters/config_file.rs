//! JSON config file adapter.
//!
//! Implements [`ConfigPort`] on top of a single JSON document.  Missing
//! fields take their defaults; a missing file is reported as
//! [`ConfigError::NotFound`] so the caller can fall back to defaults.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::SystemConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse and validate a config document.
pub fn parse_config(text: &str) -> Result<SystemConfig, ConfigError> {
    let config: SystemConfig =
        serde_json::from_str(text).map_err(|e| ConfigError::Corrupted(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError(e.to_string()),
        })?;
        let config = parse_config(&text)?;
        info!("Config loaded from {}", self.path.display());
        Ok(config)
    }
}
