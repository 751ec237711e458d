//! Startup configuration file (native only)
//!
//! Read from `{data_dir}/config.yaml`. Every key is optional:
//!
//! ```yaml
//! simulation:
//!   initial_tokens: 735
//!   valuation_range: 18.67-20.67
//!   max_iterations: 3
//!   gap: 5
//!   run_count: 10
//!   sell_percentage: 0.5   # pin instead of drawing per run
//! export_dir: /home/me/exports
//! ```
//!
//! The file is never written by the application.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokensim_core::SimulationConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigFileError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFileError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigFileError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigFileError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigFileError {}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigFileError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig =
            serde_saphyr::from_str(yaml).map_err(|e| ConfigFileError::Parse(e.to_string()))?;
        config
            .simulation
            .validate()
            .map_err(|e| ConfigFileError::Invalid(e.to_string()))?;
        Ok(config)
    }

    /// Load the config file. A missing file yields the defaults.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigFileError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigFileError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Load the config file, falling back to defaults (with a warning) when it
    /// cannot be used
    pub fn load_or_default(data_dir: &Path) -> Self {
        match Self::load(data_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring config file, using defaults");
                Self::default()
            }
        }
    }
}
