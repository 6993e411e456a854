//! Application configuration
//!
//! Aggregates the tuning tables and ambient settings into one TOML file.
//! The engine never reads configuration itself; callers load an
//! `AppConfig` here and hand the pieces to the component constructors.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::LogConfig;
use crate::recovery::ScoringWeights;
use crate::trend::TrendConfig;

/// Configuration format version, bumped on breaking layout changes
const CONFIG_VERSION: &str = "1";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration format version
    pub version: String,

    /// Recovery scoring weight table
    pub scoring: ScoringWeights,

    /// Trend aggregation settings
    pub trend: TrendConfig,

    /// Logging settings
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            version: CONFIG_VERSION.to_string(),
            scoring: ScoringWeights::default(),
            trend: TrendConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default config file path: `<config_dir>/liftrs/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("liftrs")
            .join("config.toml")
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the given path, or fall back to defaults if absent
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> Result<()> {
        self.scoring
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid scoring weights: {}", e))?;
        Ok(())
    }
}
