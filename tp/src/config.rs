//! TourPlan configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `store-path`
pub const STORE_ENV: &str = "TOURPLAN_STORE";

/// Main TourPlan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite file holding visitor preferences
    #[serde(rename = "store-path")]
    pub store_path: PathBuf,

    /// How long to wait on a locked database
    #[serde(rename = "busy-timeout-ms")]
    pub busy_timeout_ms: u64,

    /// Log level used when --log-level is not given
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tourplan")
        .join(prefstore::DEFAULT_DB_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            busy_timeout_ms: prefstore::DEFAULT_BUSY_TIMEOUT_MS,
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain, then apply environment overrides
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::load_file_chain(config_path)?;
        if let Ok(store) = std::env::var(STORE_ENV)
            && !store.trim().is_empty()
        {
            tracing::debug!(store = %store, "Store path overridden from environment");
            config.store_path = PathBuf::from(store);
        }
        Ok(config)
    }

    /// Read just the log level so logging can start before the full load
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load_file_chain(config_path).ok().and_then(|c| c.log_level)
    }

    /// Busy timeout as a duration
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    fn load_file_chain(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, it must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: ./tourplan.yml
        let local_config = PathBuf::from("tourplan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/tourplan/tourplan.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tourplan").join("tourplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
