//! Application configuration, stored as YAML under the user's dotdir.

use crate::core::calculator::busy_time::IDLE_GAP_THRESHOLD_SECS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Gap length (seconds) above which two interactions stop counting as
    /// continuous work. Kept configurable, but the default is the
    /// historical constant and should rarely change.
    #[serde(default = "default_idle_gap")]
    pub idle_gap_threshold_secs: f64,
}

fn default_idle_gap() -> f64 {
    IDLE_GAP_THRESHOLD_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            idle_gap_threshold_secs: default_idle_gap(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".annostat")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("annostat.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("annostat.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    /// Create the config directory and write the current configuration.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("serialization failed: {e}")))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }
}
