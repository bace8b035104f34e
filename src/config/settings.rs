//! Application configuration

use anyhow::{ensure, Context, Result};
use bitcube_types::{ClockConfig, RotationConfig};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Application-wide configuration
///
/// Only read at startup. Toggle and rotation changes made during a session
/// are never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
}

impl AppConfig {
    /// Load configuration from the user config directory, or defaults if absent
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github.bitcube", "bitcube")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Reject values the clock or rotator cannot work with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.clock.update_interval_ms > 0,
            "clock.update_interval_ms must be greater than zero"
        );
        ensure!(
            self.rotation.sensitivity.is_finite(),
            "rotation.sensitivity must be a finite number"
        );
        ensure!(
            self.rotation.pitch_limit.is_finite() && self.rotation.pitch_limit >= 0.0,
            "rotation.pitch_limit must be a non-negative number"
        );
        ensure!(
            self.rotation.initial_pitch.is_finite() && self.rotation.initial_yaw.is_finite(),
            "rotation initial angles must be finite numbers"
        );
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            clock: ClockConfig::default(),
            rotation: RotationConfig::default(),
        }
    }
}
