//! Clock and rotation configuration types.

use crate::clock::{DisplayMode, HourMode};
use crate::rotation::RotationState;
use serde::{Deserialize, Serialize};

fn default_update_interval() -> u64 {
    1000
}

fn default_timezone() -> String {
    "Local".to_string()
}

/// Clock configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockConfig {
    /// Encoding used for the time rows at startup
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Hour format at startup
    #[serde(default)]
    pub hour_mode: HourMode,
    #[serde(default = "default_update_interval")]
    pub update_interval_ms: u64,
    /// Timezone ID (e.g., "America/New_York", "Europe/London", "Local")
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Binary,
            hour_mode: HourMode::H24,
            update_interval_ms: default_update_interval(),
            timezone: default_timezone(),
        }
    }
}

fn default_initial_pitch() -> f64 {
    -15.0
}

fn default_initial_yaw() -> f64 {
    30.0
}

fn default_sensitivity() -> f64 {
    0.4
}

fn default_pitch_limit() -> f64 {
    90.0
}

/// Drag-to-rotate configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotationConfig {
    #[serde(default = "default_initial_pitch")]
    pub initial_pitch: f64,
    #[serde(default = "default_initial_yaw")]
    pub initial_yaw: f64,
    /// Degrees of rotation per pixel of pointer movement
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]`
    #[serde(default = "default_pitch_limit")]
    pub pitch_limit: f64,
}

impl RotationConfig {
    pub fn initial_rotation(&self) -> RotationState {
        RotationState::new(self.initial_pitch, self.initial_yaw)
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            initial_pitch: default_initial_pitch(),
            initial_yaw: default_initial_yaw(),
            sensitivity: default_sensitivity(),
            pitch_limit: default_pitch_limit(),
        }
    }
}
