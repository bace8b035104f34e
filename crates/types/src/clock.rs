//! Clock reading snapshot and the two display toggles.

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

/// How the time rows (hours, minutes, seconds) are encoded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Whole value in base 2
    #[serde(rename = "binary")]
    #[default]
    Binary,
    /// Each decimal digit as its own 4-bit group
    #[serde(rename = "bcd")]
    Bcd,
}

impl DisplayMode {
    /// The mode a toggle switches to
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Binary => DisplayMode::Bcd,
            DisplayMode::Bcd => DisplayMode::Binary,
        }
    }

    pub fn is_bcd(self) -> bool {
        self == DisplayMode::Bcd
    }
}

/// Hour format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HourMode {
    #[serde(rename = "24h")]
    #[default]
    H24,
    #[serde(rename = "12h")]
    H12,
}

impl HourMode {
    /// The mode a toggle switches to
    pub fn toggled(self) -> Self {
        match self {
            HourMode::H24 => HourMode::H12,
            HourMode::H12 => HourMode::H24,
        }
    }

    /// Number of hours on the dial ("12" or "24")
    pub fn dial_value(self) -> u32 {
        match self {
            HourMode::H24 => 24,
            HourMode::H12 => 12,
        }
    }
}

/// Wall-clock snapshot taken once per tick.
///
/// `hour` is always the raw 24-hour value; the 12-hour form is derived when
/// encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Snapshot any chrono date-time (local, UTC or a named zone)
    pub fn from_datetime<T: Datelike + Timelike>(now: &T) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}

impl Default for ClockReading {
    fn default() -> Self {
        Self::new(2024, 1, 1, 0, 0, 0)
    }
}
