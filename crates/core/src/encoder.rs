//! Time-to-binary/BCD encoding
//!
//! Date rows (year, month, day) are always plain binary. Time rows (hours,
//! minutes, seconds) follow the [`DisplayMode`]: plain binary of the whole
//! value, or BCD where each decimal digit becomes its own 4-bit group and the
//! two groups are joined by a single space. The hour value and its plain
//! width follow the [`HourMode`].
//!
//! ```
//! use bitcube_core::{ClockEncoder, ClockReading, DisplayMode, HourMode};
//!
//! let reading = ClockReading::new(2024, 3, 17, 23, 5, 9);
//! let encoded = ClockEncoder::new(DisplayMode::Bcd, HourMode::H24).encode(&reading);
//! assert_eq!(encoded.hours, "0010 0011");
//! assert_eq!(encoded.minutes, "0000 0101");
//! ```

use crate::constants::{
    BCD_DIGIT_BITS, DAY_BITS, HOURS_BITS_12, HOURS_BITS_24, MIN_SEC_BITS, MONTH_BITS, YEAR_BITS,
};
use crate::error::ClockError;
use crate::surface::Slot;
use bitcube_types::{ClockReading, DisplayMode, HourMode};
use log::warn;

/// Six encoded rows for one reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTime {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl EncodedTime {
    /// Rows paired with the slot each one is written to
    pub fn rows(&self) -> [(Slot, &str); 6] {
        [
            (Slot::Year, self.year.as_str()),
            (Slot::Month, self.month.as_str()),
            (Slot::Day, self.day.as_str()),
            (Slot::Hours, self.hours.as_str()),
            (Slot::Minutes, self.minutes.as_str()),
            (Slot::Seconds, self.seconds.as_str()),
        ]
    }
}

/// Zero-padded base-2 representation of `value`.
///
/// A value that needs more than `width` bits is emitted at its natural width.
pub fn encode_plain(value: u32, width: usize) -> String {
    format!("{:0width$b}", value, width = width)
}

/// 4-bit group for a single decimal digit
pub fn encode_bcd_digit(digit: char) -> Result<String, ClockError> {
    digit
        .to_digit(10)
        .map(|d| encode_plain(d, BCD_DIGIT_BITS))
        .ok_or(ClockError::InvalidDigit(digit))
}

/// BCD form of a two-digit decimal string, e.g. `"23"` -> `"0010 0011"`.
///
/// Shorter input is left-padded with `0`. Longer input keeps only its first
/// two characters (`"123"` -> `"0001 0010"`) and is logged. An invalid digit
/// becomes `0000` and is logged instead of failing the whole row.
pub fn encode_bcd_str(digits: &str) -> String {
    if digits.chars().count() > 2 {
        warn!("BCD input {:?} is longer than two digits, truncating", digits);
    }
    let padded = format!("{:0>2}", digits);
    padded
        .chars()
        .take(2)
        .map(|c| match encode_bcd_digit(c) {
            Ok(bits) => bits,
            Err(e) => {
                warn!("{}, substituting zeros", e);
                "0".repeat(BCD_DIGIT_BITS)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// BCD form of a value shown with two decimal digits
pub fn encode_bcd_pair(value: u32) -> String {
    encode_bcd_str(&format!("{:02}", value))
}

/// Hour value as shown on the dial: 12-hour mode maps 0 to 12
pub fn display_hour(raw_hour: u32, hour_mode: HourMode) -> u32 {
    match hour_mode {
        HourMode::H24 => raw_hour,
        HourMode::H12 => match raw_hour % 12 {
            0 => 12,
            h => h,
        },
    }
}

/// Plain-binary width of the hour row
pub fn hour_bits(hour_mode: HourMode) -> usize {
    match hour_mode {
        HourMode::H24 => HOURS_BITS_24,
        HourMode::H12 => HOURS_BITS_12,
    }
}

/// Encode a time row value in the given display mode
fn encode_time_value(value: u32, plain_width: usize, display_mode: DisplayMode) -> String {
    match display_mode {
        DisplayMode::Binary => encode_plain(value, plain_width),
        DisplayMode::Bcd => encode_bcd_pair(value),
    }
}

/// Label for the 12/24 toggle: the dial value the next click switches TO,
/// written in the current display mode.
pub fn hour_toggle_label(hour_mode: HourMode, display_mode: DisplayMode) -> String {
    let target = hour_mode.toggled();
    encode_time_value(target.dial_value(), hour_bits(target), display_mode)
}

/// Encoder holding the two toggle states.
///
/// Both toggles are independent two-state machines; only the hour toggle
/// label depends on the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockEncoder {
    display_mode: DisplayMode,
    hour_mode: HourMode,
}

impl ClockEncoder {
    pub fn new(display_mode: DisplayMode, hour_mode: HourMode) -> Self {
        Self {
            display_mode,
            hour_mode,
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn hour_mode(&self) -> HourMode {
        self.hour_mode
    }

    /// Flip Binary <-> BCD, returning the new mode
    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.display_mode
    }

    /// Flip 24h <-> 12h, returning the new mode
    pub fn toggle_hour_mode(&mut self) -> HourMode {
        self.hour_mode = self.hour_mode.toggled();
        self.hour_mode
    }

    /// Current label of the 12/24 toggle
    pub fn hour_toggle_label(&self) -> String {
        hour_toggle_label(self.hour_mode, self.display_mode)
    }

    /// Encode all six rows of a reading
    pub fn encode(&self, reading: &ClockReading) -> EncodedTime {
        let hour = display_hour(reading.hour, self.hour_mode);
        // Negative years have no bit pattern on the cube
        let year = u32::try_from(reading.year).unwrap_or(0);

        EncodedTime {
            year: encode_plain(year, YEAR_BITS),
            month: encode_plain(reading.month, MONTH_BITS),
            day: encode_plain(reading.day, DAY_BITS),
            hours: encode_time_value(hour, hour_bits(self.hour_mode), self.display_mode),
            minutes: encode_time_value(reading.minute, MIN_SEC_BITS, self.display_mode),
            seconds: encode_time_value(reading.second, MIN_SEC_BITS, self.display_mode),
        }
    }
}
