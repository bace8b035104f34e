//! Shared constants for the clock and the rotator

/// Plain-binary width of the year row (years up to 2047)
pub const YEAR_BITS: usize = 11;

/// Plain-binary width of the month row
pub const MONTH_BITS: usize = 4;

/// Plain-binary width of the day row
pub const DAY_BITS: usize = 5;

/// Plain-binary hour width in 24-hour mode (0-23)
pub const HOURS_BITS_24: usize = 5;

/// Plain-binary hour width in 12-hour mode (1-12)
pub const HOURS_BITS_12: usize = 4;

/// Plain-binary width of the minute and second rows
pub const MIN_SEC_BITS: usize = 6;

/// Every BCD digit is exactly this wide
pub const BCD_DIGIT_BITS: usize = 4;

/// Degrees of rotation per pixel of pointer movement
pub const DEFAULT_SENSITIVITY: f64 = 0.4;

/// Pitch is clamped to `[-PITCH_LIMIT, PITCH_LIMIT]` degrees
pub const PITCH_LIMIT: f64 = 90.0;
