//! bitcube-types: Shared data types for the bitcube binary clock.
//!
//! This crate contains pure data types (clock readings, display modes,
//! rotation state and configuration structs) shared by every bitcube crate.
//! Nothing in here talks to a terminal or reads the system clock.

pub mod clock;
pub mod configs;
pub mod rotation;

pub use clock::{ClockReading, DisplayMode, HourMode};
pub use configs::{ClockConfig, RotationConfig};
pub use rotation::{PointerPos, RotationState};
