//! bitcube-core: Encoder, drag rotator and host traits for the bitcube clock.
//!
//! This crate contains the time-to-binary/BCD encoder with its two toggle
//! state machines, the drag-to-rotate state machine, and the traits a host
//! implements to receive their output (ClockSurface, RotationTarget) or to
//! feed them wall-clock time (TimeSource).

pub mod constants;
mod drag;
pub mod encoder;
mod error;
mod surface;
mod time_source;

pub use constants::{
    BCD_DIGIT_BITS, DAY_BITS, DEFAULT_SENSITIVITY, HOURS_BITS_12, HOURS_BITS_24, MIN_SEC_BITS,
    MONTH_BITS, PITCH_LIMIT, YEAR_BITS,
};
pub use drag::DragRotator;
pub use encoder::{ClockEncoder, EncodedTime};
pub use error::ClockError;
pub use surface::{ClockSurface, RotationTarget, Slot};
pub use time_source::{BoxedTimeSource, TimeSource};

// Re-export types used in trait signatures for convenience
pub use bitcube_types::{ClockReading, DisplayMode, HourMode, PointerPos, RotationState};
