//! Error types for the clock core

use crate::surface::Slot;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// A display or control slot the clock writes to is absent from the host
    #[error("clock surface is missing the '{}' element", .0.id())]
    MissingSurfaceElement(Slot),

    /// The host has no rotatable element; rotation is disabled
    #[error("rotation target is not available")]
    MissingRotationTarget,

    /// A character outside 0-9 reached the BCD converter
    #[error("invalid BCD digit: {0:?}")]
    InvalidDigit(char),
}
