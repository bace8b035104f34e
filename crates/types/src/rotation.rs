//! Cube orientation and pointer samples.

use serde::{Deserialize, Serialize};

/// Pointer position in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Two-axis rotation in degrees.
///
/// `pitch` is the rotation around the X axis and is kept inside the pitch
/// limit by the rotator; `yaw` spins freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    pub pitch: f64,
    pub yaw: f64,
}

impl RotationState {
    pub fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }

    /// CSS-style transform string, e.g. `rotateX(-15deg) rotateY(30deg)`
    pub fn transform(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.pitch, self.yaw)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(-15.0, 30.0)
    }
}
