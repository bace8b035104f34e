//! Drag-to-rotate state machine
//!
//! 1) A gesture starts with [`DragRotator::press`] inside the drag area.
//! 2) Each [`DragRotator::moved`] turns the pointer delta since the last
//!    sample into yaw (horizontal) and pitch (vertical, inverted) degrees.
//! 3) [`DragRotator::release`] or [`DragRotator::leave`] ends the gesture.
//!    There is no inertia after release.

use crate::constants::{DEFAULT_SENSITIVITY, PITCH_LIMIT};
use bitcube_types::{PointerPos, RotationConfig, RotationState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRotator {
    rotation: RotationState,
    sensitivity: f64,
    pitch_limit: f64,
    /// Last recorded pointer position; `Some` while a gesture is active
    last_pos: Option<PointerPos>,
}

impl DragRotator {
    pub fn new(initial: RotationState, sensitivity: f64) -> Self {
        Self::with_limit(initial, sensitivity, PITCH_LIMIT)
    }

    pub fn with_limit(initial: RotationState, sensitivity: f64, pitch_limit: f64) -> Self {
        let pitch_limit = pitch_limit.abs();
        Self {
            rotation: RotationState::new(
                initial.pitch.clamp(-pitch_limit, pitch_limit),
                initial.yaw,
            ),
            sensitivity,
            pitch_limit,
            last_pos: None,
        }
    }

    pub fn from_config(config: &RotationConfig) -> Self {
        Self::with_limit(
            config.initial_rotation(),
            config.sensitivity,
            config.pitch_limit,
        )
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Returns `true` while a gesture is active
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }

    /// Start a gesture if the press landed inside the drag area.
    ///
    /// Returns whether tracking started. A press while already dragging
    /// restarts tracking from the new position.
    pub fn press(&mut self, pos: PointerPos, inside_surface: bool) -> bool {
        if !inside_surface {
            return false;
        }
        self.last_pos = Some(pos);
        true
    }

    /// Apply a pointer sample, returning the new rotation while dragging
    pub fn moved(&mut self, pos: PointerPos) -> Option<RotationState> {
        let last = self.last_pos?;
        let dx = pos.x - last.x;
        let dy = pos.y - last.y;

        self.rotation.yaw += dx * self.sensitivity;
        self.rotation.pitch = (self.rotation.pitch - dy * self.sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
        self.last_pos = Some(pos);

        Some(self.rotation)
    }

    /// End the gesture on pointer release. Returns whether one was active.
    pub fn release(&mut self) -> bool {
        self.last_pos.take().is_some()
    }

    /// End the gesture when the pointer leaves the drag area
    pub fn leave(&mut self) -> bool {
        self.release()
    }
}

impl Default for DragRotator {
    fn default() -> Self {
        Self::new(RotationState::default(), DEFAULT_SENSITIVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> PointerPos {
        PointerPos::new(x, y)
    }

    #[test]
    fn new_rotator_is_idle() {
        let rotator = DragRotator::default();
        assert!(!rotator.is_dragging());
        assert_eq!(rotator.rotation(), RotationState::new(-15.0, 30.0));
    }

    #[test]
    fn horizontal_drag_spins_yaw() {
        let mut rotator = DragRotator::new(RotationState::new(-15.0, 30.0), 0.4);
        assert!(rotator.press(p(100.0, 100.0), true));

        let rotation = rotator.moved(p(110.0, 100.0)).unwrap();

        assert_eq!(rotation.yaw, 34.0);
        assert_eq!(rotation.pitch, -15.0);
    }

    #[test]
    fn vertical_drag_is_inverted_into_pitch() {
        let mut rotator = DragRotator::new(RotationState::new(0.0, 0.0), 0.5);
        rotator.press(p(0.0, 0.0), true);

        let rotation = rotator.moved(p(0.0, 20.0)).unwrap();

        assert_eq!(rotation.pitch, -10.0);
        assert_eq!(rotation.yaw, 0.0);
    }

    #[test]
    fn pitch_clamps_to_limits() {
        let mut rotator = DragRotator::new(RotationState::new(-15.0, 30.0), 0.4);
        rotator.press(p(0.0, 0.0), true);

        assert_eq!(rotator.moved(p(0.0, 1000.0)).unwrap().pitch, -90.0);
        assert_eq!(rotator.moved(p(0.0, -2000.0)).unwrap().pitch, 90.0);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut rotator = DragRotator::new(RotationState::new(0.0, 0.0), 1.0);
        rotator.press(p(0.0, 0.0), true);

        assert_eq!(rotator.moved(p(720.0, 0.0)).unwrap().yaw, 720.0);
    }

    #[test]
    fn deltas_are_incremental() {
        let mut rotator = DragRotator::new(RotationState::new(0.0, 0.0), 1.0);
        rotator.press(p(0.0, 0.0), true);

        rotator.moved(p(5.0, 0.0));
        rotator.moved(p(8.0, 0.0));
        let rotation = rotator.moved(p(6.0, 0.0)).unwrap();

        assert_eq!(rotation.yaw, 6.0);
    }

    #[test]
    fn press_outside_surface_is_ignored() {
        let mut rotator = DragRotator::default();

        assert!(!rotator.press(p(10.0, 10.0), false));
        assert!(!rotator.is_dragging());
        assert_eq!(rotator.moved(p(50.0, 50.0)), None);
    }

    #[test]
    fn release_stops_tracking_without_inertia() {
        let mut rotator = DragRotator::new(RotationState::new(0.0, 0.0), 1.0);
        rotator.press(p(0.0, 0.0), true);
        rotator.moved(p(10.0, 0.0));

        assert!(rotator.release());
        assert!(!rotator.is_dragging());
        assert_eq!(rotator.moved(p(40.0, 0.0)), None);
        assert_eq!(rotator.rotation().yaw, 10.0);
    }

    #[test]
    fn leave_ends_gesture_and_is_idempotent() {
        let mut rotator = DragRotator::default();
        rotator.press(p(0.0, 0.0), true);

        assert!(rotator.leave());
        assert!(!rotator.leave());
        assert!(!rotator.release());
    }

    #[test]
    fn from_config_uses_limit_and_sensitivity() {
        let config = RotationConfig {
            initial_pitch: 80.0,
            initial_yaw: 0.0,
            sensitivity: 2.0,
            pitch_limit: 45.0,
        };
        let mut rotator = DragRotator::from_config(&config);
        assert_eq!(rotator.rotation().pitch, 45.0);

        rotator.press(p(0.0, 0.0), true);
        assert_eq!(rotator.moved(p(0.0, 10.0)).unwrap().pitch, 25.0);
    }
}
