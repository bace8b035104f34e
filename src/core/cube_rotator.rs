//! Drag-to-rotate controller for the clock cube

use bitcube_core::{ClockError, DragRotator, PointerPos, RotationState, RotationTarget};
use log::{error, info, trace};

/// Applies a [`DragRotator`] to a [`RotationTarget`].
///
/// While a gesture is active the target's transitions are suspended and its
/// cursor shows "grabbing"; both are restored when the gesture ends.
pub struct CubeRotator<T: RotationTarget> {
    target: T,
    rotator: DragRotator,
}

impl<T: RotationTarget> CubeRotator<T> {
    /// Apply the initial rotation, or fail if the host has no cube
    pub fn attach(mut target: T, rotator: DragRotator) -> Result<Self, ClockError> {
        if !target.is_available() {
            error!("Rotatable element not found, rotation disabled");
            return Err(ClockError::MissingRotationTarget);
        }

        target.apply_rotation(rotator.rotation());
        target.set_grabbing(false);
        info!("Cube rotation initialized at {}", rotator.rotation().transform());

        Ok(Self { target, rotator })
    }

    /// Pointer press; starts a gesture if it lands in the drag area
    pub fn press(&mut self, pos: PointerPos) -> bool {
        let inside = self.target.hit_test(pos);
        if !self.rotator.press(pos, inside) {
            trace!("Press at ({}, {}) outside drag area", pos.x, pos.y);
            return false;
        }

        self.target.set_grabbing(true);
        self.target.set_transition_enabled(false);
        true
    }

    /// Pointer move; rotates the target while a gesture is active
    pub fn moved(&mut self, pos: PointerPos) -> Option<RotationState> {
        let rotation = self.rotator.moved(pos)?;
        self.target.apply_rotation(rotation);
        Some(rotation)
    }

    /// Pointer release anywhere
    pub fn release(&mut self) -> bool {
        let ended = self.rotator.release();
        self.finish_gesture(ended)
    }

    /// Pointer left the drag area
    pub fn leave(&mut self) -> bool {
        let ended = self.rotator.leave();
        self.finish_gesture(ended)
    }

    pub fn rotation(&self) -> RotationState {
        self.rotator.rotation()
    }

    pub fn is_dragging(&self) -> bool {
        self.rotator.is_dragging()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    fn finish_gesture(&mut self, ended: bool) -> bool {
        if ended {
            self.target.set_grabbing(false);
            self.target.set_transition_enabled(true);
        }
        ended
    }
}
