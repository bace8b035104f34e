//! Host capabilities the controllers write into
//!
//! A host (terminal, web page, test double) exposes named text slots and a
//! rotatable element. The controllers never look anything up themselves;
//! they are handed an implementation of these traits.

use bitcube_types::{PointerPos, RotationState};
use serde::{Deserialize, Serialize};

/// Named display or control element on the clock surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Year,
    Month,
    Day,
    Hours,
    Minutes,
    Seconds,
    /// Binary/BCD toggle button
    DisplayToggle,
    /// 12/24 hour toggle button
    HourToggle,
}

impl Slot {
    /// Every slot the clock needs before it can start, in lookup order
    pub const REQUIRED: [Slot; 8] = [
        Slot::Year,
        Slot::Month,
        Slot::Day,
        Slot::Hours,
        Slot::Minutes,
        Slot::Seconds,
        Slot::DisplayToggle,
        Slot::HourToggle,
    ];

    /// Stable element identifier
    pub fn id(self) -> &'static str {
        match self {
            Slot::Year => "year-binary",
            Slot::Month => "month-binary",
            Slot::Day => "day-binary",
            Slot::Hours => "hours-binary",
            Slot::Minutes => "minutes-binary",
            Slot::Seconds => "seconds-binary",
            Slot::DisplayToggle => "toggle-mode-btn",
            Slot::HourToggle => "toggle-hour-mode-btn",
        }
    }

    /// Short row label used by text renderers
    pub fn label(self) -> &'static str {
        match self {
            Slot::Year => "YEAR",
            Slot::Month => "MONTH",
            Slot::Day => "DAY",
            Slot::Hours => "HOURS",
            Slot::Minutes => "MINUTES",
            Slot::Seconds => "SECONDS",
            Slot::DisplayToggle => "BCD",
            Slot::HourToggle => "12/24",
        }
    }
}

/// Text surface receiving the encoded clock
pub trait ClockSurface {
    /// Check whether the host provides this slot
    fn has_slot(&self, slot: Slot) -> bool;

    /// Replace the text content of a slot
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Mark a toggle slot as active or inactive
    fn set_active(&mut self, slot: Slot, active: bool);

    /// Replace the whole surface with a visible fatal error
    fn show_fatal(&mut self, message: &str);
}

/// Rotatable element plus the drag area around it
pub trait RotationTarget {
    /// Check whether the rotatable element and its drag area exist
    fn is_available(&self) -> bool {
        true
    }

    /// Check whether a pointer press at `pos` lands inside the drag area
    fn hit_test(&self, pos: PointerPos) -> bool;

    /// Apply a rotation transform to the element
    fn apply_rotation(&mut self, rotation: RotationState);

    /// Enable or suspend eased transitions on the element
    fn set_transition_enabled(&mut self, enabled: bool);

    /// Switch the drag area cursor between grab and grabbing
    fn set_grabbing(&mut self, grabbing: bool);
}

impl<T: ClockSurface + ?Sized> ClockSurface for &mut T {
    fn has_slot(&self, slot: Slot) -> bool {
        (**self).has_slot(slot)
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        (**self).set_text(slot, text)
    }

    fn set_active(&mut self, slot: Slot, active: bool) {
        (**self).set_active(slot, active)
    }

    fn show_fatal(&mut self, message: &str) {
        (**self).show_fatal(message)
    }
}

impl<T: RotationTarget + ?Sized> RotationTarget for &mut T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn hit_test(&self, pos: PointerPos) -> bool {
        (**self).hit_test(pos)
    }

    fn apply_rotation(&mut self, rotation: RotationState) {
        (**self).apply_rotation(rotation)
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        (**self).set_transition_enabled(enabled)
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        (**self).set_grabbing(grabbing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slot_ids_are_unique() {
        let ids: HashSet<_> = Slot::REQUIRED.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Slot::REQUIRED.len());
    }
}
