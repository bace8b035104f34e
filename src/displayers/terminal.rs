//! Terminal displayer - draws the clock rows as lit/unlit dots
//!
//! The clock face and the cube are separate values so the clock controller
//! and the rotation controller can each own one; [`render_frame`] combines
//! them into a text frame.

use bitcube_core::{ClockSurface, PointerPos, RotationState, RotationTarget, Slot};
use std::collections::HashMap;
use std::fmt::Write;

const LIT: char = '●';
const UNLIT: char = '○';

/// Default drag area in terminal cells
pub const DEFAULT_DRAG_WIDTH: f64 = 80.0;
pub const DEFAULT_DRAG_HEIGHT: f64 = 24.0;

/// Map a bit string to dots, keeping group separators
pub fn bits_to_dots(bits: &str) -> String {
    bits.chars()
        .map(|c| match c {
            '1' => LIT,
            '0' => UNLIT,
            other => other,
        })
        .collect()
}

/// Text slots of the clock face
#[derive(Debug, Clone)]
pub struct TerminalClockFace {
    slots: HashMap<Slot, String>,
    bcd_active: bool,
    fatal: Option<String>,
}

impl TerminalClockFace {
    /// Face with every required slot present and empty
    pub fn new() -> Self {
        Self::with_slots(&Slot::REQUIRED)
    }

    /// Face that only provides the given slots
    pub fn with_slots(slots: &[Slot]) -> Self {
        Self {
            slots: slots.iter().map(|slot| (*slot, String::new())).collect(),
            bcd_active: false,
            fatal: None,
        }
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn bcd_active(&self) -> bool {
        self.bcd_active
    }

    pub fn fatal(&self) -> Option<&str> {
        self.fatal.as_deref()
    }
}

impl Default for TerminalClockFace {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSurface for TerminalClockFace {
    fn has_slot(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        if let Some(content) = self.slots.get_mut(&slot) {
            content.clear();
            content.push_str(text);
        }
    }

    fn set_active(&mut self, slot: Slot, active: bool) {
        if slot == Slot::DisplayToggle {
            self.bcd_active = active;
        }
    }

    fn show_fatal(&mut self, message: &str) {
        self.fatal = Some(message.to_string());
    }
}

/// Rotatable cube and the drag area around it
#[derive(Debug, Clone)]
pub struct TerminalCube {
    available: bool,
    width: f64,
    height: f64,
    rotation: RotationState,
    transitions: bool,
    grabbing: bool,
}

impl TerminalCube {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            available: true,
            width,
            height,
            rotation: RotationState::default(),
            transitions: true,
            grabbing: false,
        }
    }

    /// Host without a rotatable element
    pub fn disabled() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn transitions_enabled(&self) -> bool {
        self.transitions
    }

    pub fn is_grabbing(&self) -> bool {
        self.grabbing
    }
}

impl Default for TerminalCube {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_WIDTH, DEFAULT_DRAG_HEIGHT)
    }
}

impl RotationTarget for TerminalCube {
    fn is_available(&self) -> bool {
        self.available
    }

    fn hit_test(&self, pos: PointerPos) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }

    fn apply_rotation(&mut self, rotation: RotationState) {
        self.rotation = rotation;
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        self.transitions = enabled;
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
    }
}

/// Render one frame of the clock, with the cube status line if there is one
pub fn render_frame(face: &TerminalClockFace, cube: Option<&TerminalCube>) -> String {
    if let Some(message) = face.fatal() {
        return format!("\x1b[31m{}\x1b[0m\n", message);
    }

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, " bitcube");
    for slot in &Slot::REQUIRED[..6] {
        let bits = face.text(*slot).unwrap_or("");
        let _ = writeln!(out, " {:<8} {:<12} {}", slot.label(), bits_to_dots(bits), bits);
    }

    let display_label = Slot::DisplayToggle.label();
    let display_button = if face.bcd_active() {
        format!("[*{}*]", display_label)
    } else {
        format!("[ {} ]", display_label)
    };
    let hour_bits = face.text(Slot::HourToggle).unwrap_or("");
    let _ = writeln!(
        out,
        " {}  [ {} {} ]",
        display_button,
        Slot::HourToggle.label(),
        hour_bits
    );

    match cube {
        Some(cube) => {
            let _ = writeln!(
                out,
                " {}  cursor: {}  transition: {}",
                cube.rotation().transform(),
                if cube.is_grabbing() { "grabbing" } else { "grab" },
                if cube.transitions_enabled() { "ease" } else { "none" },
            );
        }
        None => {
            let _ = writeln!(out, " rotation disabled");
        }
    }
    out
}
