//! Binary clock controller
//!
//! Owns the two toggle states and writes the encoded rows, the BCD toggle
//! appearance and the 12/24 toggle label to a [`ClockSurface`].

use bitcube_core::{
    ClockEncoder, ClockError, ClockReading, ClockSurface, DisplayMode, HourMode, Slot,
};
use log::{debug, error, info, trace};

/// Message shown on the surface when required slots are missing
pub const MISSING_ELEMENTS_MESSAGE: &str = "Error: Clock UI elements missing.";

pub struct BinaryClock<S: ClockSurface> {
    surface: S,
    encoder: ClockEncoder,
}

impl<S: ClockSurface> BinaryClock<S> {
    /// Check the surface, set up both toggles and render `reading` once.
    ///
    /// Fails without touching any slot if one of [`Slot::REQUIRED`] is
    /// missing; the surface then shows a fatal error instead.
    pub fn attach(
        mut surface: S,
        encoder: ClockEncoder,
        reading: &ClockReading,
    ) -> Result<Self, ClockError> {
        if let Some(missing) = Slot::REQUIRED.into_iter().find(|slot| !surface.has_slot(*slot)) {
            error!(
                "Clock surface element '{}' not found, clock cannot start",
                missing.id()
            );
            surface.show_fatal(MISSING_ELEMENTS_MESSAGE);
            return Err(ClockError::MissingSurfaceElement(missing));
        }

        let mut clock = Self { surface, encoder };
        clock.refresh_display_toggle();
        clock.refresh_hour_toggle();
        clock.tick(reading);

        info!(
            "Binary clock initialized ({:?}, {:?})",
            clock.encoder.display_mode(),
            clock.encoder.hour_mode()
        );
        Ok(clock)
    }

    /// Write all six rows for a reading
    pub fn tick(&mut self, reading: &ClockReading) {
        let encoded = self.encoder.encode(reading);
        for (slot, text) in encoded.rows() {
            self.surface.set_text(slot, text);
        }
        trace!("Clock tick {:?}", reading);
    }

    /// Flip Binary/BCD and redraw everything that depends on it
    pub fn toggle_display_mode(&mut self, reading: &ClockReading) -> DisplayMode {
        let mode = self.encoder.toggle_display_mode();
        debug!("Display mode -> {:?}", mode);
        self.refresh_display_toggle();
        self.refresh_hour_toggle();
        self.tick(reading);
        mode
    }

    /// Flip 24h/12h and redraw the hour label and rows
    pub fn toggle_hour_mode(&mut self, reading: &ClockReading) -> HourMode {
        let mode = self.encoder.toggle_hour_mode();
        debug!("Hour mode -> {:?}", mode);
        self.refresh_hour_toggle();
        self.tick(reading);
        mode
    }

    pub fn encoder(&self) -> &ClockEncoder {
        &self.encoder
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn refresh_display_toggle(&mut self) {
        let active = self.encoder.display_mode().is_bcd();
        self.surface.set_active(Slot::DisplayToggle, active);
    }

    fn refresh_hour_toggle(&mut self) {
        let label = self.encoder.hour_toggle_label();
        self.surface.set_text(Slot::HourToggle, &label);
    }
}
