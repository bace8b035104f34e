//! Time source trait

use anyhow::Result;
use bitcube_types::ClockReading;

/// Trait for wall-clock providers
///
/// The clock controller never reads the system clock itself. A host calls
/// [`TimeSource::update`] once per tick and hands the resulting
/// [`TimeSource::reading`] to the controller, which keeps tests free of real
/// time.
pub trait TimeSource {
    /// Unique identifier for this source type
    fn id(&self) -> &str;

    /// Refresh the internal snapshot
    fn update(&mut self) -> Result<()>;

    /// Get the most recent snapshot
    fn reading(&self) -> ClockReading;
}

/// Type-erased time source for dynamic dispatch
pub type BoxedTimeSource = Box<dyn TimeSource>;
