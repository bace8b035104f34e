//! Built-in time sources

mod clock;

pub use clock::SystemClockSource;
