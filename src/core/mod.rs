//! Controllers and the terminal session

mod binary_clock;
mod cube_rotator;
mod session;

pub use binary_clock::{BinaryClock, MISSING_ELEMENTS_MESSAGE};
pub use cube_rotator::CubeRotator;
pub use session::{Flow, Session};
