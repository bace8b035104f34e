//! Built-in displayers
//!
//! Host-side implementations of the clock surface and rotation target.

mod terminal;

pub use terminal::{bits_to_dots, render_frame, TerminalClockFace, TerminalCube};
