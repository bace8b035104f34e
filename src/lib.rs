//! bitcube: A binary/BCD clock cube for the terminal
//!
//! This library provides the host side of bitcube:
//! - Configuration loading
//! - The system clock time source
//! - Controllers that drive the clock face and the rotatable cube
//! - The terminal displayer and input commands

pub mod config;
pub mod core;
pub mod displayers;
pub mod sources;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use core::{BinaryClock, CubeRotator, Session};
