//! Terminal input handling

mod commands;
mod input;

pub use commands::{Command, CommandError};
pub use input::spawn_line_reader;
