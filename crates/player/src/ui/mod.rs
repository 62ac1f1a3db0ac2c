//! Terminal presentation: command parsing and text rendering

pub mod commands;
pub mod render;

pub use commands::{Command, HELP};
