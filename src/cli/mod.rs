//! CLI module for the interval beeper.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Banner, PID notice and error output
//! - `input`: Forwarding of SIGUSR1 and key presses to the engine

pub mod commands;
pub mod display;
pub mod input;

pub use commands::{Cli, Commands};
pub use display::Display;
