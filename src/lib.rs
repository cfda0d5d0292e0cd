//! Interval Beeper Library
//!
//! This library provides the core functionality for the interval beeper CLI.
//! It includes:
//! - Interval rotation building from minute/second lists
//! - Timer state machine and event loop
//! - Output rendering for terminals and status bars
//! - Sound playback for the beep signal
//! - CLI command parsing and display utilities

pub mod cli;
pub mod render;
pub mod sound;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    parse_int_list, BeepKind, ConfigError, Interval, IntervalError, IntervalSequence, RenderMode,
};

pub use timer::{TimerEngine, TimerState, Trigger};

pub use render::{format_duration, Renderer, WaybarOutput};

// Re-export sound types
pub use sound::{
    MockSignalDevice, RodioSoundPlayer, SignalDevice, SilentSignalDevice, SoundError, SoundSource,
};
