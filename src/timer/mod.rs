//! Timer module for the interval beeper.
//!
//! This module contains the core timer functionality:
//! - `state`: rotation, beep counter and pause/resume state machine
//! - `engine`: event loop serving the clock and external triggers

pub mod engine;
pub mod state;

pub use engine::{TimerEngine, Trigger, TICK_PERIOD};
pub use state::TimerState;
