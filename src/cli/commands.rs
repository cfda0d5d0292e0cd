//! Command definitions for the interval beeper CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::types::{parse_int_list, ConfigError, IntervalSequence, RenderMode};

// ============================================================================
// CLI Structure
// ============================================================================

/// Interval beeper - beeps on a rotating schedule
#[derive(Parser, Debug)]
#[command(
    name = "interval-beeper",
    version,
    about = "Beep every N minutes, or cycle through a rotation of intervals",
    long_about = "Counts down an interval (or a rotation of intervals) and beeps when it elapses.\n\
                  Use --json or --watch to feed a status bar; send SIGUSR1 to toggle pause."
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Interval in minutes (comma-separated for a rotation)
    #[arg(short, long, default_value = "0", value_name = "LIST")]
    pub minutes: String,

    /// Interval in seconds (comma-separated for a rotation)
    #[arg(short, long, default_value = "0", value_name = "LIST")]
    pub seconds: String,

    /// Verbose output (show countdown and status)
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON output for status bar integration
    #[arg(long)]
    pub json: bool,

    /// Plain text countdown output
    #[arg(long)]
    pub watch: bool,

    /// Interactive mode (Enter to beep, Backspace to reset)
    #[arg(short, long)]
    pub interactive: bool,

    /// Start in paused state (send SIGUSR1 to toggle)
    #[arg(long)]
    pub paused: bool,

    /// Fall back to 25 minutes instead of failing on invalid intervals
    #[arg(long)]
    pub lenient: bool,

    /// Audio file to play instead of the built-in tone
    #[arg(long, value_name = "PATH", conflicts_with = "no_sound")]
    pub sound: Option<PathBuf>,

    /// Disable the beep sound
    #[arg(long)]
    pub no_sound: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Resolves the render mode from the mode flags.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConflictingModes` if more than one mode is set.
    pub fn render_mode(&self) -> Result<RenderMode, ConfigError> {
        RenderMode::from_flags(self.verbose, self.json, self.watch)
    }

    /// Builds the interval rotation from `--minutes` and `--seconds`.
    ///
    /// With `--lenient` this never fails.
    ///
    /// # Errors
    ///
    /// Returns the first parse or construction error in strict mode.
    pub fn intervals(&self) -> Result<IntervalSequence> {
        if self.lenient {
            return Ok(IntervalSequence::lenient(&self.minutes, &self.seconds));
        }

        let minutes = parse_int_list(&self.minutes).context("Error parsing minutes")?;
        let seconds = parse_int_list(&self.seconds).context("Error parsing seconds")?;
        Ok(IntervalSequence::new(&minutes, &seconds)?)
    }

    /// Returns true if the PID should be announced for signal control.
    pub fn announces_pid(&self, mode: RenderMode) -> bool {
        self.paused || mode.is_machine_readable()
    }
}

// ============================================================================
// Tests
// ============================================================================
