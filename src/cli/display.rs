//! Display utilities for the interval beeper CLI.
//!
//! This module provides the one-off startup output:
//! - The verbose banner
//! - The PID notice for signal control
//! - Error messages

use crate::types::IntervalSequence;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the verbose-mode banner on stdout.
    pub fn show_banner(intervals: &IntervalSequence, interactive: bool) {
        print!("{}", Self::banner(intervals, interactive));
    }

    /// Shows the PID notice on stderr.
    pub fn show_pid(pid: u32) {
        eprintln!("PID: {} (send SIGUSR1 to toggle pause)", pid);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Builds the verbose-mode banner text.
    pub fn banner(intervals: &IntervalSequence, interactive: bool) -> String {
        let mut text = String::from("=== Interval Beeper ===\n");

        if intervals.is_single() {
            let interval = intervals.get(0);
            text.push_str(&format!(
                "Beeping every {} minutes {} seconds.\n",
                interval.minutes(),
                interval.seconds()
            ));
        } else {
            text.push_str("Beeping with rotating intervals:\n");
            for (i, interval) in intervals.iter().enumerate() {
                text.push_str(&format!("  {}. {}\n", i + 1, interval));
            }
        }

        if interactive {
            text.push_str("Press Enter to beep immediately and reset timer.\n");
            text.push_str("Press Backspace to reset timer silently. Press Ctrl+C to stop.\n\n");
        } else {
            text.push_str("Press Ctrl+C to stop.\n\n");
        }

        text
    }
}

// ============================================================================
// Tests
// ============================================================================
