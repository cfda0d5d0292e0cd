//! Output rendering for the interval beeper.
//!
//! Each render mode maps the four timer events (paused, tick, beep, reset)
//! to text. Rendering is pure: callers supply the timer values and the
//! timestamp, and get back the exact bytes to write, terminators included.
//! An empty string means the event is invisible in that mode.
//!
//! | Mode    | Paused        | Tick          | Beep             | Reset        |
//! |---------|---------------|---------------|------------------|--------------|
//! | silent  | -             | -             | `BEEP <rfc3339>` | -            |
//! | verbose | in-place line | in-place line | timestamped line | timestamped  |
//! | json    | record        | record        | record           | -            |
//! | watch   | `PAUSED`      | duration      | `BEEP`           | -            |

use std::time::Duration;

use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::types::{BeepKind, IntervalSequence, RenderMode};

/// Clock format used in verbose lines.
const CLOCK_FORMAT: &str = "%H:%M:%S";

// ============================================================================
// Duration Formatting
// ============================================================================

/// Rounds a duration to the nearest whole second, halves rounding up.
#[must_use]
pub fn round_secs(duration: Duration) -> u64 {
    let nanos = duration.as_nanos() + 500_000_000;
    u64::try_from(nanos / 1_000_000_000).unwrap_or(u64::MAX)
}

/// Formats a duration as `"Ss"` or `"Mm Ss"` after rounding to seconds.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = round_secs(duration);
    let (minutes, seconds) = (total / 60, total % 60);
    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

// ============================================================================
// WaybarOutput
// ============================================================================

/// One JSON record for a status-bar custom module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaybarOutput {
    /// Short display text
    pub text: String,
    /// Hover text
    pub tooltip: String,
    /// Style class: "paused", "counting" or "beep"
    pub class: String,
    /// Whole seconds until the next beep
    pub remaining: i64,
}

impl WaybarOutput {
    fn new(text: impl Into<String>, tooltip: impl Into<String>, class: &str, remaining: u64) -> Self {
        Self {
            text: text.into(),
            tooltip: tooltip.into(),
            class: class.to_string(),
            remaining: i64::try_from(remaining).unwrap_or(i64::MAX),
        }
    }

    /// Serializes the record as one newline-terminated line.
    #[must_use]
    pub fn to_line(&self) -> String {
        // Plain strings and an integer always serialize.
        let mut line = serde_json::to_string(self).unwrap_or_default();
        line.push('\n');
        line
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Formats timer events for one render mode.
#[derive(Debug, Clone)]
pub struct Renderer {
    mode: RenderMode,
    intervals: IntervalSequence,
}

impl Renderer {
    /// Creates a renderer for the given mode and rotation.
    pub fn new(mode: RenderMode, intervals: IntervalSequence) -> Self {
        Self { mode, intervals }
    }

    /// Paused-state display.
    pub fn paused(&self, remaining: Duration) -> String {
        match self.mode {
            RenderMode::Json => {
                WaybarOutput::new("Paused", "Click to start", "paused", remaining.as_secs())
                    .to_line()
            }
            RenderMode::Watch => "PAUSED\n".to_string(),
            RenderMode::Verbose => format!("\rPaused - {} remaining ", format_duration(remaining)),
            RenderMode::Silent => String::new(),
        }
    }

    /// Countdown display while running.
    pub fn tick(&self, remaining: Duration, interval_index: usize) -> String {
        match self.mode {
            RenderMode::Json => WaybarOutput::new(
                format_duration(remaining),
                self.tooltip(interval_index),
                "counting",
                round_secs(remaining),
            )
            .to_line(),
            RenderMode::Watch => format!("{}\n", format_duration(remaining)),
            RenderMode::Verbose => {
                if self.intervals.is_single() {
                    format!("\rNext beep in: {} ", format_duration(remaining))
                } else {
                    format!(
                        "\rNext beep in: {} (interval {}/{}: {}) ",
                        format_duration(remaining),
                        interval_index + 1,
                        self.intervals.len(),
                        self.intervals.get(interval_index)
                    )
                }
            }
            RenderMode::Silent => String::new(),
        }
    }

    /// Beep record; `interval_index` is the interval that starts with it.
    pub fn beep(
        &self,
        beep_count: u64,
        kind: BeepKind,
        interval_index: usize,
        at: DateTime<Local>,
    ) -> String {
        match self.mode {
            RenderMode::Json => {
                WaybarOutput::new("BEEP", format!("Beep #{} ({})", beep_count, kind), "beep", 0)
                    .to_line()
            }
            RenderMode::Watch => "BEEP\n".to_string(),
            RenderMode::Verbose => {
                if self.intervals.is_single() {
                    format!(
                        "\r[{}] Beep #{} ({})              \n",
                        at.format(CLOCK_FORMAT),
                        beep_count,
                        kind
                    )
                } else {
                    format!(
                        "\r[{}] Beep #{} ({}) - next: {}     \n",
                        at.format(CLOCK_FORMAT),
                        beep_count,
                        kind,
                        self.intervals.get(interval_index)
                    )
                }
            }
            RenderMode::Silent => format!(
                "BEEP {}\n",
                at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
        }
    }

    /// Silent-reset record, visible only in verbose mode.
    pub fn reset(&self, interval_index: usize, at: DateTime<Local>) -> String {
        if self.mode != RenderMode::Verbose {
            return String::new();
        }
        if self.intervals.is_single() {
            format!("\r[{}] Timer reset (silent)              \n", at.format(CLOCK_FORMAT))
        } else {
            format!(
                "\r[{}] Timer reset (silent) - interval {}/{}: {}      \n",
                at.format(CLOCK_FORMAT),
                interval_index + 1,
                self.intervals.len(),
                self.intervals.get(interval_index)
            )
        }
    }

    /// Pause/resume transition line, visible only in verbose mode.
    pub fn toggled(&self, paused: bool, at: DateTime<Local>) -> String {
        if self.mode != RenderMode::Verbose {
            return String::new();
        }
        if paused {
            format!("\r[{}] Paused                            \n", at.format(CLOCK_FORMAT))
        } else {
            format!("\r[{}] Resumed                           \n", at.format(CLOCK_FORMAT))
        }
    }

    fn tooltip(&self, interval_index: usize) -> String {
        if self.intervals.is_single() {
            self.intervals.get(0).to_string()
        } else {
            format!(
                "Interval {}/{}: {}",
                interval_index + 1,
                self.intervals.len(),
                self.intervals.get(interval_index)
            )
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
