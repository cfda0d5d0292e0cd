//! Core data types for the interval beeper.
//!
//! This module defines the data structures used for:
//! - Building the interval rotation from minute/second lists
//! - Selecting the output render mode
//! - Labelling beep triggers

mod error;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

pub use error::{ConfigError, IntervalError};

/// Minutes used when the lenient builder has to fall back.
pub const DEFAULT_MINUTES: u64 = 25;

/// Seconds used when the lenient builder has to fall back.
pub const DEFAULT_SECONDS: u64 = 0;

/// Longest interval accepted by the builders (about 136 years).
pub const MAX_INTERVAL_SECS: u64 = u32::MAX as u64;

// ============================================================================
// List Parsing
// ============================================================================

/// Parses a comma-separated list of non-negative integers.
///
/// An empty string is the single-element list `[0]`. Surrounding whitespace
/// around each token is ignored.
///
/// # Errors
///
/// Returns `IntervalError::Parse` naming the first token that is not a
/// non-negative integer.
pub fn parse_int_list(input: &str) -> Result<Vec<u64>, IntervalError> {
    if input.is_empty() {
        return Ok(vec![0]);
    }

    input
        .split(',')
        .map(|part| {
            part.trim().parse::<u64>().map_err(|_| IntervalError::Parse {
                token: part.to_string(),
            })
        })
        .collect()
}

/// Pads both lists to the same length by repeating each list's own last value.
///
/// The inputs are left untouched. An empty list is treated as `[0]`.
#[must_use]
pub fn pad_lists(minutes: &[u64], seconds: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let mut minutes = if minutes.is_empty() { vec![0] } else { minutes.to_vec() };
    let mut seconds = if seconds.is_empty() { vec![0] } else { seconds.to_vec() };
    let len = minutes.len().max(seconds.len());

    pad_to(&mut minutes, len);
    pad_to(&mut seconds, len);

    (minutes, seconds)
}

fn pad_to(list: &mut Vec<u64>, len: usize) {
    if let Some(&last) = list.last() {
        list.resize(len, last);
    }
}

// ============================================================================
// Interval
// ============================================================================

/// One duration in the rotation, keeping the components it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    minutes: u64,
    seconds: u64,
    duration: Duration,
}

impl Interval {
    /// Minutes component as configured.
    #[must_use]
    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Seconds component as configured.
    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Total length of the interval.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Components as configured, so "0m 90s" stays "0m 90s".
        write!(f, "{}m {}s", self.minutes, self.seconds)
    }
}

// ============================================================================
// IntervalSequence
// ============================================================================

/// The immutable, non-empty rotation of intervals.
///
/// Cloning is cheap; clones share the same backing storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSequence {
    intervals: Arc<[Interval]>,
}

impl IntervalSequence {
    /// Builds the rotation from minute and second lists.
    ///
    /// The shorter list is padded with its own last value. Construction is
    /// fail-fast: the first non-positive interval aborts the build.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::InvalidInterval` for a zero-length interval and
    /// `IntervalError::TooLong` if a total exceeds `MAX_INTERVAL_SECS`.
    pub fn new(minutes: &[u64], seconds: &[u64]) -> Result<Self, IntervalError> {
        let (minutes, seconds) = pad_lists(minutes, seconds);

        let intervals = minutes
            .iter()
            .zip(&seconds)
            .enumerate()
            .map(|(i, (&m, &s))| {
                let total = m
                    .checked_mul(60)
                    .and_then(|secs| secs.checked_add(s))
                    .filter(|&total| total <= MAX_INTERVAL_SECS)
                    .ok_or(IntervalError::TooLong { position: i + 1 })?;
                if total == 0 {
                    return Err(IntervalError::InvalidInterval {
                        position: i + 1,
                        minutes: m,
                        seconds: s,
                    });
                }
                Ok(Interval {
                    minutes: m,
                    seconds: s,
                    duration: Duration::from_secs(total),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            intervals: intervals.into(),
        })
    }

    /// Parses both comma-separated lists and builds the rotation.
    ///
    /// # Errors
    ///
    /// Returns the first parse or construction error.
    pub fn parse(minutes: &str, seconds: &str) -> Result<Self, IntervalError> {
        let minutes = parse_int_list(minutes)?;
        let seconds = parse_int_list(seconds)?;
        Self::new(&minutes, &seconds)
    }

    /// Forgiving builder for human-entered configuration.
    ///
    /// A malformed minutes or seconds list, or any invalid interval, makes
    /// the whole rotation the single default interval.
    #[must_use]
    pub fn lenient(minutes: &str, seconds: &str) -> Self {
        Self::parse(minutes, seconds).unwrap_or_else(|e| {
            warn!("{}, falling back to the default interval", e);
            Self::default()
        })
    }

    /// Number of intervals in the rotation (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns true if the rotation has exactly one interval.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.intervals.len() == 1
    }

    /// Returns the interval at `index`, wrapping around the rotation.
    #[must_use]
    pub fn get(&self, index: usize) -> &Interval {
        &self.intervals[index % self.intervals.len()]
    }

    /// Returns the duration of the interval at `index`, wrapping around.
    #[must_use]
    pub fn duration(&self, index: usize) -> Duration {
        self.get(index).duration
    }

    /// Iterates over the intervals in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }
}

impl Default for IntervalSequence {
    fn default() -> Self {
        Self {
            intervals: Arc::from([Interval {
                minutes: DEFAULT_MINUTES,
                seconds: DEFAULT_SECONDS,
                duration: Duration::from_secs(DEFAULT_MINUTES * 60 + DEFAULT_SECONDS),
            }]),
        }
    }
}

// ============================================================================
// RenderMode
// ============================================================================

/// Output shape written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Only beeps are reported, one line each
    #[default]
    Silent,
    /// Human-readable countdown with in-place updates
    Verbose,
    /// One JSON record per line for status bars
    Json,
    /// Plain countdown text, one line per tick
    Watch,
}

impl RenderMode {
    /// Resolves the render mode from the mode flags.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConflictingModes` if more than one flag is set.
    pub fn from_flags(verbose: bool, json: bool, watch: bool) -> Result<Self, ConfigError> {
        let requested: Vec<(&'static str, Self)> = [
            (json, "json", Self::Json),
            (watch, "watch", Self::Watch),
            (verbose, "v", Self::Verbose),
        ]
        .into_iter()
        .filter(|(set, _, _)| *set)
        .map(|(_, flag, mode)| (flag, mode))
        .collect();

        match requested.as_slice() {
            [] => Ok(Self::Silent),
            [(_, mode)] => Ok(*mode),
            [(first, _), (second, _), ..] => Err(ConfigError::ConflictingModes {
                first: *first,
                second: *second,
            }),
        }
    }

    /// Returns the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Silent => "silent",
            RenderMode::Verbose => "verbose",
            RenderMode::Json => "json",
            RenderMode::Watch => "watch",
        }
    }

    /// Returns true if the mode is consumed by a status bar.
    pub fn is_machine_readable(&self) -> bool {
        matches!(self, RenderMode::Json | RenderMode::Watch)
    }
}

// ============================================================================
// BeepKind
// ============================================================================

/// What caused a beep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeepKind {
    /// The interval elapsed on the clock
    Automatic,
    /// The user asked for a beep
    Manual,
}

impl BeepKind {
    /// Returns the label used in beep records.
    pub fn as_str(&self) -> &'static str {
        match self {
            BeepKind::Automatic => "automatic",
            BeepKind::Manual => "manual",
        }
    }
}

impl fmt::Display for BeepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // parse_int_list Tests
    // ------------------------------------------------------------------------

    mod parse_int_list_tests {
        use super::*;

        #[test]
        fn test_empty_is_zero() {
            assert_eq!(parse_int_list("").unwrap(), vec![0]);
        }

        #[test]
        fn test_single_value() {
            assert_eq!(parse_int_list("25").unwrap(), vec![25]);
        }

        #[test]
        fn test_multiple_values() {
            assert_eq!(parse_int_list("25,5,10").unwrap(), vec![25, 5, 10]);
        }

        #[test]
        fn test_values_with_spaces() {
            assert_eq!(parse_int_list("25, 5, 10").unwrap(), vec![25, 5, 10]);
        }

        #[test]
        fn test_invalid_token_is_named() {
            let err = parse_int_list("25,abc").unwrap_err();
            assert_eq!(
                err,
                IntervalError::Parse {
                    token: "abc".to_string()
                }
            );
        }

        #[test]
        fn test_float_rejected() {
            assert!(parse_int_list("25.5").is_err());
        }

        #[test]
        fn test_negative_rejected() {
            assert!(parse_int_list("-5").is_err());
        }

        #[test]
        fn test_trailing_comma_rejected() {
            assert!(parse_int_list("25,").is_err());
        }
    }

    // ------------------------------------------------------------------------
    // pad_lists Tests
    // ------------------------------------------------------------------------

    mod pad_lists_tests {
        use super::*;

        #[test]
        fn test_pad_seconds() {
            let (m, s) = pad_lists(&[25, 5], &[0]);
            assert_eq!(m, vec![25, 5]);
            assert_eq!(s, vec![0, 0]);
        }

        #[test]
        fn test_pad_minutes() {
            let (m, s) = pad_lists(&[1], &[30, 45, 15]);
            assert_eq!(m, vec![1, 1, 1]);
            assert_eq!(s, vec![30, 45, 15]);
        }

        #[test]
        fn test_pad_uses_own_last_value() {
            let (m, s) = pad_lists(&[25, 5, 10], &[30]);
            assert_eq!(m, vec![25, 5, 10]);
            assert_eq!(s, vec![30, 30, 30]);
        }

        #[test]
        fn test_equal_lengths_unchanged() {
            let (m, s) = pad_lists(&[25], &[0]);
            assert_eq!(m, vec![25]);
            assert_eq!(s, vec![0]);
        }

        #[test]
        fn test_does_not_modify_inputs() {
            let minutes = vec![25, 5];
            let seconds = vec![0];
            let first = pad_lists(&minutes, &seconds);
            let second = pad_lists(&minutes, &seconds);

            assert_eq!(first, second);
            assert_eq!(minutes, vec![25, 5]);
            assert_eq!(seconds, vec![0]);
        }

        #[test]
        fn test_empty_treated_as_zero() {
            let (m, s) = pad_lists(&[], &[5, 10]);
            assert_eq!(m, vec![0, 0]);
            assert_eq!(s, vec![5, 10]);
        }
    }

    // ------------------------------------------------------------------------
    // IntervalSequence Tests
    // ------------------------------------------------------------------------

    mod interval_sequence_tests {
        use super::*;

        #[test]
        fn test_single_minutes() {
            let seq = IntervalSequence::new(&[25], &[0]).unwrap();
            assert_eq!(seq.len(), 1);
            assert!(seq.is_single());
            assert_eq!(seq.duration(0), Duration::from_secs(1500));
        }

        #[test]
        fn test_seconds_only() {
            let seq = IntervalSequence::new(&[0], &[45]).unwrap();
            assert_eq!(seq.duration(0), Duration::from_secs(45));
        }

        #[test]
        fn test_work_rest_rotation() {
            let seq = IntervalSequence::new(&[25, 5], &[0, 0]).unwrap();
            let durations: Vec<_> = seq.iter().map(Interval::duration).collect();
            assert_eq!(
                durations,
                vec![Duration::from_secs(1500), Duration::from_secs(300)]
            );
        }

        #[test]
        fn test_length_is_longest_list() {
            let seq = IntervalSequence::new(&[1, 2, 3], &[30]).unwrap();
            assert_eq!(seq.len(), 3);
            assert_eq!(seq.duration(0), Duration::from_secs(90));
            assert_eq!(seq.duration(1), Duration::from_secs(150));
            assert_eq!(seq.duration(2), Duration::from_secs(210));
        }

        #[test]
        fn test_keeps_components() {
            let seq = IntervalSequence::new(&[0], &[90]).unwrap();
            assert_eq!(seq.get(0).minutes(), 0);
            assert_eq!(seq.get(0).seconds(), 90);
            assert_eq!(seq.get(0).to_string(), "0m 90s");
        }

        #[test]
        fn test_zero_interval_rejected() {
            let err = IntervalSequence::new(&[0], &[0]).unwrap_err();
            assert_eq!(
                err,
                IntervalError::InvalidInterval {
                    position: 1,
                    minutes: 0,
                    seconds: 0
                }
            );
        }

        #[test]
        fn test_zero_in_rotation_rejected() {
            let err = IntervalSequence::new(&[25, 0], &[0, 0]).unwrap_err();
            assert_eq!(err.position(), Some(2));
        }

        #[test]
        fn test_first_invalid_position_reported() {
            let err = IntervalSequence::new(&[0, 0, 5], &[0]).unwrap_err();
            assert_eq!(err.position(), Some(1));
        }

        #[test]
        fn test_overflow_rejected() {
            let err = IntervalSequence::new(&[u64::MAX], &[0]).unwrap_err();
            assert_eq!(err, IntervalError::TooLong { position: 1 });
        }

        #[test]
        fn test_total_beyond_clock_range_rejected() {
            // Fits in u64 seconds but not in a deadline.
            let err = IntervalSequence::new(&[25, 200_000_000_000_000_000], &[0]).unwrap_err();
            assert_eq!(err, IntervalError::TooLong { position: 2 });
        }

        #[test]
        fn test_longest_interval_accepted() {
            let seq = IntervalSequence::new(&[0], &[MAX_INTERVAL_SECS]).unwrap();
            assert_eq!(seq.duration(0), Duration::from_secs(MAX_INTERVAL_SECS));

            let err = IntervalSequence::new(&[0], &[MAX_INTERVAL_SECS + 1]).unwrap_err();
            assert_eq!(err, IntervalError::TooLong { position: 1 });
        }

        #[test]
        fn test_builder_is_deterministic() {
            let a = IntervalSequence::new(&[25, 5], &[0]).unwrap();
            let b = IntervalSequence::new(&[25, 5], &[0]).unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn test_get_wraps() {
            let seq = IntervalSequence::new(&[25, 5], &[0]).unwrap();
            assert_eq!(seq.get(2), seq.get(0));
        }

        #[test]
        fn test_parse() {
            let seq = IntervalSequence::parse("25,5", "").unwrap();
            assert_eq!(seq.len(), 2);
            assert_eq!(seq.duration(1), Duration::from_secs(300));
        }

        #[test]
        fn test_parse_propagates_parse_error() {
            let err = IntervalSequence::parse("25", "x").unwrap_err();
            assert!(err.is_parse_error());
        }
    }

    // ------------------------------------------------------------------------
    // Lenient Builder Tests
    // ------------------------------------------------------------------------

    mod lenient_tests {
        use super::*;

        #[test]
        fn test_valid_input_is_kept() {
            let seq = IntervalSequence::lenient("25,5", "0");
            assert_eq!(seq, IntervalSequence::new(&[25, 5], &[0]).unwrap());
        }

        #[test]
        fn test_malformed_minutes_fall_back() {
            let seq = IntervalSequence::lenient("abc", "0");
            assert_eq!(seq.len(), 1);
            assert_eq!(seq.duration(0), Duration::from_secs(25 * 60));
        }

        #[test]
        fn test_malformed_seconds_fall_back() {
            let seq = IntervalSequence::lenient("10", "x");
            assert_eq!(seq, IntervalSequence::default());
        }

        #[test]
        fn test_too_long_falls_back() {
            let seq = IntervalSequence::lenient("200000000000000000", "0");
            assert_eq!(seq, IntervalSequence::default());
        }

        #[test]
        fn test_zero_anywhere_resets_whole_rotation() {
            let seq = IntervalSequence::lenient("25,0,5", "0");
            assert_eq!(seq, IntervalSequence::default());
        }

        #[test]
        fn test_default_is_25_minutes() {
            let seq = IntervalSequence::default();
            assert_eq!(seq.len(), 1);
            assert_eq!(seq.get(0).minutes(), 25);
            assert_eq!(seq.get(0).seconds(), 0);
            assert_eq!(seq.duration(0), Duration::from_secs(1500));
        }
    }

    // ------------------------------------------------------------------------
    // RenderMode Tests
    // ------------------------------------------------------------------------

    mod render_mode_tests {
        use super::*;

        #[test]
        fn test_no_flags_is_silent() {
            assert_eq!(
                RenderMode::from_flags(false, false, false).unwrap(),
                RenderMode::Silent
            );
        }

        #[test]
        fn test_single_flags() {
            assert_eq!(
                RenderMode::from_flags(true, false, false).unwrap(),
                RenderMode::Verbose
            );
            assert_eq!(
                RenderMode::from_flags(false, true, false).unwrap(),
                RenderMode::Json
            );
            assert_eq!(
                RenderMode::from_flags(false, false, true).unwrap(),
                RenderMode::Watch
            );
        }

        #[test]
        fn test_json_and_watch_conflict() {
            let err = RenderMode::from_flags(false, true, true).unwrap_err();
            assert_eq!(
                err,
                ConfigError::ConflictingModes {
                    first: "json",
                    second: "watch"
                }
            );
        }

        #[test]
        fn test_verbose_and_json_conflict() {
            assert!(RenderMode::from_flags(true, true, false).is_err());
        }

        #[test]
        fn test_machine_readable() {
            assert!(RenderMode::Json.is_machine_readable());
            assert!(RenderMode::Watch.is_machine_readable());
            assert!(!RenderMode::Verbose.is_machine_readable());
            assert!(!RenderMode::Silent.is_machine_readable());
        }

        #[test]
        fn test_as_str() {
            assert_eq!(RenderMode::Json.as_str(), "json");
            assert_eq!(RenderMode::Silent.as_str(), "silent");
        }
    }

    #[test]
    fn test_beep_kind_labels() {
        assert_eq!(BeepKind::Automatic.to_string(), "automatic");
        assert_eq!(BeepKind::Manual.to_string(), "manual");
    }
}
