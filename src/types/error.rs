//! Startup error types.
//!
//! Every error in this module is raised before the event loop starts and is
//! fatal to the process.

use thiserror::Error;

/// Errors raised while turning minute/second lists into intervals.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// A list token is not a non-negative integer.
    #[error("invalid number: {token}")]
    Parse {
        /// The offending token, as written by the user
        token: String,
    },

    /// An interval totals zero seconds.
    #[error("interval {position} is {minutes}m{seconds}s (must be positive)")]
    InvalidInterval {
        /// 1-based position in the rotation
        position: usize,
        /// Minutes component after padding
        minutes: u64,
        /// Seconds component after padding
        seconds: u64,
    },

    /// An interval does not fit in a second counter.
    #[error("interval {position} is too long")]
    TooLong {
        /// 1-based position in the rotation
        position: usize,
    },
}

impl IntervalError {
    /// Returns true if this error comes from tokenizing a list.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns the 1-based rotation position this error refers to, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Parse { .. } => None,
            Self::InvalidInterval { position, .. } | Self::TooLong { position } => Some(*position),
        }
    }
}

/// Errors raised by an inconsistent command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two render modes were requested at once.
    #[error("-{first} and -{second} are mutually exclusive")]
    ConflictingModes {
        /// First requested mode flag
        first: &'static str,
        /// Second requested mode flag
        second: &'static str,
    },
}
