//! Timer state machine.
//!
//! Holds the rotation position, beep counter and the pause/resume pair.
//! Every transition takes the current instant explicitly, so the state has no
//! clock of its own.

use tokio::time::{Duration, Instant};

use crate::types::{Interval, IntervalSequence};

/// Stand-in deadline for durations the clock cannot represent.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// `now + duration`, capped instead of overflowing the clock.
fn deadline_after(now: Instant, duration: Duration) -> Instant {
    now.checked_add(duration).unwrap_or_else(|| now + FAR_FUTURE)
}

// ============================================================================
// Countdown
// ============================================================================

/// Either a deadline (running) or a frozen remainder (paused), never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Countdown {
    Running { deadline: Instant },
    Paused { remaining: Duration },
}

// ============================================================================
// TimerState
// ============================================================================

/// Mutable state of the interval timer.
#[derive(Debug, Clone)]
pub struct TimerState {
    intervals: IntervalSequence,
    interval_index: usize,
    beep_count: u64,
    countdown: Countdown,
}

impl TimerState {
    /// Creates a timer positioned on the first interval.
    ///
    /// A paused timer starts with the whole first interval remaining.
    pub fn new(intervals: IntervalSequence, start_paused: bool, now: Instant) -> Self {
        let first = intervals.duration(0);
        let countdown = if start_paused {
            Countdown::Paused { remaining: first }
        } else {
            Countdown::Running {
                deadline: deadline_after(now, first),
            }
        };

        Self {
            intervals,
            interval_index: 0,
            beep_count: 0,
            countdown,
        }
    }

    /// Records a beep: bumps the counter, moves to the next interval and
    /// schedules its deadline.
    ///
    /// Playing the signal is up to the caller.
    pub fn advance_and_reset(&mut self, now: Instant) {
        self.beep_count += 1;
        self.interval_index = (self.interval_index + 1) % self.intervals.len();
        self.countdown = Countdown::Running {
            deadline: deadline_after(now, self.current_duration()),
        };
    }

    /// Restarts the current interval without counting a beep.
    ///
    /// Does nothing while paused.
    pub fn reset_silently(&mut self, now: Instant) {
        if self.is_paused() {
            return;
        }
        self.countdown = Countdown::Running {
            deadline: deadline_after(now, self.current_duration()),
        };
    }

    /// Flips between running and paused and returns the new paused flag.
    ///
    /// Pausing after the deadline has passed freezes a zero remainder.
    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        self.countdown = match self.countdown {
            Countdown::Running { deadline } => Countdown::Paused {
                remaining: deadline.saturating_duration_since(now),
            },
            Countdown::Paused { remaining } => Countdown::Running {
                deadline: deadline_after(now, remaining),
            },
        };
        self.is_paused()
    }

    /// Time left until the next beep; zero means the beep is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.countdown {
            Countdown::Running { deadline } => deadline.saturating_duration_since(now),
            Countdown::Paused { remaining } => remaining,
        }
    }

    /// Returns true if the timer is paused.
    pub fn is_paused(&self) -> bool {
        matches!(self.countdown, Countdown::Paused { .. })
    }

    /// Returns true if a running timer has reached its deadline.
    pub fn is_due(&self, now: Instant) -> bool {
        !self.is_paused() && self.remaining(now).is_zero()
    }

    /// Position in the rotation.
    pub fn interval_index(&self) -> usize {
        self.interval_index
    }

    /// Number of beeps fired so far.
    pub fn beep_count(&self) -> u64 {
        self.beep_count
    }

    /// The interval currently counting down.
    pub fn current_interval(&self) -> &Interval {
        self.intervals.get(self.interval_index)
    }

    /// Length of the interval currently counting down.
    pub fn current_duration(&self) -> Duration {
        self.intervals.duration(self.interval_index)
    }
}

// ============================================================================
// Tests
// ============================================================================
