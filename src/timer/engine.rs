//! Timer engine for the interval beeper.
//!
//! This module ties the trigger sources to the state machine:
//! - A one-second `tokio::time::interval` re-evaluates the countdown
//! - External triggers (pause toggle, manual beep, silent reset) arrive on a
//!   channel and are served in the same `select!`, so the state has a single
//!   writer
//! - Every transition is rendered and written to the output sink

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use super::state::TimerState;
use crate::render::Renderer;
use crate::sound::SignalDevice;
use crate::types::{BeepKind, IntervalSequence, RenderMode};

/// Period of the countdown clock.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// Trigger
// ============================================================================

/// External events fed into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Flip between running and paused (SIGUSR1)
    TogglePause,
    /// Beep now and move to the next interval (Enter)
    Beep,
    /// Restart the current interval without beeping (Backspace)
    Reset,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Event loop that owns the timer state.
pub struct TimerEngine<D, W> {
    /// Current timer state
    state: TimerState,
    /// Formats each transition
    renderer: Renderer,
    /// Plays the beep
    device: D,
    /// Output sink
    out: W,
    /// External trigger channel
    triggers: mpsc::UnboundedReceiver<Trigger>,
}

impl<D: SignalDevice, W: Write> TimerEngine<D, W> {
    /// Creates an engine positioned on the first interval.
    pub fn new(
        intervals: IntervalSequence,
        mode: RenderMode,
        start_paused: bool,
        device: D,
        out: W,
        triggers: mpsc::UnboundedReceiver<Trigger>,
    ) -> Self {
        Self {
            state: TimerState::new(intervals.clone(), start_paused, Instant::now()),
            renderer: Renderer::new(mode, intervals),
            device,
            out,
            triggers,
        }
    }

    /// Runs the event loop.
    ///
    /// Never returns on its own; only a failing output sink ends it.
    /// A closed trigger channel leaves the clock running.
    pub async fn run(&mut self) -> Result<()> {
        if self.state.is_paused() {
            let line = self.renderer.paused(self.state.remaining(Instant::now()));
            self.emit(&line)?;
        }

        let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                Some(trigger) = self.triggers.recv() => {
                    self.handle_trigger(trigger, Instant::now())?;
                }
                _ = ticker.tick() => {
                    self.on_tick(Instant::now())?;
                }
            }
        }
    }

    /// Applies one external trigger.
    pub fn handle_trigger(&mut self, trigger: Trigger, now: Instant) -> Result<()> {
        match trigger {
            Trigger::TogglePause => self.on_toggle(now),
            Trigger::Beep => {
                if self.state.is_paused() {
                    debug!("Manual beep ignored while paused");
                    return Ok(());
                }
                self.fire(BeepKind::Manual, now)
            }
            Trigger::Reset => {
                if self.state.is_paused() {
                    debug!("Reset ignored while paused");
                    return Ok(());
                }
                self.state.reset_silently(now);
                let line = self.renderer.reset(self.state.interval_index(), Local::now());
                self.emit(&line)
            }
        }
    }

    /// Re-evaluates the countdown on a clock tick.
    pub fn on_tick(&mut self, now: Instant) -> Result<()> {
        if self.state.is_paused() {
            let line = self.renderer.paused(self.state.remaining(now));
            return self.emit(&line);
        }

        if self.state.is_due(now) {
            return self.fire(BeepKind::Automatic, now);
        }

        let line = self
            .renderer
            .tick(self.state.remaining(now), self.state.interval_index());
        self.emit(&line)
    }

    fn on_toggle(&mut self, now: Instant) -> Result<()> {
        let paused = self.state.toggle_pause(now);
        debug!(paused, "Pause toggled");

        let line = self.renderer.toggled(paused, Local::now());
        self.emit(&line)?;

        if paused {
            let line = self.renderer.paused(self.state.remaining(now));
            self.emit(&line)?;
        }
        Ok(())
    }

    /// Plays the signal, advances the rotation and reports the beep.
    fn fire(&mut self, kind: BeepKind, now: Instant) -> Result<()> {
        if let Err(e) = self.device.play() {
            warn!("Failed to play beep: {}", e);
        }

        self.state.advance_and_reset(now);
        debug!(
            beep_count = self.state.beep_count(),
            interval_index = self.state.interval_index(),
            kind = kind.as_str(),
            "Beep"
        );

        let line = self.renderer.beep(
            self.state.beep_count(),
            kind,
            self.state.interval_index(),
            Local::now(),
        );
        self.emit(&line)
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.out
            .write_all(text.as_bytes())
            .context("Failed to write output")?;
        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns the signal device.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.out
    }
}

// ============================================================================
// Tests
// ============================================================================
