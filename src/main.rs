//! Interval Beeper CLI
//!
//! Beeps after every interval of a rotation, for example:
//! - `-m 25` beeps every 25 minutes
//! - `-m 25,5` alternates 25 minutes of work with 5 minutes of rest
//! - `--json` feeds a status bar, `SIGUSR1` toggles pause

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio::sync::mpsc;

use interval_beeper::cli::{input, Cli, Commands, Display};
use interval_beeper::sound::{RodioSoundPlayer, SignalDevice, SilentSignalDevice, SoundSource};
use interval_beeper::timer::TimerEngine;
use interval_beeper::types::RenderMode;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries the timer output.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Validates the configuration and runs the timer.
async fn execute(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let mode = cli.render_mode()?;

    let (tx, rx) = mpsc::unbounded_channel();
    input::forward_toggle_signal(tx.clone()).context("Error installing SIGUSR1 handler")?;

    if cli.announces_pid(mode) {
        Display::show_pid(std::process::id());
    }

    let intervals = cli.intervals()?;
    let device = create_device(&cli)?;

    if mode == RenderMode::Verbose {
        Display::show_banner(&intervals, cli.interactive);
    }

    if cli.interactive {
        input::forward_keys(tx);
    }

    tracing::debug!(
        intervals = intervals.len(),
        mode = mode.as_str(),
        paused = cli.paused,
        "Starting timer"
    );

    let mut engine = TimerEngine::new(
        intervals,
        mode,
        cli.paused,
        device,
        std::io::stdout(),
        rx,
    );
    engine.run().await
}

/// Creates the signal device selected on the command line.
fn create_device(cli: &Cli) -> Result<Box<dyn SignalDevice>> {
    if cli.no_sound {
        return Ok(Box::new(SilentSignalDevice));
    }

    let source = cli
        .sound
        .clone()
        .map(SoundSource::file)
        .unwrap_or_default();
    let player = RodioSoundPlayer::new(source).context("Error initializing audio")?;
    Ok(Box::new(player))
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
