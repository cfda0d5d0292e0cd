//! External trigger sources.
//!
//! Forwards SIGUSR1 and interactive key presses to the engine's trigger
//! channel. Each forwarder runs as its own task and stops once the engine
//! side of the channel is gone.

use tokio::io::{AsyncReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::timer::Trigger;

/// ASCII DEL, sent by most terminals for Backspace.
const KEY_DELETE: u8 = 0x7f;

/// ASCII BS.
const KEY_BACKSPACE: u8 = 0x08;

/// Maps a byte read from stdin to a trigger.
#[must_use]
pub fn key_trigger(byte: u8) -> Option<Trigger> {
    match byte {
        b'\n' => Some(Trigger::Beep),
        KEY_DELETE | KEY_BACKSPACE => Some(Trigger::Reset),
        _ => None,
    }
}

/// Forwards each SIGUSR1 as a pause toggle.
///
/// Must be called from within the tokio runtime.
///
/// # Errors
///
/// Returns an error if the signal handler cannot be installed.
#[cfg(unix)]
pub fn forward_toggle_signal(tx: UnboundedSender<Trigger>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut signals = signal(SignalKind::user_defined1())?;

    tokio::spawn(async move {
        while signals.recv().await.is_some() {
            debug!("Received SIGUSR1");
            if tx.send(Trigger::TogglePause).is_err() {
                break;
            }
        }
    });

    Ok(())
}

/// Pause toggling by signal is only available on Unix.
#[cfg(not(unix))]
pub fn forward_toggle_signal(_tx: UnboundedSender<Trigger>) -> std::io::Result<()> {
    debug!("SIGUSR1 is not supported on this platform");
    Ok(())
}

/// Forwards Enter and Backspace presses read from stdin.
///
/// Must be called from within the tokio runtime.
pub fn forward_keys(tx: UnboundedSender<Trigger>) {
    tokio::spawn(async move {
        let mut stdin = BufReader::new(tokio::io::stdin());
        loop {
            match stdin.read_u8().await {
                Ok(byte) => {
                    if let Some(trigger) = key_trigger(byte) {
                        if tx.send(trigger).is_err() {
                            break;
                        }
                    }
                }
                Err(e) => {
                    debug!("Stopped reading keys: {}", e);
                    break;
                }
            }
        }
    });
}
