//! Signal device for the interval beeper.
//!
//! The timer only ever asks for "play the beep now". Everything behind that
//! request lives here:
//!
//! - `SignalDevice`: the play-now capability handed to the engine
//! - `RodioSoundPlayer`: real playback through rodio (file or generated tone)
//! - `SilentSignalDevice`: used with `--no-sound`
//! - `MockSignalDevice`: records calls for tests
//!
//! # Usage
//!
//! ```rust,no_run
//! use interval_beeper::sound::{RodioSoundPlayer, SignalDevice, SoundSource};
//!
//! let player = RodioSoundPlayer::new(SoundSource::default()).expect("audio init");
//! if let Err(e) = player.play() {
//!     eprintln!("Could not play sound: {}", e);
//! }
//! ```

mod error;
mod player;
mod source;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub use error::SoundError;
pub use player::RodioSoundPlayer;
pub use source::{SoundSource, DEFAULT_TONE_DURATION, DEFAULT_TONE_FREQUENCY};

/// Something that can produce the beep.
///
/// `play` must return without waiting for the sound to finish.
pub trait SignalDevice {
    /// Starts the beep.
    ///
    /// # Errors
    ///
    /// Returns an error if playback could not be started.
    fn play(&self) -> Result<(), SoundError>;
}

impl SignalDevice for RodioSoundPlayer {
    fn play(&self) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self)
    }
}

impl<T: SignalDevice + ?Sized> SignalDevice for Box<T> {
    fn play(&self) -> Result<(), SoundError> {
        (**self).play()
    }
}

/// A device that never makes a sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSignalDevice;

impl SignalDevice for SilentSignalDevice {
    fn play(&self) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Mock signal device for testing.
#[derive(Debug, Default)]
pub struct MockSignalDevice {
    play_count: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockSignalDevice {
    /// Creates a mock that succeeds until told otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls whether later `play` calls fail with `PlaybackError`.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Number of play requests, failed ones included.
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_count.load(Ordering::SeqCst)
    }
}

impl SignalDevice for MockSignalDevice {
    fn play(&self) -> Result<(), SoundError> {
        self.play_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        Ok(())
    }
}
