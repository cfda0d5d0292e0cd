//! Sound source selection.
//!
//! The beep is either an audio file chosen by the user or a short sine tone
//! generated on the fly.

use std::path::PathBuf;
use std::time::Duration;

/// Default tone pitch in Hz.
pub const DEFAULT_TONE_FREQUENCY: f32 = 880.0;

/// Default tone length.
pub const DEFAULT_TONE_DURATION: Duration = Duration::from_millis(250);

/// Represents the source of the beep sound.
#[derive(Debug, Clone, PartialEq)]
pub enum SoundSource {
    /// An audio file on disk (any format rodio can decode).
    File {
        /// The full path to the sound file.
        path: PathBuf,
    },
    /// A generated sine tone.
    Tone {
        /// Pitch in Hz.
        frequency: f32,
        /// How long the tone plays.
        duration: Duration,
    },
}

impl SoundSource {
    /// Creates a file sound source. The file is loaded when the player opens.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Creates a tone sound source.
    #[must_use]
    pub fn tone(frequency: f32, duration: Duration) -> Self {
        Self::Tone {
            frequency,
            duration,
        }
    }

    /// Returns the file path if this is a file source.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::File { path } => Some(path),
            Self::Tone { .. } => None,
        }
    }
}

impl Default for SoundSource {
    fn default() -> Self {
        Self::tone(DEFAULT_TONE_FREQUENCY, DEFAULT_TONE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_source() {
        let source = SoundSource::file("/usr/share/sounds/beep.mp3");
        assert_eq!(
            source.path(),
            Some(&PathBuf::from("/usr/share/sounds/beep.mp3"))
        );
    }

    #[test]
    fn test_default_is_tone() {
        let source = SoundSource::default();
        assert!(source.path().is_none());
        assert_eq!(
            source,
            SoundSource::tone(DEFAULT_TONE_FREQUENCY, DEFAULT_TONE_DURATION)
        );
    }
}
