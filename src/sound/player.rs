//! Sound player implementation using rodio.
//!
//! This module provides the `RodioSoundPlayer` which uses the rodio v0.20
//! audio library for cross-platform sound playback.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::source::{Buffered, SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::source::SoundSource;

/// Volume applied to the generated tone.
const TONE_AMPLITUDE: f32 = 0.20;

/// A decoded sound file; clones share the decoded frames.
type Clip = Buffered<Decoder<BufReader<File>>>;

/// Opens and probes a sound file.
fn load_clip(path: &Path) -> Result<Clip, SoundError> {
    let file = File::open(path)
        .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;

    let decoder =
        Decoder::new(BufReader::new(file)).map_err(|e| SoundError::DecodeError(e.to_string()))?;

    Ok(decoder.buffered())
}

/// A sound player that uses rodio for audio playback.
///
/// Playback is non-blocking: every sound goes to a detached sink and keeps
/// playing after `play` returns. Files are opened once, when the player is
/// created, so `play` never touches the filesystem.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// What plays on each beep.
    source: SoundSource,
    /// Decoded file, present for file sources.
    clip: Option<Clip>,
}

impl RodioSoundPlayer {
    /// Opens the default audio output and loads the sound.
    ///
    /// A file that cannot be opened or decoded is replaced by the tone.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(source: SoundSource) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        let (source, clip) = match source {
            SoundSource::File { path } => match load_clip(&path) {
                Ok(clip) => (SoundSource::File { path }, Some(clip)),
                Err(e) if e.should_fallback_to_tone() => {
                    warn!("Failed to load '{}': {}, falling back to tone", path.display(), e);
                    (SoundSource::default(), None)
                }
                Err(e) => return Err(e),
            },
            tone => (tone, None),
        };

        Ok(Self {
            _stream: stream,
            stream_handle,
            source,
            clip,
        })
    }

    /// Starts playing the sound and returns immediately.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::StreamError` if no sink can be created.
    pub fn play(&self) -> Result<(), SoundError> {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        match (&self.clip, &self.source) {
            (Some(clip), _) => sink.append(clip.clone()),
            (None, SoundSource::Tone { frequency, duration }) => {
                sink.append(tone(*frequency, *duration));
            }
            (None, SoundSource::File { path }) => {
                return Err(SoundError::PlaybackError(format!(
                    "{} was not loaded",
                    path.display()
                )));
            }
        }
        sink.detach();

        debug!("Playback started (detached)");
        Ok(())
    }

    /// Returns the source that plays on each beep.
    #[must_use]
    pub fn source(&self) -> &SoundSource {
        &self.source
    }
}

/// A generated sine tone.
fn tone(frequency: f32, duration: Duration) -> impl Source<Item = f32> + Send {
    SineWave::new(frequency)
        .take_duration(duration)
        .amplify(TONE_AMPLITUDE)
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
