// SPDX-License-Identifier: MPL-2.0
//! Background music controller.
//!
//! Playback is best-effort throughout: the launch attempt and every manual
//! toggle may fail (no output device, missing or undecodable track), and
//! every failure is caught here, logged, and swallowed. Nothing is ever
//! surfaced in the UI; the toggle button is the only recovery path.
//!
//! The playing flag is confirmed, not optimistic: it flips to `true` only
//! after a playback attempt has actually succeeded, so the toggle icon
//! never claims audio that is not audible.

mod volume;

pub use volume::Volume;

use crate::error::AudioError;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Controller for the single background music track.
///
/// The output device is opened lazily on the first playback attempt, so
/// constructing the controller can never fail and a machine without audio
/// still gets a silent but fully functional invitation.
pub struct MusicPlayer {
    track: PathBuf,
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    volume: Volume,
    playing: bool,
}

impl MusicPlayer {
    /// Creates a silent controller for the given track. No device access
    /// happens here.
    #[must_use]
    pub fn new(track: PathBuf, volume: Volume) -> Self {
        Self {
            track,
            stream: None,
            sink: None,
            volume,
            playing: false,
        }
    }

    /// Whether music is currently audible.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The launch-time playback attempt. Failure is logged at debug level
    /// only: a machine without an output device is an expected environment,
    /// not a fault worth a warning.
    pub fn autoplay(&mut self) {
        match self.try_start() {
            Ok(()) => info!(track = %self.track.display(), "music started on launch"),
            Err(err) => {
                debug!(error = %err, key = err.i18n_key(), "music autoplay suppressed");
            }
        }
    }

    /// Manual toggle: pause when playing, attempt to start otherwise.
    /// A failed start leaves the flag false.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else if let Err(err) = self.try_start() {
            warn!(error = %err, key = err.i18n_key(), "music toggle failed; staying silent");
        }
    }

    /// Pauses playback and clears the playing flag. Pausing an already
    /// silent controller is a no-op.
    pub fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
        self.playing = false;
    }

    /// Applies a new volume to the current and any future sink.
    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume.value());
        }
    }

    /// Attempts to start (or resume) playback. On success the playing flag
    /// is set; on failure it is left untouched (false).
    fn try_start(&mut self) -> Result<(), AudioError> {
        // Resume path: a paused sink with queued audio just un-pauses.
        if let Some(sink) = &self.sink {
            if sink.is_paused() && !sink.empty() {
                sink.play();
                self.playing = true;
                return Ok(());
            }
        }

        // Fresh start: the track is re-opened so that pressing play after
        // the song has run out starts it over instead of doing nothing.
        let file = File::open(&self.track)
            .map_err(|err| AudioError::TrackUnreadable(err.to_string()))?;
        let source =
            Decoder::new(file).map_err(|err| AudioError::Undecodable(err.to_string()))?;

        let stream = match self.stream.take() {
            Some(stream) => stream,
            None => OutputStreamBuilder::open_default_stream()
                .map_err(|err| AudioError::NoOutputDevice(err.to_string()))?,
        };

        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(self.volume.value());
        sink.append(source);
        sink.play();

        self.stream = Some(stream);
        self.sink = Some(sink);
        self.playing = true;
        Ok(())
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        // Stop the sink before the stream goes away so teardown is silent.
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}
