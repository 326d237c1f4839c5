// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Audio(AudioError),
}

/// Specific error types for music playback issues.
///
/// Playback is strictly best-effort: every variant here is caught, logged,
/// and swallowed by the controller. The variants exist so the log output
/// can say which stage failed, and so tests can assert on the failure kind.
#[derive(Debug, Clone)]
pub enum AudioError {
    /// No usable audio output device (or the platform refused to open one).
    NoOutputDevice(String),

    /// The music file could not be opened (missing, permission denied, ...).
    TrackUnreadable(String),

    /// The music file was opened but could not be decoded.
    Undecodable(String),
}

impl AudioError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AudioError::NoOutputDevice(_) => "error-music-no-output-device",
            AudioError::TrackUnreadable(_) => "error-music-track-unreadable",
            AudioError::Undecodable(_) => "error-music-undecodable",
        }
    }
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoOutputDevice(msg) => write!(f, "No audio output device: {}", msg),
            AudioError::TrackUnreadable(msg) => write!(f, "Music track unreadable: {}", msg),
            AudioError::Undecodable(msg) => write!(f, "Music track undecodable: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
        }
    }
}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn audio_error_wraps_into_error() {
        let err: Error = AudioError::NoOutputDevice("no default sink".into()).into();
        match err {
            Error::Audio(AudioError::NoOutputDevice(message)) => {
                assert!(message.contains("default sink"));
            }
            _ => panic!("expected Audio variant"),
        }
    }

    #[test]
    fn audio_error_i18n_keys() {
        assert_eq!(
            AudioError::NoOutputDevice(String::new()).i18n_key(),
            "error-music-no-output-device"
        );
        assert_eq!(
            AudioError::TrackUnreadable(String::new()).i18n_key(),
            "error-music-track-unreadable"
        );
        assert_eq!(
            AudioError::Undecodable(String::new()).i18n_key(),
            "error-music-undecodable"
        );
    }

    #[test]
    fn audio_error_display_names_failed_stage() {
        let err = AudioError::Undecodable("bad frame header".to_string());
        assert!(format!("{}", err).contains("undecodable"));
    }
}
