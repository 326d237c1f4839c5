// SPDX-License-Identifier: MPL-2.0
//! Image decoding into displayable handles.

use crate::error::{Error, Result};
use iced::widget::image;
use std::path::{Path, PathBuf};

/// A decoded photo ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Decodes the photo at `path` into RGBA.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded. Callers log and
/// fall back to a placeholder; a missing photo is never fatal.
pub fn load(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

/// Async wrapper around [`load`] for use with `Task::perform`. Decoding is
/// CPU-bound, so it is pushed onto the blocking pool.
pub async fn load_photo(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load(&path))
        .await
        .map_err(|err| Error::Image(err.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_decodes_a_small_png() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("dot.png");

        let mut img = image_rs::RgbaImage::new(2, 3);
        img.put_pixel(0, 0, image_rs::Rgba([255, 0, 128, 255]));
        img.save(&path).expect("failed to save test png");

        let data = load(&path).expect("decode should succeed");
        assert_eq!(data.width, 2);
        assert_eq!(data.height, 3);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let result = load(Path::new("no/such/photo.jpeg"));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn load_photo_reports_decode_errors() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("not-an-image.jpeg");
        std::fs::write(&path, b"definitely not jpeg bytes").expect("failed to write file");

        let result = load_photo(path).await;
        assert!(result.is_err());
    }
}
