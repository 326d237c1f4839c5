// SPDX-License-Identifier: MPL-2.0
//! Photo loading for the gallery.
//!
//! Decoding happens in background tasks at startup; the UI shows a
//! placeholder slide until the corresponding photo arrives. A photo that
//! fails to decode simply keeps its placeholder.

pub mod image;

pub use image::{load_photo, ImageData};
