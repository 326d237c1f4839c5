// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! The balloon SVG is embedded and rasterized at runtime into the RGBA
//! buffer the window title bar wants. Any parse or render failure yields
//! `None` and the window simply keeps the platform default icon.

use iced::window::{icon, Icon};
use resvg::usvg;

// Embedded so packaging does not need to locate assets on disk.
const SVG_SOURCE: &str = include_str!("../assets/branding/iced_invite.svg");

/// Title bar icon edge length in pixels.
const TARGET_PX: u32 = 128;

/// Rasterize the embedded SVG icon to a square RGBA buffer.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        TARGET_PX as f32 / size.width(),
        TARGET_PX as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(TARGET_PX, TARGET_PX)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), TARGET_PX, TARGET_PX).ok()
}
