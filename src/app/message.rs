// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::details_card;
use crate::ui::music_toggle;
use std::time::Instant;

/// Which decoded image a finished background load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSlot {
    /// One of the gallery timeline photos, by slide index.
    Timeline(usize),
    /// The Ganesha image flanking the invocation.
    Ganesh,
    /// The namaste image flanking the family card title.
    Namaste,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// One-second tick: recompute the countdown tuple wholesale.
    CountdownTick,
    /// Four-second tick: advance the gallery by one slide.
    GalleryTick,
    /// Fast redraw tick driving the decorative layers, the slide progress
    /// bar, and the entry fade.
    AnimationTick(Instant),
    MusicToggle(music_toggle::Message),
    Details(details_card::Message),
    /// Result from decoding one image in the background.
    PhotoDecoded {
        slot: PhotoSlot,
        result: Result<ImageData, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `hi`, `en-US`).
    pub lang: Option<String>,
}
