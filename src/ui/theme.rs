// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the invitation page.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::Color;

/// Warm blush-white backdrop behind everything.
pub fn backdrop_color() -> Color {
    palette::CREAM
}

/// Near-invisible rose tint used by the drifting backdrop hearts.
pub fn heart_color() -> Color {
    Color {
        a: opacity::BACKDROP_FAINT,
        ..palette::ROSE_500
    }
}

/// Primary text color on the cream backdrop.
pub fn title_text_color() -> Color {
    palette::GRAY_800
}

/// Secondary/supporting text color.
pub fn body_text_color() -> Color {
    palette::GRAY_600
}

/// Muted labels (countdown unit names, footer credit).
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Festive gold accents: the invocation, the occasion line, links.
pub fn accent_text_color() -> Color {
    palette::GOLD_500
}

/// The celebrant's rose: her name, the blessing quote, the music toggle.
pub fn highlight_text_color() -> Color {
    palette::ROSE_500
}

/// Darkened strip behind the gallery caption.
pub fn caption_strip_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Caption text on the darkened strip.
pub fn caption_text_color() -> Color {
    WHITE
}

/// Unfilled part of the slide progress track.
pub fn progress_track_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Filled part of the slide progress track.
pub fn progress_fill_color() -> Color {
    palette::GOLD_500
}
