// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round frosted toggle for the background music, rose icon on white.
pub fn music_toggle(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: palette::ROSE_500,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GOLD_500
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Text-only gold link, used for the venue map. Darkens on hover the way
/// an underlined link would.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GOLD_700,
        _ => palette::GOLD_500,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
