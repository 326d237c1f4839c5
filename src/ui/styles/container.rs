// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// The cream page backdrop behind every section.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::backdrop_color())),
        ..Default::default()
    }
}

/// Translucent white card with a faint gold outline, used for the event
/// details and the family section.
pub fn glass_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::WHITE
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GOLD_500
            },
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        ..Default::default()
    }
}

/// Small frosted square holding one countdown unit.
pub fn countdown_box(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::WHITE
        })),
        border: Border {
            color: Color {
                a: opacity::BACKDROP_FAINT,
                ..palette::GOLD_500
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Gold-ringed frame around the hero portrait.
pub fn portrait_frame(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GOLD_500
            },
            width: border::WIDTH_LG,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Darkened strip behind the gallery caption.
pub fn caption_strip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::caption_strip_color())),
        ..Default::default()
    }
}

/// Rounded frame around the gallery pane.
pub fn gallery_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::WHITE,
            width: border::WIDTH_LG,
            radius: radius::XL.into(),
        },
        ..Default::default()
    }
}
