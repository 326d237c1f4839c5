// SPDX-License-Identifier: MPL-2.0
//! The auto-advancing photo pane: active photo, caption strip, and the
//! thin per-slide progress track.
//!
//! Rendering is driven entirely by state owned elsewhere; this module never
//! advances the rotation itself.

use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::Vertical,
    widget::{image, Column, Container, Row, Stack, Text},
    ContentFit, Element, Length,
};
use std::time::Instant;

/// Contextual data needed to render the gallery pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    /// The active slide's decoded photo, if it has arrived.
    pub photo: Option<&'a ImageData>,
    pub now: Instant,
}

/// Render the gallery pane.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let photo: Element<'a, Message> = match ctx.photo {
        Some(photo) => image::Image::new(photo.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            // Entry fade; the photo settles within the first part of the slide.
            .opacity(ctx.gallery.fade(ctx.now))
            .into(),
        None => Container::new(
            Text::new(ctx.i18n.tr("gallery-loading"))
                .size(typography::BODY)
                .color(theme::muted_text_color()),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
    };

    let caption_key = ctx
        .gallery
        .active_slide()
        .map(|slide| slide.caption_key)
        .unwrap_or("gallery-loading");
    let caption = Container::new(
        Text::new(ctx.i18n.tr(caption_key))
            .size(typography::BODY_LG)
            .color(theme::caption_text_color()),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::caption_strip);

    let caption_anchor = Container::new(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom);

    let progress_anchor = Container::new(progress_track(ctx.gallery.progress(ctx.now)))
        .width(Length::Fill)
        .align_y(Vertical::Top);

    let stacked = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GALLERY_HEIGHT))
        .push(photo)
        .push(caption_anchor)
        .push(progress_anchor);

    Container::new(stacked)
        .width(Length::Fill)
        .style(styles::container::gallery_frame)
        .into()
}

/// Thin two-segment strip: the filled part grows linearly across the slide
/// interval and snaps back on advance.
fn progress_track<'a, Message: 'a>(progress: f32) -> Element<'a, Message> {
    // FillPortion wants non-zero integers on both sides.
    let filled = ((progress * 1000.0) as u16).clamp(1, 999);

    let fill = Container::new(Column::new())
        .width(Length::FillPortion(filled))
        .height(Length::Fixed(sizing::PROGRESS_TRACK))
        .style(|_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::progress_fill_color())),
            ..Default::default()
        });

    let track = Container::new(Column::new())
        .width(Length::FillPortion(1000 - filled))
        .height(Length::Fixed(sizing::PROGRESS_TRACK))
        .style(|_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::progress_track_color())),
            ..Default::default()
        });

    Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Top)
        .push(fill)
        .push(track)
        .into()
}
