// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of section components over a cream
//! backdrop, with the drifting hearts behind the content and the one-shot
//! confetti burst above it.

use super::Message;
use crate::countdown::TimeLeft;
use crate::decor::{ConfettiBurst, HeartField};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::widgets::{Confetti, FloatingHearts};
use crate::ui::{
    countdown_panel, details_card, family_card, footer, gallery_pane, header, hero, music_toggle,
};
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container, Row, Space, Stack},
    Element, Length,
};
use std::time::Instant;

/// Widest the content column is allowed to grow.
const CONTENT_MAX_WIDTH: f32 = 900.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub time_left: TimeLeft,
    pub gallery: &'a Gallery,
    pub photos: &'a [Option<ImageData>],
    pub ganesh: Option<&'a ImageData>,
    pub namaste: Option<&'a ImageData>,
    pub music_playing: bool,
    pub hearts: &'a HeartField,
    pub confetti: Option<&'a ConfettiBurst>,
    pub now: Instant,
}

/// Renders the whole invitation page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toggle_row = Row::new()
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill))
        .push(
            music_toggle::view(music_toggle::ViewContext {
                i18n: ctx.i18n,
                playing: ctx.music_playing,
            })
            .map(Message::MusicToggle),
        );

    let active_photo = ctx
        .photos
        .get(ctx.gallery.active_index())
        .and_then(Option::as_ref);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .push(toggle_row)
        .push(header::view(header::ViewContext {
            i18n: ctx.i18n,
            ganesh: ctx.ganesh,
        }))
        .push(hero::view(hero::ViewContext {
            i18n: ctx.i18n,
            portrait: ctx.photos.first().and_then(Option::as_ref),
        }))
        .push(countdown_panel::view(countdown_panel::ViewContext {
            i18n: ctx.i18n,
            time_left: ctx.time_left,
        }))
        .push(gallery_pane::view(gallery_pane::ViewContext {
            i18n: ctx.i18n,
            gallery: ctx.gallery,
            photo: active_photo,
            now: ctx.now,
        }))
        .push(details_card::view(details_card::ViewContext { i18n: ctx.i18n }).map(Message::Details))
        .push(family_card::view(family_card::ViewContext {
            i18n: ctx.i18n,
            namaste: ctx.namaste,
        }))
        .push(footer::view(footer::ViewContext { i18n: ctx.i18n }));

    let centered = Container::new(
        Container::new(content)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .center_x(Length::Fill);

    let backdrop = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    let hearts =
        FloatingHearts::new(ctx.hearts, ctx.hearts.elapsed_secs(ctx.now)).into_element();

    let mut stacked = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(hearts)
        .push(scrollable(centered).width(Length::Fill).height(Length::Fill));

    if let Some(burst) = ctx.confetti {
        stacked = stacked.push(Confetti::new(burst, burst.progress(ctx.now)).into_element());
    }

    stacked.into()
}
