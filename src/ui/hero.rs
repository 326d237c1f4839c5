// SPDX-License-Identifier: MPL-2.0
//! Hero section: the round portrait, the celebrant's name, and the
//! "turning One" subtitle.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::Horizontal,
    widget::{image, Column, Container, Text},
    ContentFit, Element,
};

/// Contextual data needed to render the hero section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portrait: Option<&'a ImageData>,
}

/// Render the portrait and title.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(ctx.i18n.tr("hero-name"))
        .size(typography::DISPLAY)
        .color(theme::accent_text_color());
    let subtitle = Text::new(ctx.i18n.tr("hero-subtitle"))
        .size(typography::TITLE_MD)
        .color(theme::highlight_text_color());

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

    if let Some(portrait) = ctx.portrait {
        let framed = Container::new(
            image::Image::new(portrait.handle.clone())
                .width(sizing::PORTRAIT)
                .height(sizing::PORTRAIT)
                .content_fit(ContentFit::Cover),
        )
        .padding(spacing::XXS)
        .style(styles::container::portrait_frame);
        column = column.push(framed);
    }

    column.push(name).push(subtitle).into()
}
