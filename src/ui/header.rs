// SPDX-License-Identifier: MPL-2.0
//! Invocation header and the invitation block.
//!
//! The invocation line is flanked by the Ganesha image on both sides when
//! it has decoded; the text stands alone otherwise.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{image, Column, Row, Text},
    Element,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub ganesh: Option<&'a ImageData>,
}

/// Render the invocation line and the invitation paragraphs.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let invocation = Text::new(ctx.i18n.tr("invocation"))
        .size(typography::TITLE_SM)
        .color(theme::accent_text_color());

    let mut invocation_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center);
    if let Some(ganesh) = ctx.ganesh {
        invocation_row = invocation_row.push(
            image::Image::new(ganesh.handle.clone())
                .width(sizing::ICON_LG)
                .height(sizing::ICON_LG),
        );
    }
    invocation_row = invocation_row.push(invocation);
    if let Some(ganesh) = ctx.ganesh {
        invocation_row = invocation_row.push(
            image::Image::new(ganesh.handle.clone())
                .width(sizing::ICON_LG)
                .height(sizing::ICON_LG),
        );
    }

    let grandparents = Text::new(ctx.i18n.tr("invite-grandparents"))
        .size(typography::TITLE_MD)
        .color(theme::title_text_color());
    let request = Text::new(ctx.i18n.tr("invite-request"))
        .size(typography::BODY_LG)
        .color(theme::body_text_color());
    let parents = Text::new(ctx.i18n.tr("invite-parents"))
        .size(typography::BODY_LG)
        .color(theme::body_text_color());
    let child = Text::new(ctx.i18n.tr("invite-child-name"))
        .size(typography::TITLE_MD)
        .color(theme::highlight_text_color());
    let occasion = Text::new(ctx.i18n.tr("invite-occasion"))
        .size(typography::TITLE_SM)
        .color(theme::accent_text_color());

    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(invocation_row)
        .push(grandparents)
        .push(request)
        .push(parents)
        .push(child)
        .push(occasion)
        .into()
}
