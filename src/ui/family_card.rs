// SPDX-License-Identifier: MPL-2.0
//! Family card: the hosts' names, contact numbers, and the closing
//! blessing quote.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{image, rule, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the family card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub namaste: Option<&'a ImageData>,
}

/// Render the family card.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("family-title"))
        .size(typography::TITLE_LG)
        .color(theme::accent_text_color());

    let mut title_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center);
    if let Some(namaste) = ctx.namaste {
        title_row = title_row.push(
            image::Image::new(namaste.handle.clone())
                .width(sizing::ICON_LG)
                .height(sizing::ICON_LG),
        );
    }
    title_row = title_row.push(title);
    if let Some(namaste) = ctx.namaste {
        title_row = title_row.push(
            image::Image::new(namaste.handle.clone())
                .width(sizing::ICON_LG)
                .height(sizing::ICON_LG),
        );
    }

    let mut names = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);
    for key in [
        "family-line-1",
        "family-line-2",
        "family-line-3",
        "family-line-4",
    ] {
        names = names.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY_LG)
                .color(theme::body_text_color()),
        );
    }

    let contact_title = Text::new(ctx.i18n.tr("contact-title"))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());
    let contact_numbers = Text::new(ctx.i18n.tr("contact-numbers"))
        .size(typography::BODY_LG)
        .color(theme::accent_text_color());

    let blessing = Text::new(ctx.i18n.tr("family-blessing"))
        .size(typography::BODY_LG)
        .color(theme::highlight_text_color());

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title_row)
        .push(names)
        .push(rule::horizontal(1))
        .push(contact_title)
        .push(contact_numbers)
        .push(blessing);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::glass_card)
        .into()
}
