// SPDX-License-Identifier: MPL-2.0
//! Footer: the closing blessing and credits line.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::{
    alignment::Horizontal,
    widget::{Column, Text},
    Element,
};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the footer.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let with_love = Text::new(ctx.i18n.tr("footer-with-love"))
        .size(typography::TITLE_MD)
        .color(theme::body_text_color());
    let family = Text::new(ctx.i18n.tr("footer-family"))
        .size(typography::TITLE_SM)
        .color(theme::accent_text_color());
    let credit = Text::new(ctx.i18n.tr("footer-credit"))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(with_love)
        .push(family)
        .push(credit)
        .into()
}
