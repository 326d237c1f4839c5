// SPDX-License-Identifier: MPL-2.0
//! Countdown display: four frosted unit boxes with labels underneath.

use crate::countdown::TimeLeft;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the countdown.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub time_left: TimeLeft,
}

/// Render the countdown row. Values come straight from the last tick's
/// decomposition; this widget does no time math of its own.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let units = [
        ("countdown-days", ctx.time_left.days),
        ("countdown-hours", ctx.time_left.hours),
        ("countdown-minutes", ctx.time_left.minutes),
        ("countdown-seconds", ctx.time_left.seconds),
    ];

    let mut row = Row::new().spacing(spacing::SM);
    for (label_key, value) in units {
        row = row.push(unit_box(ctx.i18n, label_key, value));
    }

    row.into()
}

fn unit_box<'a, Message: 'a>(i18n: &I18n, label_key: &str, value: u64) -> Element<'a, Message> {
    let value_text = Text::new(value.to_string())
        .size(typography::TITLE_SM)
        .color(theme::title_text_color());

    let boxed = Container::new(value_text)
        .width(Length::Fixed(sizing::COUNTDOWN_BOX))
        .height(Length::Fixed(sizing::COUNTDOWN_BOX))
        .center_x(Length::Fixed(sizing::COUNTDOWN_BOX))
        .center_y(Length::Fixed(sizing::COUNTDOWN_BOX))
        .style(styles::container::countdown_box);

    let label = Text::new(i18n.tr(label_key))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(boxed)
        .push(label)
        .into()
}
