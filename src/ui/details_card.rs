// SPDX-License-Identifier: MPL-2.0
//! Event details card: date, time, and the venue link.
//!
//! The venue line is the application's one outbound interface; activating
//! it asks the parent to open the map URL in the system browser.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the details card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the details card.
#[derive(Debug, Clone)]
pub enum Message {
    VenuePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenVenueMap,
}

/// Process a details card message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::VenuePressed => Event::OpenVenueMap,
    }
}

/// Render the details card.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let date = Text::new(ctx.i18n.tr("details-date"))
        .size(typography::TITLE_SM)
        .color(theme::title_text_color());
    let time = Text::new(ctx.i18n.tr("details-time"))
        .size(typography::TITLE_SM)
        .color(theme::title_text_color());

    let venue = button(
        Text::new(ctx.i18n.tr("details-venue")).size(typography::TITLE_SM),
    )
    .padding(0)
    .style(styles::button::link)
    .on_press(Message::VenuePressed);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(date)
        .push(time)
        .push(venue);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::glass_card)
        .into()
}
