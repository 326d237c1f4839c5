// SPDX-License-Identifier: MPL-2.0
//! The round music toggle pinned to the top-right corner.
//!
//! The label mirrors the confirmed playing state; a toggle that failed to
//! start playback keeps showing the "play" affordance.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, tooltip, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the toggle.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub playing: bool,
}

/// Messages emitted by the toggle.
#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ToggleMusic,
}

/// Process a toggle message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Pressed => Event::ToggleMusic,
    }
}

/// Render the toggle button.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    // A note glyph when silent, a pause glyph when playing.
    let glyph = if ctx.playing { "❚❚" } else { "♪" };
    let tip_key = if ctx.playing { "music-pause" } else { "music-play" };

    let toggle = button(
        Container::new(Text::new(glyph).size(typography::BODY_LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::MUSIC_TOGGLE))
    .height(Length::Fixed(sizing::MUSIC_TOGGLE))
    .padding(0)
    .style(styles::button::music_toggle)
    .on_press(Message::Pressed);

    tooltip(
        toggle,
        Text::new(ctx.i18n.tr(tip_key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_always_requests_a_toggle() {
        let event = update(&Message::Pressed);
        assert!(matches!(event, Event::ToggleMusic));
    }
}
