// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.
//!
//! Three independent periodic processes drive the page: the one-second
//! countdown tick, the four-second gallery tick, and the fast animation
//! tick. They share no ordering guarantees; each one only touches the
//! state it owns. All of them end with the application loop, so no
//! callback can outlive the view it updates.

use super::Message;
use crate::config::{ANIMATION_TICK_MILLIS, COUNTDOWN_TICK_SECS, GALLERY_TICK_SECS};
use iced::{time, Subscription};
use std::time::Duration;

/// One-second tick recomputing the countdown tuple.
pub fn create_countdown_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(COUNTDOWN_TICK_SECS)).map(|_| Message::CountdownTick)
}

/// Four-second tick advancing the gallery rotation.
pub fn create_gallery_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(GALLERY_TICK_SECS)).map(|_| Message::GalleryTick)
}

/// Fast tick redrawing the decorative layers. The hearts drift for the
/// whole application lifetime, so this one is never gated off.
pub fn create_animation_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(ANIMATION_TICK_MILLIS)).map(Message::AnimationTick)
}
