// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each periodic process exclusively owns the state it updates: the
//! countdown tick writes the time-left tuple, the gallery tick writes the
//! rotation index, and the animation tick writes the shared clock and
//! retires the spent confetti burst. The music controller is the audio
//! element's only writer.

use super::{App, Message, PhotoSlot};
use crate::countdown::TimeLeft;
use crate::invitation;
use crate::ui::details_card::{self, Event as DetailsEvent};
use crate::ui::music_toggle::{self, Event as MusicToggleEvent};
use chrono::Local;
use iced::Task;
use std::time::Instant;
use tracing::{debug, warn};

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::CountdownTick => {
            app.time_left = TimeLeft::until(invitation::event_start(), Local::now().naive_local());
            Task::none()
        }
        Message::GalleryTick => {
            app.gallery.advance(Instant::now());
            Task::none()
        }
        Message::AnimationTick(instant) => {
            app.now = instant;
            // The burst fires once and self-terminates; drop it for good.
            if app
                .confetti
                .as_ref()
                .is_some_and(|burst| burst.is_finished(instant))
            {
                app.confetti = None;
            }
            Task::none()
        }
        Message::MusicToggle(msg) => match music_toggle::update(&msg) {
            MusicToggleEvent::ToggleMusic => {
                app.music.toggle();
                Task::none()
            }
        },
        Message::Details(msg) => match details_card::update(&msg) {
            DetailsEvent::OpenVenueMap => {
                if let Err(err) = open::that(invitation::VENUE_MAP_URL) {
                    warn!(error = %err, url = invitation::VENUE_MAP_URL, "failed to open venue map");
                }
                Task::none()
            }
        },
        Message::PhotoDecoded { slot, result } => {
            match result {
                Ok(data) => match slot {
                    PhotoSlot::Timeline(index) => {
                        if let Some(photo) = app.photos.get_mut(index) {
                            *photo = Some(data);
                        }
                    }
                    PhotoSlot::Ganesh => app.ganesh = Some(data),
                    PhotoSlot::Namaste => app.namaste = Some(data),
                },
                // A missing photo keeps its placeholder; the page stays up.
                Err(err) => debug!(error = %err, ?slot, "photo decode failed"),
            }
            Task::none()
        }
    }
}
