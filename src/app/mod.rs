// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the timer-driven domains (countdown,
//! gallery, decorative layers), the music controller, localization, and the
//! decoded photos. This file keeps policy decisions (window sizing, startup
//! playback, photo preloading) close to the main update loop so it is easy
//! to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, PhotoSlot};

use crate::audio::{MusicPlayer, Volume};
use crate::config;
use crate::countdown::TimeLeft;
use crate::decor::{ConfettiBurst, HeartField};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::invitation;
use crate::media::{self, ImageData};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state that bridges the page sections, the timers,
/// and the music controller.
pub struct App {
    pub i18n: I18n,
    /// Last published countdown tuple; rewritten wholesale every tick.
    time_left: TimeLeft,
    /// Photo rotation state, advanced by the gallery tick.
    gallery: Gallery,
    /// The audio element's single writer.
    music: MusicPlayer,
    /// Backdrop hearts, scattered once at startup.
    hearts: HeartField,
    /// The one-shot startup burst; `None` once spent.
    confetti: Option<ConfettiBurst>,
    /// Shared animation clock, written by the animation tick only.
    now: Instant,
    /// Decoded timeline photos, indexed like the gallery slides.
    photos: Vec<Option<ImageData>>,
    ganesh: Option<ImageData>,
    namaste: Option<ImageData>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("time_left", &self.time_left)
            .field("active_slide", &self.gallery.active_index())
            .field("music_playing", &self.music.is_playing())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let now = Instant::now();
        let gallery = Gallery::new(invitation::timeline_slides(), now);
        let photos = vec![None; gallery.len()];

        Self {
            i18n: I18n::default(),
            time_left: TimeLeft::zero(),
            gallery,
            music: MusicPlayer::new(PathBuf::from(invitation::MUSIC_TRACK), Volume::default()),
            hearts: HeartField::scatter(now),
            confetti: None,
            now,
            photos,
            ganesh: None,
            namaste: None,
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let now = Instant::now();
        let gallery = Gallery::new(invitation::timeline_slides(), now);
        let photos = vec![None; gallery.len()];

        let volume = Volume::new(config.music_volume.unwrap_or(config::DEFAULT_VOLUME));
        let mut music = MusicPlayer::new(PathBuf::from(invitation::MUSIC_TRACK), volume);
        if config.autoplay.unwrap_or(true) {
            // Best-effort; a refusal leaves the toggle showing "play".
            music.autoplay();
        }

        let mut tasks = Vec::new();
        for (index, slide) in gallery.slides().iter().enumerate() {
            tasks.push(load_photo_task(slide.path, PhotoSlot::Timeline(index)));
        }
        tasks.push(load_photo_task(invitation::IMAGE_GANESH, PhotoSlot::Ganesh));
        tasks.push(load_photo_task(invitation::IMAGE_NAMASTE, PhotoSlot::Namaste));

        let app = Self {
            i18n,
            time_left: TimeLeft::until(
                invitation::event_start(),
                chrono::Local::now().naive_local(),
            ),
            gallery,
            music,
            hearts: HeartField::scatter(now),
            confetti: Some(ConfettiBurst::ignite(now)),
            now,
            photos,
            ganesh: None,
            namaste: None,
        };

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_countdown_subscription(),
            subscription::create_gallery_subscription(),
            subscription::create_animation_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            time_left: self.time_left,
            gallery: &self.gallery,
            photos: &self.photos,
            ganesh: self.ganesh.as_ref(),
            namaste: self.namaste.as_ref(),
            music_playing: self.music.is_playing(),
            hearts: &self.hearts,
            confetti: self.confetti.as_ref(),
            now: self.now,
        })
    }
}

fn load_photo_task(path: &'static str, slot: PhotoSlot) -> Task<Message> {
    Task::perform(media::load_photo(PathBuf::from(path)), move |result| {
        Message::PhotoDecoded { slot, result }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFETTI_DURATION_SECS;
    use crate::error::Error;
    use crate::ui::music_toggle;
    use std::time::Duration;

    #[test]
    fn title_uses_localized_window_title() {
        let app = App::default();
        assert!(!app.title().starts_with("MISSING:"));
    }

    #[test]
    fn countdown_tick_keeps_fields_in_bounds() {
        let mut app = App::default();
        let _ = app.update(Message::CountdownTick);
        assert!(app.time_left.hours < 24);
        assert!(app.time_left.minutes < 60);
        assert!(app.time_left.seconds < 60);
    }

    #[test]
    fn gallery_tick_advances_one_slide() {
        let mut app = App::default();
        assert_eq!(app.gallery.active_index(), 0);
        let _ = app.update(Message::GalleryTick);
        assert_eq!(app.gallery.active_index(), 1);
        for _ in 0..3 {
            let _ = app.update(Message::GalleryTick);
        }
        assert_eq!(app.gallery.active_index(), 0);
    }

    #[test]
    fn music_toggle_without_track_stays_silent() {
        let mut app = App::default();
        let _ = app.update(Message::MusicToggle(music_toggle::Message::Pressed));
        // The bundled track is not present in the test environment, so the
        // confirmed-update policy keeps the flag false.
        assert!(!app.music.is_playing());
        let _ = app.update(Message::MusicToggle(music_toggle::Message::Pressed));
        assert!(!app.music.is_playing());
    }

    #[test]
    fn animation_tick_retires_spent_confetti() {
        let mut app = App::default();
        let start = Instant::now();
        app.confetti = Some(ConfettiBurst::ignite(start));

        let mid = start + Duration::from_secs_f32(CONFETTI_DURATION_SECS / 2.0);
        let _ = app.update(Message::AnimationTick(mid));
        assert!(app.confetti.is_some());

        let after = start + Duration::from_secs_f32(CONFETTI_DURATION_SECS + 0.2);
        let _ = app.update(Message::AnimationTick(after));
        assert!(app.confetti.is_none());
    }

    #[test]
    fn decoded_photo_lands_in_its_slot() {
        let mut app = App::default();
        let data = ImageData::from_rgba(1, 1, vec![255, 255, 255, 255]);
        let _ = app.update(Message::PhotoDecoded {
            slot: PhotoSlot::Timeline(2),
            result: Ok(data),
        });
        assert!(app.photos[2].is_some());
        assert!(app.photos[0].is_none());
    }

    #[test]
    fn failed_photo_decode_keeps_the_placeholder() {
        let mut app = App::default();
        let _ = app.update(Message::PhotoDecoded {
            slot: PhotoSlot::Timeline(0),
            result: Err(Error::Image("truncated file".into())),
        });
        assert!(app.photos[0].is_none());
    }
}
