// SPDX-License-Identifier: MPL-2.0
//! Static invitation content: the target instant, the photo timeline, the
//! venue, and the bundled asset paths.
//!
//! Asset paths are references only; nothing here checks that the files
//! exist. A missing photo degrades to a placeholder slide and a missing
//! music file leaves the controller silent.

use crate::gallery::Slide;
use chrono::{NaiveDate, NaiveDateTime};

/// The instant the countdown counts down to (local time).
const TARGET_YEAR: i32 = 2026;
const TARGET_MONTH: u32 = 3;
const TARGET_DAY: u32 = 1;

/// Photo timeline, in display order.
pub const PHOTO_BIRTH: &str = "assets/photos/trisha_birth_1.jpeg";
pub const PHOTO_SIX_MONTHS: &str = "assets/photos/trisha_6_month.jpeg";
pub const PHOTO_TEN_MONTHS: &str = "assets/photos/trisha_10_month.jpeg";
pub const PHOTO_ONE_YEAR: &str = "assets/photos/trisha_1year.jpeg";

/// Decorative images for the invocation header and the family card.
pub const IMAGE_GANESH: &str = "assets/photos/ganesh.png";
pub const IMAGE_NAMASTE: &str = "assets/photos/namstey.png";

/// The background music track.
pub const MUSIC_TRACK: &str = "assets/music/happy-birthday.mp3";

/// The one outbound link: the venue location, opened in the system browser.
pub const VENUE_MAP_URL: &str = "https://share.google/5F8A0kz4Poqzm9bNW";

/// Midnight at the start of the celebration day.
#[must_use]
pub fn event_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(TARGET_YEAR, TARGET_MONTH, TARGET_DAY)
        .expect("hard-coded event date is valid")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is valid")
}

/// The four timeline slides, in chronological order.
#[must_use]
pub fn timeline_slides() -> Vec<Slide> {
    vec![
        Slide {
            path: PHOTO_BIRTH,
            caption_key: "photo-caption-birth",
        },
        Slide {
            path: PHOTO_SIX_MONTHS,
            caption_key: "photo-caption-six-months",
        },
        Slide {
            path: PHOTO_TEN_MONTHS,
            caption_key: "photo-caption-ten-months",
        },
        Slide {
            path: PHOTO_ONE_YEAR,
            caption_key: "photo-caption-one-year",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::fluent::I18n;

    #[test]
    fn event_starts_at_midnight_march_first() {
        let start = event_start();
        assert_eq!(start.to_string(), "2026-03-01 00:00:00");
    }

    #[test]
    fn timeline_has_four_distinct_slides() {
        let slides = timeline_slides();
        assert_eq!(slides.len(), 4);
        for (i, a) in slides.iter().enumerate() {
            for b in slides.iter().skip(i + 1) {
                assert_ne!(a.path, b.path);
                assert_ne!(a.caption_key, b.caption_key);
            }
        }
    }

    #[test]
    fn every_caption_key_resolves_in_both_locales() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        for locale in ["en-US", "hi"] {
            i18n.set_locale(locale.parse().unwrap());
            for slide in timeline_slides() {
                let caption = i18n.tr(slide.caption_key);
                assert!(
                    !caption.starts_with("MISSING:"),
                    "caption {} missing in {locale}",
                    slide.caption_key
                );
            }
        }
    }
}
