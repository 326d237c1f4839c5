// SPDX-License-Identifier: MPL-2.0
use chrono::{NaiveDate, NaiveDateTime};
use iced_invite::config::{self, Config, DEFAULT_VOLUME};
use iced_invite::countdown::TimeLeft;
use iced_invite::gallery::Gallery;
use iced_invite::i18n::fluent::I18n;
use iced_invite::invitation;
use std::time::Instant;
use tempfile::tempdir;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .expect("valid date")
        .and_hms_opt(h, mi, s)
        .expect("valid time")
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        music_volume: Some(DEFAULT_VOLUME),
        autoplay: Some(true),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to hi
    let hindi_config = Config {
        language: Some("hi".to_string()),
        music_volume: Some(DEFAULT_VOLUME),
        autoplay: Some(true),
    };
    config::save_to_path(&hindi_config, &temp_config_file_path)
        .expect("Failed to write hindi config file");

    // Load i18n with hindi config
    let loaded_hindi_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load hindi config from path");
    let i18n_hi = I18n::new(None, &loaded_hindi_config);
    assert_eq!(i18n_hi.current_locale().to_string(), "hi");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.language = Some("hi".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_countdown_scenario_half_day_out() {
    let now = at(2026, 2, 28, 12, 0, 0);
    let time_left = TimeLeft::until(invitation::event_start(), now);
    assert_eq!(
        time_left,
        TimeLeft {
            days: 0,
            hours: 12,
            minutes: 0,
            seconds: 0
        }
    );
}

#[test]
fn test_countdown_reports_zero_from_the_event_onwards() {
    let target = invitation::event_start();
    assert!(TimeLeft::until(target, target).is_zero());
    assert!(TimeLeft::until(target, at(2026, 3, 2, 8, 0, 0)).is_zero());
}

#[test]
fn test_gallery_rotation_over_a_full_cycle() {
    let now = Instant::now();
    let mut gallery = Gallery::new(invitation::timeline_slides(), now);
    assert_eq!(gallery.len(), 4);

    let mut seen = Vec::new();
    for _ in 0..8 {
        seen.push(gallery.active_index());
        gallery.advance(now);
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 0, 1, 2, 3]);
}

#[test]
fn test_every_slide_caption_resolves_in_hindi() {
    let mut config = Config::default();
    config.language = Some("hi".to_string());
    let i18n = I18n::new(None, &config);

    for slide in invitation::timeline_slides() {
        assert!(!i18n.tr(slide.caption_key).starts_with("MISSING:"));
    }
}
