// SPDX-License-Identifier: MPL-2.0
//! `iced_invite` is a first-birthday invitation built with the Iced GUI framework.
//!
//! It renders a countdown to the celebration, an auto-advancing photo
//! gallery, background music with a manual toggle, and a celebratory
//! confetti burst, and demonstrates internationalization with Fluent
//! (English and Hindi), user preference management, and modular UI design.

pub mod app;
pub mod audio;
pub mod config;
pub mod countdown;
pub mod decor;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod invitation;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
