// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! The invitation ships with English (`en-US`) and Hindi (`hi`) bundles; the
//! Hindi bundle carries the invitation copy exactly as the hosts wrote it.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation bundles
//! - Runtime language switching
//! - Fallback to `en-US` when no preference matches

pub mod fluent;
