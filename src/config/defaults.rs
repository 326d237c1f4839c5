// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timers**: Countdown, gallery, and animation tick periods
//! - **Volume**: Music playback volume settings
//! - **Hearts**: Floating heart count and drift bounds
//! - **Confetti**: Startup burst particle count and lifetime

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Period of the countdown recomputation tick (in seconds).
pub const COUNTDOWN_TICK_SECS: u64 = 1;

/// Period of the gallery auto-advance tick (in seconds).
pub const GALLERY_TICK_SECS: u64 = 4;

/// Period of the animation redraw tick (in milliseconds).
/// Drives the slide progress bar, the floating hearts, and the confetti.
pub const ANIMATION_TICK_MILLIS: u64 = 100;

/// Duration of the slide entry fade/scale effect (in milliseconds).
pub const SLIDE_FADE_MILLIS: u64 = 800;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default music playback volume (0.0 to 1.0). Deliberately moderate so the
/// music stays in the background.
pub const DEFAULT_VOLUME: f32 = 0.3;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step (5%).
pub const VOLUME_STEP: f32 = 0.05;

// ==========================================================================
// Floating Heart Defaults
// ==========================================================================

/// Number of ambient hearts drifting across the backdrop.
pub const HEART_COUNT: usize = 8;

/// Shortest allowed drift duration for one bottom-to-top pass (in seconds).
pub const HEART_MIN_DRIFT_SECS: f32 = 20.0;

/// Longest allowed drift duration for one bottom-to-top pass (in seconds).
pub const HEART_MAX_DRIFT_SECS: f32 = 40.0;

// ==========================================================================
// Confetti Defaults
// ==========================================================================

/// Number of particles in the startup confetti burst.
pub const CONFETTI_PARTICLE_COUNT: usize = 250;

/// Lifetime of the startup confetti burst (in seconds). The burst fires
/// once and is never re-triggered.
pub const CONFETTI_DURATION_SECS: f32 = 3.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Timer validation
    assert!(COUNTDOWN_TICK_SECS > 0);
    assert!(GALLERY_TICK_SECS > 0);
    assert!(ANIMATION_TICK_MILLIS > 0);
    assert!(SLIDE_FADE_MILLIS > 0);
    assert!(SLIDE_FADE_MILLIS < GALLERY_TICK_SECS * 1000);

    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);

    // Heart validation
    assert!(HEART_COUNT > 0);
    assert!(HEART_MIN_DRIFT_SECS > 0.0);
    assert!(HEART_MAX_DRIFT_SECS >= HEART_MIN_DRIFT_SECS);

    // Confetti validation
    assert!(CONFETTI_PARTICLE_COUNT > 0);
    assert!(CONFETTI_DURATION_SECS > 0.0);
};
