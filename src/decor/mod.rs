// SPDX-License-Identifier: MPL-2.0
//! Decorative animation state: drifting backdrop hearts and the one-shot
//! startup confetti burst.
//!
//! Everything in here is cosmetic. The models are pure parameter sets plus
//! elapsed-time math; actual drawing lives in `ui::widgets`. Parameters are
//! randomized per run with no seed, there is no reproducibility requirement.

use crate::config::{
    CONFETTI_DURATION_SECS, CONFETTI_PARTICLE_COUNT, HEART_COUNT, HEART_MAX_DRIFT_SECS,
    HEART_MIN_DRIFT_SECS,
};
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Instant;

/// Parameters of one backdrop heart: where it rises and how slowly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartSeed {
    /// Horizontal start position as a fraction of the width, in [0, 1].
    pub x_frac: f32,
    /// Seconds for one full bottom-to-top pass.
    pub drift_secs: f32,
    /// Initial offset into the loop, in [0, 1), so the hearts do not rise
    /// as a single wall on startup.
    pub phase: f32,
}

impl HeartSeed {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            x_frac: rng.gen_range(0.0..1.0),
            drift_secs: rng.gen_range(HEART_MIN_DRIFT_SECS..=HEART_MAX_DRIFT_SECS),
            phase: rng.gen_range(0.0..1.0),
        }
    }

    /// Loop progress in [0, 1): 0 is just below the bottom edge, 1 is just
    /// above the top edge, wrapping indefinitely.
    #[must_use]
    pub fn progress(&self, elapsed_secs: f32) -> f32 {
        (elapsed_secs / self.drift_secs + self.phase).fract()
    }

    /// Rotation angle in radians; one full turn per pass.
    #[must_use]
    pub fn rotation(&self, elapsed_secs: f32) -> f32 {
        self.progress(elapsed_secs) * TAU
    }
}

/// The fixed set of backdrop hearts, scattered once at startup.
#[derive(Debug, Clone)]
pub struct HeartField {
    seeds: Vec<HeartSeed>,
    started: Instant,
}

impl HeartField {
    /// Scatters the configured number of hearts with fresh random parameters.
    #[must_use]
    pub fn scatter(now: Instant) -> Self {
        let mut rng = rand::thread_rng();
        let seeds = (0..HEART_COUNT)
            .map(|_| HeartSeed::random(&mut rng))
            .collect();
        Self {
            seeds,
            started: now,
        }
    }

    #[must_use]
    pub fn seeds(&self) -> &[HeartSeed] {
        &self.seeds
    }

    /// Seconds since the field came to life; drives every heart's progress.
    #[must_use]
    pub fn elapsed_secs(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started).as_secs_f32()
    }
}

/// Parameters of one confetti particle, launched radially from the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiSeed {
    /// Launch direction in radians.
    pub angle: f32,
    /// Radial speed in relative units (half-widths) per second.
    pub speed: f32,
    /// Particle edge length as a fraction of the shorter window side.
    pub size: f32,
    /// Pick within the festive color cycle; the widget wraps it modulo the
    /// palette length.
    pub color_index: usize,
    /// Spin in radians per second.
    pub spin: f32,
}

impl ConfettiSeed {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            angle: rng.gen_range(0.0..TAU),
            speed: rng.gen_range(0.15..0.8),
            size: rng.gen_range(0.004..0.012),
            color_index: rng.gen_range(0..64),
            spin: rng.gen_range(-TAU..TAU),
        }
    }
}

/// The one-shot startup burst. Fires once, runs for a fixed duration, and
/// is never re-triggered; the app drops it once finished.
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    started: Instant,
    seeds: Vec<ConfettiSeed>,
}

impl ConfettiBurst {
    /// Launches a fresh burst at `now`.
    #[must_use]
    pub fn ignite(now: Instant) -> Self {
        let mut rng = rand::thread_rng();
        let seeds = (0..CONFETTI_PARTICLE_COUNT)
            .map(|_| ConfettiSeed::random(&mut rng))
            .collect();
        Self {
            started: now,
            seeds,
        }
    }

    #[must_use]
    pub fn seeds(&self) -> &[ConfettiSeed] {
        &self.seeds
    }

    /// Burst lifetime fraction in [0, 1]; 1 means spent.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / CONFETTI_DURATION_SECS).clamp(0.0, 1.0)
    }

    /// True once the fixed burst duration has fully elapsed.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn scatter_produces_the_configured_heart_count() {
        let field = HeartField::scatter(Instant::now());
        assert_eq!(field.seeds().len(), HEART_COUNT);
    }

    #[test]
    fn heart_parameters_stay_inside_bounds() {
        let field = HeartField::scatter(Instant::now());
        for seed in field.seeds() {
            assert!((0.0..1.0).contains(&seed.x_frac));
            assert!(seed.drift_secs >= HEART_MIN_DRIFT_SECS);
            assert!(seed.drift_secs <= HEART_MAX_DRIFT_SECS);
            assert!((0.0..1.0).contains(&seed.phase));
        }
    }

    #[test]
    fn heart_progress_wraps_into_unit_range() {
        let seed = HeartSeed {
            x_frac: 0.5,
            drift_secs: 20.0,
            phase: 0.75,
        };
        for elapsed in [0.0_f32, 5.0, 20.0, 63.0, 1000.0] {
            let progress = seed.progress(elapsed);
            assert!((0.0..1.0).contains(&progress), "progress {progress} for {elapsed}");
        }
    }

    #[test]
    fn burst_progress_is_clamped() {
        let start = Instant::now();
        let burst = ConfettiBurst::ignite(start);
        assert_eq!(burst.progress(start), 0.0);

        let long_after = start + Duration::from_secs(60);
        assert_eq!(burst.progress(long_after), 1.0);
    }

    #[test]
    fn burst_finishes_exactly_after_its_fixed_duration() {
        let start = Instant::now();
        let burst = ConfettiBurst::ignite(start);

        let just_before = start + Duration::from_secs_f32(CONFETTI_DURATION_SECS * 0.9);
        assert!(!burst.is_finished(just_before));

        let after = start + Duration::from_secs_f32(CONFETTI_DURATION_SECS + 0.1);
        assert!(burst.is_finished(after));
    }

    #[test]
    fn burst_carries_the_configured_particle_count() {
        let burst = ConfettiBurst::ignite(Instant::now());
        assert_eq!(burst.seeds().len(), CONFETTI_PARTICLE_COUNT);
    }
}
