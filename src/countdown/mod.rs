// SPDX-License-Identifier: MPL-2.0
//! Remaining-time decomposition for the countdown display.
//!
//! Once per second the application recomputes the whole tuple from the
//! target instant and the current wall clock; nothing is accumulated
//! between ticks, so a suspended or clock-adjusted machine self-corrects
//! on the next tick.

use chrono::NaiveDateTime;
use std::fmt;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Time remaining until the target instant, decomposed into calendar units.
///
/// Invariants hold by construction: `hours < 24`, `minutes < 60`,
/// `seconds < 60`; `days` is unbounded. Once the target has passed, every
/// field is zero and stays zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// The all-zero tuple reported once the target instant has passed.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Computes the time left between `now` and `target`.
    ///
    /// A non-positive difference clamps to all-zero; there is no separate
    /// "event started" state.
    #[must_use]
    pub fn until(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let remaining = target.signed_duration_since(now).num_seconds();
        if remaining <= 0 {
            return Self::zero();
        }

        #[allow(clippy::cast_sign_loss)] // checked positive above
        let total = remaining as u64;
        Self {
            days: total / SECS_PER_DAY,
            hours: (total / SECS_PER_HOUR) % 24,
            minutes: (total / SECS_PER_MINUTE) % 60,
            seconds: total % 60,
        }
    }

    /// Returns true once the target instant has been reached or passed.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .expect("valid date")
            .and_hms_opt(h, mi, s)
            .expect("valid time")
    }

    #[test]
    fn half_day_before_target() {
        let target = at(2026, 3, 1, 0, 0, 0);
        let now = at(2026, 2, 28, 12, 0, 0);
        assert_eq!(
            TimeLeft::until(target, now),
            TimeLeft {
                days: 0,
                hours: 12,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn exactly_at_target_reports_zero() {
        let target = at(2026, 3, 1, 0, 0, 0);
        assert_eq!(TimeLeft::until(target, target), TimeLeft::zero());
    }

    #[test]
    fn after_target_stays_zero() {
        let target = at(2026, 3, 1, 0, 0, 0);
        let later = at(2026, 7, 14, 9, 30, 0);
        let time_left = TimeLeft::until(target, later);
        assert!(time_left.is_zero());
    }

    #[test]
    fn one_second_before_target() {
        let target = at(2026, 3, 1, 0, 0, 0);
        let now = at(2026, 2, 28, 23, 59, 59);
        assert_eq!(
            TimeLeft::until(target, now),
            TimeLeft {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1
            }
        );
    }

    #[test]
    fn fields_stay_inside_natural_bounds() {
        let target = at(2026, 3, 1, 0, 0, 0);
        // A scatter of instants before the target, including awkward offsets.
        let samples = [
            at(2025, 12, 31, 23, 59, 59),
            at(2026, 1, 15, 6, 30, 45),
            at(2026, 2, 27, 0, 0, 1),
            at(2026, 2, 28, 18, 42, 7),
        ];
        for now in samples {
            let time_left = TimeLeft::until(target, now);
            assert!(time_left.hours < 24, "hours out of range for {now}");
            assert!(time_left.minutes < 60, "minutes out of range for {now}");
            assert!(time_left.seconds < 60, "seconds out of range for {now}");

            let total_secs = target.signed_duration_since(now).num_seconds() as u64;
            assert_eq!(time_left.days, (total_secs / 3600) / 24);
        }
    }

    #[test]
    fn display_pads_clock_fields() {
        let target = at(2026, 3, 1, 0, 0, 0);
        let now = at(2026, 2, 28, 19, 55, 58);
        assert_eq!(format!("{}", TimeLeft::until(target, now)), "0d 04:04:02");
    }
}
