// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased return to rest after the pointer lifts.
//!
//! A [`SettleTransition`] remembers the last applied [`TiltSample`] and maps
//! host time to a *strength* that falls from 1 to 0 over the configured
//! duration. The container feeds that strength into
//! [`tilt_transform`](crate::tilt::tilt_transform) and scales the level
//! offsets by it. A new pointer-down simply drops the transition.

use core::time::Duration;

use crate::tilt::TiltSample;
use crate::time::HostTime;

/// Timing curve applied to linear progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic Bézier `(0.42, 0, 1, 1)`.
    EaseIn,
    /// Cubic Bézier `(0, 0, 0.58, 1)`.
    EaseOut,
    /// Cubic Bézier `(0.42, 0, 0.58, 1)`, the usual UI default.
    #[default]
    EaseInOut,
    /// A CSS-style cubic Bézier through `(0, 0)`, `(x1, y1)`, `(x2, y2)`,
    /// `(1, 1)`. `x1` and `x2` should lie in `[0, 1]`.
    CubicBezier {
        /// First control point X.
        x1: f64,
        /// First control point Y.
        y1: f64,
        /// Second control point X.
        x2: f64,
        /// Second control point Y.
        y2: f64,
    },
}

impl Easing {
    /// Maps linear progress `t` to eased progress.
    ///
    /// Input is clamped to `[0, 1]`; both endpoints map to themselves.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::EaseIn => solve_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => solve_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => solve_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => solve_bezier(x1, y1, x2, y2, t),
        }
    }
}

#[inline]
fn bezier(t: f64, a: f64, b: f64) -> f64 {
    let omt = 1.0 - t;
    3.0 * omt * omt * t * a + 3.0 * omt * t * t * b + t * t * t
}

#[inline]
fn bezier_slope(t: f64, a: f64, b: f64) -> f64 {
    let omt = 1.0 - t;
    3.0 * omt * omt * a + 6.0 * omt * t * (b - a) + 3.0 * t * t * (1.0 - b)
}

/// Finds `y` at the curve parameter whose `x` equals `x`.
fn solve_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    const EPS: f64 = 1e-7;
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    let mut t = x;
    for _ in 0..8 {
        let err = bezier(t, x1, x2) - x;
        if err.abs() < EPS {
            return bezier(t, y1, y2);
        }
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }

    // Newton stalled on a flat segment; bisect instead.
    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..48 {
        let bx = bezier(t, x1, x2);
        if (bx - x).abs() < EPS {
            break;
        }
        if bx < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier(t, y1, y2)
}

/// An in-flight return to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleTransition {
    from: TiltSample,
    start: HostTime,
    duration: Duration,
    easing: Easing,
}

impl SettleTransition {
    /// Starts settling from `from` at time `start`.
    #[must_use]
    pub const fn new(from: TiltSample, start: HostTime, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            start,
            duration,
            easing,
        }
    }

    /// The sample that was applied when the transition began.
    #[must_use]
    pub const fn origin(&self) -> TiltSample {
        self.from
    }

    /// When the transition began.
    #[must_use]
    pub const fn start(&self) -> HostTime {
        self.start
    }

    /// Linear progress in `[0, 1]` at `now`.
    ///
    /// A zero duration is complete immediately. Times before `start` count
    /// as zero progress.
    #[must_use]
    pub fn progress(&self, now: HostTime) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Tilt strength at `now`: 1 at the start, 0 once finished.
    #[must_use]
    pub fn strength(&self, now: HostTime) -> f64 {
        1.0 - self.easing.evaluate(self.progress(now))
    }

    /// Returns `true` once `now` is at or past the end of the transition.
    #[must_use]
    pub fn is_finished(&self, now: HostTime) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn sample() -> TiltSample {
        TiltSample {
            x_norm: 0.5,
            y_norm: 0.5,
            pressure: 2.0,
        }
    }

    #[test]
    fn easing_endpoints() {
        for e in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier {
                x1: 0.25,
                y1: 0.1,
                x2: 0.25,
                y2: 1.0,
            },
        ] {
            assert_eq!(e.evaluate(0.0), 0.0, "{e:?}");
            assert_eq!(e.evaluate(1.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(Easing::Linear.evaluate(-0.5), 0.0);
        assert_eq!(Easing::EaseInOut.evaluate(1.5), 1.0);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let e = Easing::EaseInOut;
        assert!((e.evaluate(0.5) - 0.5).abs() < EPS);
        for t in [0.1, 0.2, 0.3, 0.4] {
            let a = e.evaluate(t);
            let b = e.evaluate(1.0 - t);
            assert!((a + b - 1.0).abs() < EPS, "t={t}: {a} + {b}");
            // Slow start.
            assert!(a < t, "t={t}: {a}");
        }
    }

    #[test]
    fn ease_out_leads_ease_in() {
        assert!(Easing::EaseOut.evaluate(0.25) > 0.25);
        assert!(Easing::EaseIn.evaluate(0.25) < 0.25);
    }

    #[test]
    fn easing_is_monotonic() {
        let e = Easing::EaseInOut;
        let mut last = 0.0;
        for i in 0..=200 {
            let v = e.evaluate(f64::from(i) / 200.0);
            assert!(v >= last - EPS, "step {i}: {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn strength_falls_from_one_to_zero() {
        let tr = SettleTransition::new(
            sample(),
            HostTime(1_000),
            Duration::from_millis(320),
            Easing::EaseInOut,
        );
        assert_eq!(tr.origin(), sample());
        assert_eq!(tr.start(), HostTime(1_000));
        assert_eq!(tr.strength(HostTime(1_000)), 1.0);
        assert_eq!(tr.strength(HostTime(0)), 1.0);

        let mid = HostTime(1_000) + Duration::from_millis(160);
        assert!((tr.progress(mid) - 0.5).abs() < EPS);
        assert!((tr.strength(mid) - 0.5).abs() < EPS);
        assert!(!tr.is_finished(mid));

        let end = HostTime(1_000) + Duration::from_millis(320);
        assert_eq!(tr.strength(end), 0.0);
        assert!(tr.is_finished(end));
        assert!(tr.is_finished(end + Duration::from_secs(5)));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let tr = SettleTransition::new(sample(), HostTime(50), Duration::ZERO, Easing::Linear);
        assert!(tr.is_finished(HostTime(50)));
        assert_eq!(tr.strength(HostTime(50)), 0.0);
    }
}
