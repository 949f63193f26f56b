// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time.
//!
//! [`HostTime`] is a point on the host's monotonic clock in nanoseconds. The
//! epoch is whatever the host chooses; only differences are meaningful.
//! Durations use [`core::time::Duration`].

use core::fmt;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A point in time in nanoseconds on a host monotonic clock.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Creates a host time from nanoseconds.
    #[inline]
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Creates a host time from fractional seconds, as reported by most UI
    /// toolkits' event timestamps. Negative values saturate to zero.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float-to-int casts saturate; sub-nanosecond precision is not needed"
    )]
    pub fn from_secs_f64(secs: f64) -> Self {
        Self((secs * 1e9) as u64)
    }

    /// Returns the raw nanosecond value.
    #[inline]
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }

    /// Checked addition of a duration.
    #[inline]
    #[must_use]
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        let nanos = u64::try_from(duration.as_nanos()).ok()?;
        self.0.checked_add(nanos).map(Self)
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result overflows.
    #[inline]
    fn add(self, rhs: Duration) -> Self {
        self.checked_add(rhs)
            .unwrap_or_else(|| panic!("overflow adding {rhs:?} to {self:?}"))
    }
}

impl Sub for HostTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        self.saturating_duration_since(rhs)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_secs_f64_converts_to_nanos() {
        assert_eq!(HostTime::from_secs_f64(1.5), HostTime(1_500_000_000));
        assert_eq!(HostTime::from_secs_f64(-2.0), HostTime(0));
    }

    #[test]
    fn duration_since_saturates() {
        let a = HostTime(100);
        let b = HostTime(250);
        assert_eq!(b.saturating_duration_since(a), Duration::from_nanos(150));
        assert_eq!(a.saturating_duration_since(b), Duration::ZERO);
        assert_eq!(b - a, Duration::from_nanos(150));
    }

    #[test]
    fn add_duration() {
        let t = HostTime(1_000) + Duration::from_micros(2);
        assert_eq!(t, HostTime(3_000));
        assert_eq!(HostTime(u64::MAX).checked_add(Duration::from_nanos(1)), None);
    }

    #[test]
    fn debug_format() {
        assert_eq!(alloc::format!("{:?}", HostTime(42)), "HostTime(42)");
    }
}
