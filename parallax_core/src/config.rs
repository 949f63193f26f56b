// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tilt configuration.
//!
//! [`TiltConfig`] is handed to the [`TiltContainer`](crate::container::TiltContainer)
//! at construction. All transform functions read their parameters from it
//! rather than from mutable container state.

use core::fmt;
use core::time::Duration;

use crate::settle::Easing;

/// Parameters that shape the tilt and its return to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Maximum rotation angle, in degrees, reached at (or beyond) the edge of
    /// the container.
    pub maximum_pressure: f64,
    /// Spacing between depth levels on the imaginary Z axis. Each level's
    /// offset is proportional to `level * level_weight`.
    pub level_weight: f64,
    /// Eye distance of the perspective projection; the transform's `m34`
    /// term is `-1 / perspective_distance`.
    pub perspective_distance: f64,
    /// Uniform X/Y scale applied while tilted.
    pub rest_scale: f64,
    /// Length of the eased return to rest after the pointer is released.
    pub reset_duration: Duration,
    /// Timing curve of the return to rest.
    pub reset_easing: Easing,
}

impl TiltConfig {
    /// The stock configuration: 6° maximum tilt, level weight 0.01,
    /// perspective at 500, 0.99 shrink, 320 ms ease-in-ease-out settle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            maximum_pressure: 6.0,
            level_weight: 0.01,
            perspective_distance: 500.0,
            rest_scale: 0.99,
            reset_duration: Duration::from_millis(320),
            reset_easing: Easing::EaseInOut,
        }
    }

    /// Returns a copy with a different maximum rotation angle (degrees).
    #[must_use]
    pub const fn with_maximum_pressure(mut self, degrees: f64) -> Self {
        self.maximum_pressure = degrees;
        self
    }

    /// Returns a copy with a different level weight.
    #[must_use]
    pub const fn with_level_weight(mut self, weight: f64) -> Self {
        self.level_weight = weight;
        self
    }

    /// Returns a copy with a different perspective eye distance.
    #[must_use]
    pub const fn with_perspective_distance(mut self, distance: f64) -> Self {
        self.perspective_distance = distance;
        self
    }

    /// Returns a copy with a different tilted scale.
    #[must_use]
    pub const fn with_rest_scale(mut self, scale: f64) -> Self {
        self.rest_scale = scale;
        self
    }

    /// Returns a copy with a different settle duration.
    #[must_use]
    pub const fn with_reset_duration(mut self, duration: Duration) -> Self {
        self.reset_duration = duration;
        self
    }

    /// Returns a copy with a different settle timing curve.
    #[must_use]
    pub const fn with_reset_easing(mut self, easing: Easing) -> Self {
        self.reset_easing = easing;
        self
    }

    /// Checks that every field is usable by the transform functions.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.maximum_pressure.is_finite() || self.maximum_pressure < 0.0 {
            return Err(ConfigError::MaximumPressure(self.maximum_pressure));
        }
        if !self.level_weight.is_finite() || self.level_weight < 0.0 {
            return Err(ConfigError::LevelWeight(self.level_weight));
        }
        if self.perspective_distance.is_nan() || self.perspective_distance <= 0.0 {
            return Err(ConfigError::PerspectiveDistance(self.perspective_distance));
        }
        if self.rest_scale.is_nan() || self.rest_scale <= 0.0 || self.rest_scale > 1.0 {
            return Err(ConfigError::RestScale(self.rest_scale));
        }
        Ok(())
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`TiltConfig`] field holds a value the engine cannot use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `maximum_pressure` is negative or not finite.
    MaximumPressure(f64),
    /// `level_weight` is negative or not finite.
    LevelWeight(f64),
    /// `perspective_distance` is not strictly positive.
    PerspectiveDistance(f64),
    /// `rest_scale` is outside `(0, 1]`.
    RestScale(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaximumPressure(v) => {
                write!(f, "maximum pressure must be finite and >= 0, got {v}")
            }
            Self::LevelWeight(v) => write!(f, "level weight must be finite and >= 0, got {v}"),
            Self::PerspectiveDistance(v) => {
                write!(f, "perspective distance must be > 0, got {v}")
            }
            Self::RestScale(v) => write!(f, "rest scale must be in (0, 1], got {v}"),
        }
    }
}

impl core::error::Error for ConfigError {}
