// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure functions mapping a touch point to tilt parameters.
//!
//! The pipeline for one pointer sample is:
//!
//! ```text
//!   Point + Size ──► pressure() ──► TiltSample ──┬──► rotation_transform() ──► Transform3d
//!                                                └──► level_offset(level)   ──► Vec2
//! ```
//!
//! Directions use a Cartesian convention: `y_norm` is positive above the
//! container's center even though screen Y grows downward.

use core::f64::consts::PI;

use kurbo::{Point, Size, Vec2};

use crate::config::TiltConfig;
use crate::transform::Transform3d;

/// Tilt parameters derived from a single touch point.
///
/// `x_norm` and `y_norm` are the touch offset from the container center
/// divided by the half-width and half-height. They are **not** clamped: a
/// point outside the container yields magnitudes above 1. `pressure` is the
/// rotation angle in degrees and is always within `[0, maximum_pressure]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltSample {
    /// Normalized horizontal offset from center, positive to the right.
    pub x_norm: f64,
    /// Normalized vertical offset from center, positive upward.
    pub y_norm: f64,
    /// Rotation angle in degrees.
    pub pressure: f64,
}

impl TiltSample {
    /// The untilted sample.
    pub const REST: Self = Self {
        x_norm: 0.0,
        y_norm: 0.0,
        pressure: 0.0,
    };

    /// Returns the normalized direction as a vector.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Vec2 {
        Vec2::new(self.x_norm, self.y_norm)
    }

    /// Returns `true` if this sample produces no rotation and no offsets.
    #[inline]
    #[must_use]
    pub fn is_rest(&self) -> bool {
        self.pressure == 0.0 && self.x_norm == 0.0 && self.y_norm == 0.0
    }
}

/// Returns `true` if `size` can be used as a divisor.
#[inline]
#[must_use]
pub fn is_usable_size(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Computes the tilt sample for a touch at `point` in a container of `size`.
///
/// Pressure ramps linearly from 0 at the center to `maximum_pressure` at a
/// distance of `max(width, height)` and stays clamped beyond that.
///
/// A container with zero, negative, or non-finite dimensions has no center to
/// measure from; the result is [`TiltSample::REST`].
#[must_use]
pub fn pressure(point: Point, size: Size, config: &TiltConfig) -> TiltSample {
    if !is_usable_size(size) {
        return TiltSample::REST;
    }
    let half_w = size.width / 2.0;
    let half_h = size.height / 2.0;

    let dx = point.x - half_w;
    let dy = -(point.y - half_h);

    let dist = Vec2::new(dx, dy).hypot();
    let max_p = config.maximum_pressure;
    let pressure = (max_p * dist / size.width.max(size.height)).min(max_p);

    TiltSample {
        x_norm: dx / half_w,
        y_norm: dy / half_h,
        pressure,
    }
}

/// Builds the container transform for `sample`.
///
/// The result is `perspective * rotation * scale`: a rotation of
/// `sample.pressure` degrees about the axis `(y_norm, x_norm, 0)`,
/// perpendicular to the touch direction, then a uniform X/Y shrink to
/// `config.rest_scale`, all viewed through a perspective with
/// `m34 = -1 / config.perspective_distance`.
#[must_use]
pub fn rotation_transform(sample: &TiltSample, config: &TiltConfig) -> Transform3d {
    tilt_transform(sample, config, 1.0)
}

/// Builds the container transform for `sample` at partial `strength`.
///
/// `strength` runs from 0 (identity) to 1 (identical to
/// [`rotation_transform`]). The angle, the perspective term, and the shrink
/// all scale together, which is what the settle animation interpolates.
#[must_use]
pub fn tilt_transform(sample: &TiltSample, config: &TiltConfig, strength: f64) -> Transform3d {
    if strength <= 0.0 {
        return Transform3d::IDENTITY;
    }
    let mut perspective = Transform3d::IDENTITY;
    perspective.cols[2][3] = -strength / config.perspective_distance;

    let radians = sample.pressure * strength * (PI / 180.0);
    let rotation = Transform3d::from_axis_angle(sample.y_norm, sample.x_norm, 0.0, radians);

    let s = 1.0 - (1.0 - config.rest_scale) * strength;
    perspective * rotation * Transform3d::from_scale(s, s, 1.0)
}

/// Computes the 2D translation for views at `level`.
///
/// The offset grows linearly with the level index and with the distance from
/// center. Level 0 never moves.
#[must_use]
pub fn level_offset(level: u32, sample: &TiltSample, size: Size, config: &TiltConfig) -> Vec2 {
    let depth = f64::from(level) * config.level_weight;
    Vec2::new(
        sample.x_norm * size.width / 2.0 * depth,
        -sample.y_norm * size.height / 2.0 * depth,
    )
}
