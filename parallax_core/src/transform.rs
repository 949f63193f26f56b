// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-major 4×4 transform used for the container tilt.
//!
//! Only the handful of constructors the tilt needs are provided: identity,
//! scale, perspective, and rotation about an arbitrary axis. Composition uses
//! the column-vector convention, so `a * b` applies `b` first.

use core::ops::Mul;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A column-major 4×4 transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix. The memory layout matches
/// Core Animation's `CATransform3D` (`m11..m14` is `cols[0]`), so a presenter
/// can hand the columns straight to a native layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Creates a non-uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            cols: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a perspective projection for an eye at `distance` along +Z.
    ///
    /// Only the `m34` term is set, to `-1 / distance`. A distance of
    /// `f64::INFINITY` yields the identity.
    #[inline]
    #[must_use]
    pub fn from_perspective(distance: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.cols[2][3] = -1.0 / distance;
        t
    }

    /// Creates a rotation around the Z axis (radians).
    #[inline]
    #[must_use]
    pub fn from_rotation_z(radians: f64) -> Self {
        Self::from_axis_angle(0.0, 0.0, 1.0, radians)
    }

    /// Creates a right-handed rotation of `radians` around the axis
    /// `(x, y, z)`.
    ///
    /// The axis does not need to be normalized. A zero-length axis has no
    /// direction and produces the identity.
    #[must_use]
    pub fn from_axis_angle(x: f64, y: f64, z: f64, radians: f64) -> Self {
        // Prescale by the largest component so squaring cannot overflow.
        let m = x.abs().max(y.abs()).max(z.abs());
        if m == 0.0 || !m.is_finite() {
            return Self::IDENTITY;
        }
        let (x, y, z) = (x / m, y / m, z / m);
        let len = (x * x + y * y + z * z).sqrt();
        let (x, y, z) = (x / len, y / len, z / len);
        let (s, c) = (radians.sin(), radians.cos());
        let t = 1.0 - c;
        Self {
            cols: [
                [t * x * x + c, t * x * y + z * s, t * x * z - y * s, 0.0],
                [t * x * y - z * s, t * y * y + c, t * y * z + x * s, 0.0],
                [t * x * z + y * s, t * y * z - x * s, t * z * z + c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Returns the perspective term (`m34` in Core Animation naming).
    #[inline]
    #[must_use]
    pub const fn perspective_term(&self) -> f64 {
        self.cols[2][3]
    }

    /// Is every element of this transform [finite]?
    ///
    /// [finite]: f64::is_finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }

    /// Returns `true` if every element differs from `other` by at most `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        for (j, col) in out.iter_mut().enumerate() {
            for (i, v) in col.iter_mut().enumerate() {
                *v = a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
            }
        }
        Self { cols: out }
    }
}
