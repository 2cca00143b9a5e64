// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Approximate point equality.
//!
//! Two points coincide when every coordinate differs by at most the tolerance.
//! This is an axis-aligned box test, not a radius: a point offset by the full
//! tolerance on two axes at once still coincides, even though its Euclidean
//! distance exceeds the tolerance.

use nalgebra::Point3;

use crate::error::{Error, Result};

/// Default coincidence tolerance, in model units.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Maximum per-axis absolute difference under which two points coincide.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a tolerance, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidTolerance(value))
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}

impl std::fmt::Display for Tolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns true if `a` and `b` are within `tol` of each other on every axis.
///
/// The boundary is inclusive. Any NaN coordinate makes the points distinct.
#[inline]
pub fn points_coincide(a: &Point3<f64>, b: &Point3<f64>, tol: Tolerance) -> bool {
    let t = tol.value();
    (a.x - b.x).abs() <= t && (a.y - b.y).abs() <= t && (a.z - b.z).abs() <= t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_coincide_at_zero_tolerance() {
        let p = Point3::new(1.5, -2.0, 3.25);
        assert!(points_coincide(&p, &p, Tolerance::new(0.0).unwrap()));
    }

    #[test]
    fn boundary_is_inclusive() {
        let tol = Tolerance::new(0.25).unwrap();
        let a = Point3::new(1.0, 1.0, 1.0);
        let b = Point3::new(1.25, 0.75, 1.25);
        assert!(points_coincide(&a, &b, tol));
    }

    #[test]
    fn just_past_boundary_on_any_axis_is_distinct() {
        let tol = Tolerance::new(0.25).unwrap();
        let a = Point3::new(1.0, 1.0, 1.0);
        for axis in 0..3 {
            let mut b = Point3::new(1.25, 1.25, 1.25);
            b[axis] += 1e-7;
            assert!(!points_coincide(&a, &b, tol), "axis {axis}");

            let mut c = Point3::new(0.75, 0.75, 0.75);
            c[axis] -= 1e-7;
            assert!(!points_coincide(&a, &c, tol), "axis {axis}, negative side");
        }
    }

    #[test]
    fn diagonal_offset_uses_box_not_radius() {
        // Euclidean distance is 0.25 * sqrt(3), yet every axis is within 0.25.
        let tol = Tolerance::new(0.25).unwrap();
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.25, 0.25, 0.25);
        assert!((b - a).norm() > tol.value());
        assert!(points_coincide(&a, &b, tol));
    }

    #[test]
    fn nan_never_coincides() {
        let a = Point3::new(f64::NAN, 0.0, 0.0);
        assert!(!points_coincide(&a, &a, Tolerance::new(1.0).unwrap()));
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert!(Tolerance::new(-1e-6).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(f64::INFINITY).is_err());
        assert_eq!(Tolerance::default().value(), DEFAULT_TOLERANCE);
    }
}
