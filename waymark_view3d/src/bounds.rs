// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::DVec3;

/// Axis-aligned bounding box in world space.
///
/// A freshly constructed [`Bounds3::EMPTY`] is *uninitialized*: its minimum
/// corner is above its maximum corner, so it contains nothing and reports as
/// invalid. Uninitialized or otherwise degenerate bounds fall back to a unit
/// diagonal length so that motion step sizes derived from the diagonal never
/// collapse to zero or NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Bounds3 {
    /// The uninitialized bounds, containing no points.
    pub const EMPTY: Self = Self {
        min: DVec3::splat(f64::INFINITY),
        max: DVec3::splat(f64::NEG_INFINITY),
    };

    /// Creates bounds from two opposite corners.
    ///
    /// The corners are normalized so that `min` is componentwise below `max`.
    #[must_use]
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns `true` when the bounds have been initialized with at least one
    /// point and contain no non-finite coordinates.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.z <= self.max.z
    }

    /// Expands the bounds to contain `point`.
    pub fn add_point(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Expands the bounds to contain `other`.
    pub fn union(&mut self, other: Self) {
        if other.is_valid() {
            self.min = self.min.min(other.min);
            self.max = self.max.max(other.max);
        }
    }

    /// Length of the diagonal between the two corners.
    ///
    /// Invalid bounds yield `1.0` so that speed computations stay finite.
    #[must_use]
    pub fn diagonal_length(&self) -> f64 {
        if !self.is_valid() {
            return 1.0;
        }
        (self.max - self.min).length()
    }

    /// The center of the bounds.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// The eight corners of the box.
    #[must_use]
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bounds_are_invalid_with_unit_diagonal() {
        let bounds = Bounds3::EMPTY;
        assert!(!bounds.is_valid());
        assert_eq!(bounds.diagonal_length(), 1.0);
    }

    #[test]
    fn add_point_initializes_and_grows() {
        let mut bounds = Bounds3::EMPTY;
        bounds.add_point(DVec3::new(1.0, 2.0, 3.0));
        assert!(bounds.is_valid());
        assert_eq!(bounds.diagonal_length(), 0.0);

        bounds.add_point(DVec3::new(4.0, 6.0, 3.0));
        assert_eq!(bounds.min, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.max, DVec3::new(4.0, 6.0, 3.0));
        assert!((bounds.diagonal_length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn new_normalizes_corner_order() {
        let bounds = Bounds3::new(DVec3::new(5.0, -1.0, 2.0), DVec3::new(-5.0, 1.0, 0.0));
        assert_eq!(bounds.min, DVec3::new(-5.0, -1.0, 0.0));
        assert_eq!(bounds.max, DVec3::new(5.0, 1.0, 2.0));
    }

    #[test]
    fn union_ignores_invalid_other() {
        let mut bounds = Bounds3::new(DVec3::ZERO, DVec3::ONE);
        bounds.union(Bounds3::EMPTY);
        assert_eq!(bounds, Bounds3::new(DVec3::ZERO, DVec3::ONE));

        bounds.union(Bounds3::new(DVec3::splat(2.0), DVec3::splat(3.0)));
        assert_eq!(bounds.max, DVec3::splat(3.0));
    }
}
