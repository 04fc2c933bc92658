// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Precise Hit: pick-ray vs. polyline nearest-point queries.
//!
//! These types are intentionally small building blocks rather than a full
//! picking model. Widget representations are expected to form the pick ray
//! and the world-space tolerance themselves (typically from the current
//! camera and viewport via `waymark_view3d`) and compose their own component
//! dispatch on top of these primitives.
//!
//! The central query is [`find_closest_on_polyline`]: given a pick segment
//! from the near plane to the far plane and the ordered world-space points of
//! a curve, it returns the closest point on the curve within tolerance along
//! with the index where a new point would be inserted.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use waymark_precise_hit::{Ray3, find_closest_on_polyline};
//!
//! let points = [
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(10.0, 0.0, 0.0),
//!     DVec3::new(10.0, 10.0, 0.0),
//! ];
//! // A ray passing straight through the midpoint of the first segment.
//! let ray = Ray3::new(DVec3::new(5.0, 0.0, 10.0), DVec3::new(5.0, 0.0, -10.0));
//!
//! let hit = find_closest_on_polyline(ray, &points, false, 0.25).unwrap();
//! assert_eq!(hit.insertion_index, 1);
//! assert!((hit.closest_world - DVec3::new(5.0, 0.0, 0.0)).length() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod segment;

pub use segment::{SegmentNearest, point_to_line_distance_sq, segment_nearest};

use glam::DVec3;

/// A finite picking segment in world space, from the near plane to the far
/// plane under the clicked pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray3 {
    /// Ray start, on the near clipping plane.
    pub origin: DVec3,
    /// Ray end, on the far clipping plane.
    pub end: DVec3,
}

impl Ray3 {
    /// Creates a pick ray from its near and far endpoints.
    #[must_use]
    pub const fn new(origin: DVec3, end: DVec3) -> Self {
        Self { origin, end }
    }
}

/// Result of a successful polyline hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTestResult {
    /// The closest point on the polyline to the pick ray, in world space.
    pub closest_world: DVec3,
    /// Index at which a new control point would be inserted: one past the
    /// matched segment's start point, `0` for the closing wrap segment.
    pub insertion_index: usize,
    /// Squared world-space distance between the ray and the polyline.
    pub distance_sq: f64,
}

/// Finds the closest point on a polyline to a pick ray, within a world-space
/// tolerance.
///
/// Consecutive point pairs form the candidate segments; when `closed`, the
/// wrap segment from the last point back to the first is included and maps to
/// insertion index `0`. For each segment the minimum-distance point pair
/// between the ray and the segment is computed: skew configurations use the
/// closed-form two-line solution, parallel or degenerate configurations fall
/// back to the distance from each segment endpoint to the ray's line.
///
/// The globally closest candidate below `tolerance_sq` wins under strict `<`
/// comparison, so an exact tie keeps the first segment encountered in
/// iteration order. Returns `None` when no segment comes within tolerance;
/// callers treat that as "append at end" or "no insertion", not as an error.
#[must_use]
pub fn find_closest_on_polyline(
    ray: Ray3,
    points: &[DVec3],
    closed: bool,
    tolerance_sq: f64,
) -> Option<HitTestResult> {
    let n = points.len();
    if n < 2 {
        return None;
    }

    let mut best: Option<HitTestResult> = None;
    let segment_count = if closed { n } else { n - 1 };

    for i in 0..segment_count {
        let a = points[i];
        let b = points[(i + 1) % n];
        let insertion_index = if i + 1 < n { i + 1 } else { 0 };

        let mut consider = |closest_world: DVec3, distance_sq: f64| {
            let below_best = best.is_none_or(|hit| distance_sq < hit.distance_sq);
            if distance_sq < tolerance_sq && below_best {
                best = Some(HitTestResult {
                    closest_world,
                    insertion_index,
                    distance_sq,
                });
            }
        };

        match segment_nearest(ray.origin, ray.end, a, b) {
            Some(nearest) => {
                consider(nearest.point_on_b, nearest.distance_sq);
            }
            None => {
                // Parallel or degenerate: score both endpoints against the
                // ray's infinite line.
                consider(a, point_to_line_distance_sq(a, ray.origin, ray.end));
                consider(b, point_to_line_distance_sq(b, ray.origin, ray.end));
            }
        }
    }

    best
}
