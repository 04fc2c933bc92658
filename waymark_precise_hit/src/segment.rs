// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closest-point math between line segments.

use glam::DVec3;

/// Closest point pair between two finite segments in the skew case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentNearest {
    /// Closest point on the first segment.
    pub point_on_a: DVec3,
    /// Closest point on the second segment.
    pub point_on_b: DVec3,
    /// Squared distance between the two points.
    pub distance_sq: f64,
}

/// Computes the closest point pair between segments `a1..a2` and `b1..b2`.
///
/// Uses the closed-form two-line nearest-point solution with both parameters
/// clamped to the segments. Returns `None` when the segments are parallel or
/// one of them is degenerate; callers fall back to endpoint distances (see
/// [`point_to_line_distance_sq`]).
#[must_use]
pub fn segment_nearest(a1: DVec3, a2: DVec3, b1: DVec3, b2: DVec3) -> Option<SegmentNearest> {
    let da = a2 - a1;
    let db = b2 - b1;
    let r = a1 - b1;

    let aa = da.dot(da);
    let bb = da.dot(db);
    let cc = db.dot(db);
    let dd = da.dot(r);
    let ee = db.dot(r);

    // Always non-negative by Cauchy-Schwarz; near zero means parallel or
    // degenerate.
    let denom = aa * cc - bb * bb;
    if denom <= f64::EPSILON * aa * cc || aa <= 0.0 || cc <= 0.0 {
        return None;
    }

    let s = ((bb * ee - cc * dd) / denom).clamp(0.0, 1.0);
    let t = ((aa * ee - bb * dd) / denom).clamp(0.0, 1.0);

    let point_on_a = a1 + da * s;
    let point_on_b = b1 + db * t;
    Some(SegmentNearest {
        point_on_a,
        point_on_b,
        distance_sq: point_on_a.distance_squared(point_on_b),
    })
}

/// Squared distance from `point` to the infinite line through `l1` and `l2`.
///
/// A degenerate line (coincident endpoints) reduces to the squared distance
/// to `l1`.
#[must_use]
pub fn point_to_line_distance_sq(point: DVec3, l1: DVec3, l2: DVec3) -> f64 {
    let dir = l2 - l1;
    let len_sq = dir.dot(dir);
    if len_sq <= 0.0 {
        return point.distance_squared(l1);
    }
    let offset = point - l1;
    offset.cross(dir).length_squared() / len_sq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skew_segments_closest_points() {
        // Segment along x at z=0; segment along y at z=2 crossing above x=5.
        let nearest = segment_nearest(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(5.0, -5.0, 2.0),
            DVec3::new(5.0, 5.0, 2.0),
        )
        .unwrap();
        assert!((nearest.point_on_a - DVec3::new(5.0, 0.0, 0.0)).length() < 1e-9);
        assert!((nearest.point_on_b - DVec3::new(5.0, 0.0, 2.0)).length() < 1e-9);
        assert!((nearest.distance_sq - 4.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_to_segment_extents() {
        // Closest approach of the infinite lines lies past the end of the
        // second segment; the clamped answer sits at its endpoint.
        let nearest = segment_nearest(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(20.0, -1.0, 1.0),
            DVec3::new(20.0, 1.0, 1.0),
        )
        .unwrap();
        assert!((nearest.point_on_a - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn parallel_segments_return_none() {
        assert!(
            segment_nearest(
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(10.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
                DVec3::new(10.0, 1.0, 0.0),
            )
            .is_none()
        );
    }

    #[test]
    fn degenerate_segment_returns_none() {
        assert!(
            segment_nearest(
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(10.0, 0.0, 0.0),
                DVec3::new(3.0, 1.0, 0.0),
                DVec3::new(3.0, 1.0, 0.0),
            )
            .is_none()
        );
    }

    #[test]
    fn point_to_line_distance_basics() {
        let d = point_to_line_distance_sq(
            DVec3::new(5.0, 3.0, 0.0),
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
        );
        assert!((d - 9.0).abs() < 1e-12);

        // Degenerate line falls back to point distance.
        let d = point_to_line_distance_sq(DVec3::new(3.0, 4.0, 0.0), DVec3::ZERO, DVec3::ZERO);
        assert!((d - 25.0).abs() < 1e-12);
    }
}
