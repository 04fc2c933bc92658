// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::{DMat4, DQuat, DVec3};

/// A perspective camera described by a position, a focal point, and a view-up
/// vector.
///
/// Rotations follow flight semantics: yaw and pitch rotate the *focal point*
/// about the camera position (the camera turns in place), and roll rotates the
/// view-up vector about the direction of projection. Angles are in degrees,
/// positive following the right-hand rule about the respective axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera3 {
    position: DVec3,
    focal_point: DVec3,
    view_up: DVec3,
    view_angle_deg: f64,
    clipping_range: (f64, f64),
}

impl Camera3 {
    /// Creates a camera at `(0, 0, 1)` looking at the origin with y up.
    ///
    /// The vertical view angle defaults to 30 degrees and the clipping range
    /// to `(0.01, 1000.0)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 1.0),
            focal_point: DVec3::ZERO,
            view_up: DVec3::new(0.0, 1.0, 0.0),
            view_angle_deg: 30.0,
            clipping_range: (0.01, 1000.0),
        }
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Sets the camera position.
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// The point the camera looks at.
    #[must_use]
    pub fn focal_point(&self) -> DVec3 {
        self.focal_point
    }

    /// Sets the focal point.
    pub fn set_focal_point(&mut self, focal_point: DVec3) {
        self.focal_point = focal_point;
    }

    /// The view-up vector. Not necessarily orthogonal to the view direction
    /// until [`Camera3::orthogonalize_view_up`] is called.
    #[must_use]
    pub fn view_up(&self) -> DVec3 {
        self.view_up
    }

    /// Sets the view-up vector.
    pub fn set_view_up(&mut self, view_up: DVec3) {
        self.view_up = view_up;
    }

    /// Vertical view angle in degrees.
    #[must_use]
    pub fn view_angle_deg(&self) -> f64 {
        self.view_angle_deg
    }

    /// Sets the vertical view angle in degrees.
    pub fn set_view_angle_deg(&mut self, angle: f64) {
        self.view_angle_deg = angle;
    }

    /// Near/far clipping distances along the view direction.
    #[must_use]
    pub fn clipping_range(&self) -> (f64, f64) {
        self.clipping_range
    }

    /// Sets the near/far clipping distances. The pair is normalized so that
    /// `near <= far` and both stay positive.
    pub fn set_clipping_range(&mut self, near: f64, far: f64) {
        let near = near.max(f64::MIN_POSITIVE);
        let far = far.max(near);
        self.clipping_range = (near, far);
    }

    /// Unit vector from the position toward the focal point.
    ///
    /// Falls back to `-Z` when position and focal point coincide.
    #[must_use]
    pub fn direction_of_projection(&self) -> DVec3 {
        let dir = self.focal_point - self.position;
        let len = dir.length();
        if len <= 0.0 {
            return DVec3::new(0.0, 0.0, -1.0);
        }
        dir / len
    }

    /// Distance from the position to the focal point.
    #[must_use]
    pub fn focal_distance(&self) -> f64 {
        (self.focal_point - self.position).length()
    }

    /// Rotates the focal point about the position around the view-up axis.
    pub fn yaw(&mut self, angle_deg: f64) {
        self.rotate_focal_about_position(self.view_up.normalize_or_zero(), angle_deg);
    }

    /// Rotates the focal point about the position around the lateral axis
    /// (view-up crossed with the direction of projection).
    ///
    /// Callers typically follow a pitch with
    /// [`Camera3::orthogonalize_view_up`] to keep the view basis well formed.
    pub fn pitch(&mut self, angle_deg: f64) {
        let axis = self
            .view_up
            .cross(self.direction_of_projection())
            .normalize_or_zero();
        self.rotate_focal_about_position(axis, angle_deg);
    }

    /// Rotates the view-up vector about the direction of projection.
    pub fn roll(&mut self, angle_deg: f64) {
        let axis = self.direction_of_projection();
        let rotation = DQuat::from_axis_angle(axis, angle_deg.to_radians());
        self.view_up = (rotation * self.view_up).normalize_or_zero();
    }

    /// Makes the view-up vector perpendicular to the view direction while
    /// staying in the plane spanned by the current up and the view direction.
    pub fn orthogonalize_view_up(&mut self) {
        let dop = self.direction_of_projection();
        let up = self.view_up - dop * self.view_up.dot(dop);
        self.view_up = up.normalize_or(self.view_up);
    }

    /// Translates the position and focal point together by `-amount * vector`.
    ///
    /// The negated convention matches the flight controller's caller side:
    /// a *forward* fly passes a positive speed and moves the camera against
    /// the direction of projection.
    pub fn move_along(&mut self, vector: DVec3, amount: f64) {
        let delta = vector * amount;
        self.position -= delta;
        self.focal_point -= delta;
    }

    /// The world-to-view transform (right-handed look-at).
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        let up = self.view_up.normalize_or(DVec3::new(0.0, 1.0, 0.0));
        DMat4::look_at_rh(self.position, self.focal_point, up)
    }

    /// The camera's local x axis: first row of the view matrix.
    #[must_use]
    pub fn lateral_axis(&self) -> DVec3 {
        self.view_matrix().row(0).truncate()
    }

    fn rotate_focal_about_position(&mut self, axis: DVec3, angle_deg: f64) {
        if axis == DVec3::ZERO {
            return;
        }
        let rotation = DQuat::from_axis_angle(axis, angle_deg.to_radians());
        self.focal_point = self.position + rotation * (self.focal_point - self.position);
    }
}

impl Default for Camera3 {
    fn default() -> Self {
        Self::new()
    }
}
