// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::{DMat4, DVec3, DVec4};
use kurbo::{Point, Size, Vec2};

use crate::{Bounds3, Camera3};

/// Epsilon below which a homogeneous w component is treated as degenerate.
const W_EPSILON: f64 = 1e-12;

/// A render viewport: a pixel rectangle seen through a [`Camera3`].
///
/// `Viewport` owns its camera and converts between world space and display
/// (pixel) space using the camera's view and projection transforms. All
/// conversions are pure functions of the camera and viewport state at call
/// time; nothing is cached across camera moves.
///
/// Display coordinates have their origin at the bottom-left of the viewport
/// with y pointing up. Display depth is normalized to `[0, 1]` between the
/// near and far clipping planes.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pixel_size: Size,
    camera: Camera3,
    visible_bounds: Option<Bounds3>,
    auto_adjust_clipping_range: bool,
    light_follow_camera: bool,
    headlight: DVec3,
}

impl Viewport {
    /// Creates a viewport of the given pixel size with a default camera.
    #[must_use]
    pub fn new(pixel_size: Size) -> Self {
        let camera = Camera3::new();
        let headlight = camera.position();
        Self {
            pixel_size,
            camera,
            visible_bounds: None,
            auto_adjust_clipping_range: true,
            light_follow_camera: true,
            headlight,
        }
    }

    /// Current viewport size in pixels.
    #[must_use]
    pub fn pixel_size(&self) -> Size {
        self.pixel_size
    }

    /// Sets the viewport size in pixels.
    pub fn set_pixel_size(&mut self, size: Size) {
        self.pixel_size = size;
    }

    /// The active camera.
    #[must_use]
    pub fn camera(&self) -> &Camera3 {
        &self.camera
    }

    /// Mutable access to the active camera.
    pub fn camera_mut(&mut self) -> &mut Camera3 {
        &mut self.camera
    }

    /// World-space bounds of everything currently visible, if known.
    ///
    /// Callers feed this from their scene; it drives the flight reference
    /// diagonal and clipping-range adjustment.
    #[must_use]
    pub fn visible_bounds(&self) -> Option<Bounds3> {
        self.visible_bounds
    }

    /// Sets the visible world-space bounds.
    pub fn set_visible_bounds(&mut self, bounds: Option<Bounds3>) {
        self.visible_bounds = bounds;
    }

    /// Diagonal length of the visible bounds, `1.0` when uninitialized.
    #[must_use]
    pub fn visible_diagonal_length(&self) -> f64 {
        self.visible_bounds
            .map_or(1.0, |bounds| bounds.diagonal_length())
    }

    /// Whether [`Viewport::adjust_after_motion`] refits the clipping range.
    pub fn set_auto_adjust_clipping_range(&mut self, enabled: bool) {
        self.auto_adjust_clipping_range = enabled;
    }

    /// Whether [`Viewport::adjust_after_motion`] moves the headlight with the
    /// camera.
    pub fn set_light_follow_camera(&mut self, enabled: bool) {
        self.light_follow_camera = enabled;
    }

    /// Current headlight position.
    #[must_use]
    pub fn headlight(&self) -> DVec3 {
        self.headlight
    }

    /// Width over height, `1.0` for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        if self.pixel_size.width <= 0.0 || self.pixel_size.height <= 0.0 {
            return 1.0;
        }
        self.pixel_size.width / self.pixel_size.height
    }

    /// Combined world-to-clip transform.
    #[must_use]
    pub fn view_projection_matrix(&self) -> DMat4 {
        let (near, far) = self.camera.clipping_range();
        let projection = DMat4::perspective_rh_gl(
            self.camera.view_angle_deg().to_radians(),
            self.aspect(),
            near,
            far,
        );
        projection * self.camera.view_matrix()
    }

    /// Projects a world position into display pixels.
    #[must_use]
    pub fn world_to_display(&self, world: DVec3) -> Point {
        self.world_to_display_with_depth(world).0
    }

    /// Projects a world position into display pixels plus normalized depth.
    ///
    /// A point on the camera's eye plane (homogeneous w near zero) projects to
    /// the viewport origin at depth zero rather than to infinity.
    #[must_use]
    pub fn world_to_display_with_depth(&self, world: DVec3) -> (Point, f64) {
        let clip = self.view_projection_matrix() * world.extend(1.0);
        if clip.w < W_EPSILON && clip.w > -W_EPSILON {
            return (Point::ZERO, 0.0);
        }
        let ndc = clip.truncate() / clip.w;
        let display = Point::new(
            (ndc.x + 1.0) * 0.5 * self.pixel_size.width,
            (ndc.y + 1.0) * 0.5 * self.pixel_size.height,
        );
        (display, (ndc.z + 1.0) * 0.5)
    }

    /// Unprojects a display position at the given normalized depth back into
    /// world space.
    ///
    /// `depth` of `0.0` lies on the near plane, `1.0` on the far plane.
    #[must_use]
    pub fn display_to_world(&self, display: Point, depth: f64) -> DVec3 {
        let size = self.pixel_size;
        if size.width <= 0.0 || size.height <= 0.0 {
            return DVec3::ZERO;
        }
        let ndc = DVec4::new(
            display.x / size.width * 2.0 - 1.0,
            display.y / size.height * 2.0 - 1.0,
            depth * 2.0 - 1.0,
            1.0,
        );
        let world = self.view_projection_matrix().inverse() * ndc;
        if world.w < W_EPSILON && world.w > -W_EPSILON {
            return DVec3::ZERO;
        }
        world.truncate() / world.w
    }

    /// The picking segment through a display position, from the near plane to
    /// the far plane in world space.
    #[must_use]
    pub fn pick_ray(&self, display: Point) -> (DVec3, DVec3) {
        (
            self.display_to_world(display, 0.0),
            self.display_to_world(display, 1.0),
        )
    }

    /// Ratio of the viewport's pixel diagonal to the world-space diagonal at
    /// the camera's focal-plane depth.
    ///
    /// Used to convert a desired on-screen handle size into a world-space
    /// scale. Recomputed from the current camera and viewport on every call;
    /// degenerate configurations yield `1.0`.
    #[must_use]
    pub fn view_scale_factor(&self) -> f64 {
        let size = self.pixel_size;
        if size.width <= 0.0 || size.height <= 0.0 {
            return 1.0;
        }
        let (_, focal_depth) = self.world_to_display_with_depth(self.camera.focal_point());
        let lo = self.display_to_world(Point::ZERO, focal_depth);
        let hi = self.display_to_world(Point::new(size.width, size.height), focal_depth);
        let world_diagonal = lo.distance(hi);
        if world_diagonal <= 0.0 || !world_diagonal.is_finite() {
            return 1.0;
        }
        Vec2::new(size.width, size.height).hypot() / world_diagonal
    }

    /// World-space distance spanned by a horizontal pixel offset at the
    /// focal-plane depth.
    ///
    /// This is the conversion used to turn a pixel click tolerance into the
    /// world tolerance for hit testing.
    #[must_use]
    pub fn pixel_to_world_at_focal_plane(&self, pixels: f64) -> f64 {
        let (_, focal_depth) = self.world_to_display_with_depth(self.camera.focal_point());
        let a = self.display_to_world(Point::ZERO, focal_depth);
        let b = self.display_to_world(Point::new(pixels, 0.0), focal_depth);
        a.distance(b)
    }

    /// Refreshes camera-dependent viewport state after the camera moved.
    ///
    /// When enabled, refits the clipping range around the visible bounds and
    /// moves the headlight to the camera position.
    pub fn adjust_after_motion(&mut self) {
        if self.auto_adjust_clipping_range {
            self.reset_camera_clipping_range();
        }
        if self.light_follow_camera {
            self.headlight = self.camera.position();
        }
    }

    /// Refits the camera clipping range around the visible bounds.
    ///
    /// A no-op when the bounds are unknown, invalid, or entirely behind the
    /// camera.
    pub fn reset_camera_clipping_range(&mut self) {
        let Some(bounds) = self.visible_bounds else {
            return;
        };
        if !bounds.is_valid() {
            return;
        }
        let dop = self.camera.direction_of_projection();
        let position = self.camera.position();
        let mut near = f64::INFINITY;
        let mut far = f64::NEG_INFINITY;
        for corner in bounds.corners() {
            let distance = (corner - position).dot(dop);
            near = near.min(distance);
            far = far.max(distance);
        }
        if far <= 0.0 {
            return;
        }
        let near = near.max(far * 1.0e-3);
        self.camera.set_clipping_range(near * 0.99, far * 1.01);
    }
}
