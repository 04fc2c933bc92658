// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark View 3D: camera and viewport primitives for 3D markup widgets.
//!
//! This crate provides small, headless models of a perspective camera and the
//! viewport it renders through. It focuses on:
//! - Camera state (position, focal point, view up) and flight-style rotations
//!   (yaw/pitch/roll about the camera position).
//! - Coordinate conversion between world space and display (pixel) space.
//! - Pick-ray construction for hit testing.
//! - A view scale factor relating world-space distance to screen pixels at the
//!   focal-plane depth.
//!
//! It does **not** own any scene graph or rendering backend. Callers are
//! expected to:
//! - Maintain their own scene and feed visible bounds into the viewport.
//! - Use [`Viewport`] to derive display positions and pick rays for widget
//!   representations.
//! - Wire input events into camera motion at a higher layer (for example via
//!   `waymark_flight`).
//!
//! ## Coordinate conventions
//!
//! Display coordinates are pixels with the origin at the **bottom-left** of
//! the viewport and y pointing up, matching view-space orientation. Display
//! depth is normalized to `[0, 1]` between the near and far clipping planes.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use kurbo::Size;
//! use waymark_view3d::{Camera3, Viewport};
//!
//! let mut viewport = Viewport::new(Size::new(800.0, 600.0));
//! viewport.camera_mut().set_position(DVec3::new(0.0, 0.0, 10.0));
//! viewport.camera_mut().set_focal_point(DVec3::ZERO);
//!
//! // Project a world point into pixels, then back.
//! let (display, depth) = viewport.world_to_display_with_depth(DVec3::ZERO);
//! let world = viewport.display_to_world(display, depth);
//! assert!((world - DVec3::ZERO).length() < 1e-6);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod camera;
mod viewport;

pub use bounds::Bounds3;
pub use camera::Camera3;
pub use viewport::Viewport;
