// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Representation: the rendering-facing side of markup widgets.
//!
//! A [`WidgetRepresentation`] binds a markup node from `waymark_markup` and a
//! display node from `waymark_display` and exposes what an owning widget
//! needs each frame: screen-space hit tests (via `waymark_precise_hit` under
//! a tolerance derived from the live camera), renderable polyline and label
//! geometry in world or display space, per-category control-point pipelines
//! with resolved colors, and generation-based change polling.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use kurbo::Size;
//! use waymark_markup::{ControlPoint, MarkupKind, MarkupNode, Scene};
//! use waymark_representation::{CoordinateSpace, WidgetRepresentation};
//! use waymark_view3d::Viewport;
//!
//! let mut scene = Scene::new();
//! let mut node = MarkupNode::new(MarkupKind::Curve);
//! node.push_point(ControlPoint::new(DVec3::ZERO));
//! node.push_point(ControlPoint::new(DVec3::new(10.0, 0.0, 0.0)));
//! let id = scene.insert(node);
//!
//! let mut representation = WidgetRepresentation::new();
//! representation.bind_node(id);
//!
//! let viewport = Viewport::new(Size::new(800.0, 600.0));
//! let line = representation.build_line(&scene, &viewport, CoordinateSpace::World);
//! assert_eq!(line.line, vec![0, 1]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod geometry;
mod pipeline;
mod representation;

pub use geometry::{CoordinateSpace, LabelEntry, LabelGeometry, PolylineGeometry};
pub use pipeline::{CoincidentTopologyOffsets, ControlPointPipeline, TextStyle};
pub use representation::WidgetRepresentation;
