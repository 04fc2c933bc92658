// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Markup: the data model consumed by widget representations.
//!
//! This crate provides the markup side of the picture: ordered control points
//! grouped into [`MarkupNode`]s, the [`Scene`] that owns the nodes behind
//! stable [`NodeId`]s, and a [`DeferredRemover`] for destructive actions that
//! must not run inside the callback that requested them.
//!
//! It does **not** know anything about cameras, viewports, or rendering.
//! Representation layers hold a `NodeId` plus point indices and re-resolve
//! them against the scene on every entry point.
//!
//! ## Change tracking
//!
//! Instead of change-notification callbacks, a [`MarkupNode`] carries two
//! monotonically increasing generation counters: one for structural changes
//! (points added, removed, moved, relabeled, or flag changes) and one for
//! world-transform changes. Consumers remember the generations they last saw
//! and rebuild when either advances.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::DVec3;
//! use waymark_markup::{ControlPoint, MarkupKind, MarkupNode, Scene};
//!
//! let mut scene = Scene::new();
//! let mut curve = MarkupNode::new(MarkupKind::Curve);
//! curve.push_point(ControlPoint::new(DVec3::ZERO));
//! curve.push_point(ControlPoint::new(DVec3::new(10.0, 0.0, 0.0)));
//! curve.push_point(ControlPoint::new(DVec3::new(10.0, 10.0, 0.0)));
//! curve.set_closed_loop(true);
//!
//! let id = scene.insert(curve);
//! assert!(scene.is_alive(id));
//! assert_eq!(scene.get(id).unwrap().point_count(), 3);
//! ```
//!
//! This crate is `no_std` (plus `alloc`).

#![no_std]

extern crate alloc;

mod deferred;
mod kind;
mod node;
mod point;
mod scene;

pub use deferred::DeferredRemover;
pub use kind::MarkupKind;
pub use node::MarkupNode;
pub use point::ControlPoint;
pub use scene::{NodeId, Scene};
