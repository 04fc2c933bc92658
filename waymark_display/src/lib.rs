// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Display: per-widget display state and the color/visibility policy.
//!
//! A [`DisplayNode`] carries everything a widget representation needs to know
//! about *how* to draw a markup that is not geometry: the unselected and
//! selected colors, opacity, whether interaction handles are shown and live,
//! and whether the widget renders on top of everything else.
//!
//! The color policy is a pure lookup: [`DisplayNode::widget_color`] (or the
//! free [`widget_color`] for an optional node) resolves a [`PointCategory`]
//! to a color, with fixed fallbacks for the active highlight and for a
//! missing display node.
//!
//! ## Minimal example
//!
//! ```rust
//! use waymark_display::{DisplayNode, HandleCategory, PointCategory};
//!
//! let mut display = DisplayNode::new();
//! assert!(display.handle_visibility().contains(waymark_display::HandleVisibility::TRANSLATE));
//!
//! // Toggling one category leaves the other two untouched.
//! display.toggle_handle_visibility(HandleCategory::Rotate);
//! let _active = display.widget_color(PointCategory::Active);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod categories;
mod node;

pub use categories::{HandleCategory, HandleVisibility, PointCategory};
pub use node::{DisplayNode, widget_color};
