// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use glam::DVec3;

/// A single positioned, labeled vertex of a markup.
///
/// Positions are in the owning node's local coordinate frame; the node's
/// world transform applies uniformly to all of its points. Control points are
/// owned exclusively by their [`MarkupNode`](crate::MarkupNode) — downstream
/// layers refer to them by index only.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPoint {
    /// Position in the node-local frame.
    pub position: DVec3,
    /// Short display label, rendered next to the point.
    pub label: String,
    /// Whether the point participates in the node's selection.
    pub selected: bool,
    /// Whether the point is shown at all.
    pub visible: bool,
    /// Locked points ignore direct-manipulation edits.
    pub locked: bool,
}

impl ControlPoint {
    /// Creates a visible, unselected, unlocked point with an empty label.
    #[must_use]
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            label: String::new(),
            selected: false,
            visible: true,
            locked: false,
        }
    }

    /// Builder-style label assignment.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder-style selection assignment.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}
