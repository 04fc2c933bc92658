// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use glam::DVec3;

/// Which coordinate frame a geometry build targets.
///
/// World-space geometry is rendered through the camera; display-space
/// geometry is used for screen-locked annotations and stores pixel
/// coordinates with the normalized depth in `z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordinateSpace {
    /// Positions in world coordinates.
    #[default]
    World,
    /// Positions in display pixels, normalized depth in `z`.
    Display,
}

/// A renderable point set with a single polyline cell.
///
/// `line` indexes into `points`. A closed curve keeps its point count and
/// closes through index `0`, so consumers never see a duplicated vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolylineGeometry {
    /// Vertex positions, one per control point, in topology order.
    pub points: Vec<DVec3>,
    /// Polyline connectivity as indices into `points`. Empty for fewer than
    /// two points.
    pub line: Vec<usize>,
}

impl PolylineGeometry {
    /// An empty dataset, the build result for a node with no points.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the polyline topology over a set of positions.
    ///
    /// Open curves connect consecutive points. Closed curves with more than
    /// two points additionally close back to index `0`; a closed "curve"
    /// with two points is rendered as the plain segment.
    #[must_use]
    pub fn build(points: Vec<DVec3>, closed: bool) -> Self {
        let n = points.len();
        if n < 2 {
            return Self {
                points,
                line: Vec::new(),
            };
        }
        let close = closed && n > 2;
        let mut line = Vec::with_capacity(if close { n + 1 } else { n });
        line.extend(0..n);
        if close {
            line.push(0);
        }
        Self { points, line }
    }

    /// Whether the dataset renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

/// One text label attached to a control point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelEntry {
    /// Anchor position in world coordinates.
    pub position: DVec3,
    /// The label text.
    pub text: String,
    /// Numeric sort key for the label-placement stage; entries with a lower
    /// key keep their spot when labels collide.
    pub priority: String,
}

/// The label dataset paired with a polyline build, one entry per control
/// point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelGeometry {
    /// Label entries in topology order.
    pub entries: Vec<LabelEntry>,
}

impl LabelGeometry {
    /// An empty dataset.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether there are no labels to place.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
