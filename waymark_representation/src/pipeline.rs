// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use glam::DVec3;
use peniko::Color;

use waymark_display::PointCategory;

use crate::LabelGeometry;

/// Text appearance for control-point labels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in display points.
    pub font_size: f64,
    /// Label color.
    pub color: Color,
    /// Label opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 15.0,
            color: Color::new([0.4, 1.0, 1.0, 1.0]),
            opacity: 1.0,
        }
    }
}

/// Depth-offset parameters keeping widget geometry from z-fighting with the
/// surfaces it annotates.
///
/// The units are relative coincident-topology offsets handed to the renderer
/// per primitive class. Widgets normally sit just in front of coincident
/// geometry; an always-on-top widget uses an offset large enough to clear the
/// whole depth range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoincidentTopologyOffsets {
    /// Slope-scaled offset factor.
    pub factor: f64,
    /// Constant offset units.
    pub units: f64,
}

impl CoincidentTopologyOffsets {
    const ALWAYS_ON_TOP_UNITS: f64 = -66000.0;
    const NORMAL_UNITS: f64 = -1.0;

    /// Offsets for a widget's render mode.
    #[must_use]
    pub fn for_mode(always_on_top: bool) -> Self {
        Self {
            factor: 0.0,
            units: if always_on_top {
                Self::ALWAYS_ON_TOP_UNITS
            } else {
                Self::NORMAL_UNITS
            },
        }
    }
}

/// Per-category render inputs for control points.
///
/// Each point category renders through its own pipeline so the three groups
/// can differ in color without per-vertex attributes: the pipeline carries
/// the category's resolved color, the shared text style, the positions of
/// the points in the category, and their labels.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPointPipeline {
    /// The category this pipeline renders.
    pub category: PointCategory,
    /// Resolved glyph color for the category.
    pub color: Color,
    /// Label appearance.
    pub text: TextStyle,
    /// World positions of the points in this category.
    pub positions: Vec<DVec3>,
    /// Labels for the points in this category.
    pub labels: LabelGeometry,
}

impl ControlPointPipeline {
    /// Creates an empty pipeline for a category.
    #[must_use]
    pub fn new(category: PointCategory, color: Color) -> Self {
        Self {
            category,
            color,
            text: TextStyle::default(),
            positions: Vec::new(),
            labels: LabelGeometry::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_on_top_offset_clears_the_depth_range() {
        let on_top = CoincidentTopologyOffsets::for_mode(true);
        let normal = CoincidentTopologyOffsets::for_mode(false);
        assert_eq!(on_top.units, -66000.0);
        assert_eq!(normal.units, -1.0);
        assert_eq!(on_top.factor, 0.0);
    }
}
