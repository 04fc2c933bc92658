// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The closed set of markup variants.
///
/// This replaces runtime type dispatch over node subclasses with a tagged
/// enum plus capability lookups: code that needs to know whether a kind can
/// close into a loop or carries a bounding region asks the kind instead of
/// downcasting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    /// An unordered-looking list of independent landmark points.
    Fiducial,
    /// Exactly two points forming a measurement line.
    Line,
    /// Three points forming an angle measurement.
    Angle,
    /// An ordered polyline/curve of arbitrarily many points.
    Curve,
    /// A plane defined by its control points.
    Plane,
    /// A box-shaped region of interest.
    RegionOfInterest,
}

impl MarkupKind {
    /// Whether the kind's topology may close back on itself.
    ///
    /// Only curves support the closed-loop flag; setting it on other kinds is
    /// ignored.
    #[must_use]
    pub fn supports_closed_loop(self) -> bool {
        matches!(self, Self::Curve)
    }

    /// Whether the kind carries a bounding region.
    ///
    /// Region-carrying kinds are the only ones that expose scale handles.
    #[must_use]
    pub fn has_region(self) -> bool {
        matches!(self, Self::RegionOfInterest)
    }

    /// The number of control points the kind is complete with, when fixed.
    ///
    /// `None` means the kind accepts an open-ended number of points.
    #[must_use]
    pub fn fixed_point_count(self) -> Option<usize> {
        match self {
            Self::Line => Some(2),
            Self::Angle => Some(3),
            Self::Fiducial | Self::Curve | Self::Plane | Self::RegionOfInterest => None,
        }
    }
}
