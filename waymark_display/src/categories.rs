// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rendering category of a control point.
///
/// Every control point renders through exactly one category per pass:
/// `Active` for the point currently under the pointer, otherwise `Selected`
/// or `Unselected` per the point's selection flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointCategory {
    /// Not selected, not hovered.
    Unselected,
    /// Part of the current selection.
    Selected,
    /// The point the pointer is interacting with right now.
    Active,
}

impl PointCategory {
    /// All categories, in pipeline order.
    pub const ALL: [Self; 3] = [Self::Unselected, Self::Selected, Self::Active];
}

/// Kind of direct-manipulation handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleCategory {
    /// Arrows that translate the whole markup.
    Translate,
    /// Rings that rotate the markup about its center.
    Rotate,
    /// Corner grips that scale a bounding region.
    Scale,
}

bitflags::bitflags! {
    /// Which handle categories are shown for a widget.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HandleVisibility: u8 {
        /// Translation arrows.
        const TRANSLATE = 0b0000_0001;
        /// Rotation rings.
        const ROTATE    = 0b0000_0010;
        /// Scale grips.
        const SCALE     = 0b0000_0100;
    }
}

impl Default for HandleVisibility {
    fn default() -> Self {
        Self::TRANSLATE | Self::ROTATE
    }
}

impl From<HandleCategory> for HandleVisibility {
    fn from(category: HandleCategory) -> Self {
        match category {
            HandleCategory::Translate => Self::TRANSLATE,
            HandleCategory::Rotate => Self::ROTATE,
            HandleCategory::Scale => Self::SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_visibility_hides_scale() {
        let visibility = HandleVisibility::default();
        assert!(visibility.contains(HandleVisibility::TRANSLATE));
        assert!(visibility.contains(HandleVisibility::ROTATE));
        assert!(!visibility.contains(HandleVisibility::SCALE));
    }

    #[test]
    fn category_maps_to_single_flag() {
        for category in [
            HandleCategory::Translate,
            HandleCategory::Rotate,
            HandleCategory::Scale,
        ] {
            let flag = HandleVisibility::from(category);
            assert_eq!(flag.bits().count_ones(), 1);
        }
    }
}
