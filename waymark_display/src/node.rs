// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use waymark_markup::MarkupKind;

use crate::{HandleCategory, HandleVisibility, PointCategory};

/// Highlight color for the active control point.
const ACTIVE_COLOR: Color = Color::new([0.4, 1.0, 0.0, 1.0]);

/// Neutral gray used when no display node is bound.
const INVALID_COLOR: Color = Color::new([0.5, 0.5, 0.5, 1.0]);

/// Display state for one markup widget.
///
/// The node stores the two configurable colors (unselected and selected),
/// overall visibility and opacity, and the handle toggles. The markup kind it
/// was created for decides which handle categories exist at all: scale
/// handles only make sense for region-carrying kinds and are *hidden* from
/// [`DisplayNode::available_handle_categories`] elsewhere, not defaulted off.
///
/// A generation counter advances on every observable change so consumers can
/// poll for display updates the same way they poll the markup node.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayNode {
    kind: MarkupKind,
    color: Color,
    selected_color: Color,
    opacity: f64,
    visibility: bool,
    handles_interactive: bool,
    handle_visibility: HandleVisibility,
    always_on_top: bool,
    generation: u64,
}

impl DisplayNode {
    /// Creates display state for a curve markup with default colors.
    #[must_use]
    pub fn new() -> Self {
        Self::for_kind(MarkupKind::Curve)
    }

    /// Creates display state for the given markup kind.
    #[must_use]
    pub fn for_kind(kind: MarkupKind) -> Self {
        Self {
            kind,
            color: Color::new([0.4, 1.0, 1.0, 1.0]),
            selected_color: Color::new([1.0, 0.5, 0.5, 1.0]),
            opacity: 1.0,
            visibility: true,
            handles_interactive: false,
            handle_visibility: HandleVisibility::default(),
            always_on_top: false,
            generation: 0,
        }
    }

    /// The markup kind this display state belongs to.
    #[must_use]
    pub fn kind(&self) -> MarkupKind {
        self.kind
    }

    /// Color for unselected control points.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the unselected color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.generation += 1;
    }

    /// Color for selected control points.
    #[must_use]
    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    /// Sets the selected color.
    pub fn set_selected_color(&mut self, color: Color) {
        self.selected_color = color;
        self.generation += 1;
    }

    /// Overall widget opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Sets the widget opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.generation += 1;
    }

    /// Whether the widget is shown at all.
    #[must_use]
    pub fn visibility(&self) -> bool {
        self.visibility
    }

    /// Sets overall widget visibility.
    pub fn set_visibility(&mut self, visible: bool) {
        if self.visibility != visible {
            self.visibility = visible;
            self.generation += 1;
        }
    }

    /// Whether interaction handles respond to the pointer.
    #[must_use]
    pub fn handles_interactive(&self) -> bool {
        self.handles_interactive
    }

    /// Flips the master handle-interactivity switch.
    pub fn toggle_handles_interactive(&mut self) {
        self.handles_interactive = !self.handles_interactive;
        self.generation += 1;
    }

    /// The currently visible handle categories.
    #[must_use]
    pub fn handle_visibility(&self) -> HandleVisibility {
        self.handle_visibility
    }

    /// Whether one handle category is visible.
    #[must_use]
    pub fn handle_visible(&self, category: HandleCategory) -> bool {
        self.handle_visibility.contains(category.into())
    }

    /// Flips exactly one handle category, leaving the others untouched.
    pub fn toggle_handle_visibility(&mut self, category: HandleCategory) {
        self.handle_visibility.toggle(category.into());
        self.generation += 1;
    }

    /// The handle categories that exist for this markup kind.
    ///
    /// Scale is only offered for region-carrying kinds; for everything else
    /// the category is absent from the list, so UI layers never present a
    /// meaningless toggle.
    #[must_use]
    pub fn available_handle_categories(&self) -> &'static [HandleCategory] {
        if self.kind.has_region() {
            &[
                HandleCategory::Translate,
                HandleCategory::Rotate,
                HandleCategory::Scale,
            ]
        } else {
            &[HandleCategory::Translate, HandleCategory::Rotate]
        }
    }

    /// Whether the widget renders on top of all other geometry.
    #[must_use]
    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }

    /// Sets the always-on-top flag.
    pub fn set_always_on_top(&mut self, on_top: bool) {
        if self.always_on_top != on_top {
            self.always_on_top = on_top;
            self.generation += 1;
        }
    }

    /// Generation counter for display changes.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resolves the rendering color for a point category.
    #[must_use]
    pub fn widget_color(&self, category: PointCategory) -> Color {
        match category {
            PointCategory::Unselected => self.color,
            PointCategory::Selected => self.selected_color,
            PointCategory::Active => ACTIVE_COLOR,
        }
    }
}

impl Default for DisplayNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the rendering color for a point category against an optional
/// display node.
///
/// A widget whose display node is missing renders in neutral gray for every
/// category; this is a caller wiring problem, not an error.
#[must_use]
pub fn widget_color(display: Option<&DisplayNode>, category: PointCategory) -> Color {
    match display {
        Some(node) => node.widget_color(category),
        None => INVALID_COLOR,
    }
}
