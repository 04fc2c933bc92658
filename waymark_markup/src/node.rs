// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use glam::{DMat4, DVec3};

use crate::{ControlPoint, MarkupKind};

/// An ordered sequence of control points with a kind, a closed-loop flag, and
/// a uniform world transform.
///
/// Insertion order is topology order: consecutive points form the segments of
/// the widget's line geometry. The node also caches a center position (the
/// arithmetic mean of all world positions), recomputed on demand via
/// [`MarkupNode::update_center`].
///
/// All mutation goes through methods so the generation counters stay honest:
/// [`MarkupNode::structure_generation`] advances on any point or flag change,
/// [`MarkupNode::transform_generation`] on world-transform changes.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupNode {
    kind: MarkupKind,
    points: Vec<ControlPoint>,
    closed_loop: bool,
    world_transform: DMat4,
    center: Option<DVec3>,
    structure_generation: u64,
    transform_generation: u64,
}

impl MarkupNode {
    /// Creates an empty node of the given kind with an identity transform.
    #[must_use]
    pub fn new(kind: MarkupKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
            closed_loop: false,
            world_transform: DMat4::IDENTITY,
            center: None,
            structure_generation: 0,
            transform_generation: 0,
        }
    }

    /// The node's markup kind.
    #[must_use]
    pub fn kind(&self) -> MarkupKind {
        self.kind
    }

    /// Number of control points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the node has no control points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The nth control point, if it exists.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// All control points in topology order.
    #[must_use]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// The nth point's position in the node-local frame.
    #[must_use]
    pub fn point_position_local(&self, index: usize) -> Option<DVec3> {
        self.points.get(index).map(|p| p.position)
    }

    /// The nth point's position in world coordinates.
    #[must_use]
    pub fn point_position_world(&self, index: usize) -> Option<DVec3> {
        self.points
            .get(index)
            .map(|p| self.world_transform.transform_point3(p.position))
    }

    /// Iterates over all point positions in world coordinates, in topology
    /// order.
    pub fn world_points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.points
            .iter()
            .map(|p| self.world_transform.transform_point3(p.position))
    }

    /// Appends a control point.
    pub fn push_point(&mut self, point: ControlPoint) {
        self.points.push(point);
        self.bump_structure();
    }

    /// Inserts a control point at `index`, shifting later points.
    ///
    /// Out-of-range indices append instead.
    pub fn insert_point(&mut self, index: usize, point: ControlPoint) {
        let index = index.min(self.points.len());
        self.points.insert(index, point);
        self.bump_structure();
    }

    /// Removes and returns the nth control point.
    pub fn remove_point(&mut self, index: usize) -> Option<ControlPoint> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        self.bump_structure();
        Some(removed)
    }

    /// Moves the nth point to a new local-frame position.
    pub fn set_point_position(&mut self, index: usize, position: DVec3) {
        if let Some(point) = self.points.get_mut(index) {
            point.position = position;
            self.bump_structure();
        }
    }

    /// Relabels the nth point.
    pub fn set_point_label(&mut self, index: usize, label: impl Into<String>) {
        if let Some(point) = self.points.get_mut(index) {
            point.label = label.into();
            self.bump_structure();
        }
    }

    /// Sets the nth point's selection flag.
    pub fn set_point_selected(&mut self, index: usize, selected: bool) {
        if let Some(point) = self.points.get_mut(index) {
            if point.selected != selected {
                point.selected = selected;
                self.bump_structure();
            }
        }
    }

    /// Flips the nth point's selection flag.
    pub fn toggle_point_selected(&mut self, index: usize) {
        if let Some(point) = self.points.get_mut(index) {
            point.selected = !point.selected;
            self.bump_structure();
        }
    }

    /// Sets the nth point's visibility flag.
    pub fn set_point_visible(&mut self, index: usize, visible: bool) {
        if let Some(point) = self.points.get_mut(index) {
            if point.visible != visible {
                point.visible = visible;
                self.bump_structure();
            }
        }
    }

    /// Whether the topology closes from the last point back to the first.
    #[must_use]
    pub fn closed_loop(&self) -> bool {
        self.closed_loop
    }

    /// Sets the closed-loop flag.
    ///
    /// Ignored (with a log message) for kinds whose topology cannot close.
    pub fn set_closed_loop(&mut self, closed: bool) {
        if closed && !self.kind.supports_closed_loop() {
            log::warn!("closed loop requested on a {:?} markup; ignored", self.kind);
            return;
        }
        if self.closed_loop != closed {
            self.closed_loop = closed;
            self.bump_structure();
        }
    }

    /// The uniform transform from the node-local frame to world space.
    #[must_use]
    pub fn world_transform(&self) -> DMat4 {
        self.world_transform
    }

    /// Replaces the world transform.
    pub fn set_world_transform(&mut self, transform: DMat4) {
        if self.world_transform != transform {
            self.world_transform = transform;
            self.transform_generation += 1;
        }
    }

    /// The cached center position, if computed since the last change.
    #[must_use]
    pub fn center(&self) -> Option<DVec3> {
        self.center
    }

    /// Recomputes the center cache as the arithmetic mean of all world
    /// positions. Returns the new center, or `None` for an empty node.
    pub fn update_center(&mut self) -> Option<DVec3> {
        if self.points.is_empty() {
            self.center = None;
            return None;
        }
        let sum: DVec3 = self.world_points().sum();
        let center = sum / self.points.len() as f64;
        self.center = Some(center);
        Some(center)
    }

    /// `true` only when every point is visible. An empty node reports
    /// `false`: the vacuous case is defined as "nothing to show".
    #[must_use]
    pub fn all_points_visible(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(|p| p.visible)
    }

    /// `true` only when every point is selected. An empty node reports
    /// `false`, matching [`MarkupNode::all_points_visible`].
    #[must_use]
    pub fn all_points_selected(&self) -> bool {
        !self.points.is_empty() && self.points.iter().all(|p| p.selected)
    }

    /// Generation counter for structural changes (points and flags).
    #[must_use]
    pub fn structure_generation(&self) -> u64 {
        self.structure_generation
    }

    /// Generation counter for world-transform changes.
    #[must_use]
    pub fn transform_generation(&self) -> u64 {
        self.transform_generation
    }

    fn bump_structure(&mut self) {
        self.structure_generation += 1;
        // The cache no longer matches the points; drop it rather than leave a
        // stale mean around.
        self.center = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve_with(points: &[DVec3]) -> MarkupNode {
        let mut node = MarkupNode::new(MarkupKind::Curve);
        for &p in points {
            node.push_point(ControlPoint::new(p));
        }
        node
    }

    #[test]
    fn world_positions_apply_transform() {
        let mut node = curve_with(&[DVec3::new(1.0, 0.0, 0.0)]);
        node.set_world_transform(DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0)));
        assert_eq!(
            node.point_position_world(0),
            Some(DVec3::new(1.0, 0.0, 5.0))
        );
        assert_eq!(node.point_position_local(0), Some(DVec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn update_center_is_mean_of_world_points() {
        let mut node = curve_with(&[
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(1.0, 3.0, 0.0),
        ]);
        let center = node.update_center().unwrap();
        assert!((center - DVec3::new(1.0, 1.0, 0.0)).length() < 1e-12);
        assert_eq!(node.center(), Some(center));
    }

    #[test]
    fn empty_node_has_no_center_and_vacuous_false_aggregates() {
        let mut node = MarkupNode::new(MarkupKind::Fiducial);
        assert_eq!(node.update_center(), None);
        assert!(!node.all_points_visible());
        assert!(!node.all_points_selected());
    }

    #[test]
    fn aggregates_require_every_point() {
        let mut node = curve_with(&[DVec3::ZERO, DVec3::ONE]);
        assert!(node.all_points_visible());
        assert!(!node.all_points_selected());

        node.set_point_selected(0, true);
        node.set_point_selected(1, true);
        assert!(node.all_points_selected());

        node.set_point_visible(1, false);
        assert!(!node.all_points_visible());
    }

    #[test]
    fn structural_mutation_bumps_generation_and_drops_center() {
        let mut node = curve_with(&[DVec3::ZERO, DVec3::ONE]);
        node.update_center();
        assert!(node.center().is_some());

        let before = node.structure_generation();
        node.set_point_position(0, DVec3::new(5.0, 0.0, 0.0));
        assert_eq!(node.structure_generation(), before + 1);
        assert_eq!(node.center(), None);
    }

    #[test]
    fn transform_generation_is_independent() {
        let mut node = curve_with(&[DVec3::ZERO]);
        let structure = node.structure_generation();
        node.set_world_transform(DMat4::from_translation(DVec3::ONE));
        assert_eq!(node.structure_generation(), structure);
        assert_eq!(node.transform_generation(), 1);

        // Setting the identical transform again is not a change.
        node.set_world_transform(DMat4::from_translation(DVec3::ONE));
        assert_eq!(node.transform_generation(), 1);
    }

    #[test]
    fn closed_loop_only_on_supporting_kinds() {
        let mut line = MarkupNode::new(MarkupKind::Line);
        line.set_closed_loop(true);
        assert!(!line.closed_loop());

        let mut curve = curve_with(&[DVec3::ZERO, DVec3::ONE, DVec3::X]);
        curve.set_closed_loop(true);
        assert!(curve.closed_loop());
        curve.set_closed_loop(false);
        assert!(!curve.closed_loop());
    }

    #[test]
    fn insert_point_clamps_index() {
        let mut node = curve_with(&[DVec3::ZERO, DVec3::ONE]);
        node.insert_point(99, ControlPoint::new(DVec3::X));
        assert_eq!(node.point_count(), 3);
        assert_eq!(node.point_position_local(2), Some(DVec3::X));

        node.insert_point(0, ControlPoint::new(DVec3::Y));
        assert_eq!(node.point_position_local(0), Some(DVec3::Y));
    }

    #[test]
    fn remove_point_out_of_range_is_none() {
        let mut node = curve_with(&[DVec3::ZERO]);
        assert!(node.remove_point(5).is_none());
        assert!(node.remove_point(0).is_some());
        assert!(node.is_empty());
    }
}
