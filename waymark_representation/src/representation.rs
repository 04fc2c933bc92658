// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::vec::Vec;

use glam::DVec3;
use kurbo::Point;
use peniko::Color;

use waymark_display::{DisplayNode, PointCategory};
use waymark_markup::{MarkupNode, NodeId, Scene};
use waymark_precise_hit::{HitTestResult, Ray3, find_closest_on_polyline};
use waymark_view3d::Viewport;

use crate::{
    ControlPointPipeline, CoordinateSpace, LabelEntry, LabelGeometry, PolylineGeometry,
};

/// Default click tolerance in pixels.
const PIXEL_TOLERANCE: f64 = 1.0;

/// Default on-screen control-point glyph size in pixels.
const CONTROL_POINT_SIZE: f64 = 3.0;

/// The representation of one markup widget.
///
/// A representation binds a markup node (by [`NodeId`], re-resolved against
/// the [`Scene`] on every entry point) and an optional [`DisplayNode`], and
/// turns them into screen-space hit tests and renderable geometry for the
/// owning widget. It owns no scene data itself.
///
/// A binding whose node has since been removed from the scene, or no binding
/// at all, is a caller wiring problem per the error model: the affected call
/// logs a warning and degrades to its empty or negative result instead of
/// failing.
///
/// Change detection is by polling: [`WidgetRepresentation::update_from_markup`]
/// compares the bound node's and display node's generation counters against
/// the last render and raises the needs-render flag on any difference.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetRepresentation {
    node: Option<NodeId>,
    display: Option<DisplayNode>,
    active_point: Option<usize>,
    pixel_tolerance: f64,
    control_point_size: f64,
    needs_render: bool,
    seen_node_generations: Option<(u64, u64)>,
    seen_display_generation: Option<u64>,
}

impl WidgetRepresentation {
    /// Creates an unbound representation with default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self {
            node: None,
            display: None,
            active_point: None,
            pixel_tolerance: PIXEL_TOLERANCE,
            control_point_size: CONTROL_POINT_SIZE,
            needs_render: true,
            seen_node_generations: None,
            seen_display_generation: None,
        }
    }

    /// The bound markup node id, if any.
    #[must_use]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Binds the representation to a markup node.
    pub fn bind_node(&mut self, id: NodeId) {
        self.node = Some(id);
        self.seen_node_generations = None;
        self.needs_render = true;
    }

    /// Drops the markup node binding.
    pub fn unbind_node(&mut self) {
        self.node = None;
        self.seen_node_generations = None;
        self.active_point = None;
        self.needs_render = true;
    }

    /// The associated display node, if any.
    #[must_use]
    pub fn display(&self) -> Option<&DisplayNode> {
        self.display.as_ref()
    }

    /// Mutable access to the associated display node.
    pub fn display_mut(&mut self) -> Option<&mut DisplayNode> {
        self.display.as_mut()
    }

    /// Sets or clears the associated display node.
    pub fn set_display(&mut self, display: Option<DisplayNode>) {
        self.display = display;
        self.seen_display_generation = None;
        self.needs_render = true;
    }

    /// Index of the active (hovered or grabbed) control point.
    #[must_use]
    pub fn active_point(&self) -> Option<usize> {
        self.active_point
    }

    /// Sets or clears the active control point.
    pub fn set_active_point(&mut self, index: Option<usize>) {
        if self.active_point != index {
            self.active_point = index;
            self.needs_render = true;
        }
    }

    /// Click tolerance in pixels.
    #[must_use]
    pub fn pixel_tolerance(&self) -> f64 {
        self.pixel_tolerance
    }

    /// Sets the click tolerance in pixels.
    pub fn set_pixel_tolerance(&mut self, pixels: f64) {
        self.pixel_tolerance = pixels;
    }

    /// On-screen control-point glyph size in pixels.
    #[must_use]
    pub fn control_point_size(&self) -> f64 {
        self.control_point_size
    }

    /// Sets the on-screen control-point glyph size.
    pub fn set_control_point_size(&mut self, pixels: f64) {
        self.control_point_size = pixels;
        self.needs_render = true;
    }

    /// World-space size of a control-point glyph under the current camera.
    #[must_use]
    pub fn control_point_world_size(&self, viewport: &Viewport) -> f64 {
        self.control_point_size / viewport.view_scale_factor()
    }

    /// Hit-tests a display position against the bound node's polyline.
    ///
    /// The pick ray and the world-space tolerance are derived from the
    /// viewport at call time, never cached across camera moves: the pixel
    /// tolerance is projected onto the focal plane and squared before the
    /// polyline query. `None` means nothing was within tolerance and the
    /// caller should append rather than insert.
    #[must_use]
    pub fn hit_test(
        &self,
        scene: &Scene,
        viewport: &Viewport,
        position: Point,
    ) -> Option<HitTestResult> {
        let node = self.resolve(scene)?;
        let points: Vec<DVec3> = node.world_points().collect();
        let tolerance = viewport.pixel_to_world_at_focal_plane(self.pixel_tolerance);
        let (near, far) = viewport.pick_ray(position);
        find_closest_on_polyline(
            Ray3::new(near, far),
            &points,
            node.closed_loop(),
            tolerance * tolerance,
        )
    }

    /// Builds the renderable polyline for the bound node.
    ///
    /// In display space each vertex holds the pixel position with the
    /// normalized depth in `z`, for screen-locked rendering. A missing
    /// binding yields an empty dataset.
    #[must_use]
    pub fn build_line(
        &self,
        scene: &Scene,
        viewport: &Viewport,
        space: CoordinateSpace,
    ) -> PolylineGeometry {
        let Some(node) = self.resolve(scene) else {
            return PolylineGeometry::empty();
        };
        let points: Vec<DVec3> = match space {
            CoordinateSpace::World => node.world_points().collect(),
            CoordinateSpace::Display => node
                .world_points()
                .map(|world| {
                    let (display, depth) = viewport.world_to_display_with_depth(world);
                    DVec3::new(display.x, display.y, depth)
                })
                .collect(),
        };
        PolylineGeometry::build(points, node.closed_loop())
    }

    /// Builds the label dataset for the bound node, one entry per control
    /// point.
    ///
    /// The priority string is the point's topology index, which gives
    /// earlier points precedence when the label-placement stage resolves
    /// collisions.
    #[must_use]
    pub fn build_labels(&self, scene: &Scene) -> LabelGeometry {
        let Some(node) = self.resolve(scene) else {
            return LabelGeometry::empty();
        };
        let transform = node.world_transform();
        let entries = node
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| LabelEntry {
                position: transform.transform_point3(point.position),
                text: point.label.clone(),
                priority: format!("{index}"),
            })
            .collect();
        LabelGeometry { entries }
    }

    /// Builds the per-category control-point pipelines.
    ///
    /// Every visible control point lands in exactly one pipeline: the active
    /// point in the active pipeline, the rest split by their selection flag.
    /// Invisible points are omitted entirely.
    #[must_use]
    pub fn control_point_pipelines(&self, scene: &Scene) -> [ControlPointPipeline; 3] {
        let mut pipelines = PointCategory::ALL
            .map(|category| ControlPointPipeline::new(category, self.widget_color(category)));
        let Some(node) = self.resolve(scene) else {
            return pipelines;
        };
        let transform = node.world_transform();
        for (index, point) in node.points().iter().enumerate() {
            if !point.visible {
                continue;
            }
            let category = if self.active_point == Some(index) {
                PointCategory::Active
            } else if point.selected {
                PointCategory::Selected
            } else {
                PointCategory::Unselected
            };
            let world = transform.transform_point3(point.position);
            let pipeline = &mut pipelines[category as usize];
            pipeline.positions.push(world);
            pipeline.labels.entries.push(LabelEntry {
                position: world,
                text: point.label.clone(),
                priority: format!("{index}"),
            });
        }
        pipelines
    }

    /// Resolves the rendering color for a point category.
    ///
    /// Falls back to neutral gray when no display node is associated.
    #[must_use]
    pub fn widget_color(&self, category: PointCategory) -> Color {
        waymark_display::widget_color(self.display.as_ref(), category)
    }

    /// Whether every control point of the bound node is visible.
    ///
    /// `false` for an empty node and for a missing binding.
    #[must_use]
    pub fn all_points_visible(&self, scene: &Scene) -> bool {
        self.resolve(scene)
            .is_some_and(MarkupNode::all_points_visible)
    }

    /// Whether every control point of the bound node is selected.
    ///
    /// `false` for an empty node and for a missing binding.
    #[must_use]
    pub fn all_points_selected(&self, scene: &Scene) -> bool {
        self.resolve(scene)
            .is_some_and(MarkupNode::all_points_selected)
    }

    /// Recomputes and returns the bound node's center position.
    pub fn update_center(&self, scene: &mut Scene) -> Option<DVec3> {
        self.resolve_mut(scene)?.update_center()
    }

    /// The reference point for whole-widget transforms, the current center.
    ///
    /// Recomputed on demand so handle interactions always pivot around the
    /// up-to-date mean of the world points.
    pub fn transformation_reference_point(&self, scene: &mut Scene) -> Option<DVec3> {
        self.update_center(scene)
    }

    /// Display position of the nth control point.
    #[must_use]
    pub fn nth_point_display_position(
        &self,
        scene: &Scene,
        viewport: &Viewport,
        index: usize,
    ) -> Option<Point> {
        let world = self.resolve(scene)?.point_position_world(index)?;
        Some(viewport.world_to_display(world))
    }

    /// Polls the bound node and display node for changes since the last
    /// render.
    ///
    /// Raises and returns the needs-render flag when either generation
    /// moved, the binding changed, or nothing has been rendered yet.
    pub fn update_from_markup(&mut self, scene: &Scene) -> bool {
        let node_generations = self
            .node
            .and_then(|id| scene.get(id))
            .map(|node| (node.structure_generation(), node.transform_generation()));
        if node_generations != self.seen_node_generations {
            self.seen_node_generations = node_generations;
            self.needs_render = true;
        }
        let display_generation = self.display.as_ref().map(DisplayNode::generation);
        if display_generation != self.seen_display_generation {
            self.seen_display_generation = display_generation;
            self.needs_render = true;
        }
        self.needs_render
    }

    /// Whether the representation must be rebuilt before the next frame.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Clears the needs-render flag after the owning widget rebuilt its
    /// geometry.
    pub fn mark_rendered(&mut self) {
        self.needs_render = false;
    }

    fn resolve<'a>(&self, scene: &'a Scene) -> Option<&'a MarkupNode> {
        let Some(id) = self.node else {
            log::warn!("no markup node bound to widget representation");
            return None;
        };
        let node = scene.get(id);
        if node.is_none() {
            log::warn!("markup node {id:?} no longer exists; ignoring");
        }
        node
    }

    fn resolve_mut<'a>(&self, scene: &'a mut Scene) -> Option<&'a mut MarkupNode> {
        let Some(id) = self.node else {
            log::warn!("no markup node bound to widget representation");
            return None;
        };
        if !scene.is_alive(id) {
            log::warn!("markup node {id:?} no longer exists; ignoring");
            return None;
        }
        scene.get_mut(id)
    }
}

impl Default for WidgetRepresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use waymark_display::{DisplayNode, PointCategory};
    use waymark_markup::{ControlPoint, MarkupKind, MarkupNode, Scene};

    use super::*;

    fn bound_representation(scene: &mut Scene, kind: MarkupKind) -> WidgetRepresentation {
        let id = scene.insert(MarkupNode::new(kind));
        let mut representation = WidgetRepresentation::new();
        representation.bind_node(id);
        representation
    }

    #[test]
    fn unbound_representation_renders_gray() {
        let representation = WidgetRepresentation::new();
        for category in PointCategory::ALL {
            assert_eq!(
                representation.widget_color(category),
                peniko::Color::new([0.5, 0.5, 0.5, 1.0])
            );
        }
    }

    #[test]
    fn empty_node_aggregates_are_false() {
        let mut scene = Scene::new();
        let representation = bound_representation(&mut scene, MarkupKind::Curve);
        assert!(!representation.all_points_visible(&scene));
        assert!(!representation.all_points_selected(&scene));
    }

    #[test]
    fn pipelines_partition_points_by_category() {
        let mut scene = Scene::new();
        let representation = {
            let mut node = MarkupNode::new(MarkupKind::Curve);
            node.push_point(ControlPoint::new(DVec3::ZERO));
            node.push_point(ControlPoint::new(DVec3::X).with_selected(true));
            node.push_point(ControlPoint::new(DVec3::Y));
            let mut hidden = ControlPoint::new(DVec3::Z);
            hidden.visible = false;
            node.push_point(hidden);
            let id = scene.insert(node);
            let mut representation = WidgetRepresentation::new();
            representation.bind_node(id);
            representation.set_display(Some(DisplayNode::new()));
            representation
        };

        let mut with_active = representation.clone();
        with_active.set_active_point(Some(2));
        let [unselected, selected, active] = with_active.control_point_pipelines(&scene);

        assert_eq!(unselected.positions, alloc::vec![DVec3::ZERO]);
        assert_eq!(selected.positions, alloc::vec![DVec3::X]);
        assert_eq!(active.positions, alloc::vec![DVec3::Y]);
        // The hidden point is in no pipeline.
        let total = unselected.positions.len() + selected.positions.len() + active.positions.len();
        assert_eq!(total, 3);
    }

    #[test]
    fn generation_polling_drives_needs_render() {
        let mut scene = Scene::new();
        let mut representation = bound_representation(&mut scene, MarkupKind::Fiducial);
        let id = representation.node().unwrap();

        assert!(representation.update_from_markup(&scene));
        representation.mark_rendered();
        assert!(!representation.update_from_markup(&scene));

        scene
            .get_mut(id)
            .unwrap()
            .push_point(ControlPoint::new(DVec3::X));
        assert!(representation.update_from_markup(&scene));
        representation.mark_rendered();

        // A display change is picked up the same way.
        representation.set_display(Some(DisplayNode::new()));
        assert!(representation.update_from_markup(&scene));
        representation.mark_rendered();
        if let Some(display) = representation.display_mut() {
            display.toggle_handles_interactive();
        }
        assert!(representation.update_from_markup(&scene));
    }

    #[test]
    fn labels_carry_index_priorities() {
        let mut scene = Scene::new();
        let mut node = MarkupNode::new(MarkupKind::Fiducial);
        node.push_point(ControlPoint::new(DVec3::ZERO).with_label("F-1"));
        node.push_point(ControlPoint::new(DVec3::X).with_label("F-2"));
        let id = scene.insert(node);
        let mut representation = WidgetRepresentation::new();
        representation.bind_node(id);

        let labels = representation.build_labels(&scene);
        assert_eq!(labels.entries.len(), 2);
        assert_eq!(labels.entries[0].text, "F-1");
        assert_eq!(labels.entries[0].priority, "0");
        assert_eq!(labels.entries[1].priority, "1");
    }
}
