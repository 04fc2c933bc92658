// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end widget scenarios: a scene, a viewport, and a representation
//! working together.

use glam::DVec3;
use kurbo::{Point, Size};

use waymark_markup::{ControlPoint, DeferredRemover, MarkupKind, MarkupNode, Scene};
use waymark_representation::{CoordinateSpace, WidgetRepresentation};
use waymark_view3d::Viewport;

/// A viewport looking straight down the z axis at the center of the test
/// square.
fn viewport() -> Viewport {
    let mut viewport = Viewport::new(Size::new(800.0, 600.0));
    viewport
        .camera_mut()
        .set_position(DVec3::new(5.0, 5.0, 100.0));
    viewport.camera_mut().set_focal_point(DVec3::new(5.0, 5.0, 0.0));
    viewport
}

/// Corners of a 10x10 square in the z = 0 plane.
fn square_corners() -> [DVec3; 4] {
    [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(10.0, 10.0, 0.0),
        DVec3::new(0.0, 10.0, 0.0),
    ]
}

fn square_node(kind: MarkupKind, closed: bool) -> MarkupNode {
    let mut node = MarkupNode::new(kind);
    for corner in square_corners() {
        node.push_point(ControlPoint::new(corner));
    }
    node.set_closed_loop(closed);
    node
}

fn bind(scene: &mut Scene, node: MarkupNode) -> WidgetRepresentation {
    let id = scene.insert(node);
    let mut representation = WidgetRepresentation::new();
    representation.bind_node(id);
    representation
}

#[test]
fn click_on_segment_midpoint_inserts_after_segment_start() {
    let mut scene = Scene::new();
    let representation = bind(&mut scene, square_node(MarkupKind::Curve, false));
    let viewport = viewport();

    // Midpoint of the segment from point 1 to point 2.
    let midpoint = DVec3::new(10.0, 5.0, 0.0);
    let click = viewport.world_to_display(midpoint);

    let hit = representation
        .hit_test(&scene, &viewport, click)
        .expect("midpoint click is within tolerance");
    assert_eq!(hit.insertion_index, 2);
    assert!(hit.closest_world.distance(midpoint) < 1e-6);
}

#[test]
fn click_on_wrap_segment_of_closed_curve_inserts_at_zero() {
    let mut scene = Scene::new();
    let representation = bind(&mut scene, square_node(MarkupKind::Curve, true));
    let viewport = viewport();

    // Midpoint of the wrap segment from the last point back to the first.
    let midpoint = DVec3::new(0.0, 5.0, 0.0);
    let click = viewport.world_to_display(midpoint);

    let hit = representation
        .hit_test(&scene, &viewport, click)
        .expect("wrap midpoint click is within tolerance");
    assert_eq!(hit.insertion_index, 0);
    assert!(hit.closest_world.distance(midpoint) < 1e-6);
}

#[test]
fn open_curve_ignores_the_wrap_segment() {
    let mut scene = Scene::new();
    let representation = bind(&mut scene, square_node(MarkupKind::Curve, false));
    let viewport = viewport();

    // The same click that hits the wrap segment of the closed curve finds
    // nothing on the open one: the nearest real segment is five world units
    // away, far outside the pixel-derived tolerance.
    let click = viewport.world_to_display(DVec3::new(0.0, 5.0, 0.0));
    assert!(representation.hit_test(&scene, &viewport, click).is_none());
}

#[test]
fn insertion_index_never_exceeds_point_count() {
    let mut scene = Scene::new();
    let representation = bind(&mut scene, square_node(MarkupKind::Curve, true));
    let mut wide = representation.clone();
    wide.set_pixel_tolerance(2000.0);
    let viewport = viewport();

    for x in (0..800).step_by(80) {
        for y in (0..600).step_by(60) {
            let click = Point::new(f64::from(x), f64::from(y));
            if let Some(hit) = wide.hit_test(&scene, &viewport, click) {
                assert!(hit.insertion_index <= 4, "index {}", hit.insertion_index);
            }
        }
    }
}

#[test]
fn display_space_build_projects_through_the_camera() {
    let mut scene = Scene::new();
    let representation = bind(&mut scene, square_node(MarkupKind::Curve, true));
    let viewport = viewport();

    let world = representation.build_line(&scene, &viewport, CoordinateSpace::World);
    assert_eq!(world.points, square_corners().to_vec());
    assert_eq!(world.line, vec![0, 1, 2, 3, 0]);

    let display = representation.build_line(&scene, &viewport, CoordinateSpace::Display);
    assert_eq!(display.line, world.line);
    for (vertex, corner) in display.points.iter().zip(square_corners()) {
        let expected = viewport.world_to_display(corner);
        assert!((vertex.x - expected.x).abs() < 1e-9);
        assert!((vertex.y - expected.y).abs() < 1e-9);
        assert!(vertex.z > 0.0 && vertex.z < 1.0, "depth {}", vertex.z);
    }
}

#[test]
fn empty_node_builds_empty_datasets_and_false_aggregates() {
    let mut scene = Scene::new();
    let representation = bind(&mut scene, MarkupNode::new(MarkupKind::Curve));
    let viewport = viewport();

    assert!(representation
        .build_line(&scene, &viewport, CoordinateSpace::World)
        .is_empty());
    assert!(representation.build_labels(&scene).is_empty());
    assert!(!representation.all_points_visible(&scene));
    assert!(!representation.all_points_selected(&scene));
    assert!(representation
        .hit_test(&scene, &viewport, Point::new(400.0, 300.0))
        .is_none());
}

#[test]
fn world_transform_moves_hits_and_reference_point() {
    let mut scene = Scene::new();
    let mut node = square_node(MarkupKind::Curve, false);
    node.set_world_transform(glam::DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0)));
    let representation = bind(&mut scene, node);
    let viewport = viewport();

    let midpoint = DVec3::new(10.0, 5.0, 5.0);
    let click = viewport.world_to_display(midpoint);
    let hit = representation
        .hit_test(&scene, &viewport, click)
        .expect("transformed midpoint is within tolerance");
    assert_eq!(hit.insertion_index, 2);
    assert!(hit.closest_world.distance(midpoint) < 1e-6);

    let center = representation
        .transformation_reference_point(&mut scene)
        .expect("center of a populated node");
    assert!(center.distance(DVec3::new(5.0, 5.0, 5.0)) < 1e-12);
}

#[test]
fn deferred_removal_leaves_a_stale_binding_that_degrades_quietly() {
    let mut scene = Scene::new();
    let representation = bind(&mut scene, square_node(MarkupKind::Curve, false));
    let id = representation.node().expect("bound above");
    let viewport = viewport();

    let mut remover = DeferredRemover::new();
    assert!(remover.request_remove(id));
    // Nothing happens until the deferred pass runs.
    assert!(scene.is_alive(id));
    remover.run(&mut scene);
    assert!(!scene.is_alive(id));

    // Every entry point degrades to its empty result on the stale binding.
    assert!(representation
        .hit_test(&scene, &viewport, Point::new(400.0, 300.0))
        .is_none());
    assert!(representation
        .build_line(&scene, &viewport, CoordinateSpace::World)
        .is_empty());
    assert!(!representation.all_points_visible(&scene));
}

#[test]
fn hit_tolerance_follows_the_camera() {
    let mut scene = Scene::new();
    let representation = bind(&mut scene, square_node(MarkupKind::Curve, false));
    let mut viewport = viewport();

    // A click 0.3 world units off the segment midpoint: close up, one pixel
    // of tolerance covers far less than that, so it misses.
    let off_segment = DVec3::new(10.3, 5.0, 0.0);
    let near_miss = viewport.world_to_display(off_segment);
    assert!(representation.hit_test(&scene, &viewport, near_miss).is_none());

    // Backing the camera far away re-derives the world tolerance from the
    // same pixel tolerance, which now spans whole world units, so the same
    // world offset hits.
    viewport
        .camera_mut()
        .set_position(DVec3::new(5.0, 5.0, 4000.0));
    viewport.camera_mut().set_clipping_range(1.0, 10000.0);
    let click = viewport.world_to_display(off_segment);
    let hit = representation
        .hit_test(&scene, &viewport, click)
        .expect("tolerance grows with camera distance");
    assert_eq!(hit.insertion_index, 2);
}
