//! End-to-end properties of the bounds normalizer: capture, query,
//! rebuild, rescale, and the world/local round-trip under transforms
//! applied after capture.

use approx::assert_relative_eq;
use cgmath::{Rad, Vector3};
use truebounds::{BoundsNormalizer, GeometryError, MeshNode, Rotation, Scene};

/// Corner points of an origin-centered cube.
fn cube(half: f32) -> Vec<Vector3<f32>> {
    let mut points = Vec::with_capacity(8);
    for i in 0..8 {
        points.push(Vector3::new(
            if i & 1 == 0 { -half } else { half },
            if i & 2 == 0 { -half } else { half },
            if i & 4 == 0 { -half } else { half },
        ));
    }
    points
}

#[test]
fn unit_pose_dimensions_equal_raw_extents() {
    let mut scene = Scene::new();
    let mut node = MeshNode::with_geometry("box", cube(0.5));
    node.position = Vector3::new(1.0, 2.0, 3.0);
    let id = scene.add_node(node);

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, id).unwrap();

    let neutral = normalizer.neutral_bounds(id).unwrap();
    let raw = neutral.max - neutral.min;
    let dims = normalizer.dimensions(&scene, id).unwrap();
    assert_relative_eq!(dims.x, raw.x, epsilon = 1e-6);
    assert_relative_eq!(dims.y, raw.y, epsilon = 1e-6);
    assert_relative_eq!(dims.z, raw.z, epsilon = 1e-6);
}

#[test]
fn scaled_cube_reports_true_dimensions() {
    let mut scene = Scene::new();
    let mut node = MeshNode::with_geometry("box", cube(0.5));
    node.scale = Vector3::new(2.0, 3.0, 4.0);
    let id = scene.add_node(node);

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, id).unwrap();

    let dims = normalizer.dimensions(&scene, id).unwrap();
    assert_relative_eq!(dims.x, 2.0, epsilon = 1e-5);
    assert_relative_eq!(dims.y, 3.0, epsilon = 1e-5);
    assert_relative_eq!(dims.z, 4.0, epsilon = 1e-5);
}

#[test]
fn dimensions_scale_component_wise_with_absolute_scale() {
    let mut scene = Scene::new();
    let id = scene.add_node(MeshNode::with_geometry("box", cube(0.5)));

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, id).unwrap();
    let unit_dims = normalizer.dimensions(&scene, id).unwrap();

    for scale in [
        Vector3::new(2.0, 3.0, 4.0),
        Vector3::new(-1.5, 0.5, -2.0),
        Vector3::new(0.0, 1.0, 1.0),
    ] {
        scene.node_mut(id).scale = scale;
        let dims = normalizer.dimensions(&scene, id).unwrap();
        assert_relative_eq!(dims.x, unit_dims.x * scale.x.abs(), epsilon = 1e-5);
        assert_relative_eq!(dims.y, unit_dims.y * scale.y.abs(), epsilon = 1e-5);
        assert_relative_eq!(dims.z, unit_dims.z * scale.z.abs(), epsilon = 1e-5);
    }
}

#[test]
fn rotation_does_not_change_dimensions() {
    let mut scene = Scene::new();
    let mut node = MeshNode::with_geometry("box", cube(0.5));
    node.scale = Vector3::new(2.0, 3.0, 4.0);
    node.rotation = Rotation::Euler(Vector3::new(0.4, 1.1, -0.6));
    let id = scene.add_node(node);

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, id).unwrap();

    let dims = normalizer.dimensions(&scene, id).unwrap();
    assert_relative_eq!(dims.x, 2.0, epsilon = 1e-5);
    assert_relative_eq!(dims.y, 3.0, epsilon = 1e-5);
    assert_relative_eq!(dims.z, 4.0, epsilon = 1e-5);
}

#[test]
fn capture_is_idempotent() {
    let mut scene = Scene::new();
    let mut node = MeshNode::with_geometry("box", cube(0.5));
    node.position = Vector3::new(1.0, -2.0, 0.5);
    node.rotation = Rotation::Euler(Vector3::new(0.2, 0.9, 0.1));
    node.scale = Vector3::new(1.5, 2.5, 0.5);
    let id = scene.add_node(node);

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, id).unwrap();
    let first = *normalizer.neutral_bounds(id).unwrap();
    normalizer.capture(&mut scene, id).unwrap();
    let second = *normalizer.neutral_bounds(id).unwrap();

    assert_relative_eq!(first.min, second.min, epsilon = 1e-6);
    assert_relative_eq!(first.max, second.max, epsilon = 1e-6);
    assert_relative_eq!(first.world_matrix, second.world_matrix, epsilon = 1e-6);

    let rebuilt_first = normalizer.rebuild_local_bounds(id).unwrap();
    normalizer.capture(&mut scene, id).unwrap();
    let rebuilt_second = normalizer.rebuild_local_bounds(id).unwrap();
    assert_relative_eq!(rebuilt_first.min, rebuilt_second.min, epsilon = 1e-6);
    assert_relative_eq!(rebuilt_first.max, rebuilt_second.max, epsilon = 1e-6);
}

#[test]
fn local_bounds_round_trip_through_current_world_matrix() {
    // Parent and child cubes share X/Z extents, so every corner of the
    // combined local box is an actual geometry point and the round-trip
    // equality is exact up to float error.
    let mut scene = Scene::new();
    let mut parent = MeshNode::with_geometry("parent", cube(0.5));
    parent.position = Vector3::new(1.0, 0.0, -2.0);
    let parent_id = scene.add_node(parent);
    let mut child = MeshNode::with_geometry("child", cube(0.5));
    child.position = Vector3::new(0.0, 2.0, 0.0);
    scene.add_child(parent_id, child);

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, parent_id).unwrap();

    // Rotation and scale applied after capture must not leak into the
    // rebuilt box, and transforming the box back out must land on the
    // current world-space extents.
    scene.node_mut(parent_id).rotation = Rotation::Euler(Vector3::new(0.3, 0.8, -0.5));
    scene.node_mut(parent_id).scale = Vector3::new(1.5, 0.5, 2.0);
    scene.compute_world_matrix(parent_id);

    let local = normalizer.rebuild_local_bounds(parent_id).unwrap();
    let world = local.transform(&scene.world_matrix(parent_id));
    let expected = scene.hierarchy_world_bounds(parent_id);

    assert_relative_eq!(world.min, expected.min, epsilon = 1e-4);
    assert_relative_eq!(world.max, expected.max, epsilon = 1e-4);
}

#[test]
fn rebuilt_local_bounds_center_on_node_frame() {
    let mut scene = Scene::new();
    let mut node = MeshNode::with_geometry("box", cube(0.5));
    node.position = Vector3::new(10.0, 5.0, -3.0);
    node.rotation = Rotation::from_axis_angle(Vector3::unit_y(), Rad(0.7));
    let id = scene.add_node(node);

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, id).unwrap();
    let local = normalizer.rebuild_local_bounds(id).unwrap();

    // The neutral world box is the cube around the node's position; pulled
    // through the inverse neutral matrix it recenters on the origin.
    assert_relative_eq!(local.min, Vector3::new(-0.5, -0.5, -0.5), epsilon = 1e-5);
    assert_relative_eq!(local.max, Vector3::new(0.5, 0.5, 0.5), epsilon = 1e-5);
}

#[test]
fn uniform_rescale_reaches_target_max_dimension() {
    let mut scene = Scene::new();
    let mut node = MeshNode::with_geometry("box", cube(0.5));
    node.scale = Vector3::new(2.0, 3.0, 4.0);
    let id = scene.add_node(node);

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, id).unwrap();

    for target in [5.0f32, 0.25, 12.0] {
        normalizer.uniform_rescale(&mut scene, id, target).unwrap();
        let max = normalizer.max_dimension(&scene, id).unwrap();
        assert_relative_eq!(max, target, epsilon = 1e-4);
    }

    // Proportions survive uniform rescaling.
    let dims = normalizer.dimensions(&scene, id).unwrap();
    assert_relative_eq!(dims.x / dims.z, 0.5, epsilon = 1e-4);
    assert_relative_eq!(dims.y / dims.z, 0.75, epsilon = 1e-4);
}

#[test]
fn query_before_capture_fails_with_stale_metadata() {
    let mut scene = Scene::new();
    let id = scene.add_node(MeshNode::with_geometry("box", cube(0.5)));

    let normalizer = BoundsNormalizer::new();
    assert_eq!(
        normalizer.dimensions(&scene, id),
        Err(GeometryError::StaleMetadata(id))
    );
    assert_eq!(
        normalizer.max_dimension(&scene, id),
        Err(GeometryError::StaleMetadata(id))
    );
    assert_eq!(
        normalizer.rebuild_local_bounds(id),
        Err(GeometryError::StaleMetadata(id))
    );
    assert_eq!(
        normalizer.uniform_rescale(&mut scene, id, 1.0),
        Err(GeometryError::StaleMetadata(id))
    );
}

#[test]
fn quaternion_node_measures_like_euler_node() {
    let mut scene = Scene::new();

    let mut euler_node = MeshNode::with_geometry("euler", cube(0.5));
    euler_node.scale = Vector3::new(2.0, 1.0, 3.0);
    euler_node.rotation = Rotation::Euler(Vector3::new(0.0, 0.9, 0.0));
    let euler_id = scene.add_node(euler_node);

    let mut quat_node = MeshNode::with_geometry("quat", cube(0.5));
    quat_node.scale = Vector3::new(2.0, 1.0, 3.0);
    quat_node.rotation = Rotation::from_axis_angle(Vector3::unit_y(), Rad(0.9));
    let quat_id = scene.add_node(quat_node);

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, euler_id).unwrap();
    normalizer.capture(&mut scene, quat_id).unwrap();

    let euler_dims = normalizer.dimensions(&scene, euler_id).unwrap();
    let quat_dims = normalizer.dimensions(&scene, quat_id).unwrap();
    assert_relative_eq!(euler_dims, quat_dims, epsilon = 1e-5);
}
