//! Walkthrough: build a small hierarchy, capture neutral bounds, query the
//! true dimensions, rebuild the local bounding volume, and rescale.
//!
//! Run with `RUST_LOG=debug cargo run --example normalize` to see the
//! normalizer's capture/rescale logging.

use anyhow::Result;
use cgmath::{Rad, Vector3};
use truebounds::{BoundsNormalizer, MeshNode, Rotation, Scene};

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

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = Scene::new();

    // A crate with a lamp sitting on top, rotated and stretched.
    let mut crate_node = MeshNode::with_geometry("crate", cube(0.5));
    crate_node.position = Vector3::new(2.0, 0.0, -1.0);
    crate_node.rotation = Rotation::from_axis_angle(Vector3::unit_y(), Rad(0.6));
    crate_node.scale = Vector3::new(2.0, 1.0, 3.0);
    let crate_id = scene.add_node(crate_node);

    let mut lamp = MeshNode::with_geometry("lamp", cube(0.25));
    lamp.position = Vector3::new(0.0, 0.75, 0.0);
    scene.add_child(crate_id, lamp);

    let mut normalizer = BoundsNormalizer::new();
    normalizer.capture(&mut scene, crate_id)?;

    let dims = normalizer.dimensions(&scene, crate_id)?;
    println!("true dimensions: {:.2} x {:.2} x {:.2}", dims.x, dims.y, dims.z);

    let local = normalizer.rebuild_local_bounds(crate_id)?;
    println!("local bounds:    {:?} .. {:?}", local.min, local.max);
    normalizer.install_local_bounds(&mut scene, crate_id)?;

    normalizer.uniform_rescale(&mut scene, crate_id, 2.0)?;
    let dims = normalizer.dimensions(&scene, crate_id)?;
    println!(
        "after rescale:   {:.2} x {:.2} x {:.2} (max = {:.2})",
        dims.x,
        dims.y,
        dims.z,
        normalizer.max_dimension(&scene, crate_id)?
    );

    Ok(())
}
