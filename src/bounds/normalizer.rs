//! # Bounds Normalizer
//!
//! Computes and caches shape-only bounding data for mesh hierarchies.
//!
//! A hierarchy's world-space extents are only meaningful as a *shape*
//! description when they are sampled with rotation zeroed and scale reset to
//! one; otherwise the current transform leaks into the measurement. The
//! normalizer neutralizes a node's transform inside a scoped guard, samples
//! the hierarchy extents and world matrix in that pose, and restores the
//! original transform before the caller can observe it. Later queries
//! combine the cached snapshot with the node's current transform.
//!
//! ## How it works
//!
//! 1. **Capture**: zero rotation, unit scale, recompute world matrices,
//!    read extents + world matrix, restore (guaranteed on drop)
//! 2. **Dimensions**: cached extent difference times the current scale,
//!    per-component absolute value
//! 3. **Local bounds**: cached world corners pulled into local space through
//!    the inverse of the cached neutral world matrix
//!
//! The snapshots live in a side-table keyed by [`NodeId`], owned here rather
//! than attached to the externally owned scene nodes.

use std::collections::HashMap;

use cgmath::{ElementWise, Matrix4, SquareMatrix, Vector3};
use log::debug;

use super::{transform_point, Aabb};
use crate::error::GeometryError;
use crate::scene::{NodeId, Rotation, Scene};

/// Neutral-pose snapshot for one node.
///
/// `min`/`max` are the hierarchy's world-space bounding corners as if
/// rotation were identity and scale were unit; `world_matrix` is the node's
/// world transform in that same pose (position and parent chain still
/// applied). The three fields are always captured together and describe one
/// consistent snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralBounds {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
    pub world_matrix: Matrix4<f32>,
}

/// Scoped neutral pose: zeroes rotation and resets scale on entry, restores
/// both (and the affected world matrices) on drop, panic or not. Position
/// and parent linkage are part of the neutral pose and stay untouched.
struct NeutralPose<'a> {
    scene: &'a mut Scene,
    id: NodeId,
    rotation: Rotation,
    scale: Vector3<f32>,
}

impl<'a> NeutralPose<'a> {
    fn enter(scene: &'a mut Scene, id: NodeId) -> Self {
        let node = scene.node_mut(id);
        let rotation = node.rotation;
        let scale = node.scale;
        node.rotation = Rotation::identity();
        node.scale = Vector3::new(1.0, 1.0, 1.0);
        Self {
            scene,
            id,
            rotation,
            scale,
        }
    }

    fn scene(&mut self) -> &mut Scene {
        self.scene
    }
}

impl Drop for NeutralPose<'_> {
    fn drop(&mut self) {
        let node = self.scene.node_mut(self.id);
        node.rotation = self.rotation;
        node.scale = self.scale;
        // Leave the cached world matrices the way the caller last saw them.
        self.scene.compute_world_matrix(self.id);
    }
}

/// Owns neutral-pose snapshots for scene nodes and answers dimension and
/// bounding-volume queries from them.
///
/// Snapshots are created by [`Self::capture`], recomputed only explicitly
/// (re-capture after any geometry composition change), and discarded with
/// [`Self::invalidate`] when the node goes away.
pub struct BoundsNormalizer {
    cache: HashMap<NodeId, NeutralBounds>,
}

impl BoundsNormalizer {
    /// Creates an empty normalizer.
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Captures the neutral-pose bounds snapshot for a node.
    ///
    /// Converts a quaternion rotation to Euler angles first, so exactly one
    /// representation stays authoritative, then measures the hierarchy's
    /// world extents with the node's rotation zeroed and scale reset to one.
    /// The node's observable placement is unchanged when this returns:
    /// rotation and scale are restored even if reading the extents panics.
    pub fn capture(&mut self, scene: &mut Scene, id: NodeId) -> Result<(), GeometryError> {
        let euler = scene
            .node(id)
            .rotation
            .to_euler()
            .ok_or(GeometryError::InvalidRotationRepresentation(id))?;
        scene.node_mut(id).rotation = Rotation::Euler(euler);

        let snapshot = {
            let mut guard = NeutralPose::enter(scene, id);
            let scene = guard.scene();
            scene.compute_world_matrix(id);
            let bounds = scene.hierarchy_world_bounds(id);
            NeutralBounds {
                min: bounds.min,
                max: bounds.max,
                world_matrix: scene.world_matrix(id),
            }
        };

        debug!(
            "captured neutral bounds for node {:?}: min {:?}, max {:?}",
            id, snapshot.min, snapshot.max
        );
        self.cache.insert(id, snapshot);
        Ok(())
    }

    /// The cached snapshot for a node, if one was captured.
    pub fn neutral_bounds(&self, id: NodeId) -> Option<&NeutralBounds> {
        self.cache.get(&id)
    }

    /// True axis-aligned dimensions of the node's hierarchy.
    ///
    /// The cached neutral extents already describe the shape with rotation
    /// and scale removed, so only the scale axis of the current transform is
    /// re-applied. Scale components may be negative (mirroring); dimensions
    /// never are.
    pub fn dimensions(&self, scene: &Scene, id: NodeId) -> Result<Vector3<f32>, GeometryError> {
        let neutral = self.cache.get(&id).ok_or(GeometryError::StaleMetadata(id))?;
        let scaled = (neutral.max - neutral.min).mul_element_wise(scene.node(id).scale);
        Ok(scaled.map(f32::abs))
    }

    /// Largest of the three dimensions.
    pub fn max_dimension(&self, scene: &Scene, id: NodeId) -> Result<f32, GeometryError> {
        let dims = self.dimensions(scene, id)?;
        Ok(dims.x.max(dims.y).max(dims.z))
    }

    /// Rebuilds the node's local-space bounding volume from the snapshot.
    ///
    /// The cached corners are world-space; the bounding-info consumer wants
    /// them in the node's own frame. World to local goes through the inverse
    /// of the matrix captured at neutralization time - the *current* world
    /// matrix may carry rotation and scale that must not deform the box.
    /// The corners are transformed as points (translation included) and
    /// returned as given, unsorted.
    pub fn rebuild_local_bounds(&self, id: NodeId) -> Result<Aabb, GeometryError> {
        let neutral = self.cache.get(&id).ok_or(GeometryError::StaleMetadata(id))?;
        let inverse = neutral
            .world_matrix
            .invert()
            .ok_or(GeometryError::DegenerateGeometry(id))?;
        Ok(Aabb::new(
            transform_point(&inverse, neutral.min),
            transform_point(&inverse, neutral.max),
        ))
    }

    /// Rebuilds the local bounding volume and installs it on the node for
    /// the picking/culling consumer.
    pub fn install_local_bounds(
        &self,
        scene: &mut Scene,
        id: NodeId,
    ) -> Result<(), GeometryError> {
        let bounds = self.rebuild_local_bounds(id)?;
        scene.node_mut(id).bounding_box = Some(bounds);
        Ok(())
    }

    /// Scales the node uniformly so its largest dimension becomes
    /// `target_max`.
    ///
    /// Fails with [`GeometryError::DegenerateGeometry`] when the hierarchy
    /// has zero extent in every axis.
    pub fn uniform_rescale(
        &self,
        scene: &mut Scene,
        id: NodeId,
        target_max: f32,
    ) -> Result<(), GeometryError> {
        let current_max = self.max_dimension(scene, id)?;
        if current_max == 0.0 {
            return Err(GeometryError::DegenerateGeometry(id));
        }
        let ratio = target_max / current_max;
        scene.node_mut(id).scale *= ratio;
        scene.compute_world_matrix(id);
        debug!(
            "rescaled node {:?} by {} to reach max dimension {}",
            id, ratio, target_max
        );
        Ok(())
    }

    /// Discards the snapshot for a node. Returns whether one existed.
    pub fn invalidate(&mut self, id: NodeId) -> bool {
        self.cache.remove(&id).is_some()
    }

    /// Discards all snapshots.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for BoundsNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
