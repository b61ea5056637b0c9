//! Mesh nodes: transform state, hierarchy links, and local geometry.

use cgmath::{Matrix4, SquareMatrix, Vector3};

use super::rotation::Rotation;
use crate::bounds::Aabb;

/// Stable identifier for a node in a [`Scene`](super::Scene).
///
/// Also the key the bounds normalizer uses for its metadata side-table, so
/// metadata never has to be attached to the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index of this node.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node in the mesh hierarchy.
///
/// Carries the usual TRS transform plus the node's own local-space geometry
/// sample points (mesh vertices). The world matrix is cached and refreshed
/// through [`Scene::compute_world_matrix`](super::Scene::compute_world_matrix).
pub struct MeshNode {
    pub name: String,
    pub position: Vector3<f32>,
    pub rotation: Rotation,
    pub scale: Vector3<f32>,
    /// Local-space bounding volume installed for the picking consumer, if
    /// any.
    pub bounding_box: Option<Aabb>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) geometry: Vec<Vector3<f32>>,
    pub(crate) world_matrix: Matrix4<f32>,
}

impl MeshNode {
    /// Creates a node with no geometry of its own, placed at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Rotation::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            bounding_box: None,
            parent: None,
            children: Vec::new(),
            geometry: Vec::new(),
            world_matrix: Matrix4::identity(),
        }
    }

    /// Creates a node with the given local-space geometry points.
    pub fn with_geometry(name: impl Into<String>, geometry: Vec<Vector3<f32>>) -> Self {
        let mut node = Self::new(name);
        node.geometry = geometry;
        node
    }

    /// The node's local-space geometry points.
    pub fn geometry(&self) -> &[Vector3<f32>] {
        &self.geometry
    }

    /// Replaces the node's geometry.
    ///
    /// Any neutral bounds previously captured for this node (or an ancestor)
    /// are stale afterwards and must be re-captured.
    pub fn set_geometry(&mut self, geometry: Vec<Vector3<f32>>) {
        self.geometry = geometry;
    }

    /// Parent link, if this node was added as a child.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children of this node.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The cached world matrix from the last recomputation.
    pub fn world_matrix(&self) -> Matrix4<f32> {
        self.world_matrix
    }

    /// Builds the local transform. Order matters: T * R * S.
    pub fn local_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * self.rotation.to_matrix()
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}
