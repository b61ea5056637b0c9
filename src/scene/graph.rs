//! The scene arena: node storage, world-matrix recomputation, and
//! aggregate world-space hierarchy extents.

use cgmath::{Matrix4, SquareMatrix, Vector3};

use super::node::{MeshNode, NodeId};
use crate::bounds::{transform_point, Aabb};

/// Arena of mesh nodes addressed by [`NodeId`].
///
/// Node lookups index into the arena directly; passing an id that was not
/// handed out by this scene is a caller logic error and panics.
pub struct Scene {
    nodes: Vec<MeshNode>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a root-level node and returns its id.
    pub fn add_node(&mut self, node: MeshNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Adds `node` as a child of `parent` and returns its id.
    pub fn add_child(&mut self, parent: NodeId, mut node: MeshNode) -> NodeId {
        node.parent = Some(parent);
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Immutable access to a node.
    pub fn node(&self, id: NodeId) -> &MeshNode {
        &self.nodes[id.0]
    }

    /// Mutable access to a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut MeshNode {
        &mut self.nodes[id.0]
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Recomputes world matrices for the node, its ancestor chain, and its
    /// whole subtree, and returns the node's world matrix.
    ///
    /// The ancestor chain is refreshed root-first so the node's own matrix
    /// starts from an up-to-date parent transform.
    pub fn compute_world_matrix(&mut self, id: NodeId) -> Matrix4<f32> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            chain.push(node);
            current = self.nodes[node.0].parent;
        }
        for &node in chain.iter().rev() {
            let parent_world = match self.nodes[node.0].parent {
                Some(parent) => self.nodes[parent.0].world_matrix,
                None => Matrix4::identity(),
            };
            self.nodes[node.0].world_matrix = parent_world * self.nodes[node.0].local_matrix();
        }
        self.update_subtree(id);
        self.nodes[id.0].world_matrix
    }

    fn update_subtree(&mut self, id: NodeId) {
        let children = self.nodes[id.0].children.clone();
        let parent_world = self.nodes[id.0].world_matrix;
        for child in children {
            self.nodes[child.0].world_matrix = parent_world * self.nodes[child.0].local_matrix();
            self.update_subtree(child);
        }
    }

    /// The cached world matrix of a node.
    pub fn world_matrix(&self, id: NodeId) -> Matrix4<f32> {
        self.nodes[id.0].world_matrix
    }

    /// World-space position of a node (translation column of its cached
    /// world matrix).
    pub fn world_position(&self, id: NodeId) -> Vector3<f32> {
        self.nodes[id.0].world_matrix.w.truncate()
    }

    /// Aggregate world-space bounding box over a node and all of its
    /// descendants, using the cached world matrices.
    ///
    /// Call [`Self::compute_world_matrix`] first if transforms changed. A
    /// hierarchy with no geometry anywhere collapses to a point box at the
    /// node's world translation.
    pub fn hierarchy_world_bounds(&self, id: NodeId) -> Aabb {
        let mut bounds: Option<Aabb> = None;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current.0];
            stack.extend(node.children.iter().copied());
            for point in &node.geometry {
                let world = transform_point(&node.world_matrix, *point);
                bounds = Some(match bounds {
                    Some(mut aabb) => {
                        aabb.include(world);
                        aabb
                    }
                    None => Aabb::new(world, world),
                });
            }
        }
        bounds.unwrap_or_else(|| {
            let origin = self.world_position(id);
            Aabb::new(origin, origin)
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
