// src/lib.rs
//! Truebounds
//!
//! Transformation-normalized bounding geometry for 3D scene hierarchies.
//!
//! A scene graph's built-in "world bounding box" query folds the node's
//! current rotation and scale into its answer, so it cannot tell you the
//! *shape* of an object once the object has been rotated or non-uniformly
//! scaled. This crate re-derives shape-only bounds by temporarily
//! neutralizing a node's transform, sampling the hierarchy's extents in that
//! neutral pose, caching the neutral world matrix, and converting between
//! world and local space via matrix inversion.
//!
//! ## Key types
//!
//! - [`Scene`] / [`MeshNode`] - a minimal parent/child mesh hierarchy with
//!   position, rotation, scale, and cached world matrices
//! - [`BoundsNormalizer`] - captures neutral-pose snapshots and answers
//!   dimension and bounding-volume queries from them
//! - [`Aabb`] - two-corner axis-aligned box consumable by picking/culling
//! - [`camera::framing`] - maps a viewer's yaw to a cardinal horizontal axis
//!   for drag-constraint logic
//!
//! ## Usage
//!
//! ```
//! use cgmath::Vector3;
//! use truebounds::{BoundsNormalizer, MeshNode, Scene};
//!
//! # fn main() -> Result<(), truebounds::GeometryError> {
//! // A unit cube, stretched to 2 x 3 x 4
//! let corners: Vec<Vector3<f32>> = (0..8)
//!     .map(|i| {
//!         Vector3::new(
//!             if i & 1 == 0 { -0.5 } else { 0.5 },
//!             if i & 2 == 0 { -0.5 } else { 0.5 },
//!             if i & 4 == 0 { -0.5 } else { 0.5 },
//!         )
//!     })
//!     .collect();
//!
//! let mut scene = Scene::new();
//! let mut node = MeshNode::with_geometry("crate", corners);
//! node.scale = Vector3::new(2.0, 3.0, 4.0);
//! let id = scene.add_node(node);
//!
//! let mut normalizer = BoundsNormalizer::new();
//! normalizer.capture(&mut scene, id)?;
//!
//! let dims = normalizer.dimensions(&scene, id)?;
//! assert!((dims.x - 2.0).abs() < 1e-5);
//! assert!((dims.y - 3.0).abs() < 1e-5);
//! assert!((dims.z - 4.0).abs() < 1e-5);
//! # Ok(())
//! # }
//! ```

pub mod bounds;
pub mod camera;
pub mod error;
pub mod scene;

// Re-export main types for convenience
pub use bounds::{Aabb, BoundsNormalizer, NeutralBounds};
pub use camera::framing::framing_axis;
pub use error::GeometryError;
pub use scene::{MeshNode, NodeId, Rotation, Scene};
