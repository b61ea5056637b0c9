//! # Scene Hierarchy
//!
//! A minimal parent/child mesh hierarchy: nodes with position, rotation,
//! scale, local geometry sample points, and cached world matrices.
//!
//! Nodes live in an arena owned by [`Scene`] and are addressed by [`NodeId`],
//! a stable identifier that the bounds normalizer also uses to key its
//! metadata side-table. Rotation is a tagged representation
//! ([`Rotation::Euler`] or [`Rotation::Quaternion`]) so that exactly one
//! form is authoritative at any time.

pub mod graph;
pub mod node;
pub mod rotation;

// Re-export commonly used types
pub use graph::Scene;
pub use node::{MeshNode, NodeId};
pub use rotation::Rotation;
