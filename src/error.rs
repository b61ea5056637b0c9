//! Error types for bounding-geometry operations.

use thiserror::Error;

use crate::scene::NodeId;

/// Errors produced by the geometry normalizer.
///
/// All failures are local and synchronous: the caller sequences operations
/// incorrectly (query before capture) or supplies degenerate geometry, and
/// must re-capture or fix the geometry before retrying. None are fatal to
/// the host process.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A dimensions or bounding-volume query ran before neutral bounds were
    /// captured for the node, or after they were invalidated.
    #[error("no neutral bounds captured for node {0:?}")]
    StaleMetadata(NodeId),

    /// The geometry has zero extent in every axis (nothing to rescale), or
    /// its neutral frame is singular and cannot be inverted.
    #[error("degenerate geometry on node {0:?}")]
    DegenerateGeometry(NodeId),

    /// The node's rotation state has no defined orientation (for example a
    /// zero or non-finite quaternion). This is an internal consistency
    /// fault, not a recoverable user error.
    #[error("invalid rotation representation on node {0:?}")]
    InvalidRotationRepresentation(NodeId),
}
