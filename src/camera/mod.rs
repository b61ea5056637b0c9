//! # Camera Helpers
//!
//! Math consumed by camera and manipulation collaborators. The only
//! resident today is [`framing`], which maps a viewer's yaw to the cardinal
//! horizontal axis a 2D-constrained manipulation should affect.

pub mod framing;

pub use framing::framing_axis;
