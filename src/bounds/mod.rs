//! # Bounding Geometry
//!
//! Axis-aligned bounding boxes and the transformation-normalized bounds
//! cache.
//!
//! [`Aabb`] is the two-corner box handed to picking/culling consumers.
//! [`BoundsNormalizer`] owns the neutral-pose snapshots that make true
//! dimensions and local-space bounding volumes computable for rotated,
//! scaled, nested hierarchies.

pub mod normalizer;

pub use normalizer::{BoundsNormalizer, NeutralBounds};

use cgmath::{Matrix4, Vector3};

/// Transforms a point (translation included) by an affine matrix, with
/// homogeneous divide.
pub fn transform_point(matrix: &Matrix4<f32>, point: Vector3<f32>) -> Vector3<f32> {
    let transformed = matrix * point.extend(1.0);
    transformed.truncate() / transformed.w
}

/// Axis-aligned bounding box defined by two corner points.
///
/// Corners are stored exactly as given; callers that construct a box from
/// transformed corners get those corners back unsorted, matching what a
/// bounding-info consumer receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Create a new AABB from two corners
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create an AABB enclosing a set of points
    pub fn from_points(points: &[Vector3<f32>]) -> Self {
        let mut iter = points.iter();
        let first = match iter.next() {
            Some(point) => *point,
            None => Vector3::new(0.0, 0.0, 0.0),
        };
        let mut aabb = Self::new(first, first);
        for point in iter {
            aabb.include(*point);
        }
        aabb
    }

    /// Grow the box to contain `point`
    pub fn include(&mut self, point: Vector3<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// The eight corners of the box
    pub fn corners(&self) -> [Vector3<f32>; 8] {
        [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Edge lengths of the box
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Center point of the box
    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    /// Apply a transformation matrix to the AABB
    ///
    /// Transforms all 8 corners and re-aggregates the bounds, so the result
    /// stays axis-aligned in the target space.
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        let corners = self.corners();
        let transformed: Vec<Vector3<f32>> = corners
            .iter()
            .map(|corner| transform_point(matrix, *corner))
            .collect();
        Self::from_points(&transformed)
    }
}
