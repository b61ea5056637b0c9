//! Tagged rotation representation with a total quaternion-to-Euler
//! conversion.
//!
//! Euler angles are applied in Y-X-Z order (yaw, then pitch, then roll),
//! so the rotation matrix is `Ry * Rx * Rz`.

use cgmath::{InnerSpace, Matrix3, Matrix4, Quaternion, Rad, Rotation3, Vector3, Zero};
use std::f32::consts::FRAC_PI_2;

/// A node's rotation, stored as exactly one representation at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    /// Euler angles in radians, applied Y then X then Z.
    Euler(Vector3<f32>),
    /// Unit quaternion.
    Quaternion(Quaternion<f32>),
}

impl Rotation {
    /// No rotation.
    pub fn identity() -> Self {
        Rotation::Euler(Vector3::zero())
    }

    /// Rotation of `angle` around the (unit) `axis`.
    pub fn from_axis_angle(axis: Vector3<f32>, angle: Rad<f32>) -> Self {
        Rotation::Quaternion(Quaternion::from_axis_angle(axis, angle))
    }

    /// Builds the rotation matrix for either representation.
    ///
    /// Quaternions are assumed to be unit length here; use [`Self::to_euler`]
    /// first when the quaternion may be degenerate.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        match *self {
            Rotation::Euler(e) => {
                Matrix4::from_angle_y(Rad(e.y))
                    * Matrix4::from_angle_x(Rad(e.x))
                    * Matrix4::from_angle_z(Rad(e.z))
            }
            Rotation::Quaternion(q) => Matrix4::from(q),
        }
    }

    /// Converts this rotation to Y-X-Z Euler angles.
    ///
    /// Total for any orientation: an already-Euler rotation is returned as
    /// is, and any quaternion with a defined orientation is converted
    /// through its rotation matrix. Returns `None` when the quaternion has
    /// no defined orientation (zero or non-finite magnitude).
    pub fn to_euler(&self) -> Option<Vector3<f32>> {
        match *self {
            Rotation::Euler(e) => Some(e),
            Rotation::Quaternion(q) => {
                let mag2 = q.magnitude2();
                if !mag2.is_finite() || mag2 <= f32::EPSILON {
                    return None;
                }
                Some(euler_from_matrix(&Matrix3::from(q.normalize())))
            }
        }
    }
}

/// Extracts Y-X-Z Euler angles from a pure rotation matrix.
///
/// With `R = Ry * Rx * Rz` the entry at row 1, column 2 is `-sin(x)`;
/// cgmath matrices are column-major, so that entry is `m.z.y`.
fn euler_from_matrix(m: &Matrix3<f32>) -> Vector3<f32> {
    let sx = -m.z.y;
    if sx >= 0.999_999 {
        // Gimbal lock, x = +pi/2: yaw and roll are coupled, pick roll = 0.
        Vector3::new(FRAC_PI_2, m.y.x.atan2(m.x.x), 0.0)
    } else if sx <= -0.999_999 {
        // Gimbal lock, x = -pi/2.
        Vector3::new(-FRAC_PI_2, (-m.y.x).atan2(m.x.x), 0.0)
    } else {
        Vector3::new(
            sx.clamp(-1.0, 1.0).asin(),
            m.z.x.atan2(m.z.z),
            m.x.y.atan2(m.y.y),
        )
    }
}
