//! Horizontal framing axis from a viewer's yaw.
//!
//! When a drag manipulation is constrained to one horizontal axis, the axis
//! that feels natural is the one most aligned with the camera's current
//! forward/right direction. The yaw circle is split into four 90 degree
//! sectors centered on 0/90/180/270 degrees, each mapped to an axis-aligned
//! unit vector.

use cgmath::{Vector3, Zero};
use std::f32::consts::PI;

/// Converts radians to degrees, folded into (-360, 360).
pub fn radians_to_degrees(angle_in_radians: f32) -> f32 {
    (180.0 * angle_in_radians / PI) % 360.0
}

/// Converts degrees to radians, folding the input into (-360, 360) first.
pub fn degrees_to_radians(angle_in_degrees: f32) -> f32 {
    PI * (angle_in_degrees % 360.0) / 180.0
}

/// Returns the angle in degrees, normalized into `[0, 360)`.
///
/// Negative angles convert accordingly (-20 degrees becomes 340 degrees).
pub fn normalize_angle_degrees(angle_in_radians: f32) -> f32 {
    let degrees = radians_to_degrees(angle_in_radians);
    if degrees < 0.0 {
        360.0 - degrees.abs()
    } else {
        degrees
    }
}

/// Cardinal horizontal unit vector most aligned with a viewer's yaw.
///
/// Sector boundaries sit at 45/135/225/315 degrees. The comparisons keep
/// the original partition exactly, including its asymmetry at the
/// wraparound: 315 degrees itself belongs to the `(1, 0, 0)` sector.
/// Non-finite yaw falls through every sector and yields the zero vector.
pub fn framing_axis(yaw_radians: f32) -> Vector3<f32> {
    let mut axis = Vector3::zero();
    let yaw = normalize_angle_degrees(yaw_radians);
    if (0.0..=45.0).contains(&yaw) || (315.0..=360.0).contains(&yaw) {
        axis = Vector3::new(1.0, 0.0, 0.0);
    } else if yaw > 45.0 && yaw <= 135.0 {
        axis = Vector3::new(0.0, 0.0, -1.0);
    } else if yaw > 135.0 && yaw <= 225.0 {
        axis = Vector3::new(-1.0, 0.0, 0.0);
    } else if yaw > 225.0 && yaw < 315.0 {
        axis = Vector3::new(0.0, 0.0, 1.0);
    }
    axis
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn axis_at_degrees(degrees: f32) -> Vector3<f32> {
        framing_axis(degrees_to_radians(degrees))
    }

    #[test]
    fn test_cardinal_yaws() {
        assert_eq!(framing_axis(0.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(axis_at_degrees(90.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(axis_at_degrees(180.0), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(axis_at_degrees(270.0), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_spec_table() {
        assert_eq!(axis_at_degrees(200.0), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(axis_at_degrees(350.0), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_sector_interiors() {
        assert_eq!(axis_at_degrees(44.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(axis_at_degrees(46.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(axis_at_degrees(134.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(axis_at_degrees(136.0), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(axis_at_degrees(224.0), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(axis_at_degrees(226.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(axis_at_degrees(314.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(axis_at_degrees(316.0), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_periodic_modulo_full_turns() {
        for degrees in [10.0f32, 100.0, 190.0, 280.0] {
            let base = axis_at_degrees(degrees);
            for turns in [-2.0f32, -1.0, 1.0, 3.0] {
                assert_eq!(axis_at_degrees(degrees + 360.0 * turns), base);
            }
        }
    }

    #[test]
    fn test_negative_yaw_wraps() {
        assert_relative_eq!(
            normalize_angle_degrees(degrees_to_radians(-20.0)),
            340.0,
            epsilon = 1e-3
        );
        assert_eq!(axis_at_degrees(-10.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(axis_at_degrees(-90.0), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_non_finite_yaw_is_zero_vector() {
        assert_eq!(framing_axis(f32::NAN), Vector3::new(0.0, 0.0, 0.0));
    }
}
