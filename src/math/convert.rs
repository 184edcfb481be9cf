//! Mapping from the source engine's conventions (left-handed, Z up, centimeters,
//! degrees) to the target scene's (right-handed, Z up, meters, radians).

use glam::{DQuat, DVec3};

use crate::math::euler::euler_xyz_from_quat;

pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// Centimeters to meters, with the Y axis mirrored.
pub fn convert_position(x: f64, y: f64, z: f64) -> DVec3 {
    DVec3::new(
        x / CENTIMETERS_PER_METER,
        -y / CENTIMETERS_PER_METER,
        z / CENTIMETERS_PER_METER,
    )
}

/// Roll/pitch/yaw in degrees to an XYZ Euler triple in radians. Pitch and yaw are
/// negated to follow the mirrored Y axis.
pub fn convert_rotation_euler(roll: f64, pitch: f64, yaw: f64) -> DVec3 {
    DVec3::new(
        roll.to_radians(),
        (pitch * -1.0).to_radians(),
        (yaw * -1.0).to_radians(),
    )
}

/// Per-instance quaternion rotation to an XYZ Euler triple in radians.
///
/// The quaternion itself was never mirrored, so the X and Z angles are negated
/// after conversion to match the flipped position axis.
pub fn convert_rotation_quat(w: f64, x: f64, y: f64, z: f64) -> DVec3 {
    let euler = euler_xyz_from_quat(DQuat::from_xyzw(x, y, z, w));
    DVec3::new(-euler.x, euler.y, -euler.z)
}

/// Scale passes through; missing axes default to 1.
pub fn convert_scale(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> DVec3 {
    DVec3::new(x.unwrap_or(1.0), y.unwrap_or(1.0), z.unwrap_or(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn position_is_scaled_and_mirrored(x: f64, y: f64, z: f64) -> TestResult {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return TestResult::discard();
        }

        let converted = convert_position(x, y, z);
        TestResult::from_bool(
            converted.x == x / 100.0 && converted.y == -y / 100.0 && converted.z == z / 100.0,
        )
    }

    #[quickcheck]
    fn scale_passes_through(x: f64, y: f64, z: f64) -> TestResult {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return TestResult::discard();
        }

        TestResult::from_bool(convert_scale(Some(x), Some(y), Some(z)) == DVec3::new(x, y, z))
    }

    #[test]
    fn centimeters_become_meters() {
        assert_eq!(
            convert_position(100.0, 200.0, 300.0),
            DVec3::new(1.0, -2.0, 3.0)
        );
    }

    #[test]
    fn pitch_and_yaw_are_negated() {
        let euler = convert_rotation_euler(90.0, 45.0, 180.0);
        assert!((euler.x - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((euler.y + std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((euler.z + std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn missing_scale_axes_default_to_one() {
        assert_eq!(
            convert_scale(Some(2.0), None, None),
            DVec3::new(2.0, 1.0, 1.0)
        );
    }

    #[test]
    fn identity_quaternion_has_no_rotation() {
        let euler = convert_rotation_quat(1.0, 0.0, 0.0, 0.0);
        assert!(euler.abs_diff_eq(DVec3::ZERO, 1e-12));
    }

    #[test]
    fn quaternion_x_and_z_are_negated() {
        let half = 0.25_f64;
        // 0.5 rad about Z
        let euler = convert_rotation_quat(half.cos(), 0.0, 0.0, half.sin());
        assert!((euler.z + 0.5).abs() < 1e-9);

        // 0.5 rad about Y keeps its sign
        let euler = convert_rotation_quat(half.cos(), 0.0, half.sin(), 0.0);
        assert!((euler.y - 0.5).abs() < 1e-9);

        // 0.5 rad about X
        let euler = convert_rotation_quat(half.cos(), half.sin(), 0.0, 0.0);
        assert!((euler.x + 0.5).abs() < 1e-9);
    }
}
