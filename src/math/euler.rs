use glam::{DMat4, DQuat, DVec3, EulerRot};

/// Rotation for an XYZ Euler triple in radians. X is applied first, then Y, then Z.
pub fn quat_from_euler_xyz(euler: DVec3) -> DQuat {
    // Rz * Ry * Rx, which glam calls intrinsic ZYX.
    DQuat::from_euler(EulerRot::ZYX, euler.z, euler.y, euler.x)
}

/// Inverse of [`quat_from_euler_xyz`]. Non-unit quaternions are normalized first,
/// degenerate ones are treated as identity.
pub fn euler_xyz_from_quat(rotation: DQuat) -> DVec3 {
    let rotation = normalize_or_identity(rotation);
    let (z, y, x) = rotation.to_euler(EulerRot::ZYX);
    DVec3::new(x, y, z)
}

pub fn normalize_or_identity(rotation: DQuat) -> DQuat {
    let length_squared = rotation.length_squared();

    if length_squared.is_finite() && length_squared > 0.0 {
        rotation.normalize()
    } else {
        DQuat::IDENTITY
    }
}

/// Splits an affine matrix into translation, XYZ Euler rotation and scale.
pub fn decompose_xyz(matrix: &DMat4) -> (DVec3, DVec3, DVec3) {
    let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
    (translation, euler_xyz_from_quat(rotation), scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: DVec3, b: DVec3) {
        assert!(a.abs_diff_eq(b, 1e-9), "{a:?} != {b:?}");
    }

    #[test]
    fn x_is_applied_before_z() {
        let rotation = quat_from_euler_xyz(DVec3::new(FRAC_PI_2, 0.0, FRAC_PI_2));

        // X turns +Y into +Z, Z leaves it there.
        assert_close(rotation * DVec3::Y, DVec3::Z);
        // X leaves +X alone, Z turns it into +Y.
        assert_close(rotation * DVec3::X, DVec3::Y);
    }

    #[test]
    fn euler_survives_quaternion_round_trip() {
        let euler = DVec3::new(0.3, -0.7, 1.9);
        assert_close(euler_xyz_from_quat(quat_from_euler_xyz(euler)), euler);
    }

    #[test]
    fn degenerate_quaternion_is_identity() {
        assert_close(euler_xyz_from_quat(DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0)), DVec3::ZERO);
    }

    #[test]
    fn unnormalized_quaternion_is_normalized() {
        let q = quat_from_euler_xyz(DVec3::new(0.0, 0.0, 0.5));
        let scaled = DQuat::from_xyzw(q.x * 3.0, q.y * 3.0, q.z * 3.0, q.w * 3.0);
        assert_close(euler_xyz_from_quat(scaled), DVec3::new(0.0, 0.0, 0.5));
    }
}
