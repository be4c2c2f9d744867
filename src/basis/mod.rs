//! # Basis Module
//!
//! Local axes of an orientation, read straight off a quaternion.
//!
//! For a unit quaternion `(x, y, z, w)` the rotation matrix is
//!
//! ```text
//! | 1 - 2(yy + zz)   2(xy - wz)       2(xz + wy)     |
//! | 2(xy + wz)       1 - 2(xx + zz)   2(yz - wx)     |
//! | 2(xz - wy)       2(yz + wx)       1 - 2(xx + yy) |
//! ```
//!
//! and its columns are the images of +X, +Y and +Z. Each function below
//! expands one column with the doubled products (`x2 = x + x`,
//! `xy2 = x * y2`, ...) instead of building the matrix, so `right(q)` is
//! `q * Vec3::X`, `up(q)` is `q * Vec3::Y` and `forward(q)` is `q * Vec3::Z`.
//!
//! The quaternion is not normalized. Non-unit input produces vectors that
//! are neither unit length nor orthogonal.

use glam::{Quat, Vec3};

/// Returns the rotated +X axis.
#[inline]
pub fn right(rotation: Quat) -> Vec3 {
    let [x, y, z, w] = rotation.to_array();
    let y2 = y + y;
    let z2 = z + z;

    let yy2 = y * y2;
    let zz2 = z * z2;
    let xy2 = x * y2;
    let xz2 = x * z2;
    let wy2 = w * y2;
    let wz2 = w * z2;

    Vec3::new(1.0 - (yy2 + zz2), xy2 + wz2, xz2 - wy2)
}

/// Returns the rotated +Y axis.
#[inline]
pub fn up(rotation: Quat) -> Vec3 {
    let [x, y, z, w] = rotation.to_array();
    let x2 = x + x;
    let y2 = y + y;
    let z2 = z + z;

    let xx2 = x * x2;
    let zz2 = z * z2;
    let xy2 = x * y2;
    let yz2 = y * z2;
    let wx2 = w * x2;
    let wz2 = w * z2;

    Vec3::new(xy2 - wz2, 1.0 - (xx2 + zz2), yz2 + wx2)
}

/// Returns the rotated +Z axis.
#[inline]
pub fn forward(rotation: Quat) -> Vec3 {
    let [x, y, z, w] = rotation.to_array();
    let x2 = x + x;
    let y2 = y + y;
    let z2 = z + z;

    let xx2 = x * x2;
    let yy2 = y * y2;
    let xz2 = x * z2;
    let yz2 = y * z2;
    let wx2 = w * x2;
    let wy2 = w * y2;

    Vec3::new(xz2 + wy2, yz2 - wx2, 1.0 - (xx2 + yy2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::EulerRot;

    const TOLERANCE: f32 = 1e-4;

    fn sample_rotations() -> Vec<Quat> {
        [
            (0.0_f32, 0.0_f32, 0.0_f32),
            (90.0, 0.0, 0.0),
            (45.0, 60.0, 90.0),
            (45.0, -30.0, -10.0),
            (-30.0, 60.0, 70.0),
            (-30.0, -185.0, 0.0),
        ]
        .into_iter()
        .map(|(x, y, z)| {
            Quat::from_euler(EulerRot::YXZ, y.to_radians(), x.to_radians(), z.to_radians())
        })
        .collect()
    }

    #[test]
    fn test_identity_basis() {
        assert_abs_diff_eq!(right(Quat::IDENTITY), Vec3::X);
        assert_abs_diff_eq!(up(Quat::IDENTITY), Vec3::Y);
        assert_abs_diff_eq!(forward(Quat::IDENTITY), Vec3::Z);
    }

    #[test]
    fn test_right_matches_rotated_axis() {
        for rotation in sample_rotations() {
            assert_abs_diff_eq!(right(rotation), rotation * Vec3::X, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn test_up_matches_rotated_axis() {
        for rotation in sample_rotations() {
            assert_abs_diff_eq!(up(rotation), rotation * Vec3::Y, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn test_forward_matches_rotated_axis() {
        for rotation in sample_rotations() {
            assert_abs_diff_eq!(forward(rotation), rotation * Vec3::Z, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let rotation = Quat::from_rotation_y(90.0_f32.to_radians());
        assert_abs_diff_eq!(right(rotation), Vec3::NEG_Z, epsilon = TOLERANCE);
        assert_abs_diff_eq!(up(rotation), Vec3::Y, epsilon = TOLERANCE);
        assert_abs_diff_eq!(forward(rotation), Vec3::X, epsilon = TOLERANCE);
    }

    #[test]
    fn test_non_unit_quaternion_is_not_normalized() {
        let scaled = Quat::from_xyzw(0.0, 0.0, 0.0, 2.0);
        // A pure-w quaternion has no imaginary terms to distort the axes.
        assert_abs_diff_eq!(right(scaled), Vec3::X);
        let skewed = Quat::from_xyzw(1.0, 0.0, 0.0, 1.0);
        assert!((up(skewed).length() - 1.0).abs() > 0.5);
    }
}
