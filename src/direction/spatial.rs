//! # Spatial Directions
//!
//! Yaw/pitch and direction conversions in 3D, with Y as the vertical axis.

use crate::angle::{normalize_signed, DEG_TO_RAD, RAD_TO_DEG};
use glam::Vec3;

/// Returns the unit direction for a yaw and pitch given in degrees.
///
/// Yaw turns about the Y axis from +X toward +Z. Pitch raises the direction
/// above the XZ plane toward +Y.
///
/// # Examples
///
/// ```
/// use rotation_math::yaw_pitch_to_direction3;
///
/// let up = yaw_pitch_to_direction3(0.0, 90.0);
/// assert!((up.y - 1.0).abs() < 1e-6);
/// ```
pub fn yaw_pitch_to_direction3(yaw: f32, pitch: f32) -> Vec3 {
    direction_from_radians(yaw * DEG_TO_RAD, pitch * DEG_TO_RAD)
}

fn direction_from_radians(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
}

/// Returns the yaw of a direction in degrees `[-180, 180)`.
///
/// Only the horizontal components are read, so any length works. Yaw is
/// undefined straight up or down and comes back as `0` there.
pub fn direction3_to_yaw(direction: Vec3) -> f32 {
    normalize_signed(direction.z.atan2(direction.x) * RAD_TO_DEG)
}

/// Returns the pitch of a unit direction in degrees `[-90, 90]`.
///
/// The direction must be unit length. A vertical component outside
/// `[-1, 1]` yields NaN.
pub fn direction3_to_pitch(direction: Vec3) -> f32 {
    direction.y.asin() * RAD_TO_DEG
}

/// Returns `(yaw, pitch)` of a unit direction in degrees.
pub fn direction3_to_yaw_pitch(direction: Vec3) -> (f32, f32) {
    (direction3_to_yaw(direction), direction3_to_pitch(direction))
}
