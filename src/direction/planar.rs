//! # Planar Directions
//!
//! Angle and direction conversions on the XY plane.

use crate::angle::{normalize_signed, DEG_TO_RAD, RAD_TO_DEG};
use glam::Vec2;

/// Returns the unit direction on the XY plane for an angle in degrees.
///
/// # Examples
///
/// ```
/// use rotation_math::angle_to_direction2;
///
/// let dir = angle_to_direction2(90.0);
/// assert!(dir.x.abs() < 1e-6);
/// assert!((dir.y - 1.0).abs() < 1e-6);
/// ```
pub fn angle_to_direction2(degree: f32) -> Vec2 {
    direction_from_radian(degree * DEG_TO_RAD)
}

fn direction_from_radian(radian: f32) -> Vec2 {
    let (sin, cos) = radian.sin_cos();
    Vec2::new(cos, sin)
}

/// Returns the angle of a direction on the XY plane, in degrees `[-180, 180)`.
///
/// The vector does not have to be unit length. A zero vector yields `0`, and
/// -X yields `-180`, matching [`normalize_signed`].
pub fn direction2_to_angle(direction: Vec2) -> f32 {
    normalize_signed(direction.y.atan2(direction.x) * RAD_TO_DEG)
}
