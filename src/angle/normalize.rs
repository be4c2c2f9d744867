//! # Angle Normalization
//!
//! Reduction of arbitrary degree values into the canonical ranges.

use super::{FULL_TURN, HALF_TURN};

/// Normalizes an angle into the signed range `[-180, 180)`.
///
/// Exact multiples of 360 map to `0`, and `180` maps to `-180`. Inputs a
/// hair below `180` can round onto `-180 - ulp`; those fold back into range.
///
/// # Examples
///
/// ```
/// use rotation_math::normalize_signed;
///
/// assert_eq!(normalize_signed(350.0), -10.0);
/// assert_eq!(normalize_signed(720.0), 0.0);
/// assert_eq!(normalize_signed(-535.0), -175.0);
/// ```
pub fn normalize_signed(degree: f32) -> f32 {
    let offset = ((degree + HALF_TURN) / FULL_TURN).floor();
    let normalized = degree - offset * FULL_TURN;
    if normalized < -HALF_TURN {
        normalized + FULL_TURN
    } else {
        normalized
    }
}

/// Normalizes an angle into the unsigned range `[0, 360)`.
///
/// Tiny negative inputs would otherwise round up to exactly `360`.
///
/// # Examples
///
/// ```
/// use rotation_math::normalize_unsigned;
///
/// assert_eq!(normalize_unsigned(-10.0), 350.0);
/// assert_eq!(normalize_unsigned(370.0), 10.0);
/// ```
pub fn normalize_unsigned(degree: f32) -> f32 {
    let offset = (degree / FULL_TURN).floor();
    let normalized = degree - offset * FULL_TURN;
    if normalized >= FULL_TURN {
        normalized - FULL_TURN
    } else {
        normalized
    }
}

/// Returns the shortest signed rotation that takes `from` onto `to`,
/// in `[-180, 180)`.
pub fn delta_angle(from: f32, to: f32) -> f32 {
    normalize_signed(to - from)
}
