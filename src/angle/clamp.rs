//! # Circular Clamping
//!
//! Restricting an angle to an arc of the circle.
//!
//! The arc runs counter-clockwise from `min` to `max`. When `max` is below
//! `min` after normalization the arc crosses the wrap seam, so `60..350` in
//! signed space (`60..-10`) covers the 290° from 60° through ±180° to -10°.
//! An angle outside the arc snaps to the bound on its side of the excluded
//! gap, split at the gap's midpoint.

use super::{normalize_signed, normalize_unsigned, FULL_TURN};

/// Where a normalized angle falls relative to a normalized arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArcPosition {
    Inside,
    NearMin,
    NearMax,
}

/// Locates `degree` relative to the arc `min..max`.
///
/// All three values must already share one canonical range.
fn locate(degree: f32, min: f32, max: f32) -> ArcPosition {
    let end = if max < min { max + FULL_TURN } else { max };
    // Measure the angle on the turn that starts at `min`.
    let lifted = if degree < min { degree + FULL_TURN } else { degree };

    if lifted <= end {
        return ArcPosition::Inside;
    }

    let gap_middle = (end + min + FULL_TURN) * 0.5;
    if lifted < gap_middle {
        ArcPosition::NearMax
    } else {
        ArcPosition::NearMin
    }
}

/// Clamps an angle to the arc `min..max`, in signed degrees `[-180, 180)`.
///
/// In-range angles come back as `normalize_signed(degree)`. Out-of-range
/// angles come back as the nearer normalized bound.
///
/// # Examples
///
/// ```
/// use rotation_math::clamp_signed;
///
/// assert_eq!(clamp_signed(-10.0, 0.0, 180.0), 0.0);
/// assert_eq!(clamp_signed(405.0, 10.0, 60.0), 45.0);
/// // The arc 60..350 wraps through 180.
/// assert_eq!(clamp_signed(380.0, 60.0, 350.0), -10.0);
/// ```
pub fn clamp_signed(degree: f32, min: f32, max: f32) -> f32 {
    let degree = normalize_signed(degree);
    let min = normalize_signed(min);
    let max = normalize_signed(max);

    match locate(degree, min, max) {
        ArcPosition::Inside => degree,
        ArcPosition::NearMin => min,
        ArcPosition::NearMax => max,
    }
}

/// Clamps an angle to the arc `min..max`, in unsigned degrees `[0, 360)`.
///
/// # Examples
///
/// ```
/// use rotation_math::clamp_unsigned;
///
/// assert_eq!(clamp_unsigned(-10.0, 0.0, 180.0), 0.0);
/// assert_eq!(clamp_unsigned(380.0, 60.0, 350.0), 350.0);
/// assert_eq!(clamp_unsigned(10.0, 300.0, 30.0), 10.0);
/// ```
pub fn clamp_unsigned(degree: f32, min: f32, max: f32) -> f32 {
    let degree = normalize_unsigned(degree);
    let min = normalize_unsigned(min);
    let max = normalize_unsigned(max);

    match locate(degree, min, max) {
        ArcPosition::Inside => degree,
        ArcPosition::NearMin => min,
        ArcPosition::NearMax => max,
    }
}
