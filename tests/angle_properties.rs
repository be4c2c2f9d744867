//! Property tests for angle normalization, clamping and direction round trips.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rotation_math::{
    angle_to_direction2, clamp_signed, clamp_unsigned, delta_angle, direction2_to_angle,
    direction3_to_pitch, direction3_to_yaw, normalize_signed, normalize_unsigned,
    yaw_pitch_to_direction3,
};

/// Angles are compared around the circle so that -180 and 180 agree.
fn assert_same_heading(actual: f32, expected: f32, tolerance: f32) {
    let difference = delta_angle(expected, actual).abs();
    assert!(
        difference <= tolerance,
        "{actual} and {expected} differ by {difference}°"
    );
}

proptest! {
    #[test]
    fn normalize_signed_stays_in_range(degree in -100_000.0f32..100_000.0) {
        let normalized = normalize_signed(degree);
        prop_assert!((-180.0..180.0).contains(&normalized), "{degree} -> {normalized}");
    }

    #[test]
    fn normalize_unsigned_stays_in_range(degree in -100_000.0f32..100_000.0) {
        let normalized = normalize_unsigned(degree);
        prop_assert!((0.0..360.0).contains(&normalized), "{degree} -> {normalized}");
    }

    #[test]
    fn normalize_signed_ignores_full_turns(degree in -720.0f32..720.0, turns in -5i32..5) {
        let shifted = degree + 360.0 * turns as f32;
        assert_same_heading(normalize_signed(shifted), normalize_signed(degree), 1e-3);
    }

    #[test]
    fn signed_and_unsigned_agree(degree in -1_000.0f32..1_000.0) {
        assert_same_heading(normalize_signed(degree), normalize_unsigned(degree), 1e-3);
    }

    #[test]
    fn clamp_signed_is_idempotent(
        degree in -1_000.0f32..1_000.0,
        min in -360.0f32..360.0,
        max in -360.0f32..360.0,
    ) {
        let once = clamp_signed(degree, min, max);
        prop_assert!(!once.is_nan());
        prop_assert!((-180.0..180.0).contains(&once));
        prop_assert_eq!(clamp_signed(once, min, max), once);
    }

    #[test]
    fn clamp_unsigned_is_idempotent(
        degree in -1_000.0f32..1_000.0,
        min in -360.0f32..360.0,
        max in -360.0f32..360.0,
    ) {
        let once = clamp_unsigned(degree, min, max);
        prop_assert!(!once.is_nan());
        prop_assert!((0.0..360.0).contains(&once));
        prop_assert_eq!(clamp_unsigned(once, min, max), once);
    }

    #[test]
    fn clamp_signed_leaves_arc_members_alone(
        min in -180.0f32..180.0,
        width in 0.0f32..359.0,
        fraction in 0.0f32..1.0,
    ) {
        let max = min + width;
        let degree = min + width * fraction;
        assert_same_heading(clamp_signed(degree, min, max), normalize_signed(degree), 1e-3);
    }

    #[test]
    fn clamp_signed_picks_nearer_bound(
        min in -180.0f32..180.0,
        width in 10.0f32..300.0,
        fraction in 0.05f32..0.95,
    ) {
        // Skip the midpoint itself, where rounding picks the side.
        prop_assume!((fraction - 0.5).abs() > 0.01);
        let max = min + width;
        let gap = 360.0 - width;
        let degree = max + gap * fraction;
        let clamped = clamp_signed(degree, min, max);
        let expected = if fraction < 0.5 { max } else { min };
        assert_same_heading(clamped, expected, 1e-3);
    }

    #[test]
    fn planar_round_trip(degree in -1_000.0f32..1_000.0) {
        let dir = angle_to_direction2(degree);
        assert_abs_diff_eq!(dir.length(), 1.0, epsilon = 1e-5);
        assert_same_heading(direction2_to_angle(dir), normalize_signed(degree), 1e-2);
    }

    #[test]
    fn spatial_round_trip(yaw in -179.0f32..179.0, pitch in -85.0f32..85.0) {
        let dir = yaw_pitch_to_direction3(yaw, pitch);
        assert_abs_diff_eq!(dir.length(), 1.0, epsilon = 1e-5);
        assert_same_heading(direction3_to_yaw(dir), yaw, 1e-2);
        assert_abs_diff_eq!(direction3_to_pitch(dir), pitch, epsilon = 1e-2);
    }
}

#[test]
fn test_normalize_signed_reference_values() {
    assert_abs_diff_eq!(normalize_signed(350.0), -10.0);
    assert_abs_diff_eq!(normalize_signed(720.0), 0.0);
    assert_abs_diff_eq!(normalize_signed(45.0), 45.0);
    assert_abs_diff_eq!(normalize_signed(675.0), -45.0);
    assert_abs_diff_eq!(normalize_signed(-535.0), -175.0);
}

#[test]
fn test_clamp_signed_reference_values() {
    assert_abs_diff_eq!(clamp_signed(-10.0, 0.0, 180.0), 0.0);
    assert_abs_diff_eq!(clamp_signed(405.0, 10.0, 60.0), 45.0);
    assert_abs_diff_eq!(clamp_signed(380.0, 60.0, 350.0), -10.0);
    assert_abs_diff_eq!(clamp_signed(380.0, 40.0, 350.0), 40.0);
}
