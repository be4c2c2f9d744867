//! # Angle Module
//!
//! Scalar angle arithmetic on the 360° circle.
//!
//! Two canonical ranges are used throughout the crate:
//! - signed degrees in `[-180, 180)`
//! - unsigned degrees in `[0, 360)`
//!
//! Every function accepts any finite degree value and re-ranges it
//! internally, so callers never have to pre-normalize.

pub mod clamp;
pub mod normalize;

pub use clamp::*;
pub use normalize::*;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Degrees in one full turn.
pub const FULL_TURN: f32 = 360.0;

/// Degrees in half a turn.
pub const HALF_TURN: f32 = 180.0;
