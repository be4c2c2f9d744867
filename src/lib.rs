//! # Rotation Math
//!
//! Angle, direction and launch-angle math for games and simulations.
//!
//! ## Overview
//!
//! Everything here is a pure function of its inputs. Angles cross the public
//! boundary in degrees as `f32`; vectors and rotations are `glam` types.
//!
//! - **Angles**: normalization into `[-180, 180)` or `[0, 360)` and clamping
//!   to arcs that may wrap across the seam
//! - **Directions**: planar angle and 3D yaw/pitch conversions to and from
//!   unit vectors
//! - **Basis**: right, up and forward axes of a quaternion
//! - **Projectiles**: launch elevation for a given speed and gravity, with
//!   unreachable targets reported rather than panicking
//!
//! ## Example
//!
//! ```
//! use glam::Vec3;
//! use rotation_math::{clamp_signed, solve_spatial};
//!
//! assert_eq!(clamp_signed(380.0, 60.0, 350.0), -10.0);
//!
//! let shot = solve_spatial(Vec3::ZERO, Vec3::new(40.0, -10.0, 0.0), 20.0, -9.8);
//! assert!(shot.reachable);
//! ```

pub mod angle;
pub mod basis;
pub mod direction;
pub mod projectile;

// Core module re-exports
pub use angle::*;
pub use basis::*;
pub use direction::*;
pub use projectile::*;

/// Core error type for rotation math.
#[derive(thiserror::Error, Debug)]
pub enum RotationMathError {
    /// No trajectory at the given speed reaches the target
    #[error("Target unreachable (solved angle {angle})")]
    Unreachable { angle: f32 },

    /// Launch parameters cannot describe a trajectory
    #[error("Invalid ballistics: {0}")]
    InvalidBallistics(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type RotationMathResult<T> = Result<T, RotationMathError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
