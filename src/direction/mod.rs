//! # Direction Module
//!
//! Conversions between degree angles and direction vectors.
//!
//! - [`planar`]: a single angle on the XY plane, measured from +X toward +Y
//! - [`spatial`]: yaw about the vertical Y axis (from +X toward +Z) and
//!   pitch above the XZ plane
//!
//! Angle-to-vector conversions always produce unit vectors. Vector-to-angle
//! conversions accept any vector for yaw and planar angles, but pitch is only
//! meaningful for unit input.

pub mod planar;
pub mod spatial;

pub use planar::*;
pub use spatial::*;
