//! # Ballistics Configuration
//!
//! Launch parameters bundled into a reusable, serializable value.

use super::{solve_flat, solve_spatial_arc, LaunchArc, LaunchSolution};
use crate::{RotationMathError, RotationMathResult};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Standard gravity near the Earth's surface, pointing down the Y axis.
pub const EARTH_GRAVITY: f32 = -9.8;

/// Launch speed and gravity for repeated solves.
///
/// Follows the same gravity convention as the free solvers: `gravity` is the
/// signed acceleration along +Y.
///
/// # Examples
///
/// ```
/// use rotation_math::Ballistics;
///
/// let cannon = Ballistics::earth(20.0).unwrap();
/// assert!(cannon.solve_flat(40.0).reachable);
/// assert!(!cannon.solve_flat(cannon.max_range() + 1.0).reachable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ballistics {
    /// Muzzle speed, in distance units per second
    pub speed: f32,
    /// Signed vertical acceleration, in distance units per second squared
    pub gravity: f32,
}

impl Ballistics {
    /// Creates a validated configuration.
    ///
    /// Rejects non-finite values, a speed that is not positive and zero
    /// gravity.
    pub fn new(speed: f32, gravity: f32) -> RotationMathResult<Self> {
        let ballistics = Self { speed, gravity };
        ballistics.validate()?;
        Ok(ballistics)
    }

    /// Creates a configuration under [`EARTH_GRAVITY`].
    pub fn earth(speed: f32) -> RotationMathResult<Self> {
        Self::new(speed, EARTH_GRAVITY)
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotation_math::Ballistics;
    ///
    /// let ballistics = Ballistics::from_json(r#"{ "speed": 20.0, "gravity": -9.8 }"#).unwrap();
    /// assert_eq!(ballistics.speed, 20.0);
    /// ```
    pub fn from_json(json: &str) -> RotationMathResult<Self> {
        let ballistics: Self = serde_json::from_str(json)?;
        ballistics.validate()?;
        Ok(ballistics)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> RotationMathResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the parameters describe a solvable launch.
    pub fn validate(&self) -> RotationMathResult<()> {
        let problem = if !self.speed.is_finite() || !self.gravity.is_finite() {
            Some("speed and gravity must be finite")
        } else if self.speed <= 0.0 {
            Some("speed must be positive")
        } else if self.gravity == 0.0 {
            Some("gravity must be non-zero")
        } else {
            None
        };

        match problem {
            Some(reason) => {
                log::warn!(
                    "Rejected ballistics (speed {}, gravity {}): {}",
                    self.speed,
                    self.gravity,
                    reason
                );
                Err(RotationMathError::InvalidBallistics(reason.to_string()))
            }
            None => Ok(()),
        }
    }

    /// Farthest same-height distance reachable, attained at 45°.
    pub fn max_range(&self) -> f32 {
        self.speed * self.speed / self.gravity.abs()
    }

    /// Solves a same-height target `distance` away. See [`solve_flat`].
    pub fn solve_flat(&self, distance: f32) -> LaunchSolution {
        solve_flat(distance, self.speed, self.gravity)
    }

    /// Solves the high arc toward `to`. See [`super::solve_spatial`].
    pub fn solve_spatial(&self, from: Vec3, to: Vec3) -> LaunchSolution {
        self.solve_spatial_arc(from, to, LaunchArc::High)
    }

    /// Solves toward `to` on the requested arc. See [`solve_spatial_arc`].
    pub fn solve_spatial_arc(&self, from: Vec3, to: Vec3, arc: LaunchArc) -> LaunchSolution {
        solve_spatial_arc(from, to, self.speed, self.gravity, arc)
    }
}
