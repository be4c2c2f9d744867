//! # Projectile Module
//!
//! Closed-form launch angles for a point mass under constant gravity.
//!
//! All solvers share one convention: `gravity` is the signed acceleration
//! along +Y, so a downward pull is negative (`-9.8` on Earth). Returned
//! angles are degrees of elevation above the horizontal plane.
//!
//! Reachability is decided by the inverse trig call itself. When the target
//! lies beyond what `speed` can cover, `asin`/`acos` receive an argument
//! outside `[-1, 1]` and the angle turns NaN; the solution is then flagged
//! unreachable. No separate domain check is made, so targets sitting exactly
//! on the rim of the reachable region behave as the float math dictates.

pub mod ballistics;

pub use ballistics::*;

use crate::angle::RAD_TO_DEG;
use crate::{RotationMathError, RotationMathResult};
use glam::Vec3;

/// Which of the two trajectories through a target to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaunchArc {
    /// The flatter, faster trajectory.
    Low,
    /// The lobbed trajectory.
    #[default]
    High,
}

/// Outcome of a launch-angle solve.
///
/// `angle` is always filled in. It is NaN when `reachable` is false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSolution {
    /// Elevation above the horizontal plane, in degrees.
    pub angle: f32,
    /// Whether a trajectory at the requested speed reaches the target.
    pub reachable: bool,
}

impl LaunchSolution {
    fn from_angle(angle: f32) -> Self {
        let reachable = !angle.is_nan();
        if !reachable {
            log::debug!("Launch target is out of reach");
        }
        Self { angle, reachable }
    }

    /// Converts into a `Result`, failing with
    /// [`RotationMathError::Unreachable`] when the target is out of reach.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotation_math::solve_flat;
    ///
    /// assert!(solve_flat(40.0, 20.0, -9.8).into_result().is_ok());
    /// assert!(solve_flat(50.0, 20.0, -9.8).into_result().is_err());
    /// ```
    pub fn into_result(self) -> RotationMathResult<f32> {
        if self.reachable {
            Ok(self.angle)
        } else {
            Err(RotationMathError::Unreachable { angle: self.angle })
        }
    }
}

/// Solves the launch angle for a target at the same height, `distance` away.
///
/// Inverts the range equation `R = v² sin(2θ) / g` and returns the low arc;
/// the high arc is `90 - angle`.
///
/// # Examples
///
/// ```
/// use rotation_math::solve_flat;
///
/// let solution = solve_flat(40.0, 20.0, -9.8);
/// assert!(solution.reachable);
/// assert!((solution.angle - 39.2608).abs() < 1e-3);
/// ```
pub fn solve_flat(distance: f32, speed: f32, gravity: f32) -> LaunchSolution {
    let sine = distance * -gravity / (speed * speed);
    LaunchSolution::from_angle(sine.asin() * 0.5 * RAD_TO_DEG)
}

/// Solves the high-arc launch angle from `from` to an arbitrary target `to`.
///
/// See [`solve_spatial_arc`] to pick the arc.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use rotation_math::solve_spatial;
///
/// let solution = solve_spatial(Vec3::ZERO, Vec3::new(40.0, -10.0, 0.0), 20.0, -9.8);
/// assert!(solution.reachable);
/// assert!((solution.angle - 60.4374).abs() < 1e-3);
/// ```
pub fn solve_spatial(from: Vec3, to: Vec3, speed: f32, gravity: f32) -> LaunchSolution {
    solve_spatial_arc(from, to, speed, gravity, LaunchArc::High)
}

/// Solves the launch angle from `from` to `to` on the requested arc.
///
/// The offset splits into horizontal distance `d` (over X and Z) and height
/// `h` (along Y). Eliminating time from the equations of motion leaves
///
/// ```text
/// d·sin(2θ) - h·cos(2θ) = h + d²·(-g) / v²
/// ```
///
/// whose left side is `sqrt(d² + h²)·cos(2θ - φ)` with
/// `φ = atan2(d, -h)`, giving `2θ = φ ± acos(rhs / sqrt(d² + h²))`.
///
/// A zero offset has no direction and comes back unreachable. A target
/// straight above or below always solves to ±90° and reports reachable
/// whatever the speed; callers must check the height of vertical shots.
pub fn solve_spatial_arc(
    from: Vec3,
    to: Vec3,
    speed: f32,
    gravity: f32,
    arc: LaunchArc,
) -> LaunchSolution {
    let offset = to - from;
    let dist_sqr = offset.x * offset.x + offset.z * offset.z;
    let height = offset.y;

    let numerator = dist_sqr * -gravity / (speed * speed) + height;
    let denominator = (dist_sqr + height * height).sqrt();
    let phase = dist_sqr.sqrt().atan2(-height);
    let swing = (numerator / denominator).acos();

    let doubled = match arc {
        LaunchArc::Low => phase - swing,
        LaunchArc::High => phase + swing,
    };

    LaunchSolution::from_angle(doubled * 0.5 * RAD_TO_DEG)
}
