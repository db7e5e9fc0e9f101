//! Physics helper functions.
//!
//! The real engine owns integration. These helpers exist so the in-memory
//! host can turn the forces scripts request into plausible motion.

use glam::Vec2;

use crate::DEFAULT_MASS;

/// Smallest acceptable mass to avoid numerically unstable accelerations.
const MIN_MASS: f32 = 1e-6;

/// Computes acceleration from a force vector and optional mass.
///
/// Returns `None` if `mass` is non-positive or below `1e-6`. When `mass` is
/// `None` the [`DEFAULT_MASS`] constant is used.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use ukemochi::applied_acceleration;
/// let accel = applied_acceleration(Vec2::new(7.0, -14.0), Some(7.0)).unwrap();
/// assert!((accel.x - 1.0).abs() < 1e-6);
/// assert!((accel.y + 2.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn applied_acceleration(force: Vec2, mass: Option<f32>) -> Option<Vec2> {
    match mass {
        Some(m) if m > MIN_MASS => Some(force / m),
        Some(_) => None,
        None => Some(force / DEFAULT_MASS),
    }
}

/// Advances `(position, velocity)` by one explicit Euler step.
///
/// Velocity is updated from the acceleration first, then position from the
/// new velocity.
#[must_use]
pub fn integrate(position: Vec2, velocity: Vec2, acceleration: Vec2, dt: f32) -> (Vec2, Vec2) {
    let next_velocity = velocity + acceleration * dt;
    (position + next_velocity * dt, next_velocity)
}
