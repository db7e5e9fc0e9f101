//! Basic vector math helper functions.
//! Small helpers for magnitudes, normalised directions and direction blending.
use glam::Vec2;

use crate::DIRECTION_EPSILON;

/// Returns the magnitude of a 2D vector expressed by its components.
///
/// # Examples
/// ```
/// use ukemochi::vector_math::vec_mag;
/// let magnitude = vec_mag(3.0, 4.0);
/// assert!((magnitude - 5.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn vec_mag(component_x: f32, component_y: f32) -> f32 {
    Vec2::new(component_x, component_y).length()
}

/// Returns the unit vector pointing along `vector`.
///
/// Non-finite input and vectors shorter than [`DIRECTION_EPSILON`] yield
/// [`Vec2::ZERO`] rather than dividing by a vanishing magnitude.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use ukemochi::vec_normalize;
/// let unit = vec_normalize(Vec2::new(3.0, 4.0));
/// assert!((unit.x - 0.6).abs() < 1e-6);
/// assert!((unit.y - 0.8).abs() < 1e-6);
///
/// assert_eq!(vec_normalize(Vec2::ZERO), Vec2::ZERO);
/// ```
#[must_use]
pub fn vec_normalize(vector: Vec2) -> Vec2 {
    if !vector.is_finite() {
        return Vec2::ZERO;
    }
    let magnitude = vec_mag(vector.x, vector.y);
    if magnitude <= DIRECTION_EPSILON {
        return Vec2::ZERO;
    }
    vector / magnitude
}

/// Squared distance between two points.
#[must_use]
pub fn distance_squared(from: Vec2, to: Vec2) -> f32 {
    (to - from).length_squared()
}

/// First-order low-pass filter over directions.
///
/// The fresh direction contributes `weight`, the previous value keeps the
/// remaining `1 - weight`. `weight` is clamped into `[0, 1]`.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use ukemochi::vector_math::blend_direction;
/// let blended = blend_direction(Vec2::ZERO, Vec2::X, 0.25);
/// assert!((blended.x - 0.25).abs() < 1e-6);
/// ```
#[must_use]
pub fn blend_direction(previous: Vec2, fresh: Vec2, weight: f32) -> Vec2 {
    let w = weight.clamp(0.0, 1.0);
    previous * (1.0 - w) + fresh * w
}
