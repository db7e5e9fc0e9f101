//! Utility helpers for tests.
//!
//! Builds small worlds with a player and a single enemy at a chosen distance
//! and provides tolerance-based vector assertions.

pub mod sandbox;

pub use sandbox::{bevy_arena, Arena, Sandbox};

use glam::Vec2;

/// Assert that `actual` lies within `tolerance` of `expected` on both axes.
///
/// # Panics
/// Panics with both vectors in the message when either axis differs by more
/// than `tolerance`.
pub fn assert_vec2_near(actual: Vec2, expected: Vec2, tolerance: f32) {
    let delta = (actual - expected).abs();
    assert!(
        delta.x <= tolerance && delta.y <= tolerance,
        "expected {expected:?} within {tolerance}, got {actual:?}"
    );
}

/// Assert that `vector` is a unit vector or the zero vector.
///
/// # Panics
/// Panics when the length is neither zero nor one within `1e-4`.
pub fn assert_unit_or_zero(vector: Vec2) {
    let length = vector.length();
    assert!(
        length < 1e-4 || (length - 1.0).abs() < 1e-4,
        "{vector:?} has length {length}"
    );
}
