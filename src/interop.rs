//! Capability traits standing between scripts and the engine that owns the
//! simulation.
//!
//! Scripts never reach for global engine state. Each script names the
//! capabilities it needs as trait bounds on the host it is handed, so the
//! in-memory [`WorldHandle`](crate::WorldHandle), the Bevy adapter and test
//! mocks can all drive the same code.

use glam::Vec2;
use serde::Serialize;

/// Opaque identifier of an engine-side object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityHandle(pub u64);

impl From<u64> for EntityHandle {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl EntityHandle {
    /// Raw engine identifier.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

/// Keyboard keys scripts react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Key {
    /// Move up.
    W,
    /// Move left.
    A,
    /// Move down.
    S,
    /// Move right.
    D,
    /// Switch the selected soul.
    Q,
    /// Rotate counter-clockwise.
    R,
    /// Rotate clockwise.
    T,
}

/// Mouse buttons scripts react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MouseButton {
    /// Basic attack.
    Left,
    /// Soul ability.
    Right,
}

/// Read access to entity positions.
pub trait PositionSource {
    /// World-space position, or `None` when the entity no longer exists.
    fn position(&self, entity: EntityHandle) -> Option<Vec2>;
}

/// Resolves entities by tag.
pub trait EntityLookup {
    /// Some entity carrying `tag`, if any exists.
    fn find_by_tag(&self, tag: &str) -> Option<EntityHandle>;
}

/// Accepts velocity commands for a rigid body.
pub trait MotionActuator {
    /// Replaces the body's linear velocity. Unknown entities are ignored.
    fn set_velocity(&mut self, entity: EntityHandle, velocity: Vec2);
}

/// Accepts force and torque commands for a rigid body.
///
/// Values replace whatever the body held before; passing zero removes the
/// force.
pub trait ForceActuator {
    /// Sets the continuous linear force.
    fn set_force(&mut self, entity: EntityHandle, force: Vec2);
    /// Sets the continuous torque around the z axis.
    fn set_torque(&mut self, entity: EntityHandle, torque: f32);
}

/// Polled input state for the current frame.
pub trait InputSource {
    /// `true` while the key is down.
    fn key_held(&self, key: Key) -> bool;
    /// `true` only on the frame the key went down.
    fn key_pressed(&self, key: Key) -> bool;
    /// `true` while the button is down.
    fn mouse_held(&self, button: MouseButton) -> bool;
    /// `true` only on the frame the button went down.
    fn mouse_pressed(&self, button: MouseButton) -> bool;
}

/// Frame timing.
pub trait Clock {
    /// Seconds elapsed since the previous tick.
    fn delta_time(&self) -> f32;
}

/// A behaviour driven once per simulation tick.
///
/// `H` is the host; implementors bound it by the capabilities they use.
pub trait Script<H: ?Sized> {
    /// Runs one tick against `host`.
    fn update(&mut self, host: &mut H);
}
