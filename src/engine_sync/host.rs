//! Per-entity views handing ECS data to scripts through the interop traits.

use bevy::prelude::Vec2;

use crate::components::Force;
use crate::interop::{
    Clock, EntityHandle, ForceActuator, InputSource, Key, MotionActuator, MouseButton,
    PositionSource,
};

use super::HeldInput;

/// What one enemy can see and drive during its tick.
pub(super) struct EnemyHost {
    own: (EntityHandle, Vec2),
    target: Option<(EntityHandle, Vec2)>,
    pub(super) velocity: Option<Vec2>,
}

impl EnemyHost {
    pub(super) const fn new(own: (EntityHandle, Vec2), target: Option<(EntityHandle, Vec2)>) -> Self {
        Self {
            own,
            target,
            velocity: None,
        }
    }
}

impl PositionSource for EnemyHost {
    fn position(&self, entity: EntityHandle) -> Option<Vec2> {
        if entity == self.own.0 {
            return Some(self.own.1);
        }
        self.target
            .filter(|(handle, _)| *handle == entity)
            .map(|(_, position)| position)
    }
}

impl MotionActuator for EnemyHost {
    fn set_velocity(&mut self, entity: EntityHandle, velocity: Vec2) {
        if entity == self.own.0 {
            self.velocity = Some(velocity);
        }
    }
}

/// What one player can read and drive during its tick.
pub(super) struct PlayerHost<'a> {
    input: &'a HeldInput,
    dt: f32,
    pub(super) force: Force,
}

impl<'a> PlayerHost<'a> {
    pub(super) fn new(input: &'a HeldInput, dt: f32) -> Self {
        Self {
            input,
            dt,
            force: Force::default(),
        }
    }
}

impl InputSource for PlayerHost<'_> {
    fn key_held(&self, key: Key) -> bool {
        self.input.key_held(key)
    }

    fn key_pressed(&self, key: Key) -> bool {
        self.input.key_pressed(key)
    }

    fn mouse_held(&self, button: MouseButton) -> bool {
        self.input.mouse_held(button)
    }

    fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.input.mouse_pressed(button)
    }
}

impl ForceActuator for PlayerHost<'_> {
    fn set_force(&mut self, _entity: EntityHandle, force: Vec2) {
        self.force.linear = force;
    }

    fn set_torque(&mut self, _entity: EntityHandle, torque: f32) {
        self.force.torque = torque;
    }
}

impl Clock for PlayerHost<'_> {
    fn delta_time(&self) -> f32 {
        self.dt
    }
}
