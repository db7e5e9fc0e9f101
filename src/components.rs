//! ECS component types used when scripts run inside Bevy.
//! Wraps the engine-agnostic scripts and the rigid-body state they drive.
use bevy::prelude::*;
use serde::Serialize;

use crate::enemy::Enemy;
use crate::interop::EntityHandle;
use crate::player::Player;

/// Identity of an ECS entity as seen through the scripting interop layer.
#[must_use]
pub fn handle_of(entity: Entity) -> EntityHandle {
    EntityHandle(entity.to_bits())
}

/// Lookup tag, matched by enemies resolving their target.
#[derive(Component, Debug, Clone, PartialEq, Eq, Deref, DerefMut, Serialize)]
pub struct Tag(pub String);

/// Linear velocity in world units per second.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

/// Continuous force and torque applied every frame until replaced.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Force {
    /// Force in world units.
    pub linear: Vec2,
    /// Torque around the z axis.
    pub torque: f32,
}

/// Angular velocity around the z axis, radians per second.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct Spin(pub f32);

/// An enemy script plus the ECS entity it pursues.
#[derive(Component, Debug, Clone)]
pub struct EnemyBrain {
    /// The engine-agnostic script.
    pub enemy: Enemy,
    /// Entity pursued, resolved once by tag.
    pub target: Option<Entity>,
}

impl EnemyBrain {
    /// Wraps `enemy`; the target is resolved on the next frame.
    #[must_use]
    pub const fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            target: None,
        }
    }

    /// Points both the ECS view and the script at `target`.
    pub fn set_target(&mut self, target: Option<Entity>) {
        self.target = target;
        self.enemy.retarget(target.map(handle_of));
    }
}

/// A player script attached to its entity.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct PlayerBrain(pub Player);
