//! Helpers spawning scripted entities into a Bevy world.

use bevy::prelude::*;

use crate::components::{handle_of, EnemyBrain, Force, PlayerBrain, Spin, Tag, Velocity};
use crate::config::Tuning;
use crate::enemy::Enemy;
use crate::player::Player;
use crate::souls::SoulType;
use crate::{ENEMY_TAG, PLAYER_TAG};

fn tuning(world: &World) -> Tuning {
    world.get_resource::<Tuning>().cloned().unwrap_or_default()
}

/// Spawns an enemy at `position` yielding `soul` when killed.
///
/// Its target is resolved by tag on the next frame.
pub fn spawn_enemy(world: &mut World, position: Vec2, soul: SoulType) -> Entity {
    let config = tuning(world).enemy;
    let entity = world
        .spawn((
            Tag(ENEMY_TAG.to_owned()),
            Transform::from_translation(position.extend(0.0)),
            Velocity::default(),
        ))
        .id();
    let enemy = Enemy::with_target(handle_of(entity), None, config).with_soul(soul);
    world.entity_mut(entity).insert(EnemyBrain::new(enemy));
    entity
}

/// Spawns the player at `position`.
pub fn spawn_player(world: &mut World, position: Vec2) -> Entity {
    let settings = tuning(world);
    let entity = world
        .spawn((
            Tag(PLAYER_TAG.to_owned()),
            Transform::from_translation(position.extend(0.0)),
            Velocity::default(),
            Force::default(),
            Spin::default(),
        ))
        .id();
    let player = Player::new(handle_of(entity), &settings);
    world.entity_mut(entity).insert(PlayerBrain(player));
    entity
}
