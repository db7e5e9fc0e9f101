//! Per-frame systems driving enemy and player scripts.

use bevy::prelude::*;

use crate::components::{handle_of, EnemyBrain, Force, PlayerBrain, Spin, Tag, Velocity};
use crate::physics::{applied_acceleration, integrate};

use super::host::{EnemyHost, PlayerHost};
use super::plugin::EnemyStateChanged;
use super::HeldInput;

/// Resolves the pursuit target of newly added enemies by tag.
///
/// Runs once per enemy; an enemy whose target does not exist yet stays
/// without one.
pub fn resolve_enemy_targets_system(
    mut enemies: Query<(Entity, &mut EnemyBrain), Added<EnemyBrain>>,
    tagged: Query<(Entity, &Tag)>,
) {
    for (entity, mut brain) in &mut enemies {
        let wanted = brain.enemy.config().target_tag.clone();
        let found = tagged
            .iter()
            .filter(|(_, tag)| tag.0 == wanted)
            .map(|(candidate, _)| candidate)
            .min();
        if found.is_none() {
            log::debug!("enemy {entity:?} has no target tagged {wanted:?}");
        }
        brain.set_target(found);
    }
}

/// Ticks every enemy and writes its velocity.
pub fn enemy_tick_system(
    mut commands: Commands,
    mut enemies: Query<(Entity, &mut EnemyBrain, &Transform, &mut Velocity)>,
    positions: Query<&Transform>,
) {
    for (entity, mut brain, transform, mut velocity) in &mut enemies {
        let script = &mut *brain;
        let target = script.target.and_then(|target| {
            positions
                .get(target)
                .ok()
                .map(|tf| (handle_of(target), tf.translation.truncate()))
        });
        let mut host = EnemyHost::new(
            (handle_of(entity), transform.translation.truncate()),
            target,
        );

        let before = script.enemy.state();
        script.enemy.tick(&mut host);
        let after = script.enemy.state();

        if let Some(v) = host.velocity {
            velocity.0 = v;
        }
        if before != after {
            commands.trigger(EnemyStateChanged {
                entity,
                from: before,
                to: after,
            });
        }
    }
}

/// Ticks every player script and stores the requested force.
pub fn player_tick_system(
    time: Res<Time>,
    input: Res<HeldInput>,
    mut players: Query<(&mut PlayerBrain, &mut Force)>,
) {
    let dt = time.delta_secs();
    for (mut brain, mut force) in &mut players {
        let mut host = PlayerHost::new(&input, dt);
        brain.tick(&mut host);
        *force = host.force;
    }
}

/// Stand-in for engine physics: explicit Euler over force and velocity.
pub fn integrate_motion_system(
    time: Res<Time>,
    mut bodies: Query<(&mut Transform, &mut Velocity, Option<&Force>, Option<&mut Spin>)>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut velocity, force, spin) in &mut bodies {
        let applied = force.copied().unwrap_or_default();
        let acceleration = applied_acceleration(applied.linear, None).unwrap_or(Vec2::ZERO);
        let (position, next_velocity) = integrate(
            transform.translation.truncate(),
            velocity.0,
            acceleration,
            dt,
        );
        transform.translation.x = position.x;
        transform.translation.y = position.y;
        velocity.0 = next_velocity;

        if let Some(mut spin) = spin {
            spin.0 += applied.torque * dt;
            transform.rotate_z(spin.0 * dt);
        }
    }
}

/// Drops this frame's pressed edges once every script has seen them.
pub fn clear_input_edges_system(mut input: ResMut<HeldInput>) {
    input.end_frame();
}
