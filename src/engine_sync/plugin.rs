//! Bevy plugin wiring script systems into the schedule.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, warn};

use crate::components::{EnemyBrain, PlayerBrain, Velocity};
use crate::config::Tuning;
use crate::enemy::EnemyState;

use super::{
    clear_input_edges_system, enemy_tick_system, integrate_motion_system, player_tick_system,
    resolve_enemy_targets_system, HeldInput,
};

/// Raised whenever an enemy's state machine changes state.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStateChanged {
    /// Enemy whose state changed.
    pub entity: Entity,
    /// State before the change.
    pub from: EnemyState,
    /// State after the change.
    pub to: EnemyState,
}

/// Request to move an enemy into [`EnemyState::Dead`].
///
/// Killing an enemy stops it and hands its soul to every living player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillEnemy {
    /// Enemy to kill.
    pub entity: Entity,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_state_change(event: On<EnemyStateChanged>) {
    let EnemyStateChanged { entity, from, to } = *event.event();
    debug!("enemy {entity:?}: {from:?} -> {to:?}");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn kill_enemy(
    event: On<KillEnemy>,
    mut commands: Commands,
    mut enemies: Query<(&mut EnemyBrain, &mut Velocity)>,
    mut players: Query<&mut PlayerBrain>,
) {
    let KillEnemy { entity } = *event.event();
    let Ok((mut brain, mut velocity)) = enemies.get_mut(entity) else {
        warn!("kill requested for {entity:?}, which is not an enemy");
        return;
    };
    let from = brain.enemy.state();
    if !brain.enemy.kill() {
        return;
    }
    velocity.0 = Vec2::ZERO;

    let soul = brain.enemy.soul();
    for mut player in &mut players {
        player.harvest_soul(soul);
    }
    commands.trigger(EnemyStateChanged {
        entity,
        from,
        to: EnemyState::Dead,
    });
}

/// Bevy plugin installing the script systems and their resources.
#[derive(Default)]
pub struct ScriptPlugin;

impl Plugin for ScriptPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Tuning>();
        app.init_resource::<HeldInput>();
        app.add_observer(log_state_change);
        app.add_observer(kill_enemy);
        app.add_systems(
            Update,
            (
                resolve_enemy_targets_system,
                enemy_tick_system,
                player_tick_system,
                integrate_motion_system,
                clear_input_edges_system,
            )
                .chain(),
        );
    }
}
