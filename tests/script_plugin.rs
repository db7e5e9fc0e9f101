//! Scripts running inside a headless Bevy app.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use rstest::rstest;
use test_utils::bevy_arena;
use ukemochi::{
    EnemyState, EnemyStateChanged, HeldInput, Key, KillEnemy, PlayerBrain, SoulType, Tag,
    Velocity,
};

#[derive(Resource, Default)]
struct SeenChanges(Vec<EnemyStateChanged>);

fn record(event: On<EnemyStateChanged>, mut seen: ResMut<SeenChanges>) {
    seen.0.push(*event.event());
}

#[rstest]
fn nearby_enemy_starts_chasing() {
    let mut arena = bevy_arena(200.0, SoulType::Fish);
    arena.update(1);
    let brain = arena.brain();
    assert_eq!(brain.target, Some(arena.player));
    assert_eq!(brain.enemy.state(), EnemyState::Chasing);

    arena.update(1);
    let velocity = arena
        .app
        .world()
        .get::<Velocity>(arena.enemy)
        .copied()
        .unwrap_or_default();
    assert!(velocity.0.x < 0.0, "enemy should head towards -x: {velocity:?}");
}

#[rstest]
fn distant_enemy_keeps_roaming() {
    let mut arena = bevy_arena(1000.0, SoulType::Worm);
    arena.update(3);
    assert_eq!(arena.brain().enemy.state(), EnemyState::Roaming);
    let velocity = arena
        .app
        .world()
        .get::<Velocity>(arena.enemy)
        .copied()
        .unwrap_or_default();
    assert_eq!(velocity.0, Vec2::new(50.0, 50.0));
}

#[rstest]
fn state_changes_are_announced() {
    let mut arena = bevy_arena(200.0, SoulType::Fish);
    arena.app.init_resource::<SeenChanges>();
    arena.app.add_observer(record);
    arena.update(1);

    let seen = &arena.app.world().resource::<SeenChanges>().0;
    assert_eq!(
        seen.as_slice(),
        &[EnemyStateChanged {
            entity: arena.enemy,
            from: EnemyState::Roaming,
            to: EnemyState::Chasing,
        }]
    );
}

#[rstest]
fn killing_an_enemy_stops_it_and_feeds_the_player() {
    let mut arena = bevy_arena(200.0, SoulType::Fish);
    arena.update(2);

    arena.app.world_mut().trigger(KillEnemy {
        entity: arena.enemy,
    });

    assert_eq!(arena.brain().enemy.state(), EnemyState::Dead);
    let velocity = arena.app.world().get::<Velocity>(arena.enemy).copied();
    assert_eq!(velocity, Some(Velocity(Vec2::ZERO)));
    let player = arena.app.world().get::<PlayerBrain>(arena.player);
    assert_eq!(
        player.map(|brain| brain.souls().charges(SoulType::Fish)),
        Some(1)
    );

    arena.update(5);
    assert_eq!(arena.brain().enemy.state(), EnemyState::Dead);
}

#[rstest]
fn enemy_without_player_has_no_target() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(ukemochi::ScriptPlugin);
    let enemy = ukemochi::spawn_enemy(app.world_mut(), Vec2::ZERO, SoulType::Empty);
    app.update();
    let brain = app.world().get::<ukemochi::EnemyBrain>(enemy);
    assert_eq!(brain.map(|b| b.target), Some(None));
    assert_eq!(
        app.world().get::<Tag>(enemy).map(|tag| tag.0.as_str()),
        Some(ukemochi::ENEMY_TAG)
    );
}

#[rstest]
fn held_movement_key_pushes_the_player() {
    let mut arena = bevy_arena(1000.0, SoulType::Empty);
    arena
        .app
        .world_mut()
        .resource_mut::<HeldInput>()
        .press_key(Key::W);
    arena.update(1);
    let force = arena
        .app
        .world()
        .get::<ukemochi::Force>(arena.player)
        .copied()
        .unwrap_or_default();
    assert_eq!(force.linear, Vec2::new(0.0, 1500.0));
}
