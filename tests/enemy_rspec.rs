//! Behaviour tests for enemy state changes using rust-rspec.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glam::Vec2;
use test_utils::Sandbox;
use ukemochi::EnemyState;

#[derive(Clone)]
struct Encounter {
    sandbox: Arc<Mutex<Sandbox>>,
}

impl fmt::Debug for Encounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encounter")
            .field(
                "state",
                &self.sandbox.try_lock().ok().map(|s| s.enemy.state()),
            )
            .finish()
    }
}

impl Default for Encounter {
    fn default() -> Self {
        Self {
            sandbox: Arc::new(Mutex::new(Sandbox::at_distance(1000.0))),
        }
    }
}

impl Encounter {
    fn lock(&self) -> MutexGuard<'_, Sandbox> {
        self.sandbox.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reset(&self, distance: f32) {
        *self.lock() = Sandbox::at_distance(distance);
    }

    fn move_player_to(&self, distance: f32) {
        let mut sandbox = self.lock();
        let player = sandbox.player;
        sandbox.world.set_position(player, Vec2::new(-distance, 0.0));
        let enemy = sandbox.enemy.entity();
        sandbox.world.set_position(enemy, Vec2::ZERO);
    }

    fn think(&self) {
        let velocity = self.lock().think();
        assert!(velocity.is_some(), "enemy skipped a tick with its target present");
    }

    fn state(&self) -> EnemyState {
        self.lock().enemy.state()
    }
}

#[test]
fn enemy_reacts_to_player_distance() {
    rspec::run(&rspec::given(
        "an enemy with a player far away",
        Encounter::default(),
        |ctx| {
            ctx.when("the player stays out of range", |ctx| {
                ctx.before_each(|env| {
                    env.reset(1000.0);
                    env.think();
                });
                ctx.then("the enemy keeps roaming", |env| {
                    assert_eq!(env.state(), EnemyState::Roaming);
                });
            });

            ctx.when("the player walks inside the aggro radius", |ctx| {
                ctx.before_each(|env| {
                    env.reset(1000.0);
                    env.move_player_to(240.0);
                    env.think();
                });
                ctx.then("the enemy starts chasing", |env| {
                    assert_eq!(env.state(), EnemyState::Chasing);
                });
            });

            ctx.when("a chased player comes within the engage radius", |ctx| {
                ctx.before_each(|env| {
                    env.reset(1000.0);
                    env.move_player_to(240.0);
                    env.think();
                    env.move_player_to(120.0);
                    env.think();
                });
                ctx.then("the enemy attacks", |env| {
                    assert_eq!(env.state(), EnemyState::Attacking);
                });
            });

            ctx.when("an attacked player backs off past the engage radius", |ctx| {
                ctx.before_each(|env| {
                    env.reset(1000.0);
                    env.move_player_to(240.0);
                    env.think();
                    env.move_player_to(120.0);
                    env.think();
                    env.move_player_to(180.0);
                    env.think();
                });
                ctx.then("the enemy resumes the chase", |env| {
                    assert_eq!(env.state(), EnemyState::Chasing);
                });
            });
        },
    ));
}
