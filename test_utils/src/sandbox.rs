//! Prebuilt worlds for enemy and player scenarios.

use bevy::prelude::*;
use ukemochi::{
    spawn_enemy, spawn_player, Enemy, EnemyBrain, EntityHandle, ScriptPlugin, SoulType, Tuning,
    WorldHandle, ENEMY_TAG, PLAYER_TAG,
};

/// An in-memory world holding one player and one enemy script.
pub struct Sandbox {
    /// Host holding both bodies.
    pub world: WorldHandle,
    /// Body tagged as the player.
    pub player: EntityHandle,
    /// Script driving the enemy body.
    pub enemy: Enemy,
}

impl Sandbox {
    /// Places the player at the origin and the enemy `distance` units along +x.
    #[must_use]
    pub fn at_distance(distance: f32) -> Self {
        Self::with_tuning(distance, &Tuning::default())
    }

    /// Like [`Self::at_distance`] with custom enemy tuning.
    #[must_use]
    pub fn with_tuning(distance: f32, tuning: &Tuning) -> Self {
        let mut world = WorldHandle::default();
        let player = world.spawn_tagged(PLAYER_TAG, Vec2::ZERO);
        let me = world.spawn_tagged(ENEMY_TAG, Vec2::new(distance, 0.0));
        let enemy = Enemy::start(me, &world, tuning.enemy.clone());
        Self {
            world,
            player,
            enemy,
        }
    }

    /// Current distance between the enemy and the player.
    ///
    /// # Panics
    /// Panics if either body was despawned.
    #[must_use]
    pub fn distance(&self) -> f32 {
        let me = self.world.body(self.enemy.entity()).expect("enemy body");
        let player = self.world.body(self.player).expect("player body");
        me.position.distance(player.position)
    }

    /// Runs the enemy script once and then steps the world.
    pub fn tick(&mut self) -> Option<Vec2> {
        let velocity = self.enemy.tick(&mut self.world);
        self.world.step();
        velocity
    }

    /// Runs the enemy script without advancing the world.
    pub fn think(&mut self) -> Option<Vec2> {
        self.enemy.tick(&mut self.world)
    }
}

/// A headless Bevy app with the script plugin, one player and one enemy.
pub struct Arena {
    /// App with `MinimalPlugins` and the script plugin.
    pub app: App,
    /// Player entity.
    pub player: Entity,
    /// Enemy entity.
    pub enemy: Entity,
}

impl Arena {
    /// The enemy's script component.
    ///
    /// # Panics
    /// Panics if the enemy entity lost its brain.
    #[must_use]
    pub fn brain(&self) -> &EnemyBrain {
        self.app
            .world()
            .get::<EnemyBrain>(self.enemy)
            .expect("enemy brain")
    }

    /// Runs `frames` app updates.
    pub fn update(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }
}

/// Builds an [`Arena`] with the player at the origin and the enemy
/// `distance` units along +x carrying `soul`.
#[must_use]
pub fn bevy_arena(distance: f32, soul: SoulType) -> Arena {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(ScriptPlugin);
    let world = app.world_mut();
    let player = spawn_player(world, Vec2::ZERO);
    let enemy = spawn_enemy(world, Vec2::new(distance, 0.0), soul);
    Arena { app, player, enemy }
}
