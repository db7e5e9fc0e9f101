//! Player control: keyboard-driven forces, health, combat and souls.

use glam::Vec2;
use log::{debug, info};

use crate::combat::{CombatEvent, PlayerCombat};
use crate::config::Tuning;
use crate::interop::{Clock, EntityHandle, ForceActuator, InputSource, Key, Script};
use crate::souls::{SoulManager, SoulType};

/// Force and torque requested by the held movement keys.
///
/// Within each axis the first key of the pair wins when both are held.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use ukemochi::interop::{InputSource, Key, MouseButton};
/// use ukemochi::player::movement_force;
///
/// struct Held(&'static [Key]);
/// impl InputSource for Held {
///     fn key_held(&self, key: Key) -> bool { self.0.contains(&key) }
///     fn key_pressed(&self, _: Key) -> bool { false }
///     fn mouse_held(&self, _: MouseButton) -> bool { false }
///     fn mouse_pressed(&self, _: MouseButton) -> bool { false }
/// }
///
/// let (force, torque) = movement_force(&Held(&[Key::W, Key::D]), 10.0);
/// assert_eq!(force, Vec2::new(10.0, 10.0));
/// assert_eq!(torque, 0.0);
/// ```
#[must_use]
pub fn movement_force<I>(input: &I, magnitude: f32) -> (Vec2, f32)
where
    I: InputSource + ?Sized,
{
    let axis = |positive: Key, negative: Key, first_positive: bool| {
        let (first, second, sign) = if first_positive {
            (positive, negative, 1.0)
        } else {
            (negative, positive, -1.0)
        };
        if input.key_held(first) {
            sign * magnitude
        } else if input.key_held(second) {
            -sign * magnitude
        } else {
            0.0
        }
    };
    let force = Vec2::new(axis(Key::D, Key::A, false), axis(Key::W, Key::S, true));
    let torque = axis(Key::T, Key::R, false);
    (force, torque)
}

/// Player-controlled character.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    entity: EntityHandle,
    move_force: f32,
    max_health: f32,
    health: f32,
    combat: PlayerCombat,
    souls: SoulManager,
    last_events: Vec<CombatEvent>,
}

impl Player {
    /// Creates a player at full health driving the body `entity`.
    #[must_use]
    pub fn new(entity: EntityHandle, tuning: &Tuning) -> Self {
        Self {
            entity,
            move_force: tuning.player.move_force,
            max_health: tuning.player.max_health,
            health: tuning.player.max_health,
            combat: PlayerCombat::new(tuning.combat.clone()),
            souls: SoulManager::new(tuning.souls.clone()),
            last_events: Vec::new(),
        }
    }

    /// Body driven by this player.
    #[must_use]
    pub const fn entity(&self) -> EntityHandle {
        self.entity
    }

    /// Current health, never below zero.
    #[must_use]
    pub const fn health(&self) -> f32 {
        self.health
    }

    /// Health the player starts with.
    #[must_use]
    pub const fn max_health(&self) -> f32 {
        self.max_health
    }

    /// `true` once health reaches zero.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Combo and cooldown state.
    #[must_use]
    pub const fn combat(&self) -> &PlayerCombat {
        &self.combat
    }

    /// Soul bars and charges.
    #[must_use]
    pub const fn souls(&self) -> &SoulManager {
        &self.souls
    }

    /// Combat events fired on the most recent tick.
    #[must_use]
    pub fn last_events(&self) -> &[CombatEvent] {
        &self.last_events
    }

    /// Applies damage; returns `true` if this hit killed the player.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.health = (self.health - amount.max(0.0)).max(0.0);
        debug!("player took {amount} damage, {:.1} left", self.health);
        if self.is_dead() {
            info!("player {:?} died", self.entity);
            return true;
        }
        false
    }

    /// Adds a harvested soul. Dead players gain nothing.
    pub fn harvest_soul(&mut self, soul: SoulType) {
        if !self.is_dead() {
            self.souls.harvest(soul);
        }
    }

    /// Runs movement, combat and soul decay for one tick.
    pub fn tick<H>(&mut self, host: &mut H)
    where
        H: InputSource + ForceActuator + Clock + ?Sized,
    {
        self.last_events.clear();
        if self.is_dead() {
            return;
        }
        let (force, torque) = movement_force(&*host, self.move_force);
        host.set_force(self.entity, force);
        host.set_torque(self.entity, torque);

        let dt = host.delta_time();
        self.last_events = self.combat.handle(&*host, dt, &mut self.souls);
        self.souls.decay(dt);
    }
}

impl<H> Script<H> for Player
where
    H: InputSource + ForceActuator + Clock + ?Sized,
{
    fn update(&mut self, host: &mut H) {
        self.tick(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn damage_clamps_and_kills_once() {
        let mut player = Player::new(EntityHandle(1), &Tuning::default());
        assert!(!player.take_damage(40.0));
        assert!(player.take_damage(80.0));
        assert!(player.is_dead());
        assert!(player.health().abs() < f32::EPSILON);
        assert!(!player.take_damage(10.0));
    }

    #[rstest]
    fn dead_player_harvests_nothing() {
        let mut player = Player::new(EntityHandle(1), &Tuning::default());
        player.take_damage(1000.0);
        player.harvest_soul(SoulType::Fish);
        assert_eq!(player.souls().charges(SoulType::Fish), 0);
    }
}
