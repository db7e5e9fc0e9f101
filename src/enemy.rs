//! Enemy pursuit behaviour.
//!
//! An enemy roams until its target comes within the aggro radius, chases it
//! with a smoothed heading, and holds position once inside the engage radius.
//! Entering and leaving each state use different thresholds so an enemy
//! sitting on a boundary does not flap between states.

use glam::Vec2;
use log::debug;
use serde::Serialize;

use crate::config::EnemyConfig;
use crate::interop::{EntityHandle, EntityLookup, MotionActuator, PositionSource, Script};
use crate::souls::SoulType;
use crate::vector_math::{blend_direction, distance_squared, vec_normalize};

/// Behaviour state of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EnemyState {
    /// Wandering with a fixed velocity until the target comes close.
    #[default]
    Roaming,
    /// Closing in along the smoothed pursuit direction.
    Chasing,
    /// Holding position next to the target.
    Attacking,
    /// Terminal. Only reachable through [`Enemy::kill`].
    Dead,
}

impl EnemyState {
    /// `true` for states no transition leaves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Dead)
    }
}

/// Pursuit state machine for one enemy.
#[derive(Debug, Clone)]
pub struct Enemy {
    entity: EntityHandle,
    target: Option<EntityHandle>,
    state: EnemyState,
    pursuit: Vec2,
    soul: SoulType,
    config: EnemyConfig,
}

impl Enemy {
    /// Creates an enemy and resolves its target by tag.
    ///
    /// The lookup happens once; a missing target leaves the enemy inert
    /// rather than failing.
    pub fn start<L>(entity: EntityHandle, lookup: &L, config: EnemyConfig) -> Self
    where
        L: EntityLookup + ?Sized,
    {
        let target = lookup.find_by_tag(&config.target_tag);
        if target.is_none() {
            debug!(
                "enemy {entity:?} found no entity tagged {:?}",
                config.target_tag
            );
        }
        Self::with_target(entity, target, config)
    }

    /// Creates an enemy with an already resolved target.
    #[must_use]
    pub const fn with_target(
        entity: EntityHandle,
        target: Option<EntityHandle>,
        config: EnemyConfig,
    ) -> Self {
        Self {
            entity,
            target,
            state: EnemyState::Roaming,
            pursuit: Vec2::ZERO,
            soul: SoulType::Empty,
            config,
        }
    }

    /// Sets the soul this enemy yields when killed.
    #[must_use]
    pub const fn with_soul(mut self, soul: SoulType) -> Self {
        self.soul = soul;
        self
    }

    /// Body this enemy drives.
    #[must_use]
    pub const fn entity(&self) -> EntityHandle {
        self.entity
    }

    /// Entity pursued, if one was found.
    #[must_use]
    pub const fn target(&self) -> Option<EntityHandle> {
        self.target
    }

    /// Points the enemy at a different target, or at none.
    pub const fn retarget(&mut self, target: Option<EntityHandle>) {
        self.target = target;
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> EnemyState {
        self.state
    }

    /// Smoothed heading retained between ticks.
    #[must_use]
    pub const fn pursuit_direction(&self) -> Vec2 {
        self.pursuit
    }

    /// Soul yielded when killed.
    #[must_use]
    pub const fn soul(&self) -> SoulType {
        self.soul
    }

    /// Tunables this enemy runs with.
    #[must_use]
    pub const fn config(&self) -> &EnemyConfig {
        &self.config
    }

    /// Moves the enemy into [`EnemyState::Dead`].
    ///
    /// Returns `false` if it was already dead.
    pub fn kill(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        debug!("enemy {:?}: {:?} -> Dead", self.entity, self.state);
        self.state = EnemyState::Dead;
        true
    }

    /// Advances the state machine one tick.
    ///
    /// Returns the velocity to hand to the motion actuator, or `None` when
    /// nothing must be written: the enemy is dead or has no target. An enemy
    /// standing on its target gets zero velocity whatever its state.
    pub fn step(&mut self, position: Vec2, target: Option<Vec2>) -> Option<Vec2> {
        if self.state.is_terminal() {
            return None;
        }
        let target_position = target?;
        let heading = vec_normalize(target_position - position);
        let dist_sq = distance_squared(position, target_position);

        let velocity = if heading == Vec2::ZERO {
            Vec2::ZERO
        } else {
            match self.state {
                EnemyState::Roaming => self.config.wander(),
                EnemyState::Chasing => self.pursue(heading),
                EnemyState::Attacking | EnemyState::Dead => Vec2::ZERO,
            }
        };

        let next = self.transition(dist_sq);
        if next != self.state {
            debug!(
                "enemy {:?}: {:?} -> {next:?} at distance {:.1}",
                self.entity,
                self.state,
                dist_sq.sqrt()
            );
            self.state = next;
        }
        Some(velocity)
    }

    fn pursue(&mut self, heading: Vec2) -> Vec2 {
        self.pursuit = blend_direction(self.pursuit, heading, self.config.smoothing);
        self.pursuit * self.config.pursuit_speed
    }

    fn transition(&self, dist_sq: f32) -> EnemyState {
        let config = &self.config;
        match self.state {
            EnemyState::Roaming if dist_sq < config.aggro_radius_squared() => EnemyState::Chasing,
            EnemyState::Chasing if dist_sq < config.engage_radius_squared() => {
                EnemyState::Attacking
            }
            EnemyState::Chasing if dist_sq > config.leash_radius_squared() => EnemyState::Roaming,
            EnemyState::Attacking if dist_sq > config.engage_radius_squared() => {
                EnemyState::Chasing
            }
            state => state,
        }
    }

    /// Reads positions from `host`, steps, and writes the resulting velocity.
    pub fn tick<H>(&mut self, host: &mut H) -> Option<Vec2>
    where
        H: PositionSource + MotionActuator + ?Sized,
    {
        if self.state.is_terminal() {
            return None;
        }
        let target = self.target?;
        let Some(target_position) = host.position(target) else {
            debug!("enemy {:?}: target {target:?} vanished", self.entity);
            return None;
        };
        let position = host.position(self.entity)?;
        let velocity = self.step(position, Some(target_position))?;
        host.set_velocity(self.entity, velocity);
        Some(velocity)
    }
}

impl<H> Script<H> for Enemy
where
    H: PositionSource + MotionActuator + ?Sized,
{
    fn update(&mut self, host: &mut H) {
        let _velocity = self.tick(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    const ME: EntityHandle = EntityHandle(1);
    const PLAYER: EntityHandle = EntityHandle(2);

    #[fixture]
    fn enemy() -> Enemy {
        Enemy::with_target(ME, Some(PLAYER), EnemyConfig::default())
    }

    fn in_state(mut enemy: Enemy, state: EnemyState) -> Enemy {
        enemy.state = state;
        enemy
    }

    fn at(distance: f32) -> Option<Vec2> {
        Some(Vec2::new(distance, 0.0))
    }

    #[rstest]
    #[case::far_roaming(EnemyState::Roaming, 400.0, EnemyState::Roaming)]
    #[case::at_aggro(EnemyState::Roaming, 250.0, EnemyState::Roaming)]
    #[case::inside_aggro(EnemyState::Roaming, 249.9, EnemyState::Chasing)]
    #[case::chase_band(EnemyState::Chasing, 200.0, EnemyState::Chasing)]
    #[case::chase_inside_leash(EnemyState::Chasing, 255.0, EnemyState::Chasing)]
    #[case::chase_past_leash(EnemyState::Chasing, 261.0, EnemyState::Roaming)]
    #[case::chase_to_attack(EnemyState::Chasing, 100.0, EnemyState::Attacking)]
    #[case::attack_holds(EnemyState::Attacking, 150.0, EnemyState::Attacking)]
    #[case::attack_to_chase(EnemyState::Attacking, 151.0, EnemyState::Chasing)]
    #[case::dead_stays(EnemyState::Dead, 10.0, EnemyState::Dead)]
    fn transitions(
        enemy: Enemy,
        #[case] from: EnemyState,
        #[case] distance: f32,
        #[case] expected: EnemyState,
    ) {
        let mut enemy = in_state(enemy, from);
        enemy.step(Vec2::ZERO, at(distance));
        assert_eq!(enemy.state(), expected);
    }

    #[rstest]
    fn roaming_wanders(mut enemy: Enemy) {
        let velocity = enemy.step(Vec2::ZERO, at(1000.0));
        assert_eq!(velocity, Some(Vec2::new(50.0, 50.0)));
    }

    #[rstest]
    fn attacking_holds_position(enemy: Enemy) {
        let mut enemy = in_state(enemy, EnemyState::Attacking);
        assert_eq!(enemy.step(Vec2::ZERO, at(100.0)), Some(Vec2::ZERO));
    }

    #[rstest]
    fn dead_emits_nothing(enemy: Enemy) {
        let mut enemy = in_state(enemy, EnemyState::Dead);
        assert_eq!(enemy.step(Vec2::ZERO, at(100.0)), None);
    }

    #[rstest]
    fn missing_target_changes_nothing(mut enemy: Enemy) {
        assert_eq!(enemy.step(Vec2::ZERO, None), None);
        assert_eq!(enemy.state(), EnemyState::Roaming);
    }

    #[rstest]
    fn first_chase_tick_blends_five_percent(enemy: Enemy) {
        let mut enemy = in_state(enemy, EnemyState::Chasing);
        let velocity = enemy.step(Vec2::ZERO, at(200.0)).unwrap_or_default();
        assert_relative_eq!(enemy.pursuit_direction().x, 0.05);
        assert_relative_eq!(velocity.x, 7.5);
        assert_relative_eq!(velocity.y, 0.0);
    }

    #[rstest]
    #[case::roaming(EnemyState::Roaming, EnemyState::Chasing)]
    #[case::chasing(EnemyState::Chasing, EnemyState::Attacking)]
    #[case::attacking(EnemyState::Attacking, EnemyState::Attacking)]
    fn coincident_target_yields_zero_velocity(
        enemy: Enemy,
        #[case] from: EnemyState,
        #[case] expected: EnemyState,
    ) {
        let mut enemy = in_state(enemy, from);
        let here = Vec2::new(3.0, 4.0);
        assert_eq!(enemy.step(here, Some(here)), Some(Vec2::ZERO));
        assert_eq!(enemy.pursuit_direction(), Vec2::ZERO);
        assert_eq!(enemy.state(), expected);
    }

    #[rstest]
    fn pursuit_converges_on_a_fixed_heading(enemy: Enemy) {
        let mut enemy = in_state(enemy, EnemyState::Chasing);
        let target = Some(Vec2::new(0.0, 200.0));
        let mut previous = 0.0;
        for _ in 0..500 {
            enemy.step(Vec2::ZERO, target);
            assert_eq!(enemy.state(), EnemyState::Chasing);
            let length = enemy.pursuit_direction().length();
            assert!(length + 1e-6 >= previous, "heading shrank to {length}");
            assert!(length <= 1.0 + 1e-6, "heading overshot to {length}");
            previous = length;
        }
        let heading = enemy.pursuit_direction();
        assert!((heading - Vec2::Y).length() < 1e-3, "ended at {heading:?}");
    }

    #[rstest]
    fn kill_is_idempotent(mut enemy: Enemy) {
        assert!(enemy.kill());
        assert!(!enemy.kill());
        assert!(enemy.state().is_terminal());
    }
}
