//! Player combat: combo attacks, cooldown and soul triggers.

use log::debug;
use serde::Serialize;

use crate::config::CombatConfig;
use crate::interop::{InputSource, Key, MouseButton};
use crate::souls::{SoulAbility, SoulManager, SoulType};

/// Kind of basic attack landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttackKind {
    /// Regular combo hit.
    Slash,
    /// Combo finisher.
    Knockback,
}

/// Something the combat handler did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CombatEvent {
    /// A basic attack landed.
    Attack(AttackKind),
    /// A soul charge was spent.
    Ability(SoulAbility),
    /// The selected soul changed to the given one.
    SoulSwitched(SoulType),
}

/// Combo and cooldown state of one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCombat {
    config: CombatConfig,
    combo_hits: u32,
    can_attack: bool,
    attack_timer: f32,
    since_last_attack: f32,
}

impl Default for PlayerCombat {
    fn default() -> Self {
        Self::new(CombatConfig::default())
    }
}

impl PlayerCombat {
    /// Creates combat state ready to attack.
    #[must_use]
    pub const fn new(config: CombatConfig) -> Self {
        Self {
            config,
            combo_hits: 0,
            can_attack: true,
            attack_timer: 0.0,
            since_last_attack: 0.0,
        }
    }

    /// Hits landed in the running combo.
    #[must_use]
    pub const fn combo_hits(&self) -> u32 {
        self.combo_hits
    }

    /// `false` while the attack cooldown runs.
    #[must_use]
    pub const fn can_attack(&self) -> bool {
        self.can_attack
    }

    /// Processes one tick of combat input.
    ///
    /// Left mouse held attacks when the cooldown allows, right mouse pressed
    /// spends a soul charge and `Q` pressed switches souls.
    pub fn handle<I>(&mut self, input: &I, dt: f32, souls: &mut SoulManager) -> Vec<CombatEvent>
    where
        I: InputSource + ?Sized,
    {
        let mut events = Vec::new();
        self.advance_timers(dt);

        if input.mouse_held(MouseButton::Left) && self.can_attack {
            events.push(CombatEvent::Attack(self.basic_attack()));
        }
        if input.mouse_pressed(MouseButton::Right) {
            if let Some(ability) = souls.use_ability() {
                events.push(CombatEvent::Ability(ability));
            }
        }
        if input.key_pressed(Key::Q) {
            events.push(CombatEvent::SoulSwitched(souls.switch_souls()));
        }
        events
    }

    fn advance_timers(&mut self, dt: f32) {
        let elapsed = dt.max(0.0);
        self.since_last_attack += elapsed;
        if self.combo_hits > 0 && self.since_last_attack > self.config.combo_window {
            self.combo_hits = 0;
        }
        if !self.can_attack {
            self.attack_timer += elapsed;
            if self.attack_timer >= self.config.attack_cooldown {
                self.attack_timer = 0.0;
                self.can_attack = true;
            }
        }
    }

    fn basic_attack(&mut self) -> AttackKind {
        self.can_attack = false;
        self.since_last_attack = 0.0;
        self.combo_hits += 1;
        let kind = if self.combo_hits < self.config.max_combo_hits {
            AttackKind::Slash
        } else {
            self.combo_hits = 0;
            AttackKind::Knockback
        };
        debug!("basic attack: {kind:?}");
        kind
    }
}
