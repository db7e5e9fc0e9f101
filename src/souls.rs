//! Soul harvesting and soul abilities.
//!
//! Killing an enemy yields its soul. Harvested souls fill a bar and grant a
//! charge; charges are spent on the ability of the currently selected soul.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SoulConfig;

/// Kind of soul an enemy carries and a player can wield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SoulType {
    /// No soul; yields nothing when harvested.
    #[default]
    Empty,
    /// Grants [`SoulAbility::FishAoe`].
    Fish,
    /// Grants [`SoulAbility::WormWeb`].
    Worm,
}

/// Effect unleashed by spending a soul charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoulAbility {
    /// Area attack around the player.
    FishAoe,
    /// Web that snares nearby enemies.
    WormWeb,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SoulPool {
    bar: f32,
    charges: u32,
}

/// Per-player soul bars, charges and the selected soul.
#[derive(Debug, Clone, PartialEq)]
pub struct SoulManager {
    config: SoulConfig,
    current: SoulType,
    fish: SoulPool,
    worm: SoulPool,
}

impl Default for SoulManager {
    fn default() -> Self {
        Self::new(SoulConfig::default())
    }
}

impl SoulManager {
    /// Creates a manager with empty pools and no soul selected.
    #[must_use]
    pub fn new(config: SoulConfig) -> Self {
        Self {
            config,
            current: SoulType::Empty,
            fish: SoulPool::default(),
            worm: SoulPool::default(),
        }
    }

    /// Currently selected soul.
    #[must_use]
    pub const fn current(&self) -> SoulType {
        self.current
    }

    /// Bar level for `soul`; zero for [`SoulType::Empty`].
    #[must_use]
    pub fn bar(&self, soul: SoulType) -> f32 {
        self.pool(soul).map_or(0.0, |p| p.bar)
    }

    /// Stored charges for `soul`; zero for [`SoulType::Empty`].
    #[must_use]
    pub fn charges(&self, soul: SoulType) -> u32 {
        self.pool(soul).map_or(0, |p| p.charges)
    }

    fn pool(&self, soul: SoulType) -> Option<&SoulPool> {
        match soul {
            SoulType::Fish => Some(&self.fish),
            SoulType::Worm => Some(&self.worm),
            SoulType::Empty => None,
        }
    }

    fn pool_mut(&mut self, soul: SoulType) -> Option<&mut SoulPool> {
        match soul {
            SoulType::Fish => Some(&mut self.fish),
            SoulType::Worm => Some(&mut self.worm),
            SoulType::Empty => None,
        }
    }

    /// Adds a harvested soul. Bars and charges saturate at their maxima.
    pub fn harvest(&mut self, soul: SoulType) {
        let SoulConfig {
            max_bar,
            max_charges,
            harvest_amount,
            ..
        } = self.config;
        if let Some(pool) = self.pool_mut(soul) {
            pool.bar = (pool.bar + harvest_amount).min(max_bar);
            pool.charges = (pool.charges + 1).min(max_charges);
            debug!(
                "harvested {soul:?} soul: bar {:.1}, charges {}",
                pool.bar, pool.charges
            );
        }
    }

    /// Cycles the selected soul: Fish to Worm, anything else to Fish.
    pub fn switch_souls(&mut self) -> SoulType {
        self.current = match self.current {
            SoulType::Fish => SoulType::Worm,
            SoulType::Worm | SoulType::Empty => SoulType::Fish,
        };
        self.current
    }

    /// Spends one charge of the selected soul.
    ///
    /// Returns `None` when no soul is selected or it has no charges left.
    pub fn use_ability(&mut self) -> Option<SoulAbility> {
        let ability = match self.current {
            SoulType::Fish => SoulAbility::FishAoe,
            SoulType::Worm => SoulAbility::WormWeb,
            SoulType::Empty => return None,
        };
        let pool = self.pool_mut(self.current)?;
        if pool.charges == 0 {
            return None;
        }
        pool.charges -= 1;
        Some(ability)
    }

    /// Drains every bar by `decay_rate * dt`, never below zero.
    pub fn decay(&mut self, dt: f32) {
        let loss = self.config.decay_rate * dt.max(0.0);
        for pool in [&mut self.fish, &mut self.worm] {
            pool.bar = (pool.bar - loss).max(0.0);
        }
    }
}
