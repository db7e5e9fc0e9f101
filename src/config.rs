//! Tunable gameplay parameters.
//!
//! Every field defaults to the value in [`crate::constants`]. A JSON document
//! only needs to name the fields it overrides:
//!
//! ```
//! use ukemochi::Tuning;
//! let tuning = Tuning::from_json_str(r#"{ "enemy": { "pursuit_speed": 90.0 } }"#).unwrap();
//! assert!((tuning.enemy.pursuit_speed - 90.0).abs() < f32::EPSILON);
//! assert!((tuning.enemy.aggro_radius - ukemochi::AGGRO_RADIUS).abs() < f32::EPSILON);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use glam::Vec2;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    AGGRO_RADIUS, ATTACK_COOLDOWN, COMBO_WINDOW, ENGAGE_RADIUS, LEASH_MARGIN, MAX_COMBO_HITS,
    MAX_SOUL_BAR, MAX_SOUL_CHARGES, PLAYER_FORCE, PLAYER_MAX_HEALTH, PLAYER_TAG, PURSUIT_SMOOTHING,
    PURSUIT_SPEED, SOUL_DECAY_RATE, SOUL_HARVEST_AMOUNT, WANDER_VELOCITY,
};

/// Failure to obtain a usable [`Tuning`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The tuning file could not be read.
    #[error("failed to read tuning file {path}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid tuning JSON.
    #[error("malformed tuning document")]
    Parse(#[from] serde_json::Error),
    /// A value is out of range; the message names it.
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// `false` for NaN as well as for non-positive values.
const fn is_positive(value: f32) -> bool {
    value > 0.0
}

const fn is_non_negative(value: f32) -> bool {
    value >= 0.0
}

fn invalid(detail: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(detail.into())
}

/// Enemy pursuit tunables. Radii are linear world units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Tag of the entity to pursue.
    pub target_tag: String,
    /// Roaming enemies start chasing inside this distance.
    pub aggro_radius: f32,
    /// Chasing enemies attack inside this distance.
    pub engage_radius: f32,
    /// Added to the aggro radius before a chase is abandoned.
    pub leash_margin: f32,
    /// Chase speed at full heading, units per second.
    pub pursuit_speed: f32,
    /// Weight of the fresh direction in the pursuit blend, in `(0, 1]`.
    pub smoothing: f32,
    /// Velocity while roaming.
    pub wander_velocity: [f32; 2],
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            target_tag: PLAYER_TAG.to_owned(),
            aggro_radius: AGGRO_RADIUS,
            engage_radius: ENGAGE_RADIUS,
            leash_margin: LEASH_MARGIN,
            pursuit_speed: PURSUIT_SPEED,
            smoothing: PURSUIT_SMOOTHING,
            wander_velocity: WANDER_VELOCITY,
        }
    }
}

impl EnemyConfig {
    /// Roaming velocity as a vector.
    #[must_use]
    pub const fn wander(&self) -> Vec2 {
        Vec2::from_array(self.wander_velocity)
    }

    /// Square of [`Self::aggro_radius`].
    #[must_use]
    pub const fn aggro_radius_squared(&self) -> f32 {
        self.aggro_radius * self.aggro_radius
    }

    /// Square of [`Self::engage_radius`].
    #[must_use]
    pub const fn engage_radius_squared(&self) -> f32 {
        self.engage_radius * self.engage_radius
    }

    /// Squared distance a chasing enemy must exceed to give up.
    #[must_use]
    pub const fn leash_radius_squared(&self) -> f32 {
        let leash = self.aggro_radius + self.leash_margin;
        leash * leash
    }

    /// Checks the radii form a proper hysteresis band.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when a radius is not positive, the
    /// engage radius is not strictly inside the aggro radius, or the
    /// smoothing weight is outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_tag.is_empty() {
            return Err(invalid("enemy target tag is empty"));
        }
        if !is_positive(self.engage_radius) {
            return Err(invalid(format!(
                "engage radius must be positive, got {}",
                self.engage_radius
            )));
        }
        if self.engage_radius >= self.aggro_radius || !self.aggro_radius.is_finite() {
            return Err(invalid(format!(
                "engage radius {} must be smaller than aggro radius {}",
                self.engage_radius, self.aggro_radius
            )));
        }
        if !is_non_negative(self.leash_margin) {
            return Err(invalid("leash margin must not be negative"));
        }
        if !is_non_negative(self.pursuit_speed) {
            return Err(invalid("pursuit speed must not be negative"));
        }
        if !(is_positive(self.smoothing) && self.smoothing <= 1.0) {
            return Err(invalid(format!(
                "smoothing weight must lie in (0, 1], got {}",
                self.smoothing
            )));
        }
        if !self.wander().is_finite() {
            return Err(invalid("wander velocity must be finite"));
        }
        Ok(())
    }
}

/// Player movement and health tunables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Force per held movement key.
    pub move_force: f32,
    /// Starting and maximum health.
    pub max_health: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_force: PLAYER_FORCE,
            max_health: PLAYER_MAX_HEALTH,
        }
    }
}

/// Basic attack timing tunables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Hits in a full combo.
    pub max_combo_hits: u32,
    /// Seconds between basic attacks.
    pub attack_cooldown: f32,
    /// Seconds after an attack before the combo resets.
    pub combo_window: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            max_combo_hits: MAX_COMBO_HITS,
            attack_cooldown: ATTACK_COOLDOWN,
            combo_window: COMBO_WINDOW,
        }
    }
}

/// Soul bar and charge tunables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SoulConfig {
    /// Upper bound of each bar.
    pub max_bar: f32,
    /// Upper bound of stored charges.
    pub max_charges: u32,
    /// Bar gained per harvest.
    pub harvest_amount: f32,
    /// Bar lost per second.
    pub decay_rate: f32,
}

impl Default for SoulConfig {
    fn default() -> Self {
        Self {
            max_bar: MAX_SOUL_BAR,
            max_charges: MAX_SOUL_CHARGES,
            harvest_amount: SOUL_HARVEST_AMOUNT,
            decay_rate: SOUL_DECAY_RATE,
        }
    }
}

/// All gameplay tunables.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Enemy behaviour.
    pub enemy: EnemyConfig,
    /// Player movement.
    pub player: PlayerConfig,
    /// Attack timing.
    pub combat: CombatConfig,
    /// Soul economy.
    pub souls: SoulConfig,
}

impl Tuning {
    /// Parses and validates a JSON tuning document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reads, parses and validates the tuning file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// errors of [`Tuning::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validates every section.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.enemy.validate()?;
        if !is_non_negative(self.player.move_force) {
            return Err(invalid("player force must not be negative"));
        }
        if !is_positive(self.player.max_health) {
            return Err(invalid("player max health must be positive"));
        }
        if self.combat.max_combo_hits == 0 {
            return Err(invalid("combo must allow at least one hit"));
        }
        if !is_non_negative(self.combat.attack_cooldown)
            || !is_non_negative(self.combat.combo_window)
        {
            return Err(invalid("combat timings must not be negative"));
        }
        if !is_non_negative(self.souls.max_bar)
            || !is_non_negative(self.souls.harvest_amount)
            || !is_non_negative(self.souls.decay_rate)
        {
            return Err(invalid("soul values must not be negative"));
        }
        Ok(())
    }
}
