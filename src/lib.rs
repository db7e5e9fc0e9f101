#![cfg_attr(docsrs, feature(doc_cfg))]
//! Gameplay scripts for Ukemochi.
//!
//! Enemy AI, player control, combat and souls written against small
//! capability traits ([`interop`]) instead of a concrete engine. Two hosts are
//! provided: the in-memory [`WorldHandle`] and the Bevy [`ScriptPlugin`].
pub mod combat;
pub mod components;
pub mod config;
pub mod constants;
pub mod enemy;
pub mod engine_sync;
pub mod input;
pub mod interop;
pub mod logging;
pub mod physics;
pub mod player;
pub mod souls;
pub mod vector_math;
pub mod world_handle;
pub use constants::*;

// Re-export commonly used items
pub use combat::{AttackKind, CombatEvent, PlayerCombat};
pub use components::{EnemyBrain, Force, PlayerBrain, Spin, Tag, Velocity};
pub use config::{CombatConfig, ConfigError, EnemyConfig, PlayerConfig, SoulConfig, Tuning};
pub use enemy::{Enemy, EnemyState};
pub use engine_sync::{spawn_enemy, spawn_player, EnemyStateChanged, KillEnemy, ScriptPlugin};
pub use input::HeldInput;
pub use interop::{
    Clock, EntityHandle, EntityLookup, ForceActuator, InputSource, Key, MotionActuator,
    MouseButton, PositionSource, Script,
};
pub use logging::init as init_logging;
pub use physics::applied_acceleration;
pub use player::Player;
pub use souls::{SoulAbility, SoulManager, SoulType};
pub use vector_math::{vec_mag, vec_normalize};
pub use world_handle::WorldHandle;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use ukemochi::prelude::*;
    //! ```

    pub use crate::Enemy;
    pub use crate::EnemyState;
    pub use crate::EntityHandle;
    pub use crate::Player;
    pub use crate::Script;
    pub use crate::ScriptPlugin;
    pub use crate::Tuning;
    pub use crate::WorldHandle;
}
