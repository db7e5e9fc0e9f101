//! Systems running the scripts inside Bevy ECS.
//!
//! Bevy plays the role of the native engine here: `Transform` is the position
//! source, [`Velocity`](crate::components::Velocity) and
//! [`Force`](crate::components::Force) are the actuators, and
//! [`HeldInput`] and `Time` feed the player script.

mod host;
mod plugin;
mod spawn;
mod systems;

pub use crate::input::HeldInput;
pub use plugin::{EnemyStateChanged, KillEnemy, ScriptPlugin};
pub use spawn::{spawn_enemy, spawn_player};
pub use systems::{
    clear_input_edges_system, enemy_tick_system, integrate_motion_system, player_tick_system,
    resolve_enemy_targets_system,
};
