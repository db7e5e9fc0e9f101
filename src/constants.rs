//! Gameplay tuning constants used as configuration defaults.
//!
//! Radii are linear world units. The enemy compares squared distances against
//! the squares of these values.

/// Tag the enemy uses to find its pursuit target.
pub const PLAYER_TAG: &str = "Player";
/// Tag given to enemy bodies.
pub const ENEMY_TAG: &str = "Enemy";

/// Distance at which a roaming enemy notices its target.
pub const AGGRO_RADIUS: f32 = 250.0;
/// Distance at which a chasing enemy stops to attack.
pub const ENGAGE_RADIUS: f32 = 150.0;
/// Extra distance beyond [`AGGRO_RADIUS`] a chasing enemy must exceed before
/// it returns to roaming.
pub const LEASH_MARGIN: f32 = 10.0;
/// Chase speed in world units per second at full heading.
pub const PURSUIT_SPEED: f32 = 150.0;
/// Share of the fresh direction blended into the pursuit direction each tick.
pub const PURSUIT_SMOOTHING: f32 = 0.05;
/// Velocity of a roaming enemy.
pub const WANDER_VELOCITY: [f32; 2] = [50.0, 50.0];
/// Magnitudes below this are treated as zero when normalising.
pub const DIRECTION_EPSILON: f32 = 1e-6;

/// Force applied per held movement key.
pub const PLAYER_FORCE: f32 = 1500.0;
/// Starting and maximum player health.
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Hits in a full combo; the last one knocks back.
pub const MAX_COMBO_HITS: u32 = 3;
/// Seconds between basic attacks.
pub const ATTACK_COOLDOWN: f32 = 0.5;
/// Seconds after an attack during which the next one continues the combo.
pub const COMBO_WINDOW: f32 = 1.0;

/// Upper bound of each soul bar.
pub const MAX_SOUL_BAR: f32 = 100.0;
/// Upper bound of stored charges per soul.
pub const MAX_SOUL_CHARGES: u32 = 3;
/// Bar gained per harvested soul.
pub const SOUL_HARVEST_AMOUNT: f32 = 15.0;
/// Soul bar units lost per second.
pub const SOUL_DECAY_RATE: f32 = 1.0;

/// Mass used when a body does not specify one.
pub const DEFAULT_MASS: f32 = 1.0;
/// Rotational inertia of a new body.
pub const DEFAULT_INERTIA: f32 = 1.0;
/// Fixed step used by the in-memory host.
pub const DELTA_TIME: f32 = 1.0 / 60.0;
