//! In-memory engine host.
//!
//! Stores tagged rigid bodies and input state, implements every capability
//! trait scripts depend on, and integrates forces and velocities each step
//! without any external runtime. Used for headless runs and as the test
//! double for scripts.

use glam::Vec2;
use hashbrown::HashMap;
use log::{debug, warn};
use serde::Serialize;

use crate::input::HeldInput;
use crate::interop::{
    Clock, EntityHandle, EntityLookup, ForceActuator, InputSource, Key, MotionActuator,
    MouseButton, PositionSource,
};
use crate::physics::{applied_acceleration, integrate};
use crate::{DEFAULT_INERTIA, DEFAULT_MASS, DELTA_TIME};

#[derive(Clone, Debug, Serialize)]
/// Rigid body state owned by the host.
pub struct Body {
    /// Lookup tag, if any.
    pub tag: Option<String>,
    /// World-space position.
    pub position: Vec2,
    /// Linear velocity.
    pub velocity: Vec2,
    /// Continuous force, kept until replaced.
    pub force: Vec2,
    /// Mass; non-positive values make the body ignore force.
    pub mass: f32,
    /// Rotation in radians.
    pub angle: f32,
    /// Radians per second.
    pub angular_velocity: f32,
    /// Continuous torque around the z axis.
    pub torque: f32,
    /// Rotational inertia.
    pub inertia: f32,
    /// Velocity writes received since the last [`WorldHandle::step`].
    pub velocity_writes: u32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            tag: None,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: DEFAULT_MASS,
            angle: 0.0,
            angular_velocity: 0.0,
            torque: 0.0,
            inertia: DEFAULT_INERTIA,
            velocity_writes: 0,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
/// Discrete update describing a body's new position.
pub struct NewPosition {
    /// Body that moved.
    pub entity: EntityHandle,
    /// New x coordinate.
    pub x: f32,
    /// New y coordinate.
    pub y: f32,
}

/// In-memory snapshot of the simulated world.
pub struct WorldHandle {
    bodies: HashMap<EntityHandle, Body>,
    next_id: u64,
    input: HeldInput,
    dt: f32,
    /// Position changes produced by the last [`WorldHandle::step`].
    pub deltas: Vec<NewPosition>,
}

impl Default for WorldHandle {
    fn default() -> Self {
        Self::with_delta_time(DELTA_TIME)
    }
}

impl WorldHandle {
    /// Creates an empty world stepping `dt` seconds per tick.
    #[must_use]
    pub fn with_delta_time(dt: f32) -> Self {
        Self {
            bodies: HashMap::new(),
            next_id: 1,
            input: HeldInput::default(),
            dt,
            deltas: Vec::new(),
        }
    }

    /// Adds an untagged body at `position`.
    pub fn spawn(&mut self, position: Vec2) -> EntityHandle {
        self.spawn_body(Body {
            position,
            ..Body::default()
        })
    }

    /// Adds a body carrying `tag` at `position`.
    pub fn spawn_tagged(&mut self, tag: &str, position: Vec2) -> EntityHandle {
        self.spawn_body(Body {
            tag: Some(tag.to_owned()),
            position,
            ..Body::default()
        })
    }

    /// Adds `body` and returns its fresh handle.
    pub fn spawn_body(&mut self, body: Body) -> EntityHandle {
        let handle = EntityHandle(self.next_id);
        self.next_id += 1;
        debug!("spawned {handle:?} tagged {:?}", body.tag);
        self.bodies.insert(handle, body);
        handle
    }

    /// Removes a body, returning its final state.
    pub fn despawn(&mut self, entity: EntityHandle) -> Option<Body> {
        self.bodies.remove(&entity)
    }

    /// Stored state of `entity`.
    #[must_use]
    pub fn body(&self, entity: EntityHandle) -> Option<&Body> {
        self.bodies.get(&entity)
    }

    /// Mutable state of `entity`.
    pub fn body_mut(&mut self, entity: EntityHandle) -> Option<&mut Body> {
        self.bodies.get_mut(&entity)
    }

    /// Teleports a body. Unknown handles are ignored.
    pub fn set_position(&mut self, entity: EntityHandle, position: Vec2) {
        if let Some(body) = self.bodies.get_mut(&entity) {
            body.position = position;
        }
    }

    /// Current velocity of `entity`.
    #[must_use]
    pub fn velocity(&self, entity: EntityHandle) -> Option<Vec2> {
        self.bodies.get(&entity).map(|b| b.velocity)
    }

    /// Velocity writes `entity` received this tick; zero for unknown handles.
    #[must_use]
    pub fn velocity_writes(&self, entity: EntityHandle) -> u32 {
        self.bodies.get(&entity).map_or(0, |b| b.velocity_writes)
    }

    /// Input state read by scripts; pressed edges clear on [`Self::step`].
    pub const fn input_mut(&mut self) -> &mut HeldInput {
        &mut self.input
    }

    /// Marks `key` as held, and as pressed this frame if it was up.
    pub fn press_key(&mut self, key: Key) {
        self.input.press_key(key);
    }

    /// Marks `key` as up.
    pub fn release_key(&mut self, key: Key) {
        self.input.release_key(key);
    }

    /// Marks `button` as held, and as pressed this frame if it was up.
    pub fn press_button(&mut self, button: MouseButton) {
        self.input.press_button(button);
    }

    /// Marks `button` as up.
    pub fn release_button(&mut self, button: MouseButton) {
        self.input.release_button(button);
    }

    fn step_body(body: &mut Body, dt: f32) {
        let acceleration = applied_acceleration(body.force, Some(body.mass)).unwrap_or_else(|| {
            warn!("body with mass {} ignores force", body.mass);
            Vec2::ZERO
        });
        let (position, velocity) = integrate(body.position, body.velocity, acceleration, dt);
        body.position = position;
        body.velocity = velocity;
        if body.inertia > 0.0 {
            body.angular_velocity += body.torque / body.inertia * dt;
        }
        body.angle += body.angular_velocity * dt;
        body.velocity_writes = 0;
    }

    /// Advances the world by one tick.
    ///
    /// Integrates every body, records moved bodies in [`Self::deltas`] and
    /// clears the pressed-this-frame input edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukemochi::world_handle::WorldHandle;
    /// let mut handle = WorldHandle::default();
    /// handle.step();
    /// assert!(handle.deltas.is_empty());
    /// ```
    pub fn step(&mut self) {
        self.deltas.clear();
        let dt = self.dt;
        for (&entity, body) in &mut self.bodies {
            let before = body.position;
            Self::step_body(body, dt);
            if body.position != before {
                self.deltas.push(NewPosition {
                    entity,
                    x: body.position.x,
                    y: body.position.y,
                });
            }
        }
        self.deltas.sort_by_key(|d| d.entity);
        self.input.end_frame();
    }
}

impl PositionSource for WorldHandle {
    fn position(&self, entity: EntityHandle) -> Option<Vec2> {
        self.bodies.get(&entity).map(|b| b.position)
    }
}

impl EntityLookup for WorldHandle {
    /// Lowest handle carrying `tag`, so lookups are deterministic.
    fn find_by_tag(&self, tag: &str) -> Option<EntityHandle> {
        self.bodies
            .iter()
            .filter(|(_, b)| b.tag.as_deref() == Some(tag))
            .map(|(&h, _)| h)
            .min()
    }
}

impl MotionActuator for WorldHandle {
    fn set_velocity(&mut self, entity: EntityHandle, velocity: Vec2) {
        match self.bodies.get_mut(&entity) {
            Some(body) => {
                body.velocity = velocity;
                body.velocity_writes += 1;
            }
            None => debug!("velocity for unknown {entity:?} dropped"),
        }
    }
}

impl ForceActuator for WorldHandle {
    fn set_force(&mut self, entity: EntityHandle, force: Vec2) {
        if let Some(body) = self.bodies.get_mut(&entity) {
            body.force = force;
        }
    }

    fn set_torque(&mut self, entity: EntityHandle, torque: f32) {
        if let Some(body) = self.bodies.get_mut(&entity) {
            body.torque = torque;
        }
    }
}

impl InputSource for WorldHandle {
    fn key_held(&self, key: Key) -> bool {
        self.input.key_held(key)
    }

    fn key_pressed(&self, key: Key) -> bool {
        self.input.key_pressed(key)
    }

    fn mouse_held(&self, button: MouseButton) -> bool {
        self.input.mouse_held(button)
    }

    fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.input.mouse_pressed(button)
    }
}

impl Clock for WorldHandle {
    fn delta_time(&self) -> f32 {
        self.dt
    }
}
