//! Input state fed to player scripts.

use bevy::prelude::Resource;
use hashbrown::HashSet;

use crate::interop::{InputSource, Key, MouseButton};

/// Keys and buttons currently down, plus those that went down this frame.
///
/// Whatever polls the real devices writes here; pressed edges are cleared at
/// the end of every frame.
#[derive(Resource, Default, Debug, Clone)]
pub struct HeldInput {
    held_keys: HashSet<Key>,
    pressed_keys: HashSet<Key>,
    held_buttons: HashSet<MouseButton>,
    pressed_buttons: HashSet<MouseButton>,
}

impl HeldInput {
    /// Marks `key` as held. It counts as pressed only if it was up.
    pub fn press_key(&mut self, key: Key) {
        if self.held_keys.insert(key) {
            self.pressed_keys.insert(key);
        }
    }

    /// Marks `key` as up.
    pub fn release_key(&mut self, key: Key) {
        self.held_keys.remove(&key);
        self.pressed_keys.remove(&key);
    }

    /// Marks `button` as held. It counts as pressed only if it was up.
    pub fn press_button(&mut self, button: MouseButton) {
        if self.held_buttons.insert(button) {
            self.pressed_buttons.insert(button);
        }
    }

    /// Marks `button` as up.
    pub fn release_button(&mut self, button: MouseButton) {
        self.held_buttons.remove(&button);
        self.pressed_buttons.remove(&button);
    }

    /// Forgets this frame's pressed edges; held state is kept.
    pub fn end_frame(&mut self) {
        self.pressed_keys.clear();
        self.pressed_buttons.clear();
    }
}

impl InputSource for HeldInput {
    fn key_held(&self, key: Key) -> bool {
        self.held_keys.contains(&key)
    }

    fn key_pressed(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    fn mouse_held(&self, button: MouseButton) -> bool {
        self.held_buttons.contains(&button)
    }

    fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }
}
