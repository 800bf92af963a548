//! Keyboard sampling
//!
//! winit reports presses and releases as events; the simulation wants a
//! snapshot of what is held once per frame. `InputSampler` bridges the two.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::{HeldKeys, Key};

/// Physical key bound to each logical key
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Space => Some(Key::Boost),
        KeyCode::KeyS => Some(Key::Down),
        KeyCode::KeyW => Some(Key::Up),
        KeyCode::KeyA => Some(Key::Left),
        KeyCode::KeyD => Some(Key::Right),
        _ => None,
    }
}

/// Tracks held keys between frames and hands out per-frame snapshots
#[derive(Debug, Default)]
pub struct InputSampler {
    held: HeldKeys,
    snapshot: HeldKeys,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Unmapped keys are ignored.
    pub fn handle_key(&mut self, code: KeyCode, state: ElementState) {
        let Some(key) = map_key(code) else {
            return;
        };
        match state {
            ElementState::Pressed => self.held.insert(key),
            ElementState::Released => self.held.remove(key),
        }
    }

    /// Forget everything held (focus lost, release events won't arrive)
    pub fn release_all(&mut self) {
        if !self.held.is_empty() {
            log::debug!("Releasing held keys: {:?}", self.held.iter().collect::<Vec<_>>());
        }
        self.held.clear();
    }

    /// Keys held right now. Overwrites the previous snapshot.
    pub fn sample(&mut self) -> &HeldKeys {
        self.snapshot = self.held;
        &self.snapshot
    }
}
