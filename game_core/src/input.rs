//! Keyboard model shared by the simulation and the client

use std::collections::HashSet;

/// Keys the demo reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Escape,
}

/// Key bindings for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleKeys {
    pub up: Key,
    pub down: Key,
}

impl PaddleKeys {
    pub fn new(up: Key, down: Key) -> Self {
        Self { up, down }
    }

    pub fn arrows() -> Self {
        Self::new(Key::Up, Key::Down)
    }

    pub fn wasd() -> Self {
        Self::new(Key::W, Key::S)
    }
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        input.press(Key::W);
        assert!(input.is_held(Key::W));
        assert!(!input.is_held(Key::S));

        input.release(Key::W);
        assert!(!input.is_held(Key::W));
    }

    #[test]
    fn test_repeated_press_is_idempotent() {
        let mut input = InputState::new();
        input.press(Key::Up);
        input.press(Key::Up);
        input.release(Key::Up);
        assert!(!input.is_held(Key::Up));
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        input.press(Key::Up);
        input.press(Key::Escape);
        input.clear();
        assert!(!input.is_held(Key::Up));
        assert!(!input.is_held(Key::Escape));
    }
}
