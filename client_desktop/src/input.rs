//! Keyboard input handling

use game_core::{InputState, Key};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Map a physical key to one the demo reacts to
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Record a key transition. Unrecognised keys are ignored.
pub fn handle_key(input: &mut InputState, code: KeyCode, state: ElementState) {
    let Some(key) = map_key(code) else {
        return;
    };
    match state {
        ElementState::Pressed => input.press(key),
        ElementState::Released => input.release(key),
    }
}
