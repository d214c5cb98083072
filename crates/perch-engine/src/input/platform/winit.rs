use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{Key, KeyInput, KeyState};

/// Translates a winit keyboard event into an engine `KeyInput`.
pub(crate) fn translate_key_event(event: &KeyEvent) -> KeyInput {
    let state = match event.state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };

    KeyInput {
        key: map_key(event.physical_key),
        state,
        repeat: event.repeat,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(other) => Key::Unknown(other as u32),

        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_maps_to_named_key() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn other_keys_map_to_unknown() {
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::KeyQ)), Key::Unknown(_)));
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::Enter)), Key::Unknown(_)));
    }
}
