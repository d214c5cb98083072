/// Keyboard key identifier.
///
/// Only keys the engine reacts to get a named variant. Everything else is
/// carried as `Key::Unknown(code)` with the platform key code so callers can
/// still log or inspect it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A single keyboard transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyInput {
    pub key: Key,
    pub state: KeyState,

    /// `true` for OS auto-repeat presses while the key is held.
    pub repeat: bool,
}

impl KeyInput {
    #[inline]
    pub const fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    #[inline]
    pub const fn released(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
            repeat: false,
        }
    }

    /// Returns `true` for the first press of `key` (auto-repeat excluded).
    #[inline]
    pub fn is_fresh_press_of(self, key: Key) -> bool {
        self.key == key && self.state == KeyState::Pressed && !self.repeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_press_matches_only_the_same_key() {
        assert!(KeyInput::pressed(Key::Escape).is_fresh_press_of(Key::Escape));
        assert!(!KeyInput::pressed(Key::Unknown(7)).is_fresh_press_of(Key::Escape));
    }

    #[test]
    fn release_and_repeat_are_not_fresh_presses() {
        assert!(!KeyInput::released(Key::Escape).is_fresh_press_of(Key::Escape));

        let repeat = KeyInput {
            repeat: true,
            ..KeyInput::pressed(Key::Escape)
        };
        assert!(!repeat.is_fresh_press_of(Key::Escape));
    }
}
