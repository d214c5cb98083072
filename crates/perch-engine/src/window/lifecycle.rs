use crate::input::{Key, KeyInput};

/// Key whose press requests termination.
pub const TERMINATION_KEY: Key = Key::Escape;

/// Owner of the termination flag.
///
/// The flag starts cleared and is set at most once; every later request is a
/// no-op. The render loop reads it at the top of each iteration.
#[derive(Debug, Default)]
pub struct Lifecycle {
    should_close: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Requests termination. Idempotent.
    pub fn close(&mut self) {
        if self.should_close {
            return;
        }
        self.should_close = true;
        log::info!("close requested");
    }

    /// Input observer: maps the termination gesture to [`close`](Self::close).
    ///
    /// Returns `true` if the input was consumed. All other input is ignored.
    pub fn observe_key(&mut self, input: KeyInput) -> bool {
        if input.is_fresh_press_of(TERMINATION_KEY) {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyState;

    #[test]
    fn starts_open() {
        assert!(!Lifecycle::new().should_close());
    }

    #[test]
    fn close_is_idempotent() {
        let mut once = Lifecycle::new();
        once.close();

        let mut many = Lifecycle::new();
        for _ in 0..5 {
            many.close();
        }

        assert!(once.should_close());
        assert_eq!(once.should_close(), many.should_close());
    }

    #[test]
    fn escape_press_closes() {
        let mut lc = Lifecycle::new();
        assert!(lc.observe_key(KeyInput::pressed(Key::Escape)));
        assert!(lc.should_close());
    }

    #[test]
    fn escape_release_and_repeat_are_ignored() {
        let mut lc = Lifecycle::new();
        assert!(!lc.observe_key(KeyInput::released(Key::Escape)));
        assert!(!lc.observe_key(KeyInput {
            key: Key::Escape,
            state: KeyState::Pressed,
            repeat: true,
        }));
        assert!(!lc.should_close());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut lc = Lifecycle::new();
        assert!(!lc.observe_key(KeyInput::pressed(Key::Unknown(42))));
        assert!(!lc.should_close());
    }
}
