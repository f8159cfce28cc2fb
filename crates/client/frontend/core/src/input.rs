//! Keyboard state vectors and edge detection.
//!
//! A presentation samples the whole keyboard once per frame and compares it
//! with the previous sample; only keys that went from released to pressed
//! produce input.

use game_core::Input;
use strum::{EnumCount, IntoEnumIterator};

/// Keys the presentation tracks, in priority order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumCount, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub fn input(self) -> Input {
        match self {
            Key::Up => Input::Up,
            Key::Down => Input::Down,
            Key::Left => Input::Left,
            Key::Right => Input::Right,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Snapshot of which tracked keys are held down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pressed: [bool; Key::COUNT],
}

impl KeyboardState {
    pub fn with_pressed(keys: &[Key]) -> Self {
        let mut state = Self::default();
        for key in keys {
            state.set(*key, true);
        }
        state
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// `key` is down now and was up in `previous`.
    pub fn pressed_since(&self, previous: &KeyboardState, key: Key) -> bool {
        self.is_pressed(key) && !previous.is_pressed(key)
    }

    /// The first newly pressed key, checked Up, Down, Left, Right, as input.
    pub fn directional_input(&self, previous: &KeyboardState) -> Input {
        Key::iter()
            .find(|key| self.pressed_since(previous, *key))
            .map_or(Input::None, Key::input)
    }
}
