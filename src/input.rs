//! Keyboard, mouse and window state sampled once per frame
//!
//! The browser listeners in `platform::web` write into an [`Input`]; views only
//! ever ask "is this key down right now".

use std::collections::HashSet;

use glam::Vec2;

/// Virtual key codes (DOM `keyCode` values)
pub mod keys {
    pub const ENTER: u32 = 13;
    pub const SHIFT: u32 = 16;
    pub const CTRL: u32 = 17;
    pub const ALT: u32 = 18;
    pub const ESC: u32 = 27;
    pub const SPACE: u32 = 32;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const DEL: u32 = 46;
    pub const KEY_0: u32 = 48;
    pub const KEY_1: u32 = 49;
    pub const KEY_9: u32 = 57;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const Z: u32 = 90;
}

/// Mouse button bitmask values (DOM `buttons`)
pub mod mouse {
    pub const NOTHING: u16 = 0;
    pub const PRIMARY: u16 = 1;
    pub const SECONDARY: u16 = 2;
    pub const AUXILIARY: u16 = 4;
}

#[derive(Debug, Clone, Default)]
pub struct MouseState {
    pub position: Vec2,
    pub buttons: u16,
    pub in_window: bool,
}

/// Current input state
#[derive(Debug, Clone, Default)]
pub struct Input {
    keys_down: HashSet<u32>,
    pub mouse: MouseState,
    pub window_size: Vec2,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input with the given keys held (scripted runs and tests)
    pub fn with_keys(codes: &[u32]) -> Self {
        let mut input = Self::new();
        for &code in codes {
            input.key_down(code);
        }
        input
    }

    pub fn key_down(&mut self, code: u32) {
        self.keys_down.insert(code);
    }

    pub fn key_up(&mut self, code: u32) {
        self.keys_down.remove(&code);
    }

    pub fn is_key_down(&self, code: u32) -> bool {
        self.keys_down.contains(&code)
    }

    /// Ctrl+Alt+D, the debug overlay chord
    pub fn debug_chord(&self) -> bool {
        self.is_key_down(keys::CTRL) && self.is_key_down(keys::ALT) && self.is_key_down(keys::D)
    }

    /// Forget every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.mouse.buttons = mouse::NOTHING;
    }
}
