//! Keyboard state for the simulation
//!
//! The platform layer forwards raw key-down/key-up codes; the tracker turns
//! them into the held-key set and edge-triggered swing request a tick needs.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;
use crate::sim::arena::Viewport;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Forward,
    Reverse,
    Left,
    Right,
    Swing,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(Key::Forward),
            "KeyS" | "ArrowDown" => Some(Key::Reverse),
            "KeyA" | "ArrowLeft" => Some(Key::Left),
            "KeyD" | "ArrowRight" => Some(Key::Right),
            "Space" => Some(Key::Swing),
            _ => None,
        }
    }
}

/// Movement keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub forward: bool,
    pub reverse: bool,
    pub left: bool,
    pub right: bool,
}

/// Debounces raw key events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HeldKeys,
    swing_held: bool,
    swing_pressed: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for codes the game ignores
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };
        match key {
            Key::Forward => self.held.forward = true,
            Key::Reverse => self.held.reverse = true,
            Key::Left => self.held.left = true,
            Key::Right => self.held.right = true,
            Key::Swing => {
                // Auto-repeat while held is not a new press
                if !self.swing_held {
                    self.swing_pressed = true;
                }
                self.swing_held = true;
            }
        }
        true
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };
        match key {
            Key::Forward => self.held.forward = false,
            Key::Reverse => self.held.reverse = false,
            Key::Left => self.held.left = false,
            Key::Right => self.held.right = false,
            Key::Swing => self.swing_held = false,
        }
        true
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    /// Build the next tick's input, consuming any pending swing press
    pub fn next_input(&mut self, dt_ms: f64, viewport: Option<Viewport>) -> TickInput {
        TickInput {
            held: self.held,
            swing: std::mem::take(&mut self.swing_pressed),
            dt_ms,
            viewport,
        }
    }
}
