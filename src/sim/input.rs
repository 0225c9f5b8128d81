//! Input events consumed by the simulation, in delivery order

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Space,
    Escape,
}

impl Key {
    /// Pause toggle (P)
    pub fn is_pause(&self) -> bool {
        matches!(self, Key::Char(c) if c.eq_ignore_ascii_case(&'p'))
    }

    /// Game-over confirmation (Space)
    pub fn is_confirm(&self) -> bool {
        matches!(self, Key::Space)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
}
