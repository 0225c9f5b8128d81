//! Per-frame input sources

use crate::sim::{Autopilot, GameState, InputEvent};

/// Delivers the events for one frame, in order
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent>;
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent> {
        self.plan(state)
    }
}
