//! Per-frame motion: plastic falls, bins ride the conveyor
//!
//! Uniform linear motion only; speeds are pixels per frame.

use super::spawner::Difficulty;
use super::state::GameState;

/// Move every block that is not held by the pointer straight down
pub fn advance_blocks(state: &mut GameState) {
    let fall_speed = Difficulty::for_session(state.mode, state.current_level, &state.tuning).fall_speed;
    let drag = state.drag;
    let tuning = &state.tuning;

    for block in state.blocks.iter_mut() {
        if drag.is_dragging(block.id) {
            continue;
        }
        block.rect.pos.y += fall_speed * block.kind.fall_multiplier(tuning);
    }
}

/// Slide bins left, wrapping to the right edge once fully off-screen
pub fn advance_bins(state: &mut GameState) {
    let speed = state.tuning.bin_speed;
    let screen_width = state.tuning.screen_width;

    for bin in state.bins.iter_mut() {
        bin.rect.pos.x -= speed;
        if bin.rect.right() < 0.0 {
            bin.rect.pos.x = screen_width;
        }
    }
}

pub fn step(state: &mut GameState) {
    advance_blocks(state);
    advance_bins(state);
}
