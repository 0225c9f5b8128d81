//! Plastic spawning and bin placement
//!
//! Difficulty is derived from the mode and level every frame, so a level-up
//! takes effect on the very next spawn decision.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::state::{Bin, Block, BlockKind, GameEvent, GameMode, GamePhase, GameState};
use crate::tuning::Tuning;

/// Samples before a jammed bin layout is thrown away and started over
const PLACEMENT_ATTEMPTS: u32 = 1000;

/// Spawn and fall parameters in effect for a mode/level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Frames between spawns
    pub spawn_delay: u32,
    /// Probability a new block is Special
    pub special_chance: f64,
    /// Normal fall speed in pixels per frame
    pub fall_speed: f32,
}

impl Difficulty {
    pub fn for_session(mode: Option<GameMode>, level: u32, tuning: &Tuning) -> Self {
        match mode {
            Some(GameMode::Levels) => Self::for_level(level, tuning),
            Some(GameMode::FreePlay) | None => Self {
                spawn_delay: tuning.spawn_delay,
                special_chance: tuning.special_chance,
                fall_speed: tuning.block_speed,
            },
        }
    }

    /// Levels mode ramp: faster, denser and more special plastic per level
    pub fn for_level(level: u32, tuning: &Tuning) -> Self {
        let steps = level.saturating_sub(1);
        let spawn_delay = tuning
            .base_spawn_delay
            .saturating_sub(steps.saturating_mul(tuning.spawn_decrement))
            .max(tuning.min_spawn_delay);
        let special_chance = (tuning.base_special_chance
            + steps as f64 * tuning.special_chance_step)
            .min(tuning.max_special_chance)
            .clamp(0.0, 1.0);
        let fall_speed = tuning.base_block_speed + steps as f32 * tuning.speed_increment;
        Self {
            spawn_delay,
            special_chance,
            fall_speed,
        }
    }
}

/// Place the conveyor bins at random x positions more than one bin width apart
///
/// The tuning must have passed `Tuning::validate`, otherwise the layout may
/// never complete.
pub fn spawn_bins(rng: &mut Pcg32, tuning: &Tuning) -> Vec<Bin> {
    let max_x = (tuning.screen_width - tuning.bin_size.x).max(0.0) as i32;
    let y = tuning.bin_row_y();

    let mut accepted: Vec<f32> = Vec::with_capacity(tuning.bin_count);
    let mut attempts = 0;
    while accepted.len() < tuning.bin_count {
        if attempts == PLACEMENT_ATTEMPTS {
            log::debug!(
                "Bin layout jammed with {} of {} placed, restarting",
                accepted.len(),
                tuning.bin_count
            );
            accepted.clear();
            attempts = 0;
        }
        attempts += 1;

        let x = rng.random_range(0..=max_x) as f32;
        if accepted.iter().all(|ux| (x - ux).abs() > tuning.bin_size.x) {
            accepted.push(x);
        }
    }

    accepted
        .into_iter()
        .map(|x| Bin {
            rect: Rect::new(Vec2::new(x, y), tuning.bin_size),
        })
        .collect()
}

/// Advance the spawn timer; emits one block when the delay is reached
///
/// Returns the ID of the spawned block, if any.
pub fn spawn_tick(state: &mut GameState) -> Option<u32> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    state.spawn_timer += 1;
    let difficulty = Difficulty::for_session(state.mode, state.current_level, &state.tuning);
    if state.spawn_timer < difficulty.spawn_delay {
        return None;
    }

    state.spawn_timer = 0;
    Some(spawn_block(state, difficulty.special_chance))
}

/// Append a block just above the top edge at a random x
pub fn spawn_block(state: &mut GameState, special_chance: f64) -> u32 {
    let size = state.tuning.block_size;
    let max_x = (state.tuning.screen_width - size.x).max(0.0) as i32;
    let x = state.rng.random_range(0..=max_x) as f32;
    let kind = if state.rng.random_bool(special_chance) {
        BlockKind::Special
    } else {
        BlockKind::Normal
    };

    let id = state.next_entity_id();
    state.blocks.push(Block {
        id,
        kind,
        rect: Rect::new(Vec2::new(x, -size.y), size),
    });
    log::debug!("Spawned {:?} plastic #{} at x={}", kind, id, x);
    state.emit(GameEvent::Spawned { id, kind });
    id
}
