//! Collision resolution: plastic into bins, plastic off the bottom
//!
//! Runs once per frame after physics. Hits and losses are collected over
//! the live blocks first, then applied and compacted in one pass.

use glam::Vec2;

use super::state::{BlockKind, FloatingText, GameEvent, GamePhase, GameState};
use crate::consts::FLOATING_TEXT_OFFSET;

/// A block that landed in a bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: u32,
    pub kind: BlockKind,
    /// Index into `GameState::bins`
    pub bin: usize,
}

/// What one resolution pass did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionSummary {
    pub hits: Vec<Hit>,
    /// IDs of blocks that fell off the bottom
    pub lost: Vec<u32>,
}

impl CollisionSummary {
    fn removes(&self, id: u32) -> bool {
        self.lost.contains(&id) || self.hits.iter().any(|h| h.id == id)
    }
}

/// First bin (in insertion order) that a block overlaps
fn first_overlapping_bin(state: &GameState, index: usize) -> Option<usize> {
    let rect = &state.blocks[index].rect;
    state.bins.iter().position(|bin| rect.overlaps(&bin.rect))
}

/// Find hits and losses without mutating anything
pub fn detect(state: &GameState) -> CollisionSummary {
    let screen_height = state.tuning.screen_height;
    let mut summary = CollisionSummary::default();

    for (index, block) in state.blocks.iter().enumerate() {
        if let Some(bin) = first_overlapping_bin(state, index) {
            summary.hits.push(Hit {
                id: block.id,
                kind: block.kind,
                bin,
            });
            continue;
        }
        // A held block below the screen can still be rescued
        if block.rect.top() > screen_height && !state.drag.is_dragging(block.id) {
            summary.lost.push(block.id);
        }
    }

    summary
}

/// Score hits, charge lives for losses, remove both, and end the run at zero lives
pub fn resolve(state: &mut GameState) -> CollisionSummary {
    let summary = detect(state);
    if summary.hits.is_empty() && summary.lost.is_empty() {
        return summary;
    }

    for hit in &summary.hits {
        let points = hit.kind.points(&state.tuning);
        state.points += points;

        let anchor = state.bins[hit.bin].rect.top_center();
        state.floating_texts.push(FloatingText {
            label: format!("+{}", points),
            pos: anchor - Vec2::new(0.0, FLOATING_TEXT_OFFSET),
            remaining_ticks: state.tuning.floating_text_ticks,
            kind: hit.kind,
        });
        log::debug!("Plastic #{} into bin {} (+{})", hit.id, hit.bin, points);
        state.emit(GameEvent::Scored {
            id: hit.id,
            kind: hit.kind,
            points,
            bin: hit.bin,
        });
    }

    for &id in &summary.lost {
        state.lives = state.lives.saturating_sub(1);
        log::debug!("Plastic #{} escaped, {} lives left", id, state.lives);
        state.emit(GameEvent::BlockLost {
            id,
            lives: state.lives,
        });
    }

    state.blocks.retain(|b| !summary.removes(b.id));

    if !summary.lost.is_empty() && state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: {} points in {}",
            state.points,
            state.mode.map(|m| m.as_str()).unwrap_or("no mode")
        );
        state.emit(GameEvent::GameOver);
    }

    summary
}
