//! Levels, best scores and the end-of-run summary

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameMode, GamePhase, GameState};
use crate::highscores::ScoreRecord;

/// Advance one level when the score passes `level × goal` (Levels mode only)
///
/// At most one level per call, even if the score jumped past several goals.
pub fn check_level_up(state: &mut GameState) -> Option<u32> {
    if state.mode != Some(GameMode::Levels) || state.phase != GamePhase::Playing {
        return None;
    }

    let goal = state.current_level as u64 * state.tuning.level_score_goal;
    if state.points < goal {
        return None;
    }

    state.current_level += 1;
    state.lives += state.tuning.level_up_lives;
    log::info!(
        "Level {} reached at {} points, {} lives",
        state.current_level,
        state.points,
        state.lives
    );
    state.emit(GameEvent::LevelUp {
        level: state.current_level,
        lives: state.lives,
    });
    Some(state.current_level)
}

/// Raise the in-memory best for the current mode if the score beat it
///
/// Emits `NewBest` so the caller can persist the value right away.
pub fn track_best(state: &mut GameState) -> Option<u64> {
    let mode = state.mode?;
    let record = ScoreRecord::for_mode(mode);
    if !state.best.record(record, state.points) {
        return None;
    }

    log::debug!("New {}: {}", record.label(), state.points);
    state.emit(GameEvent::NewBest {
        record,
        value: state.points,
    });
    Some(state.points)
}

/// What the game-over screen shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub mode: GameMode,
    pub final_score: u64,
    pub best_label: String,
    pub best: u64,
    /// Only in Levels mode
    pub level_reached: Option<u32>,
}

pub fn summary(state: &GameState) -> Option<RunSummary> {
    let mode = state.mode?;
    let record = ScoreRecord::for_mode(mode);
    Some(RunSummary {
        mode,
        final_score: state.points,
        best_label: record.label().to_string(),
        best: state.best.get(record),
        level_reached: match mode {
            GameMode::Levels => Some(state.current_level),
            GameMode::FreePlay => None,
        },
    })
}
