//! Best-score records
//!
//! Two independent records, one per mode. The in-memory copy lives in the
//! game state; `persistence` writes each improvement straight to disk.

use serde::{Deserialize, Serialize};

use crate::persistence::ScoreStore;
use crate::sim::GameMode;

/// Which persisted record a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreRecord {
    /// Best free play score
    FreePlayHighScore,
    /// Most points reached in Levels mode
    LevelsHighestPoints,
}

impl ScoreRecord {
    pub const ALL: [ScoreRecord; 2] = [
        ScoreRecord::FreePlayHighScore,
        ScoreRecord::LevelsHighestPoints,
    ];

    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::FreePlay => ScoreRecord::FreePlayHighScore,
            GameMode::Levels => ScoreRecord::LevelsHighestPoints,
        }
    }

    /// HUD / game-over label
    pub fn label(&self) -> &'static str {
        match self {
            ScoreRecord::FreePlayHighScore => "High Score",
            ScoreRecord::LevelsHighestPoints => "Highest Level Points",
        }
    }
}

/// In-memory best scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub free_play: u64,
    pub levels: u64,
}

impl HighScores {
    /// Read both records from the store (absent records are 0)
    pub fn load(store: &impl ScoreStore) -> Self {
        let scores = Self {
            free_play: store.read(ScoreRecord::FreePlayHighScore),
            levels: store.read(ScoreRecord::LevelsHighestPoints),
        };
        log::info!(
            "Loaded best scores: free play {}, levels {}",
            scores.free_play,
            scores.levels
        );
        scores
    }

    pub fn get(&self, record: ScoreRecord) -> u64 {
        match record {
            ScoreRecord::FreePlayHighScore => self.free_play,
            ScoreRecord::LevelsHighestPoints => self.levels,
        }
    }

    /// Check if a score would beat the record
    pub fn qualifies(&self, record: ScoreRecord, score: u64) -> bool {
        score > self.get(record)
    }

    /// Store the score if it beats the record; returns whether it did
    pub fn record(&mut self, record: ScoreRecord, score: u64) -> bool {
        if !self.qualifies(record, score) {
            return false;
        }
        match record {
            ScoreRecord::FreePlayHighScore => self.free_play = score,
            ScoreRecord::LevelsHighestPoints => self.levels = score,
        }
        true
    }
}
