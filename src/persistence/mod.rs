//! Best-score storage
//!
//! Each record is a single integer. Reads never fail: a missing record or
//! unreadable content is treated as no prior score (0). Writes overwrite the
//! whole record; last write wins.

pub mod file;

pub use file::FileScoreStore;

use std::collections::HashMap;

use crate::error::StoreError;
use crate::highscores::ScoreRecord;

/// Persisted best-score records
pub trait ScoreStore {
    /// Current value of a record, 0 if it was never written
    fn read(&self, record: ScoreRecord) -> u64;
    /// Replace a record
    fn write(&mut self, record: ScoreRecord, value: u64) -> Result<(), StoreError>;
}

/// Parse stored record content, failing closed to 0
pub fn parse_score(contents: &str) -> u64 {
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<u64>() {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Ignoring malformed score {:?}: {}", trimmed, err);
            0
        }
    }
}

/// Store kept in memory (tests and runs without a writable disk)
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    values: HashMap<ScoreRecord, u64>,
    writes: usize,
}

impl MemoryScoreStore {
    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self, record: ScoreRecord) -> u64 {
        self.values.get(&record).copied().unwrap_or(0)
    }

    fn write(&mut self, record: ScoreRecord, value: u64) -> Result<(), StoreError> {
        self.values.insert(record, value);
        self.writes += 1;
        Ok(())
    }
}
