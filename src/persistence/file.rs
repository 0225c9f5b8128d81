//! Plain-text score files, one integer per file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ScoreStore, parse_score};
use crate::error::{ConfigurationError, StoreError};
use crate::highscores::ScoreRecord;

/// Score files in a directory, opened and closed on every access
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    dir: PathBuf,
}

impl FileScoreStore {
    /// Use (and create if needed) the given directory
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| ConfigurationError::ScoreDirectory {
            path: dir.clone(),
            source,
        })?;
        log::info!("Score files in {}", dir.display());
        Ok(Self { dir })
    }

    pub fn file_name(record: ScoreRecord) -> &'static str {
        match record {
            ScoreRecord::FreePlayHighScore => "highscore.txt",
            ScoreRecord::LevelsHighestPoints => "highest_level_points.txt",
        }
    }

    pub fn path(&self, record: ScoreRecord) -> PathBuf {
        self.dir.join(Self::file_name(record))
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self, record: ScoreRecord) -> u64 {
        let path = self.path(record);
        match fs::read_to_string(&path) {
            Ok(contents) => parse_score(&contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => {
                log::warn!("Could not read {}: {}", path.display(), err);
                0
            }
        }
    }

    fn write(&mut self, record: ScoreRecord, value: u64) -> Result<(), StoreError> {
        let path = self.path(record);
        fs::write(&path, value.to_string()).map_err(|source| StoreError::Write { path, source })
    }
}
