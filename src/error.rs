use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Startup problems. Nothing in the running simulation produces these.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("bin count {count} is outside 1..={max}")]
    BinCount { count: usize, max: usize },
    #[error("{count} bins of width {bin_width} cannot be spaced apart on a {screen_width}px conveyor")]
    BinsDoNotFit {
        count: usize,
        bin_width: f32,
        screen_width: f32,
    },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a probability in [0, 1], got {value}")]
    Probability { field: &'static str, value: f64 },
    #[error("{field} ({value}) does not fit on a {limit}px screen")]
    OffScreen {
        field: &'static str,
        value: f32,
        limit: f32,
    },
    #[error("score directory {path} is unusable")]
    ScoreDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure to persist a best score. Logged and absorbed by the game loop.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to write score file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
