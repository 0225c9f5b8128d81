//! Plastic Collector - drag falling plastic into the bins on the conveyor
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, drag, collisions, progression)
//! - `game`: Routes simulation events to audio and score storage
//! - `renderer`: Scene description handed to a drawing backend
//! - `platform`: Input sources and frame pacing
//! - `persistence`: Best-score storage
//! - `tuning`: Game balance and screen layout

pub mod audio;
pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{ConfigurationError, StoreError};
pub use game::Game;
pub use highscores::{HighScores, ScoreRecord};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const SIM_HZ: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Falling plastic
    pub const BLOCK_WIDTH: f32 = 40.0;
    pub const BLOCK_HEIGHT: f32 = 40.0;
    /// Free play fall speed (pixels per frame)
    pub const BLOCK_SPEED: f32 = 1.0;
    /// Free play spawn delay (frames, 60 = one per second)
    pub const SPAWN_DELAY: u32 = 60;
    /// Special plastic falls 70% faster
    pub const SPECIAL_SPEED_MULTIPLIER: f32 = 1.7;

    /// Levels mode difficulty ramp
    pub const BASE_BLOCK_SPEED: f32 = 1.0;
    pub const SPEED_INCREMENT: f32 = 0.3;
    pub const BASE_SPAWN_DELAY: u32 = 60;
    pub const SPAWN_DECREMENT: u32 = 5;
    pub const MIN_SPAWN_DELAY: u32 = 10;
    pub const BASE_SPECIAL_CHANCE: f64 = 0.1;
    pub const SPECIAL_CHANCE_STEP: f64 = 0.05;
    pub const MAX_SPECIAL_CHANCE: f64 = 0.5;

    /// Bins on the conveyor
    pub const BIN_WIDTH: f32 = 60.0;
    pub const BIN_HEIGHT: f32 = 60.0;
    pub const CONVEYOR_HEIGHT: f32 = 20.0;
    pub const BIN_SPEED: f32 = 1.0;
    pub const DEFAULT_BIN_COUNT: usize = 3;
    pub const MAX_BINS: usize = 8;

    /// Scoring
    pub const NORMAL_POINTS: u64 = 100;
    pub const SPECIAL_POINTS: u64 = 250;
    pub const LEVEL_SCORE_GOAL: u64 = 5000;
    pub const LEVEL_UP_LIVES: u32 = 3;

    /// Starting lives per mode
    pub const LEVELS_START_LIVES: u32 = 3;
    pub const FREE_PLAY_START_LIVES: u32 = 6;

    /// Onboarding hint (~3 seconds at 60 FPS)
    pub const HINT_DURATION_FRAMES: u32 = 180;

    /// "+100" popups above a bin
    pub const FLOATING_TEXT_TICKS: i32 = 20;
    pub const FLOATING_TEXT_OFFSET: f32 = 20.0;

    /// Scoring effect volume
    pub const EFFECT_VOLUME: f32 = 0.3;
}
