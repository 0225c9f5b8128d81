//! Game state and core simulation types
//!
//! One `GameState` is the whole session: mode, score, lives, the entity
//! registry (plastic and bins) and the drag gesture in progress.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::drag::Drag;
use super::rect::Rect;
use super::spawner::spawn_bins;
use crate::error::ConfigurationError;
use crate::highscores::{HighScores, ScoreRecord};
use crate::tuning::Tuning;

/// Which game the player picked on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Staged progression with score-gated level-ups and bonus lives
    Levels,
    /// One continuous session scored against the persisted best
    FreePlay,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Levels => "Levels",
            GameMode::FreePlay => "Free Play",
        }
    }
}

/// Top-level session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a mode choice
    Title,
    /// Active gameplay
    Playing,
    /// Frozen until the pause key is pressed again
    Paused,
    /// Run ended, waiting for confirmation
    GameOver,
}

/// Plastic types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    Normal,
    /// Worth more and falls faster
    Special,
}

impl BlockKind {
    pub fn points(&self, tuning: &Tuning) -> u64 {
        match self {
            BlockKind::Normal => tuning.normal_points,
            BlockKind::Special => tuning.special_points,
        }
    }

    pub fn fall_multiplier(&self, tuning: &Tuning) -> f32 {
        match self {
            BlockKind::Normal => 1.0,
            BlockKind::Special => tuning.special_speed_multiplier,
        }
    }
}

/// A falling piece of plastic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub kind: BlockKind,
    pub rect: Rect,
}

/// A collection bin riding the conveyor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub rect: Rect,
}

/// Short-lived score popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingText {
    pub label: String,
    pub pos: Vec2,
    pub remaining_ticks: i32,
    /// Kind of the plastic that was scored (picks the color)
    pub kind: BlockKind,
}

impl FloatingText {
    /// Count down one frame; returns false once expired
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks -= 1;
        self.remaining_ticks > 0
    }
}

/// Things that happened during a tick, for audio/persistence/logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ModeSelected(GameMode),
    Spawned { id: u32, kind: BlockKind },
    Grabbed { id: u32 },
    Released { id: u32 },
    Scored {
        id: u32,
        kind: BlockKind,
        points: u64,
        bin: usize,
    },
    BlockLost { id: u32, lives: u32 },
    LevelUp { level: u32, lives: u32 },
    NewBest { record: ScoreRecord, value: u64 },
    PauseToggled { paused: bool },
    GameOver,
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub mode: Option<GameMode>,
    pub phase: GamePhase,
    pub points: u64,
    pub lives: u32,
    /// Starts at 1; only advances in Levels mode
    pub current_level: u32,
    pub show_hint: bool,
    pub hint_remaining_ticks: u32,
    /// Frames since the last spawn
    pub spawn_timer: u32,
    /// Simulated (unpaused) frames this session
    pub time_ticks: u64,
    /// Falling plastic, oldest first
    pub blocks: Vec<Block>,
    /// Bins in insertion order (collision priority order)
    pub bins: Vec<Bin>,
    pub floating_texts: Vec<FloatingText>,
    pub drag: Drag,
    /// Best scores, loaded at startup and kept across resets
    pub best: HighScores,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh session on the title screen
    ///
    /// The tuning is validated first: bin placement never terminates for a
    /// conveyor the bins cannot be spaced out on.
    pub fn new(tuning: Tuning, seed: u64, best: HighScores) -> Result<Self, ConfigurationError> {
        tuning.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let bins = spawn_bins(&mut rng, &tuning);
        Ok(Self {
            tuning,
            seed,
            rng,
            mode: None,
            phase: GamePhase::Title,
            points: 0,
            lives: tuning.free_play_start_lives,
            current_level: 1,
            show_hint: false,
            hint_remaining_ticks: 0,
            spawn_timer: 0,
            time_ticks: 0,
            blocks: Vec::new(),
            bins,
            floating_texts: Vec::new(),
            drag: Drag::Idle,
            best,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn block(&self, id: u32) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Leave the title screen and start a run
    pub fn select_mode(&mut self, mode: GameMode) {
        self.mode = Some(mode);
        self.phase = GamePhase::Playing;
        self.points = 0;
        self.lives = self.tuning.starting_lives(mode);
        self.current_level = 1;
        self.show_hint = true;
        self.hint_remaining_ticks = self.tuning.hint_duration_frames;
        log::info!("{} started with {} lives", mode.as_str(), self.lives);
        self.emit(GameEvent::ModeSelected(mode));
    }

    /// Back to the title screen with a clean slate and freshly placed bins
    pub fn reset(&mut self) {
        self.lives = match self.mode {
            Some(mode) => self.tuning.starting_lives(mode),
            None => self.tuning.free_play_start_lives,
        };
        self.mode = None;
        self.phase = GamePhase::Title;
        self.points = 0;
        self.current_level = 1;
        self.show_hint = false;
        self.hint_remaining_ticks = 0;
        self.spawn_timer = 0;
        self.time_ticks = 0;
        self.blocks.clear();
        self.floating_texts.clear();
        self.drag = Drag::Idle;
        self.bins = spawn_bins(&mut self.rng, &self.tuning);
        log::info!("Session reset");
        self.emit(GameEvent::Reset);
    }

    /// Best score that applies to the current mode
    pub fn relevant_best(&self) -> Option<u64> {
        self.mode
            .map(|mode| self.best.get(ScoreRecord::for_mode(mode)))
    }
}
