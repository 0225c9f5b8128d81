//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, speeds in pixels per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order for plastic, insertion order for bins)
//! - No rendering, audio or file access; side effects leave as `GameEvent`s

pub mod autopilot;
pub mod collision;
pub mod drag;
pub mod input;
pub mod physics;
pub mod progression;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{CollisionSummary, Hit};
pub use drag::Drag;
pub use input::{InputEvent, Key};
pub use progression::RunSummary;
pub use rect::Rect;
pub use spawner::Difficulty;
pub use state::{Bin, Block, BlockKind, FloatingText, GameEvent, GameMode, GamePhase, GameState};
pub use tick::{Flow, tick};
