//! Demo autopilot - plays the game through ordinary pointer events
//!
//! Picks a mode on the title screen, then repeatedly drags the lowest
//! visible plastic onto the nearest bin. `reaction_frames` idles between
//! drops so the bot eventually falls behind the Levels ramp.

use super::input::{InputEvent, Key};
use super::state::{Bin, Block, GameMode, GamePhase, GameState};

#[derive(Debug, Clone)]
pub struct Autopilot {
    mode: GameMode,
    reaction_frames: u32,
    cooldown: u32,
    /// Press Space on the game-over screen
    pub confirm_game_over: bool,
}

impl Autopilot {
    pub fn new(mode: GameMode, reaction_frames: u32) -> Self {
        Self {
            mode,
            reaction_frames,
            cooldown: 0,
            confirm_game_over: false,
        }
    }

    /// Events to deliver this frame
    pub fn plan(&mut self, state: &GameState) -> Vec<InputEvent> {
        match state.phase {
            GamePhase::Title => {
                let key = match self.mode {
                    GameMode::Levels => '1',
                    GameMode::FreePlay => '2',
                };
                vec![InputEvent::KeyDown(Key::Char(key))]
            }
            GamePhase::Paused => vec![InputEvent::KeyDown(Key::Char('p'))],
            GamePhase::GameOver if self.confirm_game_over => {
                vec![InputEvent::KeyDown(Key::Space)]
            }
            GamePhase::GameOver => Vec::new(),
            GamePhase::Playing => self.plan_catch(state),
        }
    }

    fn plan_catch(&mut self, state: &GameState) -> Vec<InputEvent> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return Vec::new();
        }

        let Some(block) = lowest_visible_block(state) else {
            return Vec::new();
        };
        let Some(bin) = nearest_visible_bin(state, block) else {
            return Vec::new();
        };

        self.cooldown = self.reaction_frames;
        vec![
            InputEvent::PointerDown(block.rect.center()),
            InputEvent::PointerMove(bin.rect.center()),
            InputEvent::PointerUp,
        ]
    }
}

fn lowest_visible_block(state: &GameState) -> Option<&Block> {
    state
        .blocks
        .iter()
        .filter(|b| b.rect.top() >= 0.0 && b.rect.bottom() <= state.tuning.screen_height)
        .max_by(|a, b| a.rect.top().total_cmp(&b.rect.top()))
}

fn nearest_visible_bin<'a>(state: &'a GameState, block: &Block) -> Option<&'a Bin> {
    let x = block.rect.center().x;
    state
        .bins
        .iter()
        .filter(|b| b.rect.left() >= 0.0 && b.rect.right() <= state.tuning.screen_width)
        .min_by(|a, b| {
            (a.rect.center().x - x)
                .abs()
                .total_cmp(&(b.rect.center().x - x).abs())
        })
}
