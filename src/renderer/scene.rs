//! Per-frame scene description for every screen

use glam::Vec2;

use super::*;
use crate::sim::{BlockKind, GameMode, GamePhase, GameState, progression};

pub const HINT_TEXT: &str = "Use mouse to drag and drop plastic, p to pause.";
pub const CONTINUE_TEXT: &str = "Press SPACE to continue";

/// Approximate advance of one HUD glyph, used to size the hint backdrop
const HUD_CHAR_WIDTH: f32 = 9.0;
const HUD_LINE_HEIGHT: f32 = 30.0;
const HINT_TOP: f32 = 110.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Describe the current frame
    pub fn build(state: &GameState) -> Self {
        let mut scene = Scene::default();
        match state.phase {
            GamePhase::Title => scene.title(state),
            GamePhase::Playing => scene.playing(state),
            GamePhase::Paused => scene.paused(state),
            GamePhase::GameOver => scene.game_over(state),
        }
        scene
    }

    pub fn submit(&self, renderer: &mut impl Renderer) {
        for command in &self.commands {
            renderer.draw(command);
        }
        renderer.present();
    }

    /// Every text label in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { label, .. } => Some(label.as_str()),
            _ => None,
        })
    }

    fn text(&mut self, label: impl Into<String>, pos: Vec2, anchor: Anchor, style: TextStyle, color: Color) {
        self.commands.push(DrawCommand::Text {
            label: label.into(),
            pos,
            anchor,
            style,
            color,
        });
    }

    fn background(&mut self, state: &GameState) {
        let screen = Vec2::new(state.tuning.screen_width, state.tuning.screen_height);
        self.commands.push(DrawCommand::Sprite {
            sprite: Sprite::Background,
            rect: Rect::new(Vec2::ZERO, screen),
        });
    }

    fn title(&mut self, state: &GameState) {
        let center_x = state.tuning.screen_width / 2.0;
        self.background(state);
        self.text(
            "Plastic Collector Game",
            Vec2::new(center_x, 50.0),
            Anchor::Center,
            TextStyle::Title,
            WHITE,
        );

        for (mode, label) in [
            (GameMode::Levels, "Play (Levels)"),
            (GameMode::FreePlay, "Free Play"),
        ] {
            let button = state.tuning.title_button(mode);
            let padded = Rect::from_center(button.center(), button.size + Vec2::new(20.0, 10.0));
            self.commands.push(DrawCommand::FillRect {
                rect: padded,
                color: BUTTON_FILL,
            });
            self.commands.push(DrawCommand::StrokeRect {
                rect: padded,
                color: BUTTON_BORDER,
                width: 3.0,
            });
            self.text(label, button.center(), Anchor::Center, TextStyle::Button, WHITE);
        }
    }

    fn playing(&mut self, state: &GameState) {
        self.background(state);

        for block in &state.blocks {
            let sprite = match block.kind {
                BlockKind::Normal => Sprite::Plastic,
                BlockKind::Special => Sprite::SpecialPlastic,
            };
            self.commands.push(DrawCommand::Sprite {
                sprite,
                rect: block.rect,
            });
        }
        for bin in &state.bins {
            self.commands.push(DrawCommand::Sprite {
                sprite: Sprite::Bin,
                rect: bin.rect,
            });
        }

        self.hud(state);

        if state.show_hint {
            let center_x = state.tuning.screen_width / 2.0;
            let size = Vec2::new(
                HINT_TEXT.len() as f32 * HUD_CHAR_WIDTH + 20.0,
                HUD_LINE_HEIGHT + 10.0,
            );
            let backdrop = Rect::new(Vec2::new(center_x - size.x / 2.0, HINT_TOP), size);
            self.commands.push(DrawCommand::FillRect {
                rect: backdrop,
                color: HINT_BACKDROP,
            });
            self.text(HINT_TEXT, backdrop.center(), Anchor::Center, TextStyle::Hud, WHITE);
        }

        for text in &state.floating_texts {
            let color = match text.kind {
                BlockKind::Normal => YELLOW,
                BlockKind::Special => GOLD,
            };
            self.text(
                text.label.clone(),
                text.pos,
                Anchor::TopLeft,
                TextStyle::Floating,
                color,
            );
        }
    }

    fn hud(&mut self, state: &GameState) {
        self.text(
            format!("Points: {}", state.points),
            Vec2::new(10.0, 10.0),
            Anchor::TopLeft,
            TextStyle::Hud,
            WHITE,
        );
        self.text(
            format!("Lives: {}", state.lives),
            Vec2::new(10.0, 40.0),
            Anchor::TopLeft,
            TextStyle::Hud,
            WHITE,
        );
        let third = match state.mode {
            Some(GameMode::Levels) => format!("Level: {}", state.current_level),
            Some(GameMode::FreePlay) => format!("High Score: {}", state.best.free_play),
            None => return,
        };
        self.text(third, Vec2::new(10.0, 70.0), Anchor::TopLeft, TextStyle::Hud, WHITE);
    }

    fn paused(&mut self, state: &GameState) {
        self.background(state);
        let center = Vec2::new(state.tuning.screen_width, state.tuning.screen_height) / 2.0;
        self.text("PAUSED", center, Anchor::Center, TextStyle::Hud, YELLOW);
    }

    fn game_over(&mut self, state: &GameState) {
        self.commands.push(DrawCommand::Clear(BLACK));
        let center_x = state.tuning.screen_width / 2.0;
        let mid_y = state.tuning.screen_height / 2.0;
        self.text(
            "GAME OVER",
            Vec2::new(center_x, mid_y - 80.0),
            Anchor::Center,
            TextStyle::GameOver,
            RED,
        );

        let Some(summary) = progression::summary(state) else {
            return;
        };
        let mut lines = vec![
            format!("Final Score: {}", summary.final_score),
            format!("{}: {}", summary.best_label, summary.best),
        ];
        if let Some(level) = summary.level_reached {
            lines.push(format!("Game Ended on Level {}", level));
        }
        lines.push(CONTINUE_TEXT.to_string());

        let mut y = mid_y - 10.0;
        for (i, line) in lines.into_iter().enumerate() {
            let color = if line == CONTINUE_TEXT { LIGHT_GRAY } else { WHITE };
            if i > 0 {
                y += 40.0;
            }
            self.text(line, Vec2::new(center_x, y), Anchor::Center, TextStyle::Hud, color);
        }
    }
}
