//! Rendering interface
//!
//! The core never touches pixels. Each frame it builds a `Scene` of draw
//! commands (positions, sizes, labels, colors) and hands it to a backend.

pub mod scene;

pub use scene::Scene;

use glam::Vec2;

use crate::sim::Rect;

/// RGBA, 0.0 - 1.0
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
pub const GOLD: Color = [1.0, 0.843, 0.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const LIGHT_GRAY: Color = [0.784, 0.784, 0.784, 1.0];
pub const BUTTON_FILL: Color = [0.0, 0.392, 0.784, 1.0];
pub const BUTTON_BORDER: Color = [0.392, 0.588, 1.0, 1.0];
/// Translucent backing behind the hint text
pub const HINT_BACKDROP: Color = [0.0, 0.0, 0.0, 0.47];

/// Images the backend is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Plastic,
    SpecialPlastic,
    Bin,
}

/// Font roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Button,
    Hud,
    GameOver,
    Floating,
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite {
        sprite: Sprite,
        rect: Rect,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    Text {
        label: String,
        pos: Vec2,
        anchor: Anchor,
        style: TextStyle,
        color: Color,
    },
}

/// Drawing backend
pub trait Renderer {
    fn draw(&mut self, command: &DrawCommand);

    /// Called once all of a frame's commands were drawn
    fn present(&mut self) {}
}

/// Backend for headless runs: counts what it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct LogRenderer {
    frames: u64,
    commands: usize,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, command: &DrawCommand) {
        self.commands += 1;
        if let DrawCommand::Text { label, .. } = command {
            log::trace!("text: {}", label);
        }
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!("frame {} ({} commands)", self.frames, self.commands);
        self.commands = 0;
    }
}
