//! Pointer-driven drag and drop
//!
//! At most one block is held at a time. The controller keeps only the
//! block ID, so a block that disappears mid-drag leaves a stale target that
//! every later pointer event treats as a no-op.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};

/// Drag gesture state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Drag {
    #[default]
    Idle,
    Dragging {
        block_id: u32,
        /// Pointer position minus block top-left at grab time
        offset: Vec2,
    },
}

impl Drag {
    /// ID of the held block, if any (it may already be gone)
    pub fn target(&self) -> Option<u32> {
        match *self {
            Drag::Idle => None,
            Drag::Dragging { block_id, .. } => Some(block_id),
        }
    }

    pub fn is_dragging(&self, id: u32) -> bool {
        self.target() == Some(id)
    }
}

/// Grab the topmost (most recently spawned) block under the pointer
///
/// Returns the grabbed block's ID. Grabbing dismisses the onboarding hint.
pub fn pointer_down(state: &mut GameState, pos: Vec2) -> Option<u32> {
    let (block_id, offset) = state
        .blocks
        .iter()
        .rev()
        .find(|b| b.rect.contains_point(pos))
        .map(|b| (b.id, pos - b.rect.pos))?;

    state.drag = Drag::Dragging { block_id, offset };
    state.show_hint = false;
    state.emit(GameEvent::Grabbed { id: block_id });
    Some(block_id)
}

/// Move the held block so it keeps its grab offset under the pointer
///
/// Returns false when nothing was moved (idle, or the block is gone).
pub fn pointer_move(state: &mut GameState, pos: Vec2) -> bool {
    let Drag::Dragging { block_id, offset } = state.drag else {
        return false;
    };
    match state.blocks.iter_mut().find(|b| b.id == block_id) {
        Some(block) => {
            block.rect.pos = pos - offset;
            true
        }
        None => false,
    }
}

/// Let go of the held block; it resumes falling next frame
pub fn pointer_up(state: &mut GameState) -> Option<u32> {
    let released = state.drag.target();
    state.drag = Drag::Idle;
    if let Some(id) = released {
        state.emit(GameEvent::Released { id });
    }
    released
}
