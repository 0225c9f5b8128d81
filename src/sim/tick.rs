//! Fixed-rate simulation tick
//!
//! One call per rendered frame: input events first (in delivery order),
//! then, while playing, spawn → physics → collisions → progression → timers.

use super::collision;
use super::drag;
use super::input::{InputEvent, Key};
use super::physics;
use super::progression;
use super::spawner;
use super::state::{GameEvent, GameMode, GamePhase, GameState};

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, events: &[InputEvent]) -> Flow {
    for event in events {
        if *event == InputEvent::Quit {
            log::info!("Quit requested ({:?})", state.phase);
            return Flow::Quit;
        }
        handle_event(state, event);
    }

    if state.phase == GamePhase::Playing {
        step(state);
    }

    Flow::Continue
}

fn handle_event(state: &mut GameState, event: &InputEvent) {
    match state.phase {
        GamePhase::Title => handle_title(state, event),
        GamePhase::Playing => match *event {
            InputEvent::KeyDown(key) if key.is_pause() => toggle_pause(state),
            InputEvent::PointerDown(pos) => {
                drag::pointer_down(state, pos);
            }
            InputEvent::PointerMove(pos) => {
                drag::pointer_move(state, pos);
            }
            InputEvent::PointerUp => {
                drag::pointer_up(state);
            }
            _ => {}
        },
        GamePhase::Paused => {
            if let InputEvent::KeyDown(key) = *event {
                if key.is_pause() {
                    toggle_pause(state);
                }
            }
        }
        GamePhase::GameOver => {
            if let InputEvent::KeyDown(key) = *event {
                if key.is_confirm() {
                    state.reset();
                }
            }
        }
    }
}

/// Keyboard shortcuts for the title buttons
fn mode_for_key(key: Key) -> Option<GameMode> {
    match key {
        Key::Char('1' | 'l' | 'L') => Some(GameMode::Levels),
        Key::Char('2' | 'f' | 'F') => Some(GameMode::FreePlay),
        _ => None,
    }
}

fn handle_title(state: &mut GameState, event: &InputEvent) {
    let choice = match *event {
        InputEvent::KeyDown(key) => mode_for_key(key),
        InputEvent::PointerDown(pos) => [GameMode::Levels, GameMode::FreePlay]
            .into_iter()
            .find(|&mode| state.tuning.title_button(mode).contains_point(pos)),
        _ => None,
    };
    if let Some(mode) = choice {
        state.select_mode(mode);
    }
}

/// Pausing drops any held block: a release during the pause is never seen
fn toggle_pause(state: &mut GameState) {
    if state.phase == GamePhase::Playing {
        drag::pointer_up(state);
    }
    state.phase = match state.phase {
        GamePhase::Playing => GamePhase::Paused,
        GamePhase::Paused => GamePhase::Playing,
        other => other,
    };
    let paused = state.phase == GamePhase::Paused;
    log::info!("{}", if paused { "Paused" } else { "Resumed" });
    state.emit(GameEvent::PauseToggled { paused });
}

/// One frame of gameplay
pub fn step(state: &mut GameState) {
    state.time_ticks += 1;

    state.floating_texts.retain_mut(|text| text.tick());

    spawner::spawn_tick(state);
    physics::step(state);
    collision::resolve(state);
    progression::track_best(state);

    // Everything below is frozen once the last life is gone
    if state.phase == GamePhase::GameOver {
        return;
    }

    progression::check_level_up(state);
    tick_hint(state);
}

fn tick_hint(state: &mut GameState) {
    if !state.show_hint {
        return;
    }
    state.hint_remaining_ticks = state.hint_remaining_ticks.saturating_sub(1);
    if state.hint_remaining_ticks == 0 {
        state.show_hint = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScores;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Bin, Block, BlockKind};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn title(tuning: Tuning) -> GameState {
        GameState::new(tuning, 2024, HighScores::default()).unwrap()
    }

    fn key(c: char) -> InputEvent {
        InputEvent::KeyDown(Key::Char(c))
    }

    fn place_block(state: &mut GameState, kind: BlockKind, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        state.blocks.push(Block {
            id,
            kind,
            rect: Rect::new(pos, state.tuning.block_size),
        });
        id
    }

    #[test]
    fn test_title_accepts_keys_and_buttons() {
        let mut state = title(Tuning::default());
        tick(&mut state, &[InputEvent::PointerDown(Vec2::new(5.0, 5.0))]);
        assert_eq!(state.phase, GamePhase::Title);
        // Gameplay keys do nothing on the title screen
        tick(&mut state, &[key('p')]);
        assert_eq!(state.phase, GamePhase::Title);

        tick(&mut state, &[key('1')]);
        assert_eq!(state.mode, Some(GameMode::Levels));
        assert_eq!(state.lives, 3);

        let mut state = title(Tuning::default());
        let button = state.tuning.title_button(GameMode::FreePlay).center();
        tick(&mut state, &[InputEvent::PointerDown(button)]);
        assert_eq!(state.mode, Some(GameMode::FreePlay));
        assert_eq!(state.lives, 6);
        assert_eq!(state.phase, GamePhase::Playing);
        // The selecting click is not also a grab
        assert_eq!(state.drag.target(), None);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut state = title(Tuning::default());
        tick(&mut state, &[key('f')]);
        let id = place_block(&mut state, BlockKind::Normal, Vec2::new(300.0, 100.0));
        tick(&mut state, &[key('p')]);
        assert_eq!(state.phase, GamePhase::Paused);

        let snapshot = (
            state.blocks.clone(),
            state.bins.clone(),
            state.spawn_timer,
            state.hint_remaining_ticks,
            state.time_ticks,
        );
        for _ in 0..120 {
            tick(&mut state, &[InputEvent::PointerDown(Vec2::new(310.0, 110.0))]);
        }
        assert_eq!(state.drag.target(), None);
        assert_eq!(
            snapshot,
            (
                state.blocks.clone(),
                state.bins.clone(),
                state.spawn_timer,
                state.hint_remaining_ticks,
                state.time_ticks,
            )
        );

        tick(&mut state, &[key('P')]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.block(id).unwrap().rect.top() > 100.0);
    }

    #[test]
    fn test_pause_drops_held_block() {
        let mut state = title(Tuning::default());
        tick(&mut state, &[key('f')]);
        let id = place_block(&mut state, BlockKind::Normal, Vec2::new(300.0, 100.0));
        tick(&mut state, &[InputEvent::PointerDown(Vec2::new(310.0, 110.0))]);
        assert_eq!(state.drag.target(), Some(id));

        tick(&mut state, &[key('p')]);
        assert_eq!(state.drag.target(), None);
        tick(&mut state, &[InputEvent::PointerUp]);
        tick(&mut state, &[key('p')]);

        assert_eq!(state.drag.target(), None);
        let block = state.block(id).unwrap().rect;
        assert!(block.top() > 100.0);

        // Hovering without a button held moves nothing
        tick(&mut state, &[InputEvent::PointerMove(Vec2::new(700.0, 50.0))]);
        let moved = state.block(id).unwrap().rect;
        assert_eq!(moved.left(), 300.0);
        assert!(moved.top() > block.top());
    }

    #[test]
    fn test_hint_expires_or_is_dismissed() {
        let mut state = title(Tuning {
            hint_duration_frames: 5,
            ..Default::default()
        });
        tick(&mut state, &[key('2')]);
        assert!(state.show_hint);
        for _ in 0..4 {
            tick(&mut state, &[]);
        }
        assert!(!state.show_hint);

        let mut state = title(Tuning::default());
        tick(&mut state, &[key('2')]);
        place_block(&mut state, BlockKind::Normal, Vec2::new(300.0, 100.0));
        tick(&mut state, &[InputEvent::PointerDown(Vec2::new(320.0, 120.0))]);
        assert!(!state.show_hint);
    }

    #[test]
    fn test_drag_into_bin_scores_and_leaves_stale_target() {
        let mut state = title(Tuning::default());
        tick(&mut state, &[key('2')]);
        let id = place_block(&mut state, BlockKind::Special, Vec2::new(300.0, 100.0));
        let bin = state.bins[0].rect;

        tick(
            &mut state,
            &[
                InputEvent::PointerDown(Vec2::new(320.0, 120.0)),
                InputEvent::PointerMove(bin.center()),
            ],
        );
        assert!(state.block(id).is_none());
        assert_eq!(state.points, 250);
        assert_eq!(state.drag.target(), Some(id));

        // Stale target: moves are ignored, release clears it
        tick(&mut state, &[InputEvent::PointerMove(Vec2::new(10.0, 10.0))]);
        tick(&mut state, &[InputEvent::PointerUp]);
        assert_eq!(state.drag.target(), None);
    }

    #[test]
    fn test_level_up_in_scoring_frame() {
        let mut state = title(Tuning::default());
        tick(&mut state, &[key('l')]);
        state.points = 4900;
        let bin = state.bins[0].rect;
        place_block(&mut state, BlockKind::Normal, bin.center() - Vec2::splat(20.0));

        tick(&mut state, &[]);
        assert_eq!(state.points, 5000);
        assert_eq!(state.current_level, 2);
        assert_eq!(state.lives, 6);
        assert_eq!(state.best.levels, 5000);
    }

    #[test]
    fn test_free_play_scenario_and_reset() {
        let mut state = title(Tuning {
            special_chance: 0.0,
            ..Default::default()
        });
        tick(&mut state, &[key('f')]);
        assert_eq!((state.lives, state.points), (6, 0));
        // Nothing can be caught
        state.bins.clear();

        let mut losses = 0;
        let mut frames = 0;
        while state.phase == GamePhase::Playing {
            tick(&mut state, &[]);
            frames += 1;
            assert!(frames < 5000, "game never ended");
            for event in state.drain_events() {
                if let GameEvent::BlockLost { lives, .. } = event {
                    losses += 1;
                    assert_eq!(lives, 6 - losses);
                    if lives == 0 {
                        // Game over on the same frame as the last loss
                        assert_eq!(state.phase, GamePhase::GameOver);
                    }
                }
            }
        }
        assert_eq!(losses, 6);
        assert_eq!(state.lives, 0);
        assert_eq!(state.points, 0);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Frozen until confirmed
        let blocks = state.blocks.clone();
        let ticks = state.time_ticks;
        for _ in 0..100 {
            tick(&mut state, &[key('p'), InputEvent::PointerDown(Vec2::new(1.0, 1.0))]);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.blocks, blocks);
        assert_eq!(state.time_ticks, ticks);

        tick(&mut state, &[InputEvent::KeyDown(Key::Space)]);
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.mode, None);
        assert_eq!(state.lives, 6);
        assert_eq!(state.points, 0);
        assert_eq!(state.current_level, 1);
        assert!(state.blocks.is_empty());
        assert!(state.floating_texts.is_empty());
        assert_eq!(state.bins.len(), 3);
        assert!(!state.show_hint);
    }

    #[test]
    fn test_reset_keeps_levels_starting_lives() {
        let mut state = title(Tuning::default());
        tick(&mut state, &[key('1')]);
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        tick(&mut state, &[InputEvent::KeyDown(Key::Space)]);
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, GamePhase::Title);
    }

    #[test]
    fn test_quit_in_every_phase() {
        for phase in [
            GamePhase::Title,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::GameOver,
        ] {
            let mut state = title(Tuning::default());
            state.phase = phase;
            let ticks = state.time_ticks;
            assert_eq!(
                tick(&mut state, &[InputEvent::Quit, InputEvent::KeyDown(Key::Space)]),
                Flow::Quit
            );
            assert_eq!(state.phase, phase);
            assert_eq!(state.time_ticks, ticks);
        }
    }

    #[test]
    fn test_floating_text_lifetime() {
        let mut state = title(Tuning::default());
        tick(&mut state, &[key('2')]);
        let bin = state.bins[0].rect;
        place_block(&mut state, BlockKind::Normal, bin.center() - Vec2::splat(20.0));
        tick(&mut state, &[]);
        assert_eq!(state.floating_texts.len(), 1);

        // Visible for 20 frames including the scoring frame
        for _ in 0..19 {
            tick(&mut state, &[]);
            assert_eq!(state.floating_texts.len(), 1);
        }
        tick(&mut state, &[]);
        assert!(state.floating_texts.is_empty());
    }

    #[test]
    fn test_bins_keep_moving_while_dragging() {
        let mut state = title(Tuning::default());
        tick(&mut state, &[key('2')]);
        state.bins = vec![Bin {
            rect: Rect::new(Vec2::new(500.0, 520.0), Vec2::new(60.0, 60.0)),
        }];
        place_block(&mut state, BlockKind::Normal, Vec2::new(100.0, 100.0));
        tick(&mut state, &[InputEvent::PointerDown(Vec2::new(110.0, 110.0))]);
        assert_eq!(state.bins[0].rect.left(), 499.0);
        assert_eq!(state.blocks[0].rect.top(), 100.0);
    }
}
