//! One running session: simulation plus its side effects
//!
//! `tick` stays pure. Every frame the events it produced are drained and
//! routed here: scoring plays a sound, a new best is written to the store.

use crate::audio::{AudioPlayer, SoundEffect};
use crate::error::ConfigurationError;
use crate::highscores::HighScores;
use crate::persistence::ScoreStore;
use crate::renderer::Scene;
use crate::sim::{Flow, GameEvent, GameState, InputEvent, tick};
use crate::tuning::Tuning;

pub struct Game<S: ScoreStore, A: AudioPlayer> {
    pub state: GameState,
    store: S,
    audio: A,
}

impl<S: ScoreStore, A: AudioPlayer> Game<S, A> {
    /// Validate the tuning and load best scores from `store`
    pub fn new(tuning: Tuning, seed: u64, store: S, audio: A) -> Result<Self, ConfigurationError> {
        let best = HighScores::load(&store);
        Ok(Self {
            state: GameState::new(tuning, seed, best)?,
            store,
            audio,
        })
    }

    /// Run one frame with the events collected for it
    pub fn frame(&mut self, events: &[InputEvent]) -> Flow {
        let flow = tick(&mut self.state, events);
        for event in self.state.drain_events() {
            self.dispatch(event);
        }
        flow
    }

    fn dispatch(&mut self, event: GameEvent) {
        match event {
            GameEvent::Scored { .. } => self.audio.play(SoundEffect::Collect),
            GameEvent::NewBest { record, value } => {
                if let Err(e) = self.store.write(record, value) {
                    log::warn!("Failed to save {}: {}", record.label(), e);
                }
            }
            other => log::trace!("{:?}", other),
        }
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
