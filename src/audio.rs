//! Sound effect triggering
//!
//! The simulation only says *when* a sound plays; a backend decides how.
//! `AudioManager` is the headless backend: it applies the volume and logs.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Plastic landed in a bin
    Collect,
}

/// Fire-and-forget effect playback
pub trait AudioPlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    volume: f32,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(crate::consts::EFFECT_VOLUME)
    }
}

impl AudioManager {
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            played: 0,
        }
    }

    /// Effect volume (0.0 - 1.0); zero mutes
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Effects actually played (silent ones are skipped)
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioPlayer for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("Playing {:?} at volume {:.2}", effect, vol);
    }
}
