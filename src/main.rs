//! Plastic Collector entry point
//!
//! Runs a headless demo session: the autopilot plays Levels mode at the
//! real frame rate, scenes go to a logging backend, best scores land next
//! to the binary's working directory. Prints the run summary as JSON.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use plastic_collector::audio::AudioManager;
use plastic_collector::consts::SIM_HZ;
use plastic_collector::persistence::FileScoreStore;
use plastic_collector::platform::{FrameClock, InputSource};
use plastic_collector::renderer::LogRenderer;
use plastic_collector::sim::{Autopilot, Flow, GameMode, GamePhase, progression};
use plastic_collector::{ConfigurationError, Game, Tuning};

/// Two minutes of play at 60 FPS
const DEMO_FRAMES: u64 = 120 * SIM_HZ as u64;
const REACTION_FRAMES: u32 = 30;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Plastic Collector (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ConfigurationError> {
    let tuning = Tuning::default();
    let store = FileScoreStore::open(".")?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(tuning, seed, store, AudioManager::new(tuning.effect_volume))?;
    let mut input = Autopilot::new(GameMode::Levels, REACTION_FRAMES);
    let mut renderer = LogRenderer::default();
    let mut clock = FrameClock::new(SIM_HZ);

    while clock.frames() < DEMO_FRAMES {
        let events = input.poll(&game.state);
        if game.frame(&events) == Flow::Quit {
            break;
        }
        game.scene().submit(&mut renderer);
        if game.state.phase == GamePhase::GameOver {
            break;
        }
        clock.wait();
    }

    log::info!(
        "Stopped after {} frames, {} effects played",
        renderer.frames(),
        game.audio().played()
    );
    if let Some(summary) = progression::summary(&game.state) {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Failed to serialize summary: {}", e),
        }
    }
    Ok(())
}
