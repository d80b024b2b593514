//! Flap Run entry point
//!
//! Runs the simulation headless: an autopilot supplies intents, a logging
//! renderer and audio backend stand in for the window and the speakers.
//! `RUST_LOG=debug` shows every spawn, point and sound cue.

use std::path::Path;

use flap_run::audio::{AudioManager, LogBackend};
use flap_run::platform::{self, Autopilot, FrameClock, LogRenderer};
use flap_run::settings::DEFAULT_SETTINGS_FILE;
use flap_run::{Game, JsonFileStore, Settings};

/// Runs the autopilot plays before quitting
const DEMO_RUNS: u32 = 3;
/// Safety net in case the autopilot gets good: five minutes at 60 FPS
const DEMO_FRAME_LIMIT: u64 = 5 * 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Flap Run (headless) starting...");

    let settings = Settings::load(Path::new(DEFAULT_SETTINGS_FILE));
    let seed = settings.resolve_seed();

    let store = JsonFileStore::new(&settings.score_file);
    let mut game = Game::new(store, seed);
    let mut input = Autopilot::new(DEMO_RUNS).with_frame_limit(DEMO_FRAME_LIMIT);
    let mut renderer = LogRenderer::default();
    let mut audio = AudioManager::from_settings(Box::new(LogBackend), &settings);
    let mut clock = FrameClock::new(settings.frame_duration());

    let summary = platform::run(&mut game, &mut input, &mut renderer, &mut audio, &mut clock);
    log::info!(
        "Finished after {} frames, high score {}",
        summary.frames,
        summary.high_score
    );
}
