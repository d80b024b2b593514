//! Platform abstraction layer
//!
//! Everything between the operating system and the simulation:
//! - Frame pacing (`time`)
//! - Input intents (`input`)
//! - The renderer seam and the process loop that ties them together

pub mod input;
pub mod time;

pub use input::{Autopilot, InputSource, Intent, IntentQueue};
pub use time::{Clock, FrameClock, SteppedClock};

use crate::audio::AudioManager;
use crate::game::Game;
use crate::highscores::HighScoreStore;
use crate::sim::{GamePhase, Snapshot};

/// Receives one read-only snapshot per frame
pub trait Renderer {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Renderer for headless runs: logs phase changes and score updates
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_phase: Option<GamePhase>,
    last_score: u32,
}

impl Renderer for LogRenderer {
    fn present(&mut self, snapshot: &Snapshot) {
        if self.last_phase != Some(snapshot.phase) {
            log::info!(
                "Phase {:?} (score {}, best {})",
                snapshot.phase,
                snapshot.score,
                snapshot.high_score
            );
            self.last_phase = Some(snapshot.phase);
        }
        if snapshot.score != self.last_score {
            log::debug!("Score {}", snapshot.score);
            self.last_score = snapshot.score;
        }
    }
}

/// How a process loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub high_score: u32,
}

/// Drive the game until a quit intent arrives
///
/// Each frame: poll input once, advance one step (persisting any record),
/// emit audio cues, present the snapshot. Quit is honored after the frame
/// it arrived in has completed.
pub fn run<S, I, R, C>(
    game: &mut Game<S>,
    input: &mut I,
    renderer: &mut R,
    audio: &mut AudioManager,
    clock: &mut C,
) -> RunSummary
where
    S: HighScoreStore,
    I: InputSource,
    R: Renderer,
    C: Clock,
{
    let mut queue = IntentQueue::new();
    let mut snapshot = game.state().snapshot(clock.now_ms());
    let mut frames = 0;

    loop {
        input.poll(&snapshot, &mut queue);
        let intents = queue.drain();

        let frame = game.advance(&intents, clock.now_ms());
        audio.handle_events(&frame.events);
        renderer.present(&frame.snapshot);
        snapshot = frame.snapshot;
        frames += 1;

        if intents.quit {
            log::info!("Quit after {} frames", frames);
            break;
        }
        clock.wait_for_next_frame();
    }

    RunSummary {
        frames,
        high_score: game.state().high_score(),
    }
}
