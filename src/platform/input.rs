//! Logical input intents
//!
//! Devices (keyboard, mouse, touch) are the shell's business. By the time
//! anything reaches the game it is one of two intents, collected into a queue
//! and drained once per tick.

use crate::consts::{FIELD_HEIGHT, OBSTACLE_WIDTH, PLAYER_HEIGHT};
use crate::sim::{GamePhase, PlayerPose, Snapshot, TickInput};

/// Input intents the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Space, left click or tap: flap, start, restart
    Flap,
    /// Window closed / escape
    Quit,
}

/// Intents gathered between two ticks
#[derive(Debug, Default)]
pub struct IntentQueue {
    intents: Vec<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self {
            intents: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Collapse everything queued into one tick's input and clear the queue
    pub fn drain(&mut self) -> TickInput {
        let mut input = TickInput::default();
        for intent in self.intents.drain(..) {
            match intent {
                Intent::Flap => input.flap = true,
                Intent::Quit => input.quit = true,
            }
        }
        input
    }
}

/// Polled once per frame for new intents
pub trait InputSource {
    /// Push whatever happened since the last poll; `snapshot` is the last frame shown
    fn poll(&mut self, snapshot: &Snapshot, queue: &mut IntentQueue);
}

/// Plays by itself: aims for the middle of the next gap and restarts after
/// each crash until `runs` runs have ended, then quits
#[derive(Debug, Clone)]
pub struct Autopilot {
    runs_left: u32,
    frames_left: Option<u64>,
    was_over: bool,
}

impl Autopilot {
    pub fn new(runs: u32) -> Self {
        Self {
            runs_left: runs,
            frames_left: None,
            was_over: false,
        }
    }

    /// Also quit after this many frames, however well the runs go
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frames_left = Some(frames);
        self
    }

    /// Y the body should hover at, given the obstacles ahead
    fn target_y(snapshot: &Snapshot) -> i32 {
        let player_x = snapshot.player.pos.x;
        snapshot
            .obstacles
            .iter()
            .find(|o| o.x + OBSTACLE_WIDTH >= player_x)
            .map(|o| o.gap_top + o.gap_height / 2 + PLAYER_HEIGHT / 2)
            .unwrap_or(FIELD_HEIGHT / 2 + PLAYER_HEIGHT / 2)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &Snapshot, queue: &mut IntentQueue) {
        if let Some(frames) = self.frames_left.as_mut() {
            *frames = frames.saturating_sub(1);
            if *frames == 0 {
                queue.push(Intent::Quit);
            }
        }

        let over = snapshot.phase.is_over();
        if over && !self.was_over {
            self.runs_left = self.runs_left.saturating_sub(1);
            log::info!("Autopilot run ended with score {}", snapshot.score);
        }
        self.was_over = over;

        match snapshot.phase {
            GamePhase::Idle => queue.push(Intent::Flap),
            GamePhase::Active => {
                let sinking = snapshot.player.pose != PlayerPose::Upflap;
                if sinking && snapshot.player.pos.y + PLAYER_HEIGHT > Self::target_y(snapshot) {
                    queue.push(Intent::Flap);
                }
            }
            GamePhase::Dying | GamePhase::GameOver => {
                if self.runs_left == 0 {
                    queue.push(Intent::Quit);
                } else if snapshot.restart_ready {
                    queue.push(Intent::Flap);
                }
            }
        }
    }
}
