//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; nothing is global.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleGenerator};
use super::rect::Rect;
use super::score::ScoreTracker;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first flap
    Idle,
    /// Flying through obstacles
    Active,
    /// Collision happened, body is falling to the ground
    Dying,
    /// Body at rest on the ground, waiting for restart
    GameOver,
}

impl GamePhase {
    /// Dying and GameOver both show the game over overlay
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Dying | GamePhase::GameOver)
    }
}

/// Wing pose, derived from the sign of vertical velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerPose {
    Upflap,
    Midflap,
    #[default]
    Downflap,
}

impl PlayerPose {
    pub fn from_velocity(velocity: f32) -> Self {
        if velocity < 0.0 {
            PlayerPose::Upflap
        } else if velocity > 0.0 {
            PlayerPose::Downflap
        } else {
            PlayerPose::Midflap
        }
    }
}

/// Cosmetic tint, re-rolled every run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    #[default]
    Yellow,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 3] = [PlayerColor::Red, PlayerColor::Blue, PlayerColor::Yellow];
}

/// Dimensions of the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    pub ground_height: i32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
        }
    }
}

impl Field {
    /// Y coordinate of the top of the ground strip
    #[inline]
    pub fn ground_line(&self) -> i32 {
        self.height - self.ground_height
    }
}

/// The player's body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left of the nominal box; x never changes
    pub pos: IVec2,
    /// Vertical velocity, positive is downward
    pub velocity: f32,
    pub pose: PlayerPose,
    pub color: PlayerColor,
}

impl PlayerBody {
    /// Body at the start position: fixed column, vertical middle of the field
    pub fn spawn(field: &Field, velocity: f32, color: PlayerColor) -> Self {
        Self {
            pos: IVec2::new(PLAYER_X, field.height / 2),
            velocity,
            pose: PlayerPose::Downflap,
            color,
        }
    }

    /// Nominal (unpadded) bounds
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run started (from Idle or as a restart)
    Started,
    /// Flap impulse applied
    Flapped,
    /// An obstacle was cleared
    Scored { obstacle_id: u32 },
    /// Collision detected
    Hit,
    /// Death animation begins
    Died,
    /// The run beat the high score; carries the new record
    NewHighScore(u32),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// RNG seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub field: Field,
    pub phase: GamePhase,
    pub player: PlayerBody,
    /// Obstacles ordered by spawn (oldest first)
    pub obstacles: Vec<Obstacle>,
    pub(crate) generator: ObstacleGenerator,
    pub scores: ScoreTracker,
    /// True for the whole of the first run of the process
    pub first_session: bool,
    /// A run has been started at least once
    started_once: bool,
    /// Time of the last spawn (or run start)
    pub last_spawn_ms: u64,
    /// Velocity driving the death fall
    pub death_velocity: f32,
    /// Time the collision happened
    pub death_time_ms: Option<u64>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh state in the Idle phase
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self::with_field(seed, high_score, Field::default())
    }

    pub fn with_field(seed: u64, high_score: u32, field: Field) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field,
            phase: GamePhase::Idle,
            player: PlayerBody::spawn(&field, 0.0, PlayerColor::default()),
            obstacles: Vec::new(),
            generator: ObstacleGenerator::new(),
            scores: ScoreTracker::new(high_score),
            first_session: false,
            started_once: false,
            last_spawn_ms: 0,
            death_velocity: 0.0,
            death_time_ms: None,
            time_ticks: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scores.high_score()
    }

    /// Milliseconds since the collision, if the run is over
    pub fn since_death_ms(&self, now_ms: u64) -> Option<u64> {
        self.death_time_ms.map(|t| now_ms.saturating_sub(t))
    }

    /// Restart intents are honored once the cooldown has elapsed
    pub fn restart_ready(&self, now_ms: u64) -> bool {
        self.phase.is_over()
            && self
                .since_death_ms(now_ms)
                .is_some_and(|elapsed| elapsed >= DEATH_COOLDOWN_MS)
    }

    /// Begin a run: shared by start from Idle and restart after death
    pub fn start_run(&mut self, now_ms: u64) {
        self.first_session = !self.started_once;
        self.started_once = true;

        let velocity = if self.first_session {
            FIRST_RUN_VELOCITY
        } else {
            0.0
        };
        let color = PlayerColor::ALL[self.rng.random_range(0..PlayerColor::ALL.len())];
        self.player = PlayerBody::spawn(&self.field, velocity, color);

        self.obstacles.clear();
        self.generator.reset();
        self.scores.reset();
        self.last_spawn_ms = now_ms;
        self.death_velocity = 0.0;
        self.death_time_ms = None;
        self.phase = GamePhase::Active;

        log::info!(
            "Run started (first session: {}, high score {})",
            self.first_session,
            self.high_score()
        );
    }

    /// Gravity for the current tick
    ///
    /// The first run of the process gets a gentler descent while the body is
    /// above the middle of the field.
    pub fn current_gravity(&self) -> f32 {
        if self.first_session && self.player.pos.y < self.field.height / 2 {
            GRAVITY * FIRST_DESCENT_GRAVITY_SCALE
        } else {
            GRAVITY
        }
    }

    /// Spawn an obstacle at the right edge for the current score
    pub fn spawn_obstacle(&mut self) {
        let obstacle = self
            .generator
            .generate(self.scores.score(), &self.field, &mut self.rng);
        self.obstacles.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(1, 12);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score(), 0);
        assert_eq!(state.high_score(), 12);
        assert!(state.obstacles.is_empty());
        assert!(!state.restart_ready(10_000));
    }

    #[test]
    fn test_first_run_gets_initial_nudge() {
        let mut state = GameState::new(1, 0);
        state.start_run(0);
        assert!(state.first_session);
        assert_eq!(state.player.velocity, FIRST_RUN_VELOCITY);
        assert_eq!(state.player.pos, IVec2::new(PLAYER_X, FIELD_HEIGHT / 2));

        state.start_run(5_000);
        assert!(!state.first_session);
        assert_eq!(state.player.velocity, 0.0);
        assert_eq!(state.last_spawn_ms, 5_000);
    }

    #[test]
    fn test_gentle_gravity_only_above_middle_on_first_run() {
        let mut state = GameState::new(1, 0);
        state.start_run(0);
        // At the middle line: full gravity
        assert_eq!(state.current_gravity(), GRAVITY);
        state.player.pos.y -= 1;
        assert_eq!(state.current_gravity(), GRAVITY * FIRST_DESCENT_GRAVITY_SCALE);

        state.start_run(0);
        state.player.pos.y -= 1;
        assert_eq!(state.current_gravity(), GRAVITY);
    }

    #[test]
    fn test_pose_from_velocity() {
        assert_eq!(PlayerPose::from_velocity(-0.5), PlayerPose::Upflap);
        assert_eq!(PlayerPose::from_velocity(0.0), PlayerPose::Midflap);
        assert_eq!(PlayerPose::from_velocity(2.0), PlayerPose::Downflap);
    }

    #[test]
    fn test_field_ground_line() {
        assert_eq!(Field::default().ground_line(), FIELD_HEIGHT - GROUND_HEIGHT);
    }
}
