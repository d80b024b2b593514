//! Flap Run - a side-scrolling gap-threading arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring, phases)
//! - `game`: The aggregate the shell drives once per frame
//! - `platform`: Frame clock, intent queue and the headless process loop
//! - `highscores`: High score persistence collaborator
//! - `persistence`: JSON file load/save helpers
//! - `audio`: Event to sound cue mapping
//! - `settings`: Player preferences loaded from JSON

pub mod audio;
pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::StorageError;
pub use game::{Frame, Game};
pub use highscores::{HighScoreStore, JsonFileStore, MemoryStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: i32 = 400;
    pub const FIELD_HEIGHT: i32 = 600;
    /// Height of the ground strip at the bottom of the field
    pub const GROUND_HEIGHT: i32 = 112;

    /// Target frame rate; one simulation step per frame
    pub const TARGET_FPS: u32 = 60;

    /// Velocity gained per tick while falling (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Gravity multiplier for the gentle first descent of the first run
    pub const FIRST_DESCENT_GRAVITY_SCALE: f32 = 0.5;
    /// Velocity a flap sets (negative = upward)
    pub const FLAP_POWER: f32 = -10.0;
    /// Upward nudge applied when the very first run starts
    pub const FIRST_RUN_VELOCITY: f32 = -2.0;

    /// Player hitbox and fixed column
    pub const PLAYER_X: i32 = 100;
    pub const PLAYER_WIDTH: i32 = 24;
    pub const PLAYER_HEIGHT: i32 = 20;
    /// Inset applied on every side of the player box for obstacle tests
    pub const PLAYER_HITBOX_PADDING: i32 = 2;

    /// Visual obstacle width and the narrower lethal width inside it
    pub const OBSTACLE_WIDTH: i32 = 70;
    pub const OBSTACLE_HITBOX_WIDTH: i32 = 60;
    /// Leftward scroll per tick
    pub const OBSTACLE_SPEED: i32 = 3;
    /// Milliseconds between obstacle spawns
    pub const SPAWN_INTERVAL_MS: u64 = 1500;

    /// Difficulty curve
    pub const BASE_GAP: i32 = 150;
    pub const MIN_GAP: i32 = 90;
    pub const GAP_SHRINK_PER_POINT: i32 = 2;
    pub const GAP_SHRINK_SCORE_CAP: u32 = 30;
    pub const VARIATION_PER_POINT: i32 = 2;
    pub const VARIATION_CAP: i32 = 100;
    /// Minimum distance between the gap and the top/bottom of the playable area
    pub const GAP_MARGIN: i32 = 100;
    /// Range widening used when the field is too small for the current difficulty
    pub const GAP_FALLBACK_RANGE: i32 = 50;

    /// Milliseconds after death before a restart intent is honored
    pub const DEATH_COOLDOWN_MS: u64 = 1275;
}
