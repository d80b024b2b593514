//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, driven by an externally supplied clock reading
//! - Seeded RNG only
//! - Stable iteration order (obstacles kept in spawn order)
//! - No rendering, audio or storage dependencies

pub mod collision;
pub mod obstacle;
pub mod physics;
pub mod rect;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Hit, collides, detect};
pub use obstacle::{
    Obstacle, ObstacleColor, ObstacleGenerator, gap_height_for_score, variation_for_score,
};
pub use rect::Rect;
pub use score::ScoreTracker;
pub use snapshot::{ObstacleView, PlayerView, Snapshot};
pub use state::{Field, GameEvent, GamePhase, GameState, PlayerBody, PlayerColor, PlayerPose};
pub use tick::{TickInput, tick};
