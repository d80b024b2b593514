//! Obstacle pairs and the difficulty curve that shapes them
//!
//! The gap shrinks linearly with score until a floor, while the band the gap
//! may be placed in widens up to a cap.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Field;
use crate::consts::*;

/// Barrier tint, picked at random per obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleColor {
    Green,
    Red,
}

/// An upper/lower barrier pair with a passable gap between them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    id: u32,
    /// Left edge of the visual barrier
    pub x: i32,
    gap_top: i32,
    gap_height: i32,
    ground_line: i32,
    pub color: ObstacleColor,
}

impl Obstacle {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn gap_top(&self) -> i32 {
        self.gap_top
    }

    pub fn gap_height(&self) -> i32 {
        self.gap_height
    }

    /// Right edge of the visual barrier
    pub fn right(&self) -> i32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Scroll left by one tick
    pub fn advance(&mut self, speed: i32) {
        self.x -= speed;
    }

    fn hitbox_left(&self) -> i32 {
        self.x + (OBSTACLE_WIDTH - OBSTACLE_HITBOX_WIDTH) / 2
    }

    /// Lethal region of the upper barrier: from the top of the field to the gap
    pub fn upper_hitbox(&self) -> Rect {
        Rect::new(self.hitbox_left(), 0, OBSTACLE_HITBOX_WIDTH, self.gap_top)
    }

    /// Lethal region of the lower barrier: from the gap bottom to the ground line
    pub fn lower_hitbox(&self) -> Rect {
        let bottom_of_gap = self.gap_top + self.gap_height;
        Rect::new(
            self.hitbox_left(),
            bottom_of_gap,
            OBSTACLE_HITBOX_WIDTH,
            self.ground_line - bottom_of_gap,
        )
    }
}

/// Gap height for a score: `max(BASE_GAP - 2 * min(score, 30), MIN_GAP)`
pub fn gap_height_for_score(score: u32) -> i32 {
    let shrink = score.min(GAP_SHRINK_SCORE_CAP) as i32 * GAP_SHRINK_PER_POINT;
    (BASE_GAP - shrink).max(MIN_GAP)
}

/// Extra vertical placement budget for a score: `min(2 * score, VARIATION_CAP)`
pub fn variation_for_score(score: u32) -> i32 {
    let score = score.min(VARIATION_CAP as u32) as i32;
    (score * VARIATION_PER_POINT).min(VARIATION_CAP)
}

/// Inclusive range the gap's top edge is drawn from
///
/// When the field is too small for the current difficulty the range is
/// widened downward by a fixed amount instead of failing.
pub fn gap_top_range(score: u32, field: &Field) -> (i32, i32) {
    let gap = gap_height_for_score(score);
    let half_variation = variation_for_score(score) / 2;

    let min_top = GAP_MARGIN + half_variation;
    let mut max_top = field.ground_line() - gap - GAP_MARGIN - half_variation;
    if max_top < min_top {
        max_top = min_top + GAP_FALLBACK_RANGE;
    }
    (min_top, max_top)
}

/// Produces obstacles with sequential ids
#[derive(Debug, Clone, Default)]
pub struct ObstacleGenerator {
    next_id: u32,
}

impl ObstacleGenerator {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Restart id numbering for a new run
    pub fn reset(&mut self) {
        self.next_id = 0;
    }

    /// Create one obstacle anchored at the right edge of the field
    pub fn generate<R: Rng>(&mut self, score: u32, field: &Field, rng: &mut R) -> Obstacle {
        let gap_height = gap_height_for_score(score);
        let (min_top, max_top) = gap_top_range(score, field);
        let gap_top = rng.random_range(min_top..=max_top);
        let color = if rng.random_bool(0.5) {
            ObstacleColor::Green
        } else {
            ObstacleColor::Red
        };

        let id = self.next_id;
        self.next_id += 1;

        log::debug!(
            "Obstacle {} spawned: gap_top={} gap_height={} (score {})",
            id,
            gap_top,
            gap_height,
            score
        );

        Obstacle {
            id,
            x: field.width,
            gap_top,
            gap_height,
            ground_line: field.ground_line(),
            color,
        }
    }
}
