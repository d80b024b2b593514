//! Collision detection between the player and the world
//!
//! Obstacles are tested against a padded player box, so a graze of the
//! nominal sprite bounds is survivable. World bounds use the nominal box.

use super::obstacle::Obstacle;
use super::rect::Rect;
use super::state::Field;
use crate::consts::PLAYER_HITBOX_PADDING;

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    UpperBarrier { obstacle_id: u32 },
    LowerBarrier { obstacle_id: u32 },
    Ceiling,
    Ground,
}

/// The inset box used against obstacle barriers
#[inline]
pub fn player_hitbox(nominal: &Rect) -> Rect {
    nominal.inset(PLAYER_HITBOX_PADDING)
}

/// Report the first overlap found, if any
pub fn detect(nominal: &Rect, obstacles: &[Obstacle], field: &Field) -> Option<Hit> {
    let hitbox = player_hitbox(nominal);

    for obstacle in obstacles {
        if hitbox.intersects(&obstacle.upper_hitbox()) {
            return Some(Hit::UpperBarrier {
                obstacle_id: obstacle.id(),
            });
        }
        if hitbox.intersects(&obstacle.lower_hitbox()) {
            return Some(Hit::LowerBarrier {
                obstacle_id: obstacle.id(),
            });
        }
    }

    if nominal.top() <= 0 {
        return Some(Hit::Ceiling);
    }
    if nominal.bottom() >= field.ground_line() {
        return Some(Hit::Ground);
    }

    None
}

/// Boolean form of [`detect`]; any hit is equivalent
#[inline]
pub fn collides(nominal: &Rect, obstacles: &[Obstacle], field: &Field) -> bool {
    detect(nominal, obstacles, field).is_some()
}
