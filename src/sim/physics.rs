//! Vertical body integration
//!
//! Explicit Euler with whole-pixel position steps: velocity accumulates
//! fractionally, position moves by `floor(velocity)` each tick.

use crate::consts::FLAP_POWER;

/// Result of one death-fall step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathStep {
    pub velocity: f32,
    pub y: i32,
    /// Body bottom is on the ground line
    pub resting: bool,
}

/// Whole-pixel displacement for a velocity
#[inline]
pub fn pixel_step(velocity: f32) -> i32 {
    velocity.floor() as i32
}

/// Advance one tick under gravity: returns the next (velocity, y)
pub fn integrate(velocity: f32, y: i32, gravity: f32) -> (f32, i32) {
    let velocity = velocity + gravity;
    (velocity, y + pixel_step(velocity))
}

/// A flap replaces the velocity; it never adds to it
#[inline]
pub fn flap() -> f32 {
    FLAP_POWER
}

/// Death-fall integration
///
/// Same step as [`integrate`], but the body's bottom (`y + height`) is clamped
/// to `ground_line`. Once clamped the body stays put.
pub fn integrate_death(
    velocity: f32,
    y: i32,
    gravity: f32,
    height: i32,
    ground_line: i32,
) -> DeathStep {
    let (velocity, y) = integrate(velocity, y, gravity);
    let floor_y = ground_line - height;
    if y >= floor_y {
        DeathStep {
            velocity,
            y: floor_y,
            resting: true,
        }
    } else {
        DeathStep {
            velocity,
            y,
            resting: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GRAVITY;

    #[test]
    fn test_one_tick_from_rest() {
        let (v, y) = integrate(0.0, 300, 0.5);
        assert!((v - 0.5).abs() < f32::EPSILON);
        assert_eq!(y, 300);
    }

    #[test]
    fn test_position_uses_floor() {
        // 1.5 -> 1 pixel down
        let (_, y) = integrate(1.0, 300, 0.5);
        assert_eq!(y, 301);
        // -1.5 floors to -2
        let (_, y) = integrate(-2.0, 300, 0.5);
        assert_eq!(y, 298);
    }

    #[test]
    fn test_flap_sets_fixed_velocity() {
        assert_eq!(flap(), FLAP_POWER);
        // Integrating from a flap is independent of whatever came before
        let (v, y) = integrate(flap(), 300, 0.5);
        assert!((v - (FLAP_POWER + 0.5)).abs() < f32::EPSILON);
        assert_eq!(y, 290);
    }

    #[test]
    fn test_flap_can_exceed_fall_speed_upward() {
        let (v, _) = integrate(flap(), 300, GRAVITY);
        assert!(v < 0.0);
    }

    #[test]
    fn test_death_fall_clamps_to_ground() {
        // Ground line 488, body 20 tall -> rests at y = 468
        let step = integrate_death(9.0, 465, GRAVITY, 20, 488);
        assert!(step.resting);
        assert_eq!(step.y, 468);

        // Stays clamped on further steps
        let again = integrate_death(step.velocity, step.y, GRAVITY, 20, 488);
        assert!(again.resting);
        assert_eq!(again.y, 468);
    }

    #[test]
    fn test_death_fall_in_air() {
        let step = integrate_death(-10.0, 200, GRAVITY, 20, 488);
        assert!(!step.resting);
        assert_eq!(step.y, 190);
        assert!((step.velocity + 9.5).abs() < f32::EPSILON);
    }
}
