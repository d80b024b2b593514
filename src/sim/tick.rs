//! Per-frame simulation tick
//!
//! Intents are applied first, then the current phase advances by one step.

use super::collision;
use super::physics;
use super::state::{GameEvent, GamePhase, GameState, PlayerPose};
use crate::consts::*;

/// Logical intents for a single tick
///
/// Any number of presses within a frame collapse into one `flap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap / select / restart (space, click, tap)
    pub flap: bool,
    /// Leave the game after this tick
    pub quit: bool,
}

/// Advance the game state by one frame
///
/// `now_ms` is the frame clock reading; it gates obstacle spawns and the
/// restart cooldown. Returns what happened, in order.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if input.flap {
        match state.phase {
            GamePhase::Idle => {
                state.start_run(now_ms);
                events.push(GameEvent::Started);
            }
            GamePhase::Active => {
                state.player.velocity = physics::flap();
                events.push(GameEvent::Flapped);
            }
            GamePhase::Dying | GamePhase::GameOver => {
                if state.restart_ready(now_ms) {
                    state.start_run(now_ms);
                    events.push(GameEvent::Started);
                } else {
                    log::trace!("Restart ignored during cooldown");
                }
            }
        }
    }

    match state.phase {
        GamePhase::Active => active_step(state, now_ms, &mut events),
        GamePhase::Dying => death_step(state),
        GamePhase::Idle | GamePhase::GameOver => {}
    }

    events
}

fn active_step(state: &mut GameState, now_ms: u64, events: &mut Vec<GameEvent>) {
    let gravity = state.current_gravity();
    let (velocity, y) = physics::integrate(state.player.velocity, state.player.pos.y, gravity);
    state.player.velocity = velocity;
    state.player.pos.y = y;
    state.player.pose = PlayerPose::from_velocity(velocity);

    if now_ms.saturating_sub(state.last_spawn_ms) > SPAWN_INTERVAL_MS {
        state.spawn_obstacle();
        state.last_spawn_ms = now_ms;
    }

    advance_obstacles(state, events);
    cull_obstacles(state);

    let bounds = state.player.bounds();
    if let Some(hit) = collision::detect(&bounds, &state.obstacles, &state.field) {
        log::info!("Collision: {:?} at score {}", hit, state.score());
        enter_dying(state, now_ms, events);
    }
}

/// Scroll every obstacle left and credit those the player has cleared
pub(crate) fn advance_obstacles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_x = state.player.pos.x;
    for obstacle in &mut state.obstacles {
        obstacle.advance(OBSTACLE_SPEED);
        if obstacle.right() < player_x && state.scores.credit(obstacle.id()) {
            log::debug!("Cleared obstacle {} (score {})", obstacle.id(), state.scores.score());
            events.push(GameEvent::Scored {
                obstacle_id: obstacle.id(),
            });
        }
    }
}

/// Drop obstacles that have fully left the screen
pub(crate) fn cull_obstacles(state: &mut GameState) {
    state.obstacles.retain(|o| o.right() >= 0);
}

fn enter_dying(state: &mut GameState, now_ms: u64, events: &mut Vec<GameEvent>) {
    state.death_velocity = state.player.velocity;
    state.death_time_ms = Some(now_ms);
    state.player.pose = PlayerPose::Downflap;
    state.phase = GamePhase::Dying;
    events.push(GameEvent::Hit);
    events.push(GameEvent::Died);

    if let Some(record) = state.scores.commit_high_score() {
        log::info!("New high score: {}", record);
        events.push(GameEvent::NewHighScore(record));
    }
}

fn death_step(state: &mut GameState) {
    let step = physics::integrate_death(
        state.death_velocity,
        state.player.pos.y,
        GRAVITY,
        PLAYER_HEIGHT,
        state.field.ground_line(),
    );
    state.death_velocity = step.velocity;
    state.player.pos.y = step.y;

    if step.resting {
        state.phase = GamePhase::GameOver;
    }
}
