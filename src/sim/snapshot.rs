//! Read-only view of the world handed to the renderer each frame

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleColor};
use super::state::{GamePhase, GameState, PlayerColor, PlayerPose};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: IVec2,
    pub pose: PlayerPose,
    pub color: PlayerColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub x: i32,
    pub gap_top: i32,
    pub gap_height: i32,
    pub color: ObstacleColor,
}

impl From<&Obstacle> for ObstacleView {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            id: obstacle.id(),
            x: obstacle.x,
            gap_top: obstacle.gap_top(),
            gap_height: obstacle.gap_height(),
            color: obstacle.color,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: PlayerView,
    /// Oldest first
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub high_score: u32,
    /// Time since the collision, for overlay sequencing
    pub since_death_ms: Option<u64>,
    /// Show the "press to continue" prompt
    pub restart_ready: bool,
}

impl GameState {
    pub fn snapshot(&self, now_ms: u64) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: PlayerView {
                pos: self.player.pos,
                pose: self.player.pose,
                color: self.player.color,
            },
            obstacles: self.obstacles.iter().map(ObstacleView::from).collect(),
            score: self.score(),
            high_score: self.high_score(),
            since_death_ms: if self.phase.is_over() {
                self.since_death_ms(now_ms)
            } else {
                None
            },
            restart_ready: self.restart_ready(now_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(9, 3);
        state.start_run(0);
        state.spawn_obstacle();

        let snap = state.snapshot(100);
        assert_eq!(snap.phase, GamePhase::Active);
        assert_eq!(snap.high_score, 3);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].id, 0);
        assert_eq!(snap.obstacles[0].gap_height, state.obstacles[0].gap_height());
        assert_eq!(snap.since_death_ms, None);
        assert!(!snap.restart_ready);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(9, 0);
        let json = serde_json::to_string(&state.snapshot(0)).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
    }
}
