//! Score and high score bookkeeping

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Counts cleared obstacles, crediting each id at most once per run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u32,
    high_score: u32,
    credited: BTreeSet<u32>,
    /// High score already committed for this run
    committed: bool,
}

impl ScoreTracker {
    /// Start with a previously persisted high score
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score,
            ..Default::default()
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_credited(&self, obstacle_id: u32) -> bool {
        self.credited.contains(&obstacle_id)
    }

    /// Credit an obstacle; returns false if it was already counted
    pub fn credit(&mut self, obstacle_id: u32) -> bool {
        if !self.credited.insert(obstacle_id) {
            return false;
        }
        self.score += 1;
        true
    }

    /// New run: zero the score and forget credited ids
    pub fn reset(&mut self) {
        self.score = 0;
        self.credited.clear();
        self.committed = false;
    }

    /// Promote the run's score to high score if it beats it
    ///
    /// Only the first call per run can succeed.
    pub fn commit_high_score(&mut self) -> Option<u32> {
        if self.committed {
            return None;
        }
        self.committed = true;
        if self.score > self.high_score {
            self.high_score = self.score;
            Some(self.high_score)
        } else {
            None
        }
    }
}
