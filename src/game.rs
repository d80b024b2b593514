//! The aggregate the shell drives once per frame
//!
//! Wraps the pure simulation with the high score collaborator: the score is
//! loaded once at construction and written only when a run sets a record.

use crate::highscores::HighScoreStore;
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};

/// Output of one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub events: Vec<GameEvent>,
}

/// Game instance holding all state
pub struct Game<S: HighScoreStore> {
    state: GameState,
    store: S,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(mut store: S, seed: u64) -> Self {
        let high_score = store.load_high_score();
        log::info!("New game (seed {}, high score {})", seed, high_score);
        Self {
            state: GameState::new(seed, high_score),
            store,
        }
    }

    /// Run one simulation step and persist any new record
    pub fn advance(&mut self, input: &TickInput, now_ms: u64) -> Frame {
        let events = tick(&mut self.state, input, now_ms);

        for event in &events {
            if let GameEvent::NewHighScore(score) = event {
                self.store.save_high_score(*score);
            }
        }

        Frame {
            snapshot: self.state.snapshot(now_ms),
            events,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEATH_COOLDOWN_MS;
    use crate::highscores::MemoryStore;
    use crate::sim::GamePhase;

    const FLAP: TickInput = TickInput {
        flap: true,
        quit: false,
    };

    /// Tick without input until the run is over, 16ms per frame
    fn play_until_over(game: &mut Game<MemoryStore>, now: &mut u64) {
        while !game.state().phase.is_over() {
            *now += 16;
            game.advance(&TickInput::default(), *now);
            assert!(*now < 120_000, "run never ended");
        }
    }

    #[test]
    fn test_loads_high_score_once() {
        let game = Game::new(MemoryStore::with_score(9), 1);
        assert_eq!(game.state().high_score(), 9);
        assert_eq!(game.store().saves, 0);
    }

    #[test]
    fn test_new_record_persisted_once() {
        let mut game = Game::new(MemoryStore::with_score(0), 1);
        let mut now = 0;
        game.advance(&FLAP, now);
        assert_eq!(game.state().phase, GamePhase::Active);

        // Fake a cleared obstacle, then fall into the ground
        game.state.scores.credit(0);
        play_until_over(&mut game, &mut now);

        assert_eq!(game.store().high_score, 1);
        assert_eq!(game.store().saves, 1);

        for _ in 0..100 {
            now += 16;
            game.advance(&TickInput::default(), now);
        }
        assert_eq!(game.store().saves, 1);
    }

    #[test]
    fn test_no_write_without_record() {
        let mut game = Game::new(MemoryStore::with_score(50), 1);
        let mut now = 0;
        game.advance(&FLAP, now);
        play_until_over(&mut game, &mut now);
        assert_eq!(game.store().saves, 0);
        assert_eq!(game.store().high_score, 50);
    }

    #[test]
    fn test_frame_reports_overlay_timing() {
        let mut game = Game::new(MemoryStore::default(), 1);
        let mut now = 0;
        game.advance(&FLAP, now);
        play_until_over(&mut game, &mut now);
        let death = game.state().death_time_ms.unwrap();

        let frame = game.advance(&TickInput::default(), death + 100);
        assert_eq!(frame.snapshot.since_death_ms, Some(100));
        assert!(!frame.snapshot.restart_ready);

        let frame = game.advance(&TickInput::default(), death + DEATH_COOLDOWN_MS);
        assert!(frame.snapshot.restart_ready);

        let frame = game.advance(&FLAP, death + DEATH_COOLDOWN_MS + 16);
        assert_eq!(frame.events.first(), Some(&GameEvent::Started));
        assert_eq!(frame.snapshot.phase, GamePhase::Active);
        assert_eq!(frame.snapshot.score, 0);
    }
}
