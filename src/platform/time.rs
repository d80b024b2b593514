//! Frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Source of frame timestamps for the game loop
pub trait Clock {
    /// Milliseconds since the clock started
    fn now_ms(&self) -> u64;
    /// Block until the next frame is due
    fn wait_for_next_frame(&mut self);
}

/// Real-time clock targeting a fixed frame rate
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    frame: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            frame,
            next_frame: start + frame,
        }
    }
}

impl Clock for FrameClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn wait_for_next_frame(&mut self) {
        let now = Instant::now();
        if now < self.next_frame {
            thread::sleep(self.next_frame - now);
            self.next_frame += self.frame;
        } else {
            // Running behind: drop the missed frames instead of bursting
            self.next_frame = now + self.frame;
        }
    }
}

/// Clock that advances a fixed step per frame without sleeping
#[derive(Debug, Clone)]
pub struct SteppedClock {
    now_ms: u64,
    step_ms: u64,
}

impl SteppedClock {
    pub fn new(step_ms: u64) -> Self {
        Self { now_ms: 0, step_ms }
    }
}

impl Clock for SteppedClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn wait_for_next_frame(&mut self) {
        self.now_ms += self.step_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_clock_advances_per_frame() {
        let mut clock = SteppedClock::new(16);
        assert_eq!(clock.now_ms(), 0);
        clock.wait_for_next_frame();
        clock.wait_for_next_frame();
        assert_eq!(clock.now_ms(), 32);
    }

    #[test]
    fn test_frame_clock_paces_frames() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        let before = Instant::now();
        clock.wait_for_next_frame();
        clock.wait_for_next_frame();
        assert!(before.elapsed() >= Duration::from_millis(9));
    }
}
