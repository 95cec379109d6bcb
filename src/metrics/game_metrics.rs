use std::time::{Duration, Instant};

use crate::game::GameEvent;

pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub falls: u32,
    pub rejected_moves: u32,
    pub reseeds: u32,
    /// Clock stops once the game is over
    pub finished: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            falls: 0,
            rejected_moves: 0,
            reseeds: 0,
            finished: false,
        }
    }

    pub fn update(&mut self) {
        if !self.finished {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    /// Count the events of one tick
    pub fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::FallStarted(_) => self.falls += 1,
                GameEvent::MoveRejected { .. } => self.rejected_moves += 1,
                GameEvent::Reseeded { .. } => self.reseeds += 1,
                GameEvent::Won { .. } | GameEvent::Lost { .. } => {
                    self.update();
                    self.finished = true;
                }
                _ => {}
            }
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, RejectReason};

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_event_counters() {
        let mut metrics = GameMetrics::new();
        metrics.record(&[
            GameEvent::MoveRejected {
                reason: RejectReason::Obstacle,
            },
            GameEvent::Reseeded { pattern_offset: 4 },
        ]);
        metrics.record(&[GameEvent::FallStarted(Cell::new(0, 1)), GameEvent::JumpStarted]);

        assert_eq!(metrics.rejected_moves, 1);
        assert_eq!(metrics.reseeds, 1);
        assert_eq!(metrics.falls, 1);
        assert!(!metrics.finished);
    }

    #[test]
    fn test_clock_stops_at_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.record(&[GameEvent::Won { score: 50 }]);
        assert!(metrics.finished);

        let frozen = metrics.elapsed_time;
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
    }
}
