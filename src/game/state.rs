use glam::Vec3;

/// A cell of the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Cell offset by delta
    pub fn moved_by(&self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

/// Player position: a grid cell plus a vertical offset used by jump and fall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPosition {
    pub x: i32,
    pub z: i32,
    /// Zero whenever the player is at rest
    pub y: f32,
}

impl GridPosition {
    /// Resting position on a cell
    pub fn on(cell: Cell) -> Self {
        Self {
            x: cell.x,
            z: cell.z,
            y: 0.0,
        }
    }

    pub fn cell(&self) -> Cell {
        Cell::new(self.x, self.z)
    }

    pub fn is_grounded(&self) -> bool {
        self.y == 0.0
    }

    /// World-space point of the player's grid corner
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y, self.z as f32)
    }
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Score, lives and counters for a session.
///
/// Read access is public; every mutation goes through the simulation rules
/// in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStateTracker {
    score: i32,
    lives: i32,
    outcome: Option<Outcome>,
    step_count: u32,
    key_press_count: u32,
}

impl GameStateTracker {
    pub(crate) fn new(lives: i32) -> Self {
        Self {
            score: 0,
            lives,
            outcome: None,
            step_count: 0,
            key_press_count: 0,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Accepted moves so far
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Directional presses since the last reseed
    pub fn key_press_count(&self) -> u32 {
        self.key_press_count
    }

    pub(crate) fn record_key_press(&mut self) {
        self.key_press_count += 1;
    }

    pub(crate) fn reset_key_presses(&mut self) {
        self.key_press_count = 0;
    }

    pub(crate) fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub(crate) fn penalize(&mut self, amount: i32) {
        self.score -= amount;
    }

    pub(crate) fn lose_life(&mut self) {
        self.lives -= 1;
    }

    pub(crate) fn finish(&mut self, outcome: Outcome, score_delta: i32) {
        if self.outcome.is_none() {
            self.score += score_delta;
            self.outcome = Some(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(-5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(-4, 5));
        assert_eq!(cell.moved_by(0, -2), Cell::new(-5, 3));
        assert_eq!(Cell::from((4, -4)), Cell::new(4, -4));
    }

    #[test]
    fn test_grid_position_at_rest() {
        let pos = GridPosition::on(Cell::new(-5, 5));
        assert!(pos.is_grounded());
        assert_eq!(pos.cell(), Cell::new(-5, 5));
        assert_eq!(pos.to_vec3(), Vec3::new(-5.0, 0.0, 5.0));
    }

    #[test]
    fn test_tracker_initial_state() {
        let tracker = GameStateTracker::new(3);
        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.lives(), 3);
        assert!(!tracker.is_game_over());
        assert_eq!(tracker.step_count(), 0);
        assert_eq!(tracker.key_press_count(), 0);
    }

    #[test]
    fn test_tracker_finish_is_terminal() {
        let mut tracker = GameStateTracker::new(3);
        tracker.finish(Outcome::Won, 50);
        assert_eq!(tracker.outcome(), Some(Outcome::Won));
        assert_eq!(tracker.score(), 50);

        // a second outcome never overrides the first
        tracker.finish(Outcome::Lost, -50);
        assert_eq!(tracker.outcome(), Some(Outcome::Won));
        assert_eq!(tracker.score(), 50);
    }

    #[test]
    fn test_tracker_counters() {
        let mut tracker = GameStateTracker::new(3);
        tracker.record_key_press();
        tracker.record_key_press();
        tracker.record_step();
        tracker.penalize(5);
        tracker.lose_life();
        assert_eq!(tracker.key_press_count(), 2);
        assert_eq!(tracker.step_count(), 1);
        assert_eq!(tracker.score(), -5);
        assert_eq!(tracker.lives(), 2);

        tracker.reset_key_presses();
        assert_eq!(tracker.key_press_count(), 0);
    }
}
