use std::collections::VecDeque;

use tracing::debug;

use super::action::{MoveKey, Orientation};
use super::config::GameConfig;
use super::field::TileField;
use super::profile::{absolute_step, orientation_profile};
use super::state::{Cell, GameStateTracker, GridPosition};

/// How directional keys are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRegime {
    /// Keys map to world axes
    Absolute,
    /// Left/Right turn, Up/Down step along the facing direction
    Oriented,
}

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Obstacle,
    OutOfBounds,
}

/// Result of a directional key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Cell),
    Turned(Orientation),
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Jump,
    Fall,
}

/// Displacement applied by one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDelta {
    pub dx: i32,
    pub dz: i32,
    pub dy: f32,
}

impl FrameDelta {
    fn vertical(dy: f32) -> Self {
        Self { dx: 0, dz: 0, dy }
    }
}

/// A multi-tick animation; one frame is applied per tick
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSequence {
    kind: AnimationKind,
    per_frame_delta: VecDeque<FrameDelta>,
}

impl AnimationSequence {
    /// Up one unit, two cells along the facing axis, down one unit
    pub fn jump(facing: Orientation) -> Self {
        let (dx, dz) = facing.delta();
        Self {
            kind: AnimationKind::Jump,
            per_frame_delta: VecDeque::from([
                FrameDelta::vertical(1.0),
                FrameDelta {
                    dx: 2 * dx,
                    dz: 2 * dz,
                    dy: 0.0,
                },
                FrameDelta::vertical(-1.0),
            ]),
        }
    }

    /// One unit down per frame from `from_y` until `floor`, then one frame
    /// resting at the floor before the fall resolves
    pub fn fall(from_y: f32, floor: f32) -> Self {
        let frames = (from_y - floor).ceil().max(1.0) as usize;
        Self {
            kind: AnimationKind::Fall,
            per_frame_delta: std::iter::repeat_n(FrameDelta::vertical(-1.0), frames)
                .chain(std::iter::once(FrameDelta::vertical(0.0)))
                .collect(),
        }
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn frames_remaining(&self) -> usize {
        self.per_frame_delta.len()
    }

    fn next_frame(&mut self) -> Option<FrameDelta> {
        self.per_frame_delta.pop_front()
    }
}

/// What a finished animation left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    Landed(Cell),
    LifeLost,
}

/// Owns the player's position and facing, and applies the movement rules
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerController {
    position: GridPosition,
    orientation: Orientation,
    spawn: Cell,
    animation: Option<AnimationSequence>,
    move_penalty: i32,
    fall_floor: f32,
}

impl PlayerController {
    pub fn new(config: &GameConfig) -> Self {
        let spawn = Cell::from(config.spawn);
        Self {
            position: GridPosition::on(spawn),
            orientation: Orientation::Forward,
            spawn,
            animation: None,
            move_penalty: config.move_penalty,
            fall_floor: config.fall_floor,
        }
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn animation(&self) -> Option<&AnimationSequence> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, cell: Cell, orientation: Orientation) {
        self.position = GridPosition::on(cell);
        self.orientation = orientation;
    }

    /// Apply a directional key press.
    ///
    /// Returns `None` while an animation is running; the press is then
    /// dropped without touching any counter.
    pub fn handle_move(
        &mut self,
        key: MoveKey,
        regime: MoveRegime,
        field: &TileField,
        tracker: &mut GameStateTracker,
    ) -> Option<MoveOutcome> {
        if self.is_animating() {
            return None;
        }

        tracker.record_key_press();

        let step = match regime {
            MoveRegime::Oriented => {
                let profile = orientation_profile(self.orientation);
                match profile.step_for(key) {
                    Some(step) => step,
                    None => {
                        self.orientation = match key {
                            MoveKey::Right => self.orientation.turned_right(),
                            _ => self.orientation.turned_left(),
                        };
                        return Some(MoveOutcome::Turned(self.orientation));
                    }
                }
            }
            MoveRegime::Absolute => {
                self.orientation = Orientation::Forward;
                absolute_step(key)
            }
        };

        let target = step.target(self.position.cell());
        let rejection = if field.has_obstacle(target.x, target.z) {
            Some(RejectReason::Obstacle)
        } else if !step.bound.admits(target) {
            Some(RejectReason::OutOfBounds)
        } else {
            None
        };

        match rejection {
            Some(reason) => {
                debug!(?key, ?target, ?reason, "move rejected, respawning");
                self.respawn();
                tracker.penalize(self.move_penalty);
                Some(MoveOutcome::Rejected(reason))
            }
            None => {
                self.position = GridPosition::on(target);
                tracker.record_step();
                Some(MoveOutcome::Moved(target))
            }
        }
    }

    /// Begin a jump. Outside Adventure view the jump always goes Forward.
    pub fn start_jump(&mut self, regime: MoveRegime) -> bool {
        if self.is_animating() {
            return false;
        }
        let facing = match regime {
            MoveRegime::Oriented => self.orientation,
            MoveRegime::Absolute => Orientation::Forward,
        };
        self.animation = Some(AnimationSequence::jump(facing));
        true
    }

    /// Start a fall if the floor drops under the player or they are off the grid
    pub fn check_fall(&mut self, field: &TileField) -> bool {
        if self.is_animating() {
            return false;
        }
        let cell = self.position.cell();
        if field.drops_at(cell.x, cell.z) || outside_extended_bounds(cell) {
            debug!(?cell, "player falling");
            self.animation = Some(AnimationSequence::fall(self.position.y, self.fall_floor));
            return true;
        }
        false
    }

    /// Apply the next animation frame, if any
    pub fn advance(&mut self, tracker: &mut GameStateTracker) -> Option<AnimationEnd> {
        let animation = self.animation.as_mut()?;

        if let Some(delta) = animation.next_frame() {
            self.position.x += delta.dx;
            self.position.z += delta.dz;
            self.position.y += delta.dy;
        }

        if animation.frames_remaining() > 0 {
            return None;
        }

        let kind = animation.kind();
        self.animation = None;

        match kind {
            AnimationKind::Jump => {
                self.position.y = 0.0;
                Some(AnimationEnd::Landed(self.position.cell()))
            }
            AnimationKind::Fall => {
                tracker.lose_life();
                self.respawn();
                Some(AnimationEnd::LifeLost)
            }
        }
    }

    fn respawn(&mut self) {
        self.position = GridPosition::on(self.spawn);
    }
}

/// Cells beyond which the player drops off the world
fn outside_extended_bounds(cell: Cell) -> bool {
    cell.x > 6 || cell.x < -5 || cell.z > 5 || cell.z < -4
}
