//! Per-direction movement rules and Adventure camera offsets.
//!
//! The grid limits are not symmetric between directions (for example facing
//! Right and pressing Up stops at x = 4, while facing Left and pressing Down
//! allows x = 5). Every entry keeps its own literal limit.

use glam::Vec3;

use super::action::{MoveKey, Orientation};
use super::state::Cell;

/// Limit the target cell must satisfy for a move to be accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    XAtLeast(i32),
    XAtMost(i32),
    ZAtLeast(i32),
    ZAtMost(i32),
}

impl Bound {
    pub fn admits(&self, target: Cell) -> bool {
        match *self {
            Bound::XAtLeast(min) => target.x >= min,
            Bound::XAtMost(max) => target.x <= max,
            Bound::ZAtLeast(min) => target.z >= min,
            Bound::ZAtMost(max) => target.z <= max,
        }
    }
}

/// A single-cell step and the limit guarding it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub dx: i32,
    pub dz: i32,
    pub bound: Bound,
}

impl Step {
    const fn new(dx: i32, dz: i32, bound: Bound) -> Self {
        Self { dx, dz, bound }
    }

    pub fn target(&self, from: Cell) -> Cell {
        from.moved_by(self.dx, self.dz)
    }
}

/// Everything that depends on the facing direction in Adventure view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationProfile {
    /// Step taken by the Up key
    pub forward: Step,
    /// Step taken by the Down key
    pub backward: Step,
    /// Adventure camera eye, relative to the player
    pub eye_offset: Vec3,
    /// Adventure camera target, relative to the player
    pub target_offset: Vec3,
}

impl OrientationProfile {
    pub fn step_for(&self, key: MoveKey) -> Option<Step> {
        match key {
            MoveKey::Forward => Some(self.forward),
            MoveKey::Back => Some(self.backward),
            MoveKey::Left | MoveKey::Right => None,
        }
    }
}

const FACING_FORWARD: OrientationProfile = OrientationProfile {
    forward: Step::new(0, -1, Bound::ZAtLeast(-4)),
    backward: Step::new(0, 1, Bound::ZAtMost(5)),
    eye_offset: Vec3::new(0.5, 1.0, -1.0),
    target_offset: Vec3::new(0.5, -1.0, -5.0),
};

const FACING_BACK: OrientationProfile = OrientationProfile {
    forward: Step::new(0, 1, Bound::ZAtMost(5)),
    backward: Step::new(0, -1, Bound::ZAtLeast(-4)),
    eye_offset: Vec3::new(0.5, 1.0, 1.0),
    target_offset: Vec3::new(0.5, -1.0, 5.0),
};

const FACING_LEFT: OrientationProfile = OrientationProfile {
    forward: Step::new(-1, 0, Bound::XAtLeast(-5)),
    backward: Step::new(1, 0, Bound::XAtMost(5)),
    eye_offset: Vec3::new(-0.5, 1.0, -0.5),
    target_offset: Vec3::new(-5.0, -1.0, -0.5),
};

const FACING_RIGHT: OrientationProfile = OrientationProfile {
    forward: Step::new(1, 0, Bound::XAtMost(4)),
    backward: Step::new(-1, 0, Bound::XAtLeast(-4)),
    eye_offset: Vec3::new(1.0, 1.0, -0.5),
    target_offset: Vec3::new(5.0, -1.0, -0.5),
};

pub fn orientation_profile(orientation: Orientation) -> &'static OrientationProfile {
    match orientation {
        Orientation::Forward => &FACING_FORWARD,
        Orientation::Back => &FACING_BACK,
        Orientation::Left => &FACING_LEFT,
        Orientation::Right => &FACING_RIGHT,
    }
}

/// World-axis step used outside Adventure view
pub fn absolute_step(key: MoveKey) -> Step {
    match key {
        MoveKey::Right => Step::new(1, 0, Bound::XAtMost(4)),
        MoveKey::Left => Step::new(-1, 0, Bound::XAtLeast(-5)),
        MoveKey::Forward => Step::new(0, -1, Bound::ZAtLeast(-4)),
        MoveKey::Back => Step::new(0, 1, Bound::ZAtMost(5)),
    }
}
