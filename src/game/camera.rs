use glam::Vec3;
use tracing::debug;

use super::action::Orientation;
use super::error::GameError;
use super::player::MoveRegime;
use super::profile::orientation_profile;

/// Active view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// Fixed overview from a corner of the field
    #[default]
    Tower,
    /// Fixed top-down view
    Top,
    /// Behind the player, turning with the player's orientation
    Adventure,
    /// Trails the player from above and behind
    FollowCam,
    /// Free look; holds its pose except for drag nudges
    Helicopter,
}

impl CameraMode {
    pub const ALL: [CameraMode; 5] = [
        CameraMode::Adventure,
        CameraMode::FollowCam,
        CameraMode::Tower,
        CameraMode::Top,
        CameraMode::Helicopter,
    ];

    /// Digit key that selects this view
    pub fn hotkey(&self) -> u8 {
        match self {
            CameraMode::Adventure => 1,
            CameraMode::FollowCam => 2,
            CameraMode::Tower => 3,
            CameraMode::Top => 4,
            CameraMode::Helicopter => 5,
        }
    }

    pub fn movement_regime(&self) -> MoveRegime {
        match self {
            CameraMode::Adventure => MoveRegime::Oriented,
            CameraMode::Tower
            | CameraMode::Top
            | CameraMode::FollowCam
            | CameraMode::Helicopter => MoveRegime::Absolute,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraMode::Tower => "Tower",
            CameraMode::Top => "Top",
            CameraMode::Adventure => "Adventure",
            CameraMode::FollowCam => "Follow",
            CameraMode::Helicopter => "Helicopter",
        }
    }
}

impl TryFrom<u8> for CameraMode {
    type Error = GameError;

    fn try_from(hotkey: u8) -> Result<Self, Self::Error> {
        CameraMode::ALL
            .into_iter()
            .find(|mode| mode.hotkey() == hotkey)
            .ok_or(GameError::InvalidCameraMode(hotkey))
    }
}

/// Look-at parameters handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl CameraPose {
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, fov: f32) -> Self {
        Self {
            eye,
            target,
            up,
            fov,
        }
    }
}

const HELICOPTER_EYE: Vec3 = Vec3::new(4.0, 3.0, 6.0);
const DRAG_EYE_HEIGHT: f32 = 5.0;
const DRAG_LOOK_DEPTH: f32 = 10.0;

/// Owns the view mode and derives the camera pose from the player each tick
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    mode: CameraMode,
    pose: CameraPose,
    fov: f32,
}

impl CameraController {
    pub fn new(fov: f32) -> Self {
        Self {
            mode: CameraMode::Tower,
            pose: CameraPose::look_at(Vec3::new(8.0, 3.0, 6.0), Vec3::ZERO, Vec3::Y, fov),
            fov,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Pose computed on the last update
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Switch views. Returns false if `mode` was already active.
    pub fn select(&mut self, mode: CameraMode) -> bool {
        if self.mode == mode {
            return false;
        }
        debug!(from = self.mode.as_str(), to = mode.as_str(), "view changed");
        self.mode = mode;
        if mode == CameraMode::Helicopter {
            self.pose.eye = HELICOPTER_EYE;
        }
        true
    }

    /// Nudge the free-look pose by one unit per axis in the sign of the drag.
    ///
    /// Derived views overwrite the pose on the next update, so the nudge only
    /// persists in Helicopter view.
    pub fn drag_look(&mut self, dx: i32, dy: i32) {
        let mut eye = self.pose.eye;
        eye.x += dx.signum() as f32;
        eye.z += dy.signum() as f32;
        eye.y = DRAG_EYE_HEIGHT;
        let target = eye - Vec3::Z * DRAG_LOOK_DEPTH;
        self.pose = CameraPose::look_at(eye, target, Vec3::Y, self.fov);
    }

    /// Recompute the pose for the active view from the player's pose
    pub fn update(&mut self, player: Vec3, orientation: Orientation) -> CameraPose {
        let fov = self.fov;
        self.pose = match self.mode {
            CameraMode::Tower => {
                CameraPose::look_at(Vec3::new(6.0, 3.0, 6.0), Vec3::ZERO, Vec3::Y, fov)
            }
            CameraMode::Top => {
                CameraPose::look_at(Vec3::new(0.0, 7.0, 0.0), Vec3::ZERO, Vec3::NEG_Z, fov)
            }
            CameraMode::Adventure => {
                let profile = orientation_profile(orientation);
                CameraPose::look_at(
                    player + profile.eye_offset,
                    player + profile.target_offset,
                    Vec3::Y,
                    fov,
                )
            }
            CameraMode::FollowCam => CameraPose::look_at(
                player + Vec3::new(1.0, 3.0, 1.0),
                player + Vec3::new(1.0, 0.0, -5.0),
                Vec3::Y,
                fov,
            ),
            // TODO: define a Helicopter orbit once the intended free-look
            // behaviour is settled; until then the pose is held.
            CameraMode::Helicopter => self.pose,
        };
        self.pose
    }
}
