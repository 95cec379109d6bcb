use super::camera::CameraMode;
use super::error::GameError;

/// Facing direction of the player, only meaningful in Adventure view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Forward,
    Left,
    Right,
    Back,
}

impl Orientation {
    /// Orientation after pressing the Right key in Adventure view
    pub fn turned_right(&self) -> Self {
        match self {
            Orientation::Forward => Orientation::Right,
            Orientation::Right => Orientation::Back,
            Orientation::Back => Orientation::Left,
            Orientation::Left => Orientation::Forward,
        }
    }

    /// Orientation after pressing the Left key in Adventure view
    pub fn turned_left(&self) -> Self {
        match self {
            Orientation::Forward => Orientation::Left,
            Orientation::Left => Orientation::Back,
            Orientation::Back => Orientation::Right,
            Orientation::Right => Orientation::Forward,
        }
    }

    /// Unit grid delta (dx, dz) of one step in the facing direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Orientation::Forward => (0, -1),
            Orientation::Back => (0, 1),
            Orientation::Left => (-1, 0),
            Orientation::Right => (1, 0),
        }
    }

    /// Numeric code used for this orientation in logs
    pub fn code(&self) -> i32 {
        match self {
            Orientation::Right => 1,
            Orientation::Left => 2,
            Orientation::Back => 3,
            Orientation::Forward => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Forward => "Forward",
            Orientation::Left => "Left",
            Orientation::Right => "Right",
            Orientation::Back => "Back",
        }
    }
}

impl TryFrom<i32> for Orientation {
    type Error = GameError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Orientation::Right),
            2 => Ok(Orientation::Left),
            3 => Ok(Orientation::Back),
            4 => Ok(Orientation::Forward),
            other => Err(GameError::InvalidOrientation(other)),
        }
    }
}

/// One of the four directional keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Left,
    Right,
    Forward,
    Back,
}

/// Command consumed by the simulation on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBack,
    SelectView(CameraMode),
    Jump,
    Quit,
    /// Pointer drag reported by the front end; only the sign of each axis is used
    DragLook { dx: i32, dy: i32 },
}

impl Command {
    /// The directional key behind this command, if it is a movement command
    pub fn move_key(&self) -> Option<MoveKey> {
        match self {
            Command::MoveLeft => Some(MoveKey::Left),
            Command::MoveRight => Some(MoveKey::Right),
            Command::MoveForward => Some(MoveKey::Forward),
            Command::MoveBack => Some(MoveKey::Back),
            _ => None,
        }
    }
}

impl From<MoveKey> for Command {
    fn from(key: MoveKey) -> Self {
        match key {
            MoveKey::Left => Command::MoveLeft,
            MoveKey::Right => Command::MoveRight,
            MoveKey::Forward => Command::MoveForward,
            MoveKey::Back => Command::MoveBack,
        }
    }
}
