//! Core simulation for the grid runner
//!
//! Tile pattern, player movement rules, jump/fall sequencing, camera views and
//! scoring. Nothing in here does I/O or rendering; the front end feeds
//! commands into [`GameEngine::tick`] once per frame and draws the resulting
//! [`Snapshot`].

pub mod action;
pub mod camera;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod player;
pub mod profile;
pub mod state;

// Re-export commonly used types
pub use action::{Command, MoveKey, Orientation};
pub use camera::{CameraController, CameraMode, CameraPose};
pub use config::GameConfig;
pub use engine::{GameEngine, GameEvent, Hud, SimulationContext, Snapshot, TickResult};
pub use error::GameError;
pub use field::{Tile, TileField, TileKind};
pub use player::{AnimationKind, AnimationSequence, MoveRegime, PlayerController, RejectReason};
pub use state::{Cell, GameStateTracker, GridPosition, Outcome};
