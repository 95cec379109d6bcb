use thiserror::Error;

/// Errors raised when converting raw codes into the closed game enumerations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid orientation code {0} (expected 1, 2, 3 or 4)")]
    InvalidOrientation(i32),

    #[error("invalid view hotkey {0} (expected 1..=5)")]
    InvalidCameraMode(u8),
}
