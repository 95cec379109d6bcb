//! Grid Runner - a tile-hopping runner game for the terminal
//!
//! This library provides:
//! - Core game simulation (game module)
//! - Terminal input mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
