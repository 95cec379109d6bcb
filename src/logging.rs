//! Tracing setup for the terminal front end.
//!
//! The TUI owns stderr, so log lines only go to a file, and only when one is
//! requested on the command line.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over the level given on the command line
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a file-backed subscriber. Without a path nothing is installed and
/// tracing events are dropped.
pub fn init(log_file: Option<&Path>, level: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), level, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_is_noop() {
        assert!(init(None, "debug").is_ok());
    }

    #[test]
    fn test_invalid_level_falls_back() {
        // must not panic on garbage
        let filter = build_filter("=not a level=");
        assert!(!filter.to_string().is_empty());
    }
}
