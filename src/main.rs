use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use grid_runner::game::GameConfig;
use grid_runner::logging;
use grid_runner::modes::HumanMode;

#[derive(Parser)]
#[command(name = "grid_runner")]
#[command(version, about = "Grid runner: dodge obstacles, jump gaps, reach the goal")]
struct Cli {
    /// Seed for the tile pattern reseeds (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second; the simulation advances one tick per frame
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used with --log-file (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref(), &cli.log_level)?;

    let config = GameConfig {
        seed: cli.seed,
        ..Default::default()
    };

    let mut human_mode = HumanMode::new(config, cli.fps);
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["grid_runner"]);
        assert_eq!(cli.fps, 30);
        assert!(cli.seed.is_none());
        assert!(cli.log_file.is_none());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_cli_rejects_zero_fps() {
        assert!(Cli::try_parse_from(["grid_runner", "--fps", "0"]).is_err());
    }
}
