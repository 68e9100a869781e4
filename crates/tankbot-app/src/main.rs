//! Tank bot: reads engine messages on stdin, writes one action per turn to
//! stdout. Logs go to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use tankbot_app::{run_session, BotConfig};

#[derive(Parser)]
#[command(name = "tankbot")]
#[command(about = "Kinematic threat-dodging tank bot", version)]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Dodge bullets projected to pass closer than this
    #[arg(long)]
    danger_radius: Option<f64>,

    /// Dodge only when closest approach is at most this many turns away
    #[arg(long)]
    horizon: Option<f64>,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, default_value = "tankbot=info")]
    log: String,
}

impl Cli {
    fn bot_config(&self) -> Result<BotConfig> {
        let mut config = match &self.config {
            Some(path) => BotConfig::load(path).context("failed to load bot config")?,
            None => BotConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(radius) = self.danger_radius {
            config.danger_radius = radius;
        }
        if let Some(horizon) = self.horizon {
            config.horizon_turns = horizon;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout belongs to the engine
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(io::stderr)
        .init();

    let config = cli.bot_config()?;
    let summary = run_session(io::stdin().lock(), io::stdout().lock(), &config)
        .context("game session failed")?;

    info!(seed = summary.seed, turns = summary.turns, "bot exiting");
    Ok(())
}
