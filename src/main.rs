// src/main.rs

use anyhow::{Context, Result};
use lane_line_state::{Config, LineTracks};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let explicit = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::resolve(explicit.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lane_line_state={}", config.logging.level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded: {} line(s)", config.lines.0.len());

    let tracks = LineTracks::from_config(&config);
    for (name, state) in tracks.iter() {
        debug!("Line '{}': {:?}", name, state);
    }
    info!("Tracking {} line(s), no fits yet", tracks.len());

    let snapshot =
        serde_json::to_string_pretty(&tracks).context("failed to serialize line states")?;
    println!("{}", snapshot);
    Ok(())
}
