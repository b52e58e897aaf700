//! Headless driver for the simulation core.
//!
//! Loads content (a data directory or the embedded set), spawns a player and
//! a pack of enemies, and drives `Controller::update` for a fixed number of
//! ticks while logging AI transitions, skill use and deaths.
//!
//! ```bash
//! RUST_LOG=arpg_core=debug ARPG_ENEMIES=5 cargo run -p arpg-sim
//! ```
mod config;
mod scenario;

use anyhow::{Context, Result};
use arpg_content::{ConfigLoader, ContentFactory, ContentRegistry};

use crate::config::CliConfig;
use crate::scenario::Scenario;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = CliConfig::from_env();
    let (registry, sim_config) = match &cli.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            let registry = factory.load_registry()?;
            let config = factory
                .load_config()
                .with_context(|| format!("loading config from {}", dir.display()))?;
            (registry, config)
        }
        None => (ContentRegistry::embedded()?, ConfigLoader::embedded()?),
    };

    let mut scenario = Scenario::new(&registry, sim_config, &cli)?;
    let summary = scenario.run(&registry, &cli)?;

    println!("{summary}");
    Ok(())
}
