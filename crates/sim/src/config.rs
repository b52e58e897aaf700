//! Environment-driven configuration for the headless driver.

use std::env;
use std::path::PathBuf;

/// Scenario parameters.
///
/// | Variable            | Meaning                                   | Default  |
/// |---------------------|-------------------------------------------|----------|
/// | `ARPG_DATA_DIR`     | content directory (skills, items, config) | embedded |
/// | `ARPG_TICKS`        | number of controller updates              | 240      |
/// | `ARPG_TICK_SECONDS` | clock advance per update                  | 0.25     |
/// | `ARPG_ENEMIES`      | enemies spawned around the player         | 3        |
#[derive(Clone, Debug, PartialEq)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub ticks: u32,
    pub tick_seconds: f32,
    pub enemies: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            ticks: 240,
            tick_seconds: 0.25,
            enemies: 3,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("ARPG_DATA_DIR").ok().map(PathBuf::from);

        if let Some(ticks) = read_env::<u32>("ARPG_TICKS") {
            config.ticks = ticks;
        }

        if let Some(seconds) = read_env::<f32>("ARPG_TICK_SECONDS") {
            if seconds.is_finite() && seconds > 0.0 {
                config.tick_seconds = seconds;
            }
        }

        if let Some(enemies) = read_env::<u32>("ARPG_ENEMIES") {
            config.enemies = enemies.min(64);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
