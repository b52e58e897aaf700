//! Simulation configuration loader.

use std::path::Path;

use arpg_core::SimConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for simulation configuration from TOML files.
///
/// Missing keys fall back to [`SimConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SimConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<SimConfig> {
        let config: SimConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(config.chase_range_factor.is_finite() && config.chase_range_factor > 0.0) {
            anyhow::bail!(
                "chase_range_factor must be positive, got {}",
                config.chase_range_factor
            );
        }
        Ok(config)
    }

    /// The configuration embedded in this crate.
    pub fn embedded() -> LoadResult<SimConfig> {
        Self::parse(crate::registry::EMBEDDED_CONFIG)
    }
}
