//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use arpg_core::{ItemDefinition, SimConfig, Skill};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, SkillLoader};
use crate::registry::ContentRegistry;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.ron
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load simulation configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SimConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<Skill>> {
        let path = self.data_dir.join("skills.ron");
        SkillLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load skills and items into a registry.
    pub fn load_registry(&self) -> LoadResult<ContentRegistry> {
        let skills = self.load_skills()?;
        let items = self.load_items()?;
        let registry = ContentRegistry::from_definitions(skills, items)
            .with_context(|| format!("building registry from {}", self.data_dir.display()))?;
        tracing::info!(
            skills = registry.skills().len(),
            items = registry.items().len(),
            dir = %self.data_dir.display(),
            "content loaded"
        );
        Ok(registry)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
