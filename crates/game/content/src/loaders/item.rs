//! Item catalog loader.

use std::path::Path;

use arpg_core::{ItemDefinition, ItemKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid item catalog {}: {}", path.display(), e))
    }

    /// Parse an item catalog from RON text.
    ///
    /// Weapons must have a finite, non-negative speed, range and damage.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        for item in &catalog.items {
            if let ItemKind::Weapon(weapon) = &item.kind {
                let fields = [weapon.speed, weapon.range, weapon.damage];
                if fields.iter().any(|value| !value.is_finite() || *value < 0.0) {
                    anyhow::bail!("weapon '{}' has a negative or non-finite stat", item.name);
                }
            }
        }
        Ok(catalog.items)
    }
}
