//! Skill catalog loader.

use std::path::Path;
use std::str::FromStr;

use arpg_core::{Skill, SkillKind, StatKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Skill catalog structure for RON files.
///
/// ```text
/// (
///     skills: [
///         (
///             id: 1,
///             name: "Fireball",
///             cooldown_time: 2.0,
///             kind: Magic((
///                 cost: 10.0,
///                 effect: (attribute: "Body", name: "kindled", value: 5.0,
///                          duration: TimeBased(duration: 10.0)),
///             )),
///         ),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<Skill>,
}

/// Loader for skill catalogs from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load a skill catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Skill>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid skill catalog {}: {}", path.display(), e))
    }

    /// Parse a skill catalog from RON text and validate every entry.
    pub fn parse(content: &str) -> LoadResult<Vec<Skill>> {
        let catalog: SkillCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        for skill in &catalog.skills {
            validate(skill)?;
        }
        tracing::debug!(count = catalog.skills.len(), "parsed skill catalog");
        Ok(catalog.skills)
    }
}

fn validate(skill: &Skill) -> LoadResult<()> {
    if skill.cooldown_time < 0.0 || skill.pre_use_time < 0.0 {
        anyhow::bail!("skill '{}' has a negative timing", skill.name);
    }
    match &skill.kind {
        SkillKind::Magic(magic) => {
            if magic.cost < 0.0 {
                anyhow::bail!("magic skill '{}' has a negative cost", skill.name);
            }
            if StatKind::from_str(&magic.effect.attribute).is_err() {
                anyhow::bail!(
                    "magic skill '{}' targets unknown attribute '{}'",
                    skill.name,
                    magic.effect.attribute
                );
            }
        }
        SkillKind::Combat(combat) => {
            if combat.maximum_targets == 0 {
                anyhow::bail!("combat skill '{}' cannot hit any target", skill.name);
            }
        }
    }
    Ok(())
}
