//! In-memory content tables implementing the core oracles.

use arpg_core::{
    Env, ItemDefinition, ItemId, ItemOracle, ItemRegistry, OracleError, Skill, SkillId,
    SkillOracle, SkillRegistry,
};

/// Skill and item tables behind a single value.
///
/// The registry is built once and then only read; hand out an [`Env`] to the
/// world and controller with [`ContentRegistry::env`].
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    skills: SkillRegistry,
    items: ItemRegistry,
}

impl ContentRegistry {
    pub fn new(skills: SkillRegistry, items: ItemRegistry) -> Self {
        Self { skills, items }
    }

    /// Builds both tables, rejecting duplicate ids and skill names.
    pub fn from_definitions(
        skills: impl IntoIterator<Item = Skill>,
        items: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, OracleError> {
        Ok(Self {
            skills: SkillRegistry::from_skills(skills)?,
            items: ItemRegistry::from_definitions(items)?,
        })
    }

    /// The default content shipped with this crate.
    #[cfg(feature = "loaders")]
    pub fn embedded() -> crate::loaders::LoadResult<Self> {
        use anyhow::Context;

        let skills = crate::loaders::SkillLoader::parse(EMBEDDED_SKILLS)
            .context("embedded skill catalog")?;
        let items =
            crate::loaders::ItemLoader::parse(EMBEDDED_ITEMS).context("embedded item catalog")?;
        Ok(Self::from_definitions(skills, items)?)
    }

    pub fn env(&self) -> Env<'_> {
        Env::new(&self.skills, &self.items)
    }

    pub fn skills(&self) -> &SkillRegistry {
        &self.skills
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }
}

impl SkillOracle for ContentRegistry {
    fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.skill(id)
    }

    fn skill_by_name(&self, name: &str) -> Option<&Skill> {
        self.skills.skill_by_name(name)
    }

    fn find_by_sequence(&self, tokens: &[ItemId]) -> Option<&Skill> {
        self.skills.find_by_sequence(tokens)
    }
}

impl ItemOracle for ContentRegistry {
    fn definition(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.definition(id)
    }
}

#[cfg(feature = "loaders")]
pub(crate) const EMBEDDED_SKILLS: &str = include_str!("../data/skills.ron");
#[cfg(feature = "loaders")]
pub(crate) const EMBEDDED_ITEMS: &str = include_str!("../data/items.ron");
#[cfg(feature = "loaders")]
pub(crate) const EMBEDDED_CONFIG: &str = include_str!("../data/config.toml");
