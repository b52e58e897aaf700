//! Traits describing read-only game data.
//!
//! Oracles expose skill and item definitions. The [`Env`] aggregate bundles
//! them so characters can resolve ids without owning the definitions.
mod error;
mod items;
mod skills;

pub use error::OracleError;
pub use items::{ItemDefinition, ItemKind, ItemOracle, ItemRegistry, WeaponData};
pub use skills::{CombatSkill, MagicSkill, Skill, SkillKind, SkillOracle, SkillRegistry};

/// Identifier of a skill definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(pub u32);

/// Identifier of an item definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "skill#{}", self.0)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Aggregates read-only oracles required by characters and the world.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    skills: &'a dyn SkillOracle,
    items: &'a dyn ItemOracle,
}

impl<'a> Env<'a> {
    pub fn new(skills: &'a dyn SkillOracle, items: &'a dyn ItemOracle) -> Self {
        Self { skills, items }
    }

    pub fn skills(&self) -> &'a dyn SkillOracle {
        self.skills
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env").finish_non_exhaustive()
    }
}
