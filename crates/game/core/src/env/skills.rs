use std::collections::BTreeMap;

use super::{ItemId, OracleError, SkillId};
use crate::stats::ModifierSpec;

/// Read-only access to skill definitions.
///
/// Characters store [`SkillId`]s and resolve them here on every use.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: SkillId) -> Option<&Skill>;

    fn skill_by_name(&self, name: &str) -> Option<&Skill>;

    /// First skill whose item sequence equals `tokens`.
    fn find_by_sequence(&self, tokens: &[ItemId]) -> Option<&Skill>;
}

/// Immutable skill definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Delay between trigger and effect, in seconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pre_use_time: f32,
    /// Minimum time between two triggers, in seconds.
    pub cooldown_time: f32,
    /// Ordered tokens a caller must present to invoke the skill.
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_sequence: Vec<ItemId>,
    pub kind: SkillKind,
}

impl Skill {
    pub fn matches_sequence(&self, tokens: &[ItemId]) -> bool {
        !self.item_sequence.is_empty() && self.item_sequence == tokens
    }

    pub fn as_magic(&self) -> Option<&MagicSkill> {
        match &self.kind {
            SkillKind::Magic(magic) => Some(magic),
            SkillKind::Combat(_) => None,
        }
    }

    pub fn as_combat(&self) -> Option<&CombatSkill> {
        match &self.kind {
            SkillKind::Combat(combat) => Some(combat),
            SkillKind::Magic(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    Magic(MagicSkill),
    Combat(CombatSkill),
}

/// Drains Magic and attaches a modifier to one of the caster's attributes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicSkill {
    pub cost: f32,
    pub effect: ModifierSpec,
}

/// Deals damage to enemies in attack range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSkill {
    pub damage: f32,
    pub maximum_targets: usize,
    /// Reach of the skill itself; informational, attack range governs targeting.
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: f32,
}

/// In-memory [`SkillOracle`] keyed by id, with a secondary name index.
#[derive(Clone, Debug, Default)]
pub struct SkillRegistry {
    skills: BTreeMap<SkillId, Skill>,
    by_name: BTreeMap<String, SkillId>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, skill: Skill) -> Result<(), OracleError> {
        if self.skills.contains_key(&skill.id) {
            return Err(OracleError::DuplicateSkillId(skill.id));
        }
        if self.by_name.contains_key(&skill.name) {
            return Err(OracleError::DuplicateSkillName(skill.name));
        }
        self.by_name.insert(skill.name.clone(), skill.id);
        self.skills.insert(skill.id, skill);
        Ok(())
    }

    pub fn from_skills(skills: impl IntoIterator<Item = Skill>) -> Result<Self, OracleError> {
        let mut registry = Self::new();
        for skill in skills {
            registry.register(skill)?;
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }
}

impl SkillOracle for SkillRegistry {
    fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.get(&id)
    }

    fn skill_by_name(&self, name: &str) -> Option<&Skill> {
        self.by_name.get(name).and_then(|id| self.skills.get(id))
    }

    fn find_by_sequence(&self, tokens: &[ItemId]) -> Option<&Skill> {
        self.skills.values().find(|skill| skill.matches_sequence(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ModifierDuration;

    fn fireball() -> Skill {
        Skill {
            id: SkillId(1),
            name: "Fireball".into(),
            description: String::new(),
            pre_use_time: 0.5,
            cooldown_time: 3.0,
            item_sequence: vec![ItemId(10), ItemId(11)],
            kind: SkillKind::Magic(MagicSkill {
                cost: 10.0,
                effect: ModifierSpec {
                    attribute: "Soul".into(),
                    name: "ember".into(),
                    value: 1.0,
                    duration: ModifierDuration::TimeBased { duration: 5.0 },
                },
            }),
        }
    }

    fn slash() -> Skill {
        Skill {
            id: SkillId(2),
            name: "Slash".into(),
            description: String::new(),
            pre_use_time: 0.0,
            cooldown_time: 1.0,
            item_sequence: Vec::new(),
            kind: SkillKind::Combat(CombatSkill {
                damage: 5.0,
                maximum_targets: 1,
                range: 1.0,
            }),
        }
    }

    #[test]
    fn lookup_by_id_and_name() {
        let registry = SkillRegistry::from_skills([fireball(), slash()]).unwrap();
        assert_eq!(registry.skill(SkillId(2)).map(|s| s.name.as_str()), Some("Slash"));
        assert_eq!(registry.skill_by_name("Fireball").map(|s| s.id), Some(SkillId(1)));
        assert!(registry.skill(SkillId(3)).is_none());
        assert!(registry.skill_by_name("fireball").is_none());
    }

    #[test]
    fn sequence_lookup_requires_exact_order() {
        let registry = SkillRegistry::from_skills([fireball(), slash()]).unwrap();
        let found = registry.find_by_sequence(&[ItemId(10), ItemId(11)]);
        assert_eq!(found.map(|s| s.id), Some(SkillId(1)));
        assert!(registry.find_by_sequence(&[ItemId(11), ItemId(10)]).is_none());
        assert!(registry.find_by_sequence(&[]).is_none());
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut registry = SkillRegistry::from_skills([fireball()]).unwrap();
        assert_eq!(
            registry.register(fireball()),
            Err(OracleError::DuplicateSkillId(SkillId(1)))
        );

        let mut renamed = slash();
        renamed.name = "Fireball".into();
        assert_eq!(
            registry.register(renamed),
            Err(OracleError::DuplicateSkillName("Fireball".into()))
        );
    }

    #[test]
    fn kind_accessors() {
        assert!(fireball().as_magic().is_some());
        assert!(fireball().as_combat().is_none());
        assert_eq!(slash().as_combat().map(|c| c.maximum_targets), Some(1));
    }
}
