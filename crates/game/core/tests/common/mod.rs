#![allow(dead_code)]

use arpg_core::{
    Clock, CombatSkill, ItemDefinition, ItemId, ItemKind, ItemRegistry, MagicSkill,
    ModifierDuration, ModifierSpec, SimConfig, Skill, SkillId, SkillKind, SkillRegistry,
    WeaponData, World,
};

pub const FIREBALL: SkillId = SkillId(1);
pub const SLASH: SkillId = SkillId(2);
pub const WARD: SkillId = SkillId(3);

pub const SWORD: ItemId = ItemId(100);
pub const HERB: ItemId = ItemId(101);

pub fn skills() -> SkillRegistry {
    SkillRegistry::from_skills([
        Skill {
            id: FIREBALL,
            name: "Fireball".into(),
            description: "Burns Magic to empower Body for a while.".into(),
            pre_use_time: 0.5,
            cooldown_time: 2.0,
            item_sequence: vec![HERB, HERB],
            kind: SkillKind::Magic(MagicSkill {
                cost: 10.0,
                effect: ModifierSpec {
                    attribute: "Body".into(),
                    name: "kindled".into(),
                    value: 5.0,
                    duration: ModifierDuration::TimeBased { duration: 10.0 },
                },
            }),
        },
        Skill {
            id: SLASH,
            name: "Slash".into(),
            description: String::new(),
            pre_use_time: 0.0,
            cooldown_time: 1.0,
            item_sequence: Vec::new(),
            kind: SkillKind::Combat(CombatSkill {
                damage: 8.0,
                maximum_targets: 2,
                range: 1.0,
            }),
        },
        Skill {
            id: WARD,
            name: "Ward".into(),
            description: String::new(),
            pre_use_time: 0.0,
            cooldown_time: 5.0,
            item_sequence: Vec::new(),
            kind: SkillKind::Magic(MagicSkill {
                cost: 0.0,
                effect: ModifierSpec {
                    attribute: "Charisma".into(),
                    name: "ward".into(),
                    value: 1.0,
                    duration: ModifierDuration::Permanent,
                },
            }),
        },
    ])
    .expect("fixture skills are unique")
}

pub fn items() -> ItemRegistry {
    ItemRegistry::from_definitions([
        ItemDefinition::new(
            SWORD,
            "Sword",
            ItemKind::Weapon(WeaponData {
                speed: 2.0,
                range: 1.0,
                damage: 4.0,
            }),
        ),
        ItemDefinition::new(HERB, "Herb", ItemKind::Material),
    ])
    .expect("fixture items are unique")
}

pub fn world() -> World {
    World::new(Clock::new(), SimConfig::default())
}

pub fn world_with(config: SimConfig) -> World {
    World::new(Clock::new(), config)
}
