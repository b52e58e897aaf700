//! Deterministic simulation core of an action-RPG character engine.
//!
//! `arpg-core` computes character statistics through a reactive attribute
//! graph, resolves skills under cooldown and cost constraints, and drives a
//! proximity-based combat AI. Everything is advanced by an explicit [`Clock`];
//! the host calls [`Controller::update`] once per step.
//!
//! Skill and item definitions are read through the oracles in [`env`], so
//! content can come from any source.
pub mod ai;
pub mod character;
pub mod clock;
pub mod config;
pub mod controller;
pub mod env;
pub mod error;
pub mod event;
pub mod skill;
pub mod stats;
pub mod world;

pub use ai::{AiAction, AiState, Perception};
pub use character::{
    Character, CharacterEvent, CharacterId, EquipError, Inventory, Position, Role, Strike,
    TrackedEnemy,
};
pub use clock::{Clock, ClockError};
pub use config::{ArchetypeTemplate, SimConfig};
pub use controller::Controller;
pub use env::{
    CombatSkill, Env, ItemDefinition, ItemId, ItemKind, ItemOracle, ItemRegistry, MagicSkill,
    OracleError, Skill, SkillId, SkillKind, SkillOracle, SkillRegistry, WeaponData,
};
pub use error::{ErrorSeverity, GameError};
pub use event::{Publisher, SubscriptionId};
pub use skill::{LearnedSkills, PendingUses, SkillError};
pub use stats::{
    Attribute, AttributeEvent, AttributeKind, AttributeModifier, ModifierDuration, ModifierId,
    ModifierSpec, StatBlock, StatError, StatKind, StatSnapshot,
};
pub use world::World;
