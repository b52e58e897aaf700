//! Data-driven content definitions and loaders.
//!
//! This crate provides the skill and item tables the simulation core reads
//! through its oracles, plus loaders for RON/TOML data files:
//! - Skill catalogs (magic and combat, RON)
//! - Item catalogs (weapons, consumables, materials, RON)
//! - Simulation configuration (TOML)
//!
//! A default content set is embedded in the crate, see [`ContentRegistry::embedded`].

pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::ContentRegistry;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, SkillLoader};
