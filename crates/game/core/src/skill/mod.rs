//! Per-character skill state.
//!
//! Skill definitions are immutable and live in a [`SkillOracle`](crate::env::SkillOracle);
//! characters hold only the ids they learned and when each one is ready again.
//!
//! # Design
//!
//! - **LearnedSkills**: parallel id / cooldown-end lists, index-aligned
//! - **PendingUses**: effects triggered but not yet applied (pre-use time)
//! - **SkillError**: why a trigger would be refused

mod cooldown;
mod error;
mod pending;

pub use cooldown::LearnedSkills;
pub use error::SkillError;
pub use pending::{PendingUse, PendingUses};
