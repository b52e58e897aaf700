//! Reasons a skill is refused.

use crate::env::SkillId;
use crate::error::{ErrorSeverity, GameError};

/// Why `trigger_*` returned false, or why a skill could not be learned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SkillError {
    #[error("character is dying")]
    Dead,

    #[error("{0} has not been learned")]
    NotLearned(SkillId),

    #[error("{0} is not registered")]
    UnknownSkill(SkillId),

    #[error("{0} is not a skill of the requested kind")]
    WrongKind(SkillId),

    #[error("needs {required} magic, has {available}")]
    InsufficientMagic { required: f32, available: f32 },

    #[error("no enemy in attack range")]
    NoTargetInRange,

    #[error("on cooldown for another {remaining}s")]
    OnCooldown { remaining: f32 },

    #[error("cannot learn {skill}: all {capacity} skill slots are taken")]
    TooManySkills { skill: SkillId, capacity: usize },
}

impl GameError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        use SkillError::*;
        match self {
            InsufficientMagic { .. } | NoTargetInRange | OnCooldown { .. } => {
                ErrorSeverity::Recoverable
            }
            Dead | NotLearned(_) | UnknownSkill(_) | WrongKind(_) | TooManySkills { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use SkillError::*;
        match self {
            Dead => "SKILL_CASTER_DEAD",
            NotLearned(_) => "SKILL_NOT_LEARNED",
            UnknownSkill(_) => "SKILL_UNKNOWN",
            WrongKind(_) => "SKILL_WRONG_KIND",
            InsufficientMagic { .. } => "SKILL_INSUFFICIENT_MAGIC",
            NoTargetInRange => "SKILL_NO_TARGET",
            OnCooldown { .. } => "SKILL_ON_COOLDOWN",
            TooManySkills { .. } => "SKILL_CAPACITY_EXCEEDED",
        }
    }
}
