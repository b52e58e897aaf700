//! Oracle registration errors.
//!
//! Lookups never fail: an unknown id is `None`. Errors only arise while
//! building a registry from definitions.

use crate::error::{ErrorSeverity, GameError};

use super::{ItemId, SkillId};

/// Errors raised while populating a skill or item registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Another skill already uses this id.
    #[error("skill id {0} registered twice")]
    DuplicateSkillId(SkillId),

    /// Another skill already uses this name.
    #[error("skill name '{0}' registered twice")]
    DuplicateSkillName(String),

    /// Another item already uses this id.
    #[error("item id {0} registered twice")]
    DuplicateItemId(ItemId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            DuplicateSkillId(_) => "ORACLE_DUPLICATE_SKILL_ID",
            DuplicateSkillName(_) => "ORACLE_DUPLICATE_SKILL_NAME",
            DuplicateItemId(_) => "ORACLE_DUPLICATE_ITEM_ID",
        }
    }
}
