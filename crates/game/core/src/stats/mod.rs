//! Attribute system.
//!
//! # Architecture
//!
//! ```text
//! [ Primary ]  settable base value
//!      ↓ value-changed
//! [ Secondary ]  formula over inputs
//!      ↓ value-changed
//! [ Volume ]  current amount below a derived maximum
//! ```
//!
//! Every kind adds the sum of its active modifiers and clamps to its bounds.
//! Dependencies are push-based: inputs notify their dependents synchronously,
//! so derived values are always current when read.

pub mod attribute;
pub mod block;
pub mod formula;
pub mod modifier;

pub use attribute::{Attribute, AttributeBuilder, AttributeEvent, AttributeKind};
pub use block::{StatBlock, StatKind, StatSnapshot};
pub use formula::Formula;
pub use modifier::{AttributeModifier, ModifierDuration, ModifierId, ModifierSpec};

use crate::error::{ErrorSeverity, GameError};

/// Misuse of the attribute graph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatError {
    #[error("attribute {attribute} is {kind}; only simple volumes accept a maximum")]
    MaxNotSettable {
        attribute: String,
        kind: AttributeKind,
    },

    #[error("attribute {0} has no inputs to replace")]
    NotDerived(String),

    #[error("attribute {0} cannot depend on itself")]
    SelfDependency(String),

    #[error("{0} is derived and cannot be replaced")]
    DerivedStat(StatKind),
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MaxNotSettable { .. } => "STAT_MAX_NOT_SETTABLE",
            Self::NotDerived(_) => "STAT_NOT_DERIVED",
            Self::SelfDependency(_) => "STAT_SELF_DEPENDENCY",
            Self::DerivedStat(_) => "STAT_DERIVED",
        }
    }
}
