use crate::env::ItemId;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised when equipping a weapon.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("{0} is not a known item")]
    UnknownItem(ItemId),

    #[error("{0} is not a weapon")]
    NotAWeapon(ItemId),

    #[error("{0} is not in the inventory")]
    NotInInventory(ItemId),
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem(_) => "EQUIP_UNKNOWN_ITEM",
            Self::NotAWeapon(_) => "EQUIP_NOT_A_WEAPON",
            Self::NotInInventory(_) => "EQUIP_NOT_IN_INVENTORY",
        }
    }
}
