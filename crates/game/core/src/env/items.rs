use std::collections::BTreeMap;

use super::{ItemId, OracleError};

pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<&ItemDefinition>;

    /// Weapon data of `id`, if it names a weapon.
    fn weapon(&self, id: ItemId) -> Option<WeaponData> {
        match self.definition(id)?.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }
}

/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (id, name)
/// - `kind` enum holds type-specific data (weapon speed, range, damage)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(_))
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon(WeaponData),

    /// Usable item (potions, scrolls). Effects are resolved by the consumer.
    Consumable,

    /// Crafting material or trigger token.
    Material,
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    /// Swings per second. Adds `1 / speed` to combat cooldowns when positive.
    pub speed: f32,
    /// Added to the wielder's AttackRange.
    pub range: f32,
    /// Added to the damage of every combat skill.
    pub damage: f32,
}

impl WeaponData {
    /// Extra cooldown a swing with this weapon costs.
    pub fn cooldown_penalty(&self) -> f32 {
        if self.speed > 0.0 {
            1.0 / self.speed
        } else {
            0.0
        }
    }
}

/// In-memory [`ItemOracle`].
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, item: ItemDefinition) -> Result<(), OracleError> {
        if self.items.contains_key(&item.id) {
            return Err(OracleError::DuplicateItemId(item.id));
        }
        self.items.insert(item.id, item);
        Ok(())
    }

    pub fn from_definitions(
        items: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, OracleError> {
        let mut registry = Self::new();
        for item in items {
            registry.register(item)?;
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }
}

impl ItemOracle for ItemRegistry {
    fn definition(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }
}
