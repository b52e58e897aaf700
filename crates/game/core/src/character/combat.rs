//! Enemy tracking, damage intake and weapons.

use super::{Character, CharacterEvent, CharacterId, EquipError};
use crate::ai::AiState;
use crate::env::{ItemId, ItemKind, ItemOracle, SkillId, WeaponData};
use crate::stats::StatKind;

/// An enemy within alertness range and its squared distance at the last update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedEnemy {
    pub id: CharacterId,
    pub distance_sq: f32,
}

/// Weapon currently wielded, cached from the item oracle at equip time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquippedWeapon {
    pub item: ItemId,
    pub data: WeaponData,
}

/// A resolved combat use, ready to be applied to its targets.
#[derive(Clone, Debug, PartialEq)]
pub struct Strike {
    pub attacker: CharacterId,
    pub skill: SkillId,
    /// Applied in full to every target.
    pub damage: f32,
    pub targets: Vec<CharacterId>,
}

impl Character {
    pub fn enemies(&self) -> &[TrackedEnemy] {
        &self.enemies
    }

    pub fn in_attack_range(&self) -> &[CharacterId] {
        &self.in_attack_range
    }

    pub fn nearest_enemy(&self) -> Option<&TrackedEnemy> {
        self.enemies
            .iter()
            .min_by(|a, b| a.distance_sq.total_cmp(&b.distance_sq))
    }

    /// AttackRange plus the equipped weapon's range.
    pub fn attack_reach(&self) -> f32 {
        self.stats.value(StatKind::AttackRange) + self.weapon.map_or(0.0, |weapon| weapon.data.range)
    }

    /// Tracks `enemy` at `distance_sq` and updates its attack-range membership.
    ///
    /// Tracking an enemy twice only refreshes its distance.
    pub fn add_enemy(&mut self, enemy: CharacterId, distance_sq: f32) {
        if self.dead || enemy == self.id {
            return;
        }
        match self.enemies.iter_mut().find(|tracked| tracked.id == enemy) {
            Some(tracked) => tracked.distance_sq = distance_sq,
            None => {
                tracing::trace!(character = %self.name, %enemy, "tracking enemy");
                self.enemies.push(TrackedEnemy {
                    id: enemy,
                    distance_sq,
                });
            }
        }

        let reach = self.attack_reach();
        let in_range = distance_sq <= reach * reach;
        let listed = self.in_attack_range.contains(&enemy);
        if in_range && !listed {
            self.in_attack_range.push(enemy);
        } else if !in_range && listed {
            self.in_attack_range.retain(|id| *id != enemy);
        }
    }

    /// Forgets `enemy` entirely. Returns whether it was tracked.
    pub fn remove_enemy(&mut self, enemy: CharacterId) -> bool {
        let before = self.enemies.len();
        self.enemies.retain(|tracked| tracked.id != enemy);
        self.in_attack_range.retain(|id| *id != enemy);
        self.enemies.len() != before
    }

    /// Distance-driven membership update: tracked inside AlertnessRange,
    /// forgotten outside it.
    pub fn sense(&mut self, enemy: CharacterId, distance_sq: f32) {
        let alertness = self.stats.value(StatKind::AlertnessRange);
        if distance_sq <= alertness * alertness {
            self.add_enemy(enemy, distance_sq);
        } else {
            self.remove_enemy(enemy);
        }
    }

    /// Applies `damage` to Life. Returns true if this blow killed the character.
    ///
    /// Attacks on a dying character are ignored.
    pub fn on_attacked(&mut self, attacker: CharacterId, damage: f32) -> bool {
        if self.dead {
            return false;
        }
        self.emit(CharacterEvent::Attacked { attacker, damage });

        let life = self.stats.life();
        life.set_value(life.base_value() - damage.max(0.0));
        tracing::debug!(
            character = %self.name,
            %attacker,
            damage,
            life = life.value(),
            "attacked"
        );

        self.life_depleted.get() && self.change_state(AiState::Dying)
    }

    pub fn weapon(&self) -> Option<EquippedWeapon> {
        self.weapon
    }

    /// Equips a weapon held in the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`EquipError`] when the item is unknown, not a weapon, or not held.
    pub fn equip_weapon(&mut self, item: ItemId, items: &dyn ItemOracle) -> Result<(), EquipError> {
        let definition = items.definition(item).ok_or(EquipError::UnknownItem(item))?;
        let ItemKind::Weapon(data) = &definition.kind else {
            return Err(EquipError::NotAWeapon(item));
        };
        if !self.inventory.contains(item) {
            return Err(EquipError::NotInInventory(item));
        }
        self.weapon = Some(EquippedWeapon { item, data: *data });
        tracing::debug!(character = %self.name, weapon = %definition.name, "weapon equipped");
        Ok(())
    }

    pub fn unequip_weapon(&mut self) -> Option<ItemId> {
        self.weapon.take().map(|weapon| weapon.item)
    }
}
